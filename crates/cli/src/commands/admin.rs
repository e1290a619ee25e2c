//! Operator user management commands.
//!
//! # Usage
//!
//! ```bash
//! # Grant the admin flag to an existing user
//! tiffin admin grant -e owner@example.com
//! tiffin admin grant -s "provider|abc123"
//!
//! # List the user directory
//! tiffin admin list
//! ```
//!
//! Commands load the snapshot, mutate it through an in-memory store,
//! and write it back. Grants only promote existing users; a user record
//! appears after the person's first sign-in.

use thiserror::Error;
use tracing::info;

use tiffin_admin::users::{AdminUsers, GrantOutcome};
use tiffin_store::{MemoryStore, StoreSnapshot};

/// Errors that can occur during operator commands.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Neither or both of the selectors were given.
    #[error("pass exactly one of --email or --subject")]
    AmbiguousSelector,
}

/// Grant the admin flag to the user matching the given selector.
///
/// # Errors
///
/// Returns an error if not exactly one selector is given, if no user
/// matches, or on snapshot I/O failure.
pub async fn grant(
    email: Option<&str>,
    subject: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = super::store_path();
    let store = MemoryStore::from_snapshot(StoreSnapshot::load(&path).await?);
    let users = AdminUsers::new(&store);

    let outcome = match (email, subject) {
        (Some(email), None) => users.grant_admin_by_email(email).await?,
        (None, Some(subject)) => users.grant_admin_by_subject(subject).await?,
        _ => return Err(AdminError::AmbiguousSelector.into()),
    };

    match outcome {
        GrantOutcome::Granted { name } => {
            store.snapshot().await.save(&path).await?;
            info!(name, "admin flag granted");
        }
        GrantOutcome::AlreadyAdmin { name } => {
            info!(name, "user is already an admin; nothing to do");
        }
    }
    Ok(())
}

/// Print every user in the directory, oldest first.
///
/// # Errors
///
/// Returns an error on snapshot I/O failure.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let path = super::store_path();
    let store = MemoryStore::from_snapshot(StoreSnapshot::load(&path).await?);

    let users = AdminUsers::new(&store).list_users().await?;
    info!(count = users.len(), "user directory");
    for user in users {
        info!(
            %user.id,
            subject = user.subject,
            email = user.email.as_ref().map_or("", |e| e.as_str()),
            name = user.name,
            is_admin = user.is_admin,
            "user"
        );
    }
    Ok(())
}

//! Operator user management.
//!
//! These are the operator-grade tools behind the CLI: list the directory
//! and grant the admin flag. Like the internal mutations they replace,
//! they are not gated on a caller identity; exposing them to end users is
//! the boundary layer's mistake to avoid.

use chrono::{DateTime, Utc};
use tracing::info;

use tiffin_core::{Email, Error, Result, UserId};
use tiffin_store::Store;

/// Condensed user listing for operators.
#[derive(Debug, Clone)]
pub struct UserSummary {
    /// Directory record ID.
    pub id: UserId,
    /// Identity provider subject.
    pub subject: String,
    /// Email, when known.
    pub email: Option<Email>,
    /// Display name.
    pub name: String,
    /// Admin flag.
    pub is_admin: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Outcome of an admin grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The flag was set by this call.
    Granted {
        /// The promoted user's display name.
        name: String,
    },
    /// The user already had the flag; nothing changed.
    AlreadyAdmin {
        /// The user's display name.
        name: String,
    },
}

/// Operator user management service.
pub struct AdminUsers<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> AdminUsers<'a, S> {
    /// Create a new user management service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every directory record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let mut users = self.store.scan_users().await?;
        users.sort_by_key(|u| u.created_at);
        Ok(users
            .into_iter()
            .map(|u| UserSummary {
                id: u.id,
                subject: u.subject,
                email: u.email,
                name: u.name,
                is_admin: u.is_admin,
                created_at: u.created_at,
            })
            .collect())
    }

    /// Grant the admin flag by provider subject.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown subject and
    /// [`Error::Store`] on backend failure.
    pub async fn grant_admin_by_subject(&self, subject: &str) -> Result<GrantOutcome> {
        let user = self
            .store
            .user_by_subject(subject)
            .await?
            .ok_or_else(|| Error::not_found("user", subject))?;
        self.grant(user).await
    }

    /// Grant the admin flag by email address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown email and
    /// [`Error::Store`] on backend failure.
    pub async fn grant_admin_by_email(&self, email: &str) -> Result<GrantOutcome> {
        let user = self
            .store
            .user_by_email(email)
            .await?
            .ok_or_else(|| Error::not_found("user", email))?;
        self.grant(user).await
    }

    async fn grant(&self, mut user: tiffin_store::UserRecord) -> Result<GrantOutcome> {
        if user.is_admin {
            return Ok(GrantOutcome::AlreadyAdmin { name: user.name });
        }

        user.is_admin = true;
        let name = user.name.clone();
        let user_id = user.id;
        self.store.put_user(user).await?;
        info!(%user_id, name, "admin flag granted");
        Ok(GrantOutcome::Granted { name })
    }
}

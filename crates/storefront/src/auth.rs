//! Caller resolution against the user directory.
//!
//! Services receive a [`VerifiedIdentity`] from the boundary and resolve
//! it to a directory record here. Admin-gated operations go through
//! [`require_admin`].

use tiffin_core::{Error, Result, VerifiedIdentity};
use tiffin_store::{Store, UserRecord};

/// Resolve the caller to their user record.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the identity has no directory record
/// yet, and [`Error::Store`] on backend failure.
pub async fn require_user<S: Store>(
    store: &S,
    identity: &VerifiedIdentity,
) -> Result<UserRecord> {
    store
        .user_by_subject(identity.subject())
        .await?
        .ok_or_else(|| Error::not_found("user", identity.subject()))
}

/// Resolve the caller and require the admin flag.
///
/// # Errors
///
/// Returns [`Error::Forbidden`] if the caller is unknown or not an
/// administrator, and [`Error::Store`] on backend failure.
pub async fn require_admin<S: Store>(
    store: &S,
    identity: &VerifiedIdentity,
) -> Result<UserRecord> {
    let user = store.user_by_subject(identity.subject()).await?;
    match user {
        Some(user) if user.is_admin => Ok(user),
        _ => Err(Error::forbidden("admin access required")),
    }
}

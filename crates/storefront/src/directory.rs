//! User directory.
//!
//! Maps external identities to internal customer records. Records are
//! created on first sign-in, patched by profile updates and provider
//! syncs, and never deleted.

use chrono::Utc;
use tracing::info;

use tiffin_core::{Email, Error, Result, UserId, VerifiedIdentity};
use tiffin_store::{Store, UserRecord};

/// Display name used when the provider supplies no name claim.
const DEFAULT_NAME: &str = "Guest";

/// Outcome of [`UserDirectory::ensure_user`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnsureUserOutcome {
    /// The caller's directory record ID.
    pub user_id: UserId,
    /// Whether the record was created by this call.
    pub is_new: bool,
    /// The record's admin flag.
    pub is_admin: bool,
}

/// User directory service.
pub struct UserDirectory<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> UserDirectory<'a, S> {
    /// Create a new user directory over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Make sure the caller has a directory record, creating one from the
    /// identity claims on first sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn ensure_user(&self, identity: &VerifiedIdentity) -> Result<EnsureUserOutcome> {
        if let Some(existing) = self.store.user_by_subject(identity.subject()).await? {
            return Ok(EnsureUserOutcome {
                user_id: existing.id,
                is_new: false,
                is_admin: existing.is_admin,
            });
        }

        let user = UserRecord {
            id: UserId::generate(),
            subject: identity.subject().to_owned(),
            email: identity.email().cloned(),
            name: identity
                .name()
                .map_or_else(|| DEFAULT_NAME.to_owned(), ToOwned::to_owned),
            phone: None,
            address: None,
            is_admin: false,
            created_at: Utc::now(),
        };
        let user_id = user.id;
        self.store.put_user(user).await?;
        info!(subject = identity.subject(), %user_id, "created user on first sign-in");

        Ok(EnsureUserOutcome {
            user_id,
            is_new: true,
            is_admin: false,
        })
    }

    /// The caller's directory record, or `None` before first sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn current_user(&self, identity: &VerifiedIdentity) -> Result<Option<UserRecord>> {
        Ok(self.store.user_by_subject(identity.subject()).await?)
    }

    /// Provider-initiated sync: create the record or patch email and name
    /// on an existing one. Returns the record ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn create_or_update(
        &self,
        subject: &str,
        email: Email,
        name: &str,
    ) -> Result<UserId> {
        if let Some(mut existing) = self.store.user_by_subject(subject).await? {
            existing.email = Some(email);
            existing.name = name.to_owned();
            let user_id = existing.id;
            self.store.put_user(existing).await?;
            return Ok(user_id);
        }

        let user = UserRecord {
            id: UserId::generate(),
            subject: subject.to_owned(),
            email: Some(email),
            name: name.to_owned(),
            phone: None,
            address: None,
            is_admin: false,
            created_at: Utc::now(),
        };
        let user_id = user.id;
        self.store.put_user(user).await?;
        Ok(user_id)
    }

    /// Owner-only profile patch of phone and address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the caller has no record yet, and
    /// [`Error::Store`] on backend failure.
    pub async fn update_profile(
        &self,
        identity: &VerifiedIdentity,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<()> {
        let mut user = self
            .store
            .user_by_subject(identity.subject())
            .await?
            .ok_or_else(|| Error::not_found("user", identity.subject()))?;

        user.phone = phone;
        user.address = address;
        self.store.put_user(user).await?;
        Ok(())
    }

    /// Whether the caller is an administrator. Unknown callers are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn is_admin(&self, identity: &VerifiedIdentity) -> Result<bool> {
        let user = self.store.user_by_subject(identity.subject()).await?;
        Ok(user.is_some_and(|u| u.is_admin))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tiffin_store::MemoryStore;

    use super::*;

    fn identity() -> VerifiedIdentity {
        VerifiedIdentity::new("subject-1")
            .with_email(Email::parse("asha@example.com").unwrap())
            .with_name("Asha")
    }

    #[tokio::test]
    async fn test_ensure_user_creates_once() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(&store);

        let first = directory.ensure_user(&identity()).await.unwrap();
        assert!(first.is_new);
        assert!(!first.is_admin);

        let second = directory.ensure_user(&identity()).await.unwrap();
        assert!(!second.is_new);
        assert_eq!(second.user_id, first.user_id);
        assert_eq!(store.scan_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_user_defaults_name() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(&store);

        directory
            .ensure_user(&VerifiedIdentity::new("anon"))
            .await
            .unwrap();
        let user = directory
            .current_user(&VerifiedIdentity::new("anon"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.name, "Guest");
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn test_create_or_update_patches_claims() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(&store);

        let created = directory
            .create_or_update("subject-1", Email::parse("old@example.com").unwrap(), "Old")
            .await
            .unwrap();
        let updated = directory
            .create_or_update("subject-1", Email::parse("new@example.com").unwrap(), "New")
            .await
            .unwrap();
        assert_eq!(created, updated);

        let user = directory.current_user(&identity()).await.unwrap().unwrap();
        assert_eq!(user.name, "New");
        assert_eq!(user.email.unwrap().as_str(), "new@example.com");
    }

    #[tokio::test]
    async fn test_update_profile_requires_record() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(&store);

        let err = directory
            .update_profile(&identity(), Some("555-0100".into()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "user", .. }));

        directory.ensure_user(&identity()).await.unwrap();
        directory
            .update_profile(&identity(), Some("555-0100".into()), Some("1 Curry Lane".into()))
            .await
            .unwrap();

        let user = directory.current_user(&identity()).await.unwrap().unwrap();
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert_eq!(user.address.as_deref(), Some("1 Curry Lane"));
    }

    #[tokio::test]
    async fn test_is_admin_false_for_unknown() {
        let store = MemoryStore::new();
        let directory = UserDirectory::new(&store);
        assert!(!directory.is_admin(&identity()).await.unwrap());
    }
}

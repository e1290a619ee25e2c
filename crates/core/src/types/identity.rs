//! Verified caller identity.
//!
//! The identity provider hands the boundary layer an opaque subject plus
//! optional profile claims. Services never read raw provider tokens: the
//! boundary verifies the token signature and only then constructs a
//! [`VerifiedIdentity`], which is the sole identity input the domain
//! accepts.

use serde::{Deserialize, Serialize};

use super::email::Email;

/// A caller identity that has passed boundary verification.
///
/// Constructing one asserts that the provider token's signature was
/// independently verified. Inside the domain the subject is trusted as a
/// stable external key for the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    subject: String,
    email: Option<Email>,
    name: Option<String>,
}

impl VerifiedIdentity {
    /// Create an identity from a verified provider subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            name: None,
        }
    }

    /// Attach the provider's email claim.
    #[must_use]
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Attach the provider's display-name claim.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The provider's opaque subject identifier.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The email claim, if the provider supplied one.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The display-name claim, if the provider supplied one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

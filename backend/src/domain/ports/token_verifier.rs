//! Port for verifying caller tokens.
//!
//! Token issuance and the cryptography behind it live outside this service.
//! The domain only asks whether a token is valid: a returned [`Claims`] means
//! yes, `None` means no.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised when the verifier itself cannot answer.
    pub enum TokenVerifierError {
        /// The verifier backend could not be reached.
        Unavailable { message: String } => "token verifier unavailable: {message}",
    }
}

/// Result of a successful token verification.
///
/// Presence is the only signal the use-cases rely on; `subject` exists for
/// log correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    subject: String,
}

impl Claims {
    /// Build claims for the given subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// Opaque subject identifier safe to log.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token`, returning its claims when it is valid.
    async fn verify(&self, token: &str) -> Result<Option<Claims>, TokenVerifierError>;
}

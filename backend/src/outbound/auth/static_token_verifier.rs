//! Token verifier backed by a configured allow-list.
//!
//! Tokens are opaque strings issued elsewhere. This adapter accepts exactly
//! the tokens it was configured with and reports a short SHA-256 fingerprint
//! as the claims subject so logs never carry token material.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::domain::ports::{Claims, TokenVerifier, TokenVerifierError};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 fingerprint of `token`, as 16 hex characters.
///
/// # Examples
///
/// ```rust
/// use nutriplan::outbound::auth::token_fingerprint;
///
/// let fp = token_fingerprint("s3cret");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn token_fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..FINGERPRINT_BYTES])
}

/// `TokenVerifier` accepting a fixed set of tokens.
pub struct StaticTokenVerifier {
    accepted: Vec<Zeroizing<String>>,
}

impl StaticTokenVerifier {
    /// Accept every non-empty token in `tokens`.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| !token.is_empty())
            .map(Zeroizing::new)
            .collect();
        Self { accepted }
    }

    /// Number of tokens this verifier accepts.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Whether no token will ever be accepted.
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier")
            .field("accepted", &self.accepted.len())
            .finish()
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Option<Claims>, TokenVerifierError> {
        let known = self
            .accepted
            .iter()
            .any(|accepted| accepted.as_str() == token);
        Ok(known.then(|| Claims::new(token_fingerprint(token))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alpha", true)]
    #[case("beta", true)]
    #[case("ALPHA", false)]
    #[case("gamma", false)]
    #[tokio::test]
    async fn accepts_only_configured_tokens(#[case] token: &str, #[case] accepted: bool) {
        let verifier = StaticTokenVerifier::new(["alpha", "beta"]);
        let claims = verifier.verify(token).await.expect("verifier answers");
        assert_eq!(claims.is_some(), accepted);
    }

    #[tokio::test]
    async fn claims_subject_is_a_fingerprint() {
        let verifier = StaticTokenVerifier::new(["alpha"]);
        let claims = verifier
            .verify("alpha")
            .await
            .expect("verifier answers")
            .expect("token accepted");
        assert_eq!(claims.subject(), token_fingerprint("alpha"));
        assert_ne!(claims.subject(), "alpha");
    }

    #[rstest]
    fn empty_tokens_are_ignored() {
        let verifier = StaticTokenVerifier::new(["", "alpha", ""]);
        assert_eq!(verifier.len(), 1);
        assert!(StaticTokenVerifier::new(Vec::<String>::new()).is_empty());
    }

    #[rstest]
    fn debug_output_hides_tokens() {
        let verifier = StaticTokenVerifier::new(["alpha"]);
        let rendered = format!("{verifier:?}");
        assert!(!rendered.contains("alpha"));
    }

    #[rstest]
    fn fingerprint_is_deterministic() {
        assert_eq!(token_fingerprint("alpha"), token_fingerprint("alpha"));
        assert_ne!(token_fingerprint("alpha"), token_fingerprint("beta"));
    }
}

//! Authorisation gate shared by every token-protected use-case.
//!
//! The gate runs before any other validation so unauthenticated callers are
//! turned away without touching repositories. Messages differ per operation,
//! so callers pass a [`GateMessages`] describing them.

use tracing::{debug, error};

use crate::domain::Error;
use crate::domain::ports::{Claims, TokenVerifier};

/// Client-facing messages for the two gate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateMessages {
    /// Reported when no token was supplied.
    pub missing: &'static str,
    /// Reported when the verifier rejects the token.
    pub invalid: &'static str,
}

/// Messages used when creating records.
pub const CREATE_GATE: GateMessages = GateMessages {
    missing: "Authorization token is required",
    invalid: "Invalid token.",
};

/// Messages used when fetching a single record.
pub const LOOKUP_GATE: GateMessages = GateMessages {
    missing: "Insert a token please!",
    invalid: "Invalid token!",
};

/// Fail with [`ErrorCode::Unauthenticated`](crate::domain::ErrorCode::Unauthenticated)
/// when `token` is absent or empty.
///
/// # Errors
/// Returns a 401 error carrying `message`.
pub fn require_token<'a>(token: Option<&'a str>, message: &'static str) -> Result<&'a str, Error> {
    match token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            debug!("request rejected: no caller token");
            Err(Error::unauthenticated(message))
        }
    }
}

/// Ask the verifier about `token`.
///
/// An absent token is treated like one the verifier rejected.
///
/// # Errors
/// - [`ErrorCode::InvalidToken`](crate::domain::ErrorCode::InvalidToken)
///   carrying `message` when the token is rejected.
/// - [`ErrorCode::InternalError`](crate::domain::ErrorCode::InternalError)
///   when the verifier cannot answer.
pub async fn verify_token<V>(
    verifier: &V,
    token: Option<&str>,
    message: &'static str,
) -> Result<Claims, Error>
where
    V: TokenVerifier + ?Sized,
{
    let Some(token) = token.filter(|token| !token.is_empty()) else {
        debug!("request rejected: no caller token to verify");
        return Err(Error::invalid_token(message));
    };
    match verifier.verify(token).await {
        Ok(Some(claims)) => Ok(claims),
        Ok(None) => {
            debug!("request rejected: token failed verification");
            Err(Error::invalid_token(message))
        }
        Err(err) => {
            error!(error = %err, "token verifier failed");
            Err(Error::internal("token verification failed"))
        }
    }
}

/// Run the full gate: presence first, then verification.
///
/// # Errors
/// See [`require_token`] and [`verify_token`].
pub async fn authorize<V>(
    verifier: &V,
    token: Option<&str>,
    messages: GateMessages,
) -> Result<Claims, Error>
where
    V: TokenVerifier + ?Sized,
{
    let token = require_token(token, messages.missing)?;
    verify_token(verifier, Some(token), messages.invalid).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockTokenVerifier, TokenVerifierError};
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[tokio::test]
    async fn absent_token_is_unauthenticated_without_verifying(#[case] token: Option<&str>) {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().times(0);

        let err = authorize(&verifier, token, CREATE_GATE)
            .await
            .expect_err("token required");
        assert_eq!(err.code(), ErrorCode::Unauthenticated);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.message(), "Authorization token is required");
    }

    #[tokio::test]
    async fn rejected_token_is_invalid() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .withf(|token| token == "stale")
            .times(1)
            .return_once(|_| Ok(None));

        let err = authorize(&verifier, Some("stale"), LOOKUP_GATE)
            .await
            .expect_err("token rejected");
        assert_eq!(err.code(), ErrorCode::InvalidToken);
        assert_eq!(err.message(), "Invalid token!");
    }

    #[tokio::test]
    async fn accepted_token_yields_claims() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .return_once(|_| Ok(Some(Claims::new("subject-1"))));

        let claims = authorize(&verifier, Some("T"), CREATE_GATE)
            .await
            .expect("token accepted");
        assert_eq!(claims.subject(), "subject-1");
    }

    #[tokio::test]
    async fn verifier_outage_is_internal() {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .return_once(|_| Err(TokenVerifierError::unavailable("timeout")));

        let err = verify_token(&verifier, Some("T"), "Invalid token.")
            .await
            .expect_err("verifier down");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn verify_treats_missing_token_as_invalid() {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().times(0);

        let err = verify_token(&verifier, None, "Invalid token.")
            .await
            .expect_err("no token");
        assert_eq!(err.code(), ErrorCode::InvalidToken);
        assert_eq!(err.status(), Some(401));
    }
}

//! Caller token extraction.
//!
//! The token travels verbatim in the `Authorization` header; no scheme
//! prefix is stripped. Verification belongs to the domain.

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;
use tracing::debug;

/// Read the caller token, if any.
///
/// A header that is not valid visible ASCII is treated as absent.
pub fn caller_token(request: &HttpRequest) -> Option<String> {
    let value = request.headers().get(AUTHORIZATION)?;
    match value.to_str() {
        Ok(token) => Some(token.to_owned()),
        Err(_) => {
            debug!("ignoring non-ASCII authorization header");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn returns_header_verbatim() {
        let request = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc"))
            .to_http_request();
        assert_eq!(caller_token(&request).as_deref(), Some("Bearer abc"));
    }

    #[rstest]
    fn missing_header_is_none() {
        let request = TestRequest::default().to_http_request();
        assert_eq!(caller_token(&request), None);
    }

    #[rstest]
    fn opaque_bytes_are_none() {
        let value = HeaderValue::from_bytes(b"tok\xffen").expect("header bytes");
        let request = TestRequest::default()
            .insert_header((AUTHORIZATION, value))
            .to_http_request();
        assert_eq!(caller_token(&request), None);
    }
}

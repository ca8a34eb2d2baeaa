use axum::http::HeaderMap;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

use crate::server::{
    error::auth::AuthError,
    model::auth::{ExternalIdentity, ACCESS_PROVIDER},
};

pub static JWT_ASSERTION_HEADER: &str = "cf-access-jwt-assertion";
pub static USER_SUB_HEADER: &str = "x-user-sub";
pub static USER_EMAIL_HEADER: &str = "x-user-email";
pub static ACCESS_EMAIL_HEADER: &str = "cf-access-authenticated-user-email";

/// Claims read from the access proxy's JWT payload
#[derive(Default, Deserialize)]
struct AccessClaims {
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    email: Option<serde_json::Value>,
}

/// Returns the trimmed value of a claim when it is a non-blank string
fn claim_string(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Decodes the payload segment of a JWT without verifying its signature.
///
/// The access proxy has already verified the token, a payload that cannot be decoded is
/// treated as carrying no claims.
fn decode_claims(assertion: &str) -> AccessClaims {
    let Some(payload) = assertion.split('.').nth(1) else {
        return AccessClaims::default();
    };

    URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Resolves the caller's identity from the access proxy headers.
///
/// The subject is taken from the JWT assertion's `sub` claim, then the `x-user-sub` header,
/// then derived as `email:<email>` when only an email is known. The email is taken from the
/// JWT's `email` claim, then `x-user-email`, then `cf-access-authenticated-user-email`.
///
/// # Returns
/// - `Ok(ExternalIdentity)` - Identity with a non-empty subject
/// - `Err(AuthError::AuthenticationRequired)` - Neither a subject nor an email was found
pub fn resolve_external_identity(headers: &HeaderMap) -> Result<ExternalIdentity, AuthError> {
    let claims = header_string(headers, JWT_ASSERTION_HEADER)
        .map(|assertion| decode_claims(&assertion))
        .unwrap_or_default();

    let email = claim_string(claims.email)
        .or_else(|| header_string(headers, USER_EMAIL_HEADER))
        .or_else(|| header_string(headers, ACCESS_EMAIL_HEADER));

    let subject = claim_string(claims.sub)
        .or_else(|| header_string(headers, USER_SUB_HEADER))
        .or_else(|| email.as_ref().map(|email| format!("email:{}", email)))
        .ok_or(AuthError::AuthenticationRequired)?;

    Ok(ExternalIdentity {
        provider: ACCESS_PROVIDER.to_string(),
        subject,
        email,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};
    use ledger_test_utils::prelude::*;
    use serde_json::json;

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    /// Expect subject and email to come from the JWT payload
    #[test]
    fn reads_jwt_claims() {
        let assertion = jwt_assertion(json!({ "sub": "abc-123", "email": "sensei@example.com" }));

        let identity =
            resolve_external_identity(&headers(&[(JWT_ASSERTION_HEADER, &assertion)])).unwrap();

        assert_eq!(
            identity,
            ExternalIdentity {
                provider: ACCESS_PROVIDER.to_string(),
                subject: "abc-123".to_string(),
                email: Some("sensei@example.com".to_string()),
            }
        );
    }

    /// Expect the JWT subject to win over the fallback header
    #[test]
    fn prefers_jwt_subject_over_header() {
        let assertion = jwt_assertion(json!({ "sub": "from-jwt" }));

        let identity = resolve_external_identity(&headers(&[
            (JWT_ASSERTION_HEADER, &assertion),
            (USER_SUB_HEADER, "from-header"),
        ]))
        .unwrap();

        assert_eq!(identity.subject, "from-jwt");
    }

    /// Expect fallback headers when the JWT carries blank or non-string claims
    #[test]
    fn falls_back_to_headers() {
        let assertion = jwt_assertion(json!({ "sub": "  ", "email": 42 }));

        let identity = resolve_external_identity(&headers(&[
            (JWT_ASSERTION_HEADER, &assertion),
            (USER_SUB_HEADER, "header-sub"),
            (ACCESS_EMAIL_HEADER, "access@example.com"),
        ]))
        .unwrap();

        assert_eq!(identity.subject, "header-sub");
        assert_eq!(identity.email.as_deref(), Some("access@example.com"));
    }

    /// Expect an email-derived subject when only an email is known
    #[test]
    fn derives_subject_from_email() {
        let identity = resolve_external_identity(&headers(&[
            (USER_EMAIL_HEADER, "sensei@example.com"),
            (ACCESS_EMAIL_HEADER, "ignored@example.com"),
        ]))
        .unwrap();

        assert_eq!(identity.subject, "email:sensei@example.com");
        assert_eq!(identity.email.as_deref(), Some("sensei@example.com"));
    }

    /// Expect a malformed assertion to be ignored rather than rejected
    #[test]
    fn ignores_malformed_assertion() {
        let identity = resolve_external_identity(&headers(&[
            (JWT_ASSERTION_HEADER, "not-a-jwt"),
            (USER_SUB_HEADER, TEST_SUBJECT),
        ]))
        .unwrap();

        assert_eq!(identity.subject, TEST_SUBJECT);
    }

    /// Expect AuthenticationRequired without any identity header
    #[test]
    fn fails_without_identity() {
        let result = resolve_external_identity(&HeaderMap::new());

        assert_eq!(result, Err(AuthError::AuthenticationRequired));
    }
}

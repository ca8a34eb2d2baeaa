use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Build an unsigned JWT-shaped assertion carrying `claims` as its payload.
///
/// Only the payload segment is meaningful; the header and signature are placeholders.
pub fn jwt_assertion(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());

    format!("{}.{}.signature", header, payload)
}

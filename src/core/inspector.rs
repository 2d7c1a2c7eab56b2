//! Token inspection.
//!
//! Builds a [`TokenReport`] from a decoded token: the header and payload
//! as-is, the status of the temporal claims relative to an injected
//! clock, and a bounded preview of the signature segment.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::core::clock::Clock;
use crate::core::codec::{Claims, DecodedToken};

/// Number of signature characters shown before truncating.
pub const SIGNATURE_PREVIEW_LEN: usize = 50;

/// Where the token's `exp` claim places it relative to the evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// `exp` lies in the past.
    Expired { at: DateTime<Utc>, ago_secs: i64 },
    /// `exp` is now or in the future.
    Valid {
        at: DateTime<Utc>,
        remaining_secs: i64,
    },
    /// `exp` is present but is not a usable epoch-seconds number.
    Unreadable { raw: Value },
}

/// Human-oriented view of a decoded token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub header: Claims,
    pub payload: Claims,
    pub signature_preview: String,
    pub evaluated_at: DateTime<Utc>,
    /// `None` when the payload carries no `exp` claim.
    pub expiry: Option<ExpiryStatus>,
    pub issued_at: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
}

impl TokenReport {
    /// Whether `nbf` places the token's validity window in the future.
    pub fn is_not_yet_valid(&self) -> bool {
        self.not_before.is_some_and(|nbf| nbf > self.evaluated_at)
    }
}

/// Build a report for a decoded token, evaluating temporal claims
/// against `clock`. The token itself is not modified.
pub fn describe(decoded: &DecodedToken, clock: &dyn Clock) -> TokenReport {
    let now = clock.now();

    let expiry = decoded
        .payload
        .get("exp")
        .map(|raw| match claim_timestamp(raw) {
            Some(at) if at < now => ExpiryStatus::Expired {
                at,
                ago_secs: (now - at).num_seconds(),
            },
            Some(at) => ExpiryStatus::Valid {
                at,
                remaining_secs: (at - now).num_seconds(),
            },
            None => ExpiryStatus::Unreadable { raw: raw.clone() },
        });

    TokenReport {
        header: decoded.header.clone(),
        payload: decoded.payload.clone(),
        signature_preview: signature_preview(&decoded.signature),
        evaluated_at: now,
        expiry,
        issued_at: decoded.payload.get("iat").and_then(claim_timestamp),
        not_before: decoded.payload.get("nbf").and_then(claim_timestamp),
    }
}

/// Interpret a claim value as epoch seconds.
///
/// Integers and finite floats are accepted; anything else, or a value
/// outside the representable date range, yields `None`.
pub fn claim_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    if let Some(secs) = value.as_i64() {
        return DateTime::from_timestamp(secs, 0);
    }
    let secs = value.as_f64().filter(|f| f.is_finite())?;
    if secs.abs() > i64::MAX as f64 {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// First [`SIGNATURE_PREVIEW_LEN`] characters of the signature, with an
/// ellipsis when truncated.
pub fn signature_preview(signature: &str) -> String {
    if signature.is_empty() {
        return "(empty)".to_string();
    }
    let mut chars = signature.chars();
    let head: String = chars.by_ref().take(SIGNATURE_PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

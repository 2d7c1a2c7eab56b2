//! Time-travel debugging for JWT temporal claims.
//!
//! Parses time expressions (relative like "+7d" or absolute like ISO 8601)
//! into a frozen clock, so `exp`, `iat`, and `nbf` can be evaluated as if
//! the tool were run at another instant.

use chrono::{DateTime, Duration, Utc};

use crate::core::clock::{Clock, FixedClock};
use crate::error::ProbeError;

/// A parsed time target for time-travel evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTarget {
    /// The resolved absolute timestamp.
    pub timestamp: DateTime<Utc>,
    /// The original expression provided by the user.
    pub expression: String,
}

impl TimeTarget {
    /// A clock frozen at this target.
    pub fn clock(&self) -> FixedClock {
        FixedClock(self.timestamp)
    }
}

/// Parse a time-travel expression into an absolute timestamp.
///
/// Supports the following formats:
/// - Relative to `clock`: `+7d`, `-1h`, `+30m`, `+2w`, `+1y`, `-5s`
/// - Absolute ISO 8601: `2024-01-15T14:30:00Z`
/// - Absolute Unix epoch: `1705312200`
///
/// # Errors
///
/// Returns an error if the expression doesn't match any known format.
pub fn parse_time_expression(
    expression: &str,
    clock: &dyn Clock,
) -> Result<TimeTarget, ProbeError> {
    let trimmed = expression.trim();
    let invalid = |reason: &str| ProbeError::InvalidTimeExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("expression is empty"));
    }

    let timestamp = if let Some(rest) = trimmed.strip_prefix('+') {
        let offset = parse_relative(rest).map_err(|r| invalid(&r))?;
        clock
            .now()
            .checked_add_signed(offset)
            .ok_or_else(|| invalid("resulting time out of range"))?
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        let offset = parse_relative(rest).map_err(|r| invalid(&r))?;
        clock
            .now()
            .checked_sub_signed(offset)
            .ok_or_else(|| invalid("resulting time out of range"))?
    } else if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let secs: i64 = trimmed
            .parse()
            .map_err(|_| invalid("epoch seconds out of range"))?;
        DateTime::from_timestamp(secs, 0).ok_or_else(|| invalid("epoch seconds out of range"))?
    } else {
        DateTime::parse_from_rfc3339(trimmed)
            .map_err(|_| invalid("expected +N<unit>, -N<unit>, epoch seconds, or RFC 3339"))?
            .with_timezone(&Utc)
    };

    Ok(TimeTarget {
        timestamp,
        expression: expression.to_string(),
    })
}

/// Parse the magnitude and unit of a relative offset such as `7d`.
fn parse_relative(body: &str) -> Result<Duration, String> {
    let split = body
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| "missing unit (s, m, h, d, w, y)".to_string())?;
    let (digits, unit) = body.split_at(split);
    if digits.is_empty() {
        return Err("missing amount before unit".to_string());
    }
    let amount: i64 = digits.parse().map_err(|_| "amount out of range".to_string())?;

    let per_unit = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        "w" => 604_800,
        "y" => 31_536_000,
        other => return Err(format!("unknown unit '{other}'")),
    };

    amount
        .checked_mul(per_unit)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| "amount out of range".to_string())
}

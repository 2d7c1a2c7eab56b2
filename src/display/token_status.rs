//! Token status display for temporal claims.
//!
//! Renders human-readable status information for JWT temporal claims
//! (`exp`, `iat`, `nbf`) evaluated by the inspector.

use chrono::{DateTime, Local, Utc};

use super::json_printer::inline_value;
use crate::core::inspector::{ExpiryStatus, TokenReport};

/// Render the status lines for a report's temporal claims.
///
/// Returns an empty vector when the payload has none of `exp`, `iat`,
/// or `nbf`:
/// - Expired tokens: "EXPIRED, expired X ago"
/// - Valid tokens: "VALID, X remaining"
/// - Future `nbf`: "NOT YET VALID"
pub fn token_status_lines(report: &TokenReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.expiry {
        Some(ExpiryStatus::Expired { at, ago_secs }) => lines.push(format!(
            "Expires:     {} (EXPIRED, expired {} ago)",
            local_time(at),
            format_duration(*ago_secs)
        )),
        Some(ExpiryStatus::Valid { at, remaining_secs }) => lines.push(format!(
            "Expires:     {} (VALID, {} remaining)",
            local_time(at),
            format_duration(*remaining_secs)
        )),
        Some(ExpiryStatus::Unreadable { raw }) => lines.push(format!(
            "Expires:     unreadable exp claim: {}",
            inline_value(raw)
        )),
        None => {}
    }

    if let Some(iat) = &report.issued_at {
        lines.push(format!("Issued at:   {}", local_time(iat)));
    }

    if let Some(nbf) = &report.not_before {
        let note = if report.is_not_yet_valid() {
            format!(
                " (NOT YET VALID, valid in {})",
                format_duration((*nbf - report.evaluated_at).num_seconds())
            )
        } else {
            String::new()
        };
        lines.push(format!("Not before:  {}{note}", local_time(nbf)));
    }

    lines
}

/// Format an instant in the local timezone.
pub fn local_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S %:z")
        .to_string()
}

/// Format a number of seconds as `2d 3h 4m 5s`, omitting leading zero
/// units. Negative inputs are treated as their magnitude.
pub fn format_duration(secs: i64) -> String {
    let total = secs.unsigned_abs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

//! Text reports for each command.
//!
//! Every function returns the complete report as a `String`; the command
//! handlers decide where it goes.

use serde_json::Value;

use super::json_printer::{inline_value, render_json};
use super::token_status::{local_time, token_status_lines};
use crate::core::attacks::{
    Advisory, AlgorithmDowngrade, ClaimOverride, ExpiryRewrite, MalformedSample, NONE_ALGORITHM,
};
use crate::core::inspector::TokenReport;
use crate::core::time_travel::TimeTarget;

const RULE: &str = "============================================================";

/// Render the `decode` report.
///
/// # Errors
///
/// Returns an error if the header or payload cannot be serialized.
pub fn render_token_report(
    report: &TokenReport,
    time_travel: Option<&TimeTarget>,
) -> serde_json::Result<String> {
    let mut out = format!("\nJWT Analysis\n{RULE}\n");
    out.push_str(&format!("\n--- Header ---\n{}\n", render_json(&report.header)?));
    out.push_str(&format!("\n--- Payload ---\n{}\n", render_json(&report.payload)?));

    let status = token_status_lines(report);
    if !status.is_empty() || time_travel.is_some() {
        out.push_str("\n--- Token Status ---\n");
        if let Some(target) = time_travel {
            out.push_str(&format!(
                "Evaluated at: {} (time travel: {})\n",
                local_time(&target.timestamp),
                target.expression
            ));
        }
        for line in status {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(&format!("\n--- Signature ---\n   {}\n", report.signature_preview));
    out.push_str(RULE);
    out.push('\n');
    Ok(out)
}

/// Render the algorithm downgrade report.
pub fn render_downgrade(outcome: &AlgorithmDowngrade, target_url: &str) -> String {
    let original = outcome
        .original_algorithm
        .as_ref()
        .map_or_else(|| "unknown".to_string(), inline_value);

    let mut out = banner("NONE ALGORITHM ATTACK");
    out.push_str(&format!("Original algorithm: {original}\n"));
    out.push_str(&format!("Modified algorithm: {NONE_ALGORITHM}\n"));
    out.push_str(&format!("\nMalicious Token (NO SIGNATURE):\n{}\n", outcome.token));
    out.push_str(&replay_hint(&outcome.token, target_url));
    out.push_str(&advisory(&outcome.advisory));
    out
}

/// Render the claim override report.
pub fn render_claim_override(outcome: &ClaimOverride, target_url: &str) -> String {
    let mut out = banner("CLAIM MODIFICATION ATTACK");
    out.push_str(&format!("Claim: {}\n", outcome.claim));
    out.push_str(&format!("Original: {}\n", original_value(outcome.original.as_ref())));
    out.push_str(&format!("Modified: {}\n", inline_value(&outcome.value)));
    out.push_str(&format!("\nMalicious Token:\n{}\n", outcome.token));
    out.push_str(&replay_hint(&outcome.token, target_url));
    out.push_str(&advisory(&outcome.advisory));
    out
}

/// Render the expiry rewrite report.
pub fn render_expiry_rewrite(outcome: &ExpiryRewrite, target_url: &str) -> String {
    let mut out = banner("EXPIRED TOKEN TEST");
    out.push_str(&format!(
        "Token expiration set to: {}\n",
        local_time(&outcome.expires_at)
    ));
    out.push_str(&format!("Current time: {}\n", local_time(&outcome.generated_at)));
    out.push_str(&format!("\nExpired Token:\n{}\n", outcome.token));
    out.push_str(&replay_hint(&outcome.token, target_url));
    out.push_str(&advisory(&outcome.advisory));
    out
}

/// Render the malformation catalog.
pub fn render_malformed(samples: &[MalformedSample], guidance: &Advisory) -> String {
    let mut out = banner("MALFORMED TOKEN TESTS");
    for sample in samples {
        out.push_str(&format!("\n{}:\n   {}\n", sample.name, sample.token));
    }
    out.push_str(&advisory(guidance));
    out
}

fn banner(title: &str) -> String {
    format!("\n{title}\n{RULE}\n")
}

fn original_value(original: Option<&Value>) -> String {
    original.map_or_else(|| "(not set)".to_string(), inline_value)
}

/// A ready-to-paste `curl` command; nothing is sent.
fn replay_hint(token: &str, target_url: &str) -> String {
    format!(
        "\nTest this token against your API:\n   curl -H \"Authorization: Bearer {token}\" \\\n        {target_url}\n"
    )
}

fn advisory(advisory: &Advisory) -> String {
    format!(
        "\nExpected: {}\nVulnerable if: {}\n{RULE}\n",
        advisory.expected, advisory.vulnerable_if
    )
}

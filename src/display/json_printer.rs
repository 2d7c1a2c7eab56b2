//! JSON rendering for terminal and machine output.

use serde::Serialize;
use serde_json::Value;

/// Render a value as 2-space indented JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Print a value as 2-space indented JSON on stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized; nothing is printed.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Render a claim value inline: strings without quotes, everything else
/// as compact JSON.
pub fn inline_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

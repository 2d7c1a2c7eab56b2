//! Handler for the `malformed` subcommand. Ignores any token input.

use anyhow::Result;
use serde_json::json;

use crate::cli::MalformedArgs;
use crate::core::attacks::{MALFORMED_ADVISORY, malformed_catalog};
use crate::display::json_printer::print_json;
use crate::display::report::render_malformed;

/// Execute the `malformed` subcommand with the given arguments.
pub fn execute(args: &MalformedArgs) -> Result<()> {
    let samples = malformed_catalog();

    if args.json {
        print_json(&json!({
            "samples": samples,
            "advisory": MALFORMED_ADVISORY,
        }))?;
    } else {
        print!("{}", render_malformed(samples, &MALFORMED_ADVISORY));
    }

    Ok(())
}

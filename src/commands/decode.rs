//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a JWT's header and payload without
//! verifying its signature, along with the status of its temporal
//! claims. Supports evaluating those claims at a simulated time.

use anyhow::Result;
use serde_json::json;

use crate::cli::DecodeArgs;
use crate::core::clock::SystemClock;
use crate::core::codec::decode_token;
use crate::core::inspector::describe;
use crate::core::time_travel::parse_time_expression;
use crate::display::json_printer::print_json;
use crate::display::report::render_token_report;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let time_travel = args
        .time_travel
        .as_deref()
        .map(|expr| parse_time_expression(expr, &SystemClock))
        .transpose()?;

    let decoded = decode_token(&args.token)?;
    let report = match &time_travel {
        Some(target) => describe(&decoded, &target.clock()),
        None => describe(&decoded, &SystemClock),
    };

    if args.json {
        print_json(&json!({
            "header": report.header,
            "payload": report.payload,
            "signature": decoded.signature,
            "status": {
                "evaluated_at": report.evaluated_at,
                "expiry": report.expiry,
                "issued_at": report.issued_at,
                "not_before": report.not_before,
            },
        }))?;
    } else {
        print!("{}", render_token_report(&report, time_travel.as_ref())?);
    }

    Ok(())
}

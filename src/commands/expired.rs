//! Handler for the `expired` subcommand.

use anyhow::Result;

use crate::cli::AttackArgs;
use crate::core::attacks::rewrite_expiry;
use crate::core::clock::SystemClock;
use crate::display::json_printer::print_json;
use crate::display::report::render_expiry_rewrite;

/// Execute the `expired` subcommand with the given arguments.
pub fn execute(args: &AttackArgs) -> Result<()> {
    let outcome = rewrite_expiry(&args.token, &SystemClock)?;

    if args.json {
        print_json(&outcome)?;
    } else {
        print!("{}", render_expiry_rewrite(&outcome, &args.target_url));
    }

    Ok(())
}

//! Handler for the `none-attack` subcommand.

use anyhow::Result;

use crate::cli::AttackArgs;
use crate::core::attacks::downgrade_algorithm;
use crate::display::json_printer::print_json;
use crate::display::report::render_downgrade;

/// Execute the `none-attack` subcommand with the given arguments.
pub fn execute(args: &AttackArgs) -> Result<()> {
    let outcome = downgrade_algorithm(&args.token)?;

    if args.json {
        print_json(&outcome)?;
    } else {
        print!("{}", render_downgrade(&outcome, &args.target_url));
    }

    Ok(())
}

//! Handler for the `modify` subcommand.
//!
//! The `--claim` argument is already split into name and raw value by
//! the CLI layer; coercion of the value happens in the generator.

use anyhow::Result;

use crate::cli::ModifyArgs;
use crate::core::attacks::override_claim;
use crate::display::json_printer::print_json;
use crate::display::report::render_claim_override;

/// Execute the `modify` subcommand with the given arguments.
pub fn execute(args: &ModifyArgs) -> Result<()> {
    let outcome = override_claim(&args.token, &args.claim.name, &args.claim.value)?;

    if args.json {
        print_json(&outcome)?;
    } else {
        print!("{}", render_claim_override(&outcome, &args.target_url));
    }

    Ok(())
}

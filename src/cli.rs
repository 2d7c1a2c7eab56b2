//! CLI argument definitions for jwt-probe.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! Argument structs holding tokens implement custom `Debug` to redact
//! them and prevent accidental leakage through debug formatting, error
//! chains, or logging.

use std::fmt;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::ProbeError;

/// Where replay hints point when `--target-url` is not given.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:8000/accounts/my-accounts";

/// Offline JWT tampering toolkit: decode tokens and craft unsigned,
/// tampered, expired, or malformed variants to test whether a service
/// validates JWTs correctly.
#[derive(Debug, Parser)]
#[command(name = "jwt-probe")]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and inspect a JWT without verifying its signature.
    Decode(DecodeArgs),

    /// Switch the token to `alg: none` and drop its signature.
    NoneAttack(AttackArgs),

    /// Change one payload claim and drop the signature.
    Modify(ModifyArgs),

    /// Backdate the `exp` claim by one hour and drop the signature.
    Expired(AttackArgs),

    /// Print a catalog of structurally malformed tokens.
    Malformed(MalformedArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode.
    pub token: String,

    /// Evaluate temporal claims at a different time.
    ///
    /// Accepts relative expressions like "+7d", "-1h", "+30m" or
    /// absolute timestamps in RFC 3339 or Unix epoch format.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub time_travel: Option<String>,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &"[REDACTED]")
            .field("time_travel", &self.time_travel)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments shared by the `none-attack` and `expired` subcommands.
#[derive(clap::Args)]
pub struct AttackArgs {
    /// The JWT token to tamper with.
    pub token: String,

    /// Endpoint used in the printed curl command. Nothing is sent.
    #[arg(long, value_name = "URL", default_value = DEFAULT_TARGET_URL)]
    pub target_url: String,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

impl fmt::Debug for AttackArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackArgs")
            .field("token", &"[REDACTED]")
            .field("target_url", &self.target_url)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `modify` subcommand.
#[derive(clap::Args)]
pub struct ModifyArgs {
    /// The JWT token to tamper with.
    pub token: String,

    /// Claim to set, as name=value. Digits become integers, true/false
    /// become booleans, and [..] or {..} are parsed as JSON.
    #[arg(long, value_name = "NAME=VALUE", value_parser = parse_claim_assignment)]
    pub claim: ClaimAssignment,

    /// Endpoint used in the printed curl command. Nothing is sent.
    #[arg(long, value_name = "URL", default_value = DEFAULT_TARGET_URL)]
    pub target_url: String,

    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

impl fmt::Debug for ModifyArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifyArgs")
            .field("token", &"[REDACTED]")
            .field("claim", &self.claim)
            .field("target_url", &self.target_url)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `malformed` subcommand.
#[derive(Debug, clap::Args)]
pub struct MalformedArgs {
    /// Output raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// A `--claim name=value` argument, split at the first `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimAssignment {
    pub name: String,
    /// Raw text; type coercion happens in the claim override generator.
    pub value: String,
}

/// Parse `name=value` into a [`ClaimAssignment`].
///
/// The value may itself contain `=`; only the first one separates.
fn parse_claim_assignment(s: &str) -> Result<ClaimAssignment, ProbeError> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(ClaimAssignment {
            name: name.to_string(),
            value: value.to_string(),
        }),
        _ => Err(ProbeError::InvalidClaimAssignment {
            input: s.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_claim_assignment_splits_on_first_equals() {
        let parsed = parse_claim_assignment("filter=a=b").unwrap();
        assert_eq!(parsed.name, "filter");
        assert_eq!(parsed.value, "a=b");
    }

    #[test]
    fn test_parse_claim_assignment_allows_empty_value() {
        let parsed = parse_claim_assignment("role=").unwrap();
        assert_eq!(parsed.name, "role");
        assert_eq!(parsed.value, "");
    }

    #[test]
    fn test_parse_claim_assignment_rejects_missing_equals() {
        assert!(matches!(
            parse_claim_assignment("role"),
            Err(ProbeError::InvalidClaimAssignment { .. })
        ));
    }

    #[test]
    fn test_parse_claim_assignment_rejects_empty_name() {
        assert!(parse_claim_assignment("=admin").is_err());
    }

    #[test]
    fn test_modify_requires_claim_flag() {
        let err = Cli::try_parse_from(["jwt-probe", "modify", "a.b.c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_modify_parses_claim() {
        let cli = Cli::try_parse_from(["jwt-probe", "modify", "a.b.c", "--claim", "sub=evil"])
            .unwrap();
        let Commands::Modify(args) = cli.command else {
            panic!("expected modify");
        };
        assert_eq!(args.claim.name, "sub");
        assert_eq!(args.claim.value, "evil");
        assert_eq!(args.target_url, DEFAULT_TARGET_URL);
    }

    #[test]
    fn test_modify_accepts_claim_before_token() {
        let cli = Cli::try_parse_from(["jwt-probe", "modify", "--claim", "sub=evil", "a.b.c"])
            .unwrap();
        let Commands::Modify(args) = cli.command else {
            panic!("expected modify");
        };
        assert_eq!(args.token, "a.b.c");
        assert_eq!(args.claim.name, "sub");
    }

    #[test]
    fn test_none_attack_uses_kebab_case_name() {
        let cli = Cli::try_parse_from(["jwt-probe", "none-attack", "a.b.c"]).unwrap();
        assert!(matches!(cli.command, Commands::NoneAttack(_)));
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["jwt-probe", "-vv", "malformed"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_args_debug_redacts_token() {
        let cli = Cli::try_parse_from(["jwt-probe", "decode", "secret.token.value"]).unwrap();
        let debug_output = format!("{:?}", cli);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("secret.token.value"));
    }
}

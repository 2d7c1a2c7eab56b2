//! Terminal display and formatting utilities.
//!
//! Handles JSON rendering, token status lines, and the per-command text
//! reports.

pub mod json_printer;
pub mod report;
pub mod token_status;

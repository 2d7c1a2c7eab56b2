//! Core business logic for token inspection and tampering.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod attacks;
pub mod clock;
pub mod codec;
pub mod inspector;
pub mod time_travel;

//! Domain error types for jwt-probe.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use std::fmt;

use thiserror::Error;

/// A decoded segment of a token, used to name where decoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}

/// Errors that can occur while decoding, mutating, or re-encoding tokens.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The provided token does not have the expected three-part structure.
    #[error(
        "invalid token format: expected 'header.payload.signature' structure, found {parts} segment(s)"
    )]
    InvalidTokenFormat {
        /// Number of dot-separated parts actually found.
        parts: usize,
    },

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode.
        segment: Segment,
    },

    /// Failed to parse a decoded segment as a JSON object.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse.
        segment: Segment,
        /// Description of the parsing failure.
        reason: String,
    },

    /// A segment could not be serialized back to JSON.
    #[error("failed to encode {segment}: {reason}")]
    EncodeError {
        /// Which segment failed to encode.
        segment: Segment,
        /// Description of the serialization failure.
        reason: String,
    },

    /// A `--claim` argument was not of the form `name=value`.
    #[error("invalid claim '{input}': expected format name=value")]
    InvalidClaimAssignment {
        /// The rejected argument text.
        input: String,
    },

    /// Failed to parse a time-travel expression.
    #[error("invalid time expression '{expression}': {reason}")]
    InvalidTimeExpression {
        /// The time expression that failed to parse.
        expression: String,
        /// Description of the parsing failure.
        reason: String,
    },
}

impl ProbeError {
    /// Returns `true` if the error means the input token itself is malformed.
    pub fn is_malformed_token(&self) -> bool {
        matches!(
            self,
            ProbeError::InvalidTokenFormat { .. }
                | ProbeError::Base64DecodeError { .. }
                | ProbeError::JsonParseError { .. }
        )
    }

    /// The segment a codec failure is attributed to, if any.
    ///
    /// Structural failures (wrong number of parts) have no single segment.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            ProbeError::Base64DecodeError { segment }
            | ProbeError::JsonParseError { segment, .. }
            | ProbeError::EncodeError { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

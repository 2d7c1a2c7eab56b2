//! Structurally malformed tokens.
//!
//! A fixed catalog of strings that no verifier should accept or crash on.
//! They are never decoded here.

use serde::Serialize;

use super::Advisory;

pub const MALFORMED_ADVISORY: Advisory = Advisory {
    expected: "All should return 401 Unauthorized",
    vulnerable_if: "Any return 200 or 500",
};

/// A named malformed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MalformedSample {
    pub name: &'static str,
    pub token: &'static str,
}

const CATALOG: &[MalformedSample] = &[
    MalformedSample {
        name: "Missing signature",
        token: "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhdHRhY2tlciJ9",
    },
    MalformedSample {
        name: "Extra dots",
        token: "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhdHRhY2tlciJ9.signature.extra",
    },
    MalformedSample {
        name: "Invalid base64",
        token: "not.valid.base64!!!",
    },
    MalformedSample {
        name: "Empty parts",
        token: "..",
    },
    MalformedSample {
        name: "Only header",
        token: "eyJhbGciOiJIUzI1NiJ9",
    },
    // base64url("not json") in both positions
    MalformedSample {
        name: "Non-JSON segments",
        token: "bm90IGpzb24.bm90IGpzb24.signature",
    },
];

/// The malformation catalog. Always the same samples in the same order.
pub fn malformed_catalog() -> &'static [MalformedSample] {
    CATALOG
}

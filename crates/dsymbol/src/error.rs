//! Error type shared by parsing, validation and ordinal lookups.
//!
//! Editing operators do not use it: an operator that cannot be applied returns
//! `None`, which is a normal outcome and not a failure.

use thiserror::Error;

/// Errors surfaced by the public API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DsError {
    /// Text did not follow `<NR1.NR2:SIZE:s0,s1,s2:m01,m12>`.
    #[error("parse error: {reason}")]
    Parse { reason: String },
    /// Input does not start with `<`, so there is no symbol to read.
    #[error("no D-symbol found")]
    NoSymbol,
    /// Only two-dimensional symbols are supported.
    #[error("unsupported dimension {0} (only 2 is accepted)")]
    UnsupportedDimension(usize),
    /// A structural invariant is broken (involution, branching, connectivity).
    #[error("inconsistent D-symbol: {reason}")]
    Inconsistent { reason: String },
    /// A 1-based orbit ordinal is outside `1..=count`.
    #[error("{what} {index} out of range (have {count})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },
}

impl DsError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            reason: reason.into(),
        }
    }
}

//! Error types for parsing, cost projection, and run execution.
//!
//! Errors fall into two tiers. [`LineError`] is recoverable: the offending
//! line is logged and skipped. [`FormatError`], [`AssertionFailure`], and
//! [`RunError`] are fatal for the operation that raised them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A malformed `WxLxHxGrams` package description.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormatError {
    /// The string did not split into exactly four `x`-separated fields.
    #[error("expected 4 fields in the form WxLxHxWeight, found {found} in {input:?}")]
    FieldCount {
        /// Number of fields actually present.
        found: usize,
        /// The raw input.
        input: String,
    },
    /// A field was not a finite, non-negative number.
    #[error("{field} value {value:?} is not a valid non-negative number")]
    InvalidNumber {
        /// Which field failed (`width`, `length`, `height`, `weight`).
        field: &'static str,
        /// The raw field text.
        value: String,
    },
}

/// A recoverable validation failure for a single input line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LineError {
    /// A name token was empty.
    #[error("name attribute must have a value")]
    EmptyName,
    /// A distance suffix was not an integer.
    #[error("{0:?} is not something that can be parsed into an integer distance")]
    InvalidDistance(String),
    /// A distance was negative.
    #[error("hard units must not be negative, got {0}")]
    NegativeDistance(f64),
    /// A token had more than one `:` separator.
    #[error("element does not follow the NAME or NAME:DISTANCE grammar: {0:?}")]
    Grammar(String),
    /// A line had no elements at all.
    #[error("input elements are empty")]
    Empty,
    /// A line had no head element.
    #[error("the source at each line must be exactly one, found none")]
    NoHead,
    /// A line had more than one head element.
    #[error("the source at each line must be exactly one, found {0}")]
    MultipleHeads(usize),
    /// The head element was not the first token.
    #[error("only the first element is allowed to be the head")]
    HeadNotFirst,
    /// An assertion line did not carry exactly three data fields.
    #[error("wrong format of assertion statement: expected 3 fields, found {0}")]
    AssertionArity(usize),
    /// An expected cost was neither a number nor `~`.
    #[error("{0:?} is not a valid expected cost")]
    InvalidCost(String),
    /// The package description of an assertion was malformed.
    #[error(transparent)]
    Profile(#[from] FormatError),
}

/// A stated expectation that disagrees with the computed network.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssertionFailure {
    /// No path exists but the assertion states a finite cost.
    #[error("path from {origin} -> {target} doesn't seem to exist but assertion cost has a value of {expected:.2}")]
    Unreachable {
        /// Source vertex.
        origin: String,
        /// Target vertex.
        target: String,
        /// The finite cost the assertion expected.
        expected: f64,
    },
    /// A path exists but the assertion states it should not.
    #[error("path from {origin} -> {target} exists with cost {computed:.2} but assertion states it is unreachable")]
    UnexpectedPath {
        /// Source vertex.
        origin: String,
        /// Target vertex.
        target: String,
        /// The cost actually computed.
        computed: f64,
    },
    /// Computed and expected costs differ after rounding to 2 decimals.
    #[error("{computed:.2} is not equal to shipping cost defined in assertion {expected:.2} ({origin} -> {target})")]
    Mismatch {
        /// Source vertex.
        origin: String,
        /// Target vertex.
        target: String,
        /// The cost actually computed.
        computed: f64,
        /// The cost the assertion expected.
        expected: f64,
    },
}

/// A fatal run outcome.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading the input or writing the output failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A package description was malformed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// An embedded assertion failed.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
}

impl RunError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

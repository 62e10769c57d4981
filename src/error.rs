//! Error and diagnostic types for TOON parsing and serialization.
//!
//! The parser is total: content irregularities never abort a parse, because
//! the producer of the input (a model completion) is never trusted to be
//! well-formed. Instead each irregularity is absorbed into a recovery policy
//! and recorded as a [`Diagnostic`] on the returned document.
//!
//! [`Error`] exists for the fallible conveniences around the core — writer
//! I/O and the strict parse entry point that callers use when they want to
//! layer validation on top of the tolerant default.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{parse, Diagnostic};
//!
//! // A stray header-style line is skipped, not fatal.
//! let doc = parse("orphan, header, line\nkey: value");
//! assert_eq!(doc.root().len(), 1);
//! assert!(matches!(doc.diagnostics()[0], Diagnostic::MalformedLine { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// A non-fatal irregularity observed while parsing or extracting.
///
/// Diagnostics are recorded on the [`Document`](crate::Document) and never
/// stop a parse. Callers that want strictness use
/// [`parse_strict`](crate::parse_strict), which promotes the first
/// diagnostic to an [`Error`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// A line with no `:` separator appeared somewhere other than the header
    /// position of a freshly opened scope. The line was skipped.
    #[error("line {line}: no separator outside a header position: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A data row had a different number of fields than the header schema.
    /// Missing trailing fields decoded as empty strings, extra fields were
    /// dropped.
    #[error("line {line}: row has {found} fields, header schema has {expected}")]
    RecordWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No tagged fenced block was found and whole-text parsing yielded no
    /// top-level entries.
    #[error("no TOON content found in input")]
    ExtractionMiss,
}

impl Diagnostic {
    /// Returns the 1-based source line this diagnostic refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Diagnostic::MalformedLine { line, .. }
            | Diagnostic::RecordWidthMismatch { line, .. } => Some(*line),
            Diagnostic::ExtractionMiss => None,
        }
    }
}

/// Errors surfaced by the fallible entry points.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing serialized output.
    #[error("IO error: {0}")]
    Io(String),

    /// A diagnostic promoted to an error by a strict entry point.
    #[error("malformed TOON: {0}")]
    Malformed(#[from] Diagnostic),

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

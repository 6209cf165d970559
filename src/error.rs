//! Error types for LTSV reading and writing.
//!
//! ## Error Categories
//!
//! - **Invalid labels**: a control or non-printable character was found while
//!   scanning a label. The error carries the line number of the record being read.
//! - **I/O Errors**: failures of the underlying stream, passed through untouched.
//!
//! Reaching the end of the input is *not* an error: [`Reader::read_record`]
//! returns `Ok(None)` instead.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::{from_str, Error};
//!
//! let result = from_str("ok:1\nbad\u{7}label:2\n");
//! match result {
//!     Err(Error::InvalidLabel { line }) => assert_eq!(line, 2),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! [`Reader::read_record`]: crate::Reader::read_record

use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing LTSV.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A control or non-printable character appeared inside a label.
    #[error("line {line}: invalid character in label")]
    InvalidLabel { line: usize },
}

impl Error {
    /// Creates an invalid label error for the given 1-based line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Error;
    ///
    /// let err = Error::invalid_label(10);
    /// assert_eq!(err.to_string(), "line 10: invalid character in label");
    /// ```
    pub fn invalid_label(line: usize) -> Self {
        Error::InvalidLabel { line }
    }

    /// Returns the line number attached to format errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::InvalidLabel { line } => Some(*line),
            Error::Io(_) => None,
        }
    }

    /// Returns `true` if this error came from the underlying stream.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Configuration options for LTSV readers and writers.
//!
//! This module provides types to customize how records are read and written:
//!
//! - [`LtsvOptions`]: Main configuration struct
//! - [`LineTerminator`]: Choice of record terminator for writers (`\n` or `\r\n`)
//!
//! Readers look at `delimiter` and `comment`. Writers look at `delimiter` and
//! `line_terminator`. Readers accept both terminators whatever is configured here.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ltsv::{from_str_with_options, LtsvOptions};
//!
//! let options = LtsvOptions::new().with_comment('#');
//! let records = from_str_with_options("# header\nhost:example.com\n", options).unwrap();
//! assert_eq!(records.len(), 1);
//! ```

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '\t';

/// Line terminator written after each record.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::LineTerminator;
///
/// assert_eq!(LineTerminator::Lf.as_str(), "\n");
/// assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    /// Returns the string representation of this terminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Configuration options for LTSV reading and writing.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{LineTerminator, LtsvOptions};
///
/// // Tab delimiter, no comments, `\n` terminator
/// let options = LtsvOptions::new();
///
/// // Windows line endings
/// let options = LtsvOptions::crlf();
///
/// // Custom configuration
/// let options = LtsvOptions::new()
///     .with_delimiter('|')
///     .with_comment(';')
///     .with_line_terminator(LineTerminator::CrLf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LtsvOptions {
    pub delimiter: char,
    pub comment: Option<char>,
    pub line_terminator: LineTerminator,
}

impl Default for LtsvOptions {
    fn default() -> Self {
        LtsvOptions {
            delimiter: DEFAULT_DELIMITER,
            comment: None,
            line_terminator: LineTerminator::default(),
        }
    }
}

impl LtsvOptions {
    /// Creates default options (tab delimiter, comments disabled, `\n` terminator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::LtsvOptions;
    ///
    /// let options = LtsvOptions::new();
    /// assert_eq!(options.delimiter, '\t');
    /// assert!(options.comment.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that terminate written records with `\r\n`.
    #[must_use]
    pub fn crlf() -> Self {
        LtsvOptions {
            line_terminator: LineTerminator::CrLf,
            ..Default::default()
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables comment skipping for lines starting with `comment`.
    ///
    /// The comment character is recognized wherever a label could start, which
    /// includes positions right after a delimiter. Passing `'\0'` disables
    /// comments, as does leaving `comment` as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::LtsvOptions;
    ///
    /// let options = LtsvOptions::new().with_comment('#');
    /// assert_eq!(options.comment, Some('#'));
    ///
    /// let options = options.with_comment('\0');
    /// assert_eq!(options.comment, None);
    /// ```
    #[must_use]
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = (comment != '\0').then_some(comment);
        self
    }

    /// Sets the terminator written after each record.
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }
}

//! # serde_ltsv
//!
//! A streaming reader and writer for LTSV (Labeled Tab-Separated Values).
//!
//! ## What is LTSV?
//!
//! LTSV is a line-oriented text format, popular for access logs, where every
//! line is a record made of `label:value` fields separated by tabs:
//!
//! ```text
//! host:127.0.0.1	ident:-	user:frank	status:200	size:2326
//! ```
//!
//! Labels make each field self-describing, so records can gain or lose fields
//! without breaking readers, and a line can be grepped or cut without a schema.
//!
//! ## Key Features
//!
//! - **Streaming**: [`Reader`] pulls one record at a time from any [`std::io::BufRead`]
//! - **Buffered Writes**: [`Writer`] serializes records through a [`std::io::BufWriter`]
//! - **Compatible Parsing**: CRLF input, unterminated last lines, duplicate
//!   labels and colon-less segments are handled the way existing LTSV tools do
//! - **Serde Compatible**: [`Record`] serializes as a plain string map, e.g. to JSON
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_ltsv::{from_str, to_string};
//!
//! let input = "host:127.0.0.1\tident:-\tuser:frank\nstatus:200\tsize:2326\n";
//!
//! let records = from_str(input).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].get("user"), Some("frank"));
//! assert_eq!(records[1].get("status"), Some("200"));
//!
//! // Records keep their field order, so the text round-trips
//! assert_eq!(to_string(&records).unwrap(), input);
//! ```
//!
//! ### Building Records with the ltsv! Macro
//!
//! ```rust
//! use serde_ltsv::{ltsv, to_string};
//!
//! let record = ltsv!({
//!     "method": "GET",
//!     "status": 200
//! });
//!
//! assert_eq!(to_string([&record]).unwrap(), "method:GET\tstatus:200\n");
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use serde_ltsv::{LtsvOptions, Reader};
//!
//! let input = "# generated by nginx\nstatus:200\nstatus:404\n";
//! let mut reader = Reader::with_options(input.as_bytes(), LtsvOptions::new().with_comment('#'));
//!
//! let mut errors = 0;
//! for record in reader.records() {
//!     if record.unwrap().get("status") == Some("404") {
//!         errors += 1;
//!     }
//! }
//! assert_eq!(errors, 1);
//! ```
//!
//! ## Values Are Text
//!
//! The format has no types, quoting or escaping. Every value is handed back
//! exactly as it appeared between the colon and the next delimiter or line break.
//!
//! ## Format Reference
//!
//! See the [`format`](crate::format) module for the parsing rules, including edge cases.

pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{Error, Result};
pub use options::{LineTerminator, LtsvOptions, DEFAULT_DELIMITER};
pub use reader::{Reader, Records};
pub use record::Record;
pub use writer::Writer;

use std::io;

/// Read every record from a string of LTSV text.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::from_str;
///
/// let records = from_str("label:A\tlabel:B\n").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("label"), Some("B"));
/// ```
///
/// # Errors
///
/// Returns an error if a label contains an invalid character.
pub fn from_str(s: &str) -> Result<Vec<Record>> {
    from_str_with_options(s, LtsvOptions::default())
}

/// Read every record from a string of LTSV text with custom options.
///
/// # Errors
///
/// Returns an error if a label contains an invalid character.
pub fn from_str_with_options(s: &str, options: LtsvOptions) -> Result<Vec<Record>> {
    from_slice_with_options(s.as_bytes(), options)
}

/// Read every record from bytes of LTSV text.
///
/// Each byte of an invalid UTF-8 sequence is replaced with U+FFFD.
///
/// # Errors
///
/// Returns an error if a label contains an invalid character.
pub fn from_slice(v: &[u8]) -> Result<Vec<Record>> {
    from_slice_with_options(v, LtsvOptions::default())
}

/// Read every record from bytes of LTSV text with custom options.
///
/// # Errors
///
/// Returns an error if a label contains an invalid character.
pub fn from_slice_with_options(v: &[u8], options: LtsvOptions) -> Result<Vec<Record>> {
    Reader::with_options(v, options).read_all()
}

/// Read every record from an I/O stream of LTSV.
///
/// The stream is wrapped in a [`std::io::BufReader`]; use [`Reader`] directly
/// to process records one at a time.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::from_reader;
/// use std::io::Cursor;
///
/// let records = from_reader(Cursor::new(b"status:200\r\nstatus:500")).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get("status"), Some("500"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or a label contains an invalid character.
pub fn from_reader<R>(reader: R) -> Result<Vec<Record>>
where
    R: io::Read,
{
    Reader::new(io::BufReader::new(reader)).read_all()
}

/// Serialize records to an LTSV string.
///
/// # Errors
///
/// Infallible for in-memory output; the `Result` mirrors [`to_writer`].
pub fn to_string<T, I, K, V>(records: T) -> Result<String>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    to_string_with_options(records, LtsvOptions::default())
}

/// Serialize records to an LTSV string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{to_string_with_options, LtsvOptions};
///
/// let records = vec![vec![("a", "1"), ("b", "2")]];
/// let options = LtsvOptions::crlf().with_delimiter(',');
/// assert_eq!(to_string_with_options(records, options).unwrap(), "a:1,b:2\r\n");
/// ```
///
/// # Errors
///
/// Infallible for in-memory output; the `Result` mirrors [`to_writer`].
pub fn to_string_with_options<T, I, K, V>(records: T, options: LtsvOptions) -> Result<String>
where
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, records, options)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Serialize records to a writer in LTSV format and flush it.
///
/// # Examples
///
/// ```rust
/// use serde_ltsv::{ltsv, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, [ltsv!({ "a": 1 })]).unwrap();
/// assert_eq!(buffer, b"a:1\n");
/// ```
///
/// # Errors
///
/// Returns the first error reported by the writer.
pub fn to_writer<W, T, I, K, V>(writer: W, records: T) -> Result<()>
where
    W: io::Write,
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    to_writer_with_options(writer, records, LtsvOptions::default())
}

/// Serialize records to a writer in LTSV format with custom options.
///
/// # Errors
///
/// Returns the first error reported by the writer.
pub fn to_writer_with_options<W, T, I, K, V>(
    writer: W,
    records: T,
    options: LtsvOptions,
) -> Result<()>
where
    W: io::Write,
    T: IntoIterator<Item = I>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut writer = Writer::with_options(writer, options);
    writer.write_all(records)?;
    writer.into_inner()?;
    Ok(())
}

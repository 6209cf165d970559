//! Buffered LTSV writer.
//!
//! This module provides the [`Writer`] that serializes records as
//! `label:value` pairs joined by the delimiter, one record per line.
//!
//! ## Usage
//!
//! ```rust
//! use serde_ltsv::{Record, Writer};
//!
//! let mut record = Record::new();
//! record.insert("host", "127.0.0.1");
//! record.insert("status", "200");
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_record(&record).unwrap();
//! let bytes = writer.into_inner().unwrap();
//! assert_eq!(bytes, b"host:127.0.0.1\tstatus:200\n");
//! ```
//!
//! Fields are written in the iteration order of whatever is passed in. Use an
//! ordered source such as [`Record`](crate::Record), a `Vec` of pairs or a
//! `BTreeMap` when the output must be deterministic.
//!
//! No escaping takes place: labels and values containing the delimiter, a
//! line break or (for labels) a colon will not read back as written.

use crate::{LtsvOptions, Result};
use std::io::{BufWriter, Write};

/// Writes LTSV records to a byte sink through an internal buffer.
///
/// Output is only guaranteed to reach the sink after [`flush`](Writer::flush),
/// [`write_all`](Writer::write_all) or [`into_inner`](Writer::into_inner).
pub struct Writer<W: Write> {
    inner: BufWriter<W>,
    options: LtsvOptions,
}

impl<W: Write> Writer<W> {
    /// Creates a writer with the default options (tab delimiter, `\n` terminator).
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, LtsvOptions::default())
    }

    pub fn with_options(inner: W, options: LtsvOptions) -> Self {
        Writer {
            inner: BufWriter::new(inner),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &LtsvOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut LtsvOptions {
        &mut self.options
    }

    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Writes a single record followed by the line terminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::{LtsvOptions, Writer};
    ///
    /// let mut writer = Writer::with_options(Vec::new(), LtsvOptions::crlf());
    /// writer.write_record([("status", "200"), ("size", "2326")]).unwrap();
    /// assert_eq!(writer.into_inner().unwrap(), b"status:200\tsize:2326\r\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the underlying sink.
    pub fn write_record<I, K, V>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut delimiter = [0u8; 4];
        let delimiter = self.options.delimiter.encode_utf8(&mut delimiter).as_bytes();

        for (index, (label, value)) in record.into_iter().enumerate() {
            if index > 0 {
                self.inner.write_all(delimiter)?;
            }
            self.inner.write_all(label.as_ref().as_bytes())?;
            self.inner.write_all(b":")?;
            self.inner.write_all(value.as_ref().as_bytes())?;
        }
        self.inner
            .write_all(self.options.line_terminator.as_str().as_bytes())?;
        Ok(())
    }

    /// Pushes buffered output to the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns any error reported while writing or flushing the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Writes every record in `records`, then flushes.
    ///
    /// Writing stops at the first failing record. The flush happens either way,
    /// and the write error takes precedence over a flush error.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn write_all<T, I, K, V>(&mut self, records: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let written = records
            .into_iter()
            .try_for_each(|record| self.write_record(record));
        let flushed = self.flush();
        written.and(flushed)
    }

    /// Flushes and returns the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns the flush error if buffered output could not be written.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| err.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use std::collections::BTreeMap;
    use std::io;

    /// Sink that accepts `budget` bytes, then fails every write.
    struct FailingSink {
        written: Vec<u8>,
        budget: usize,
        flushes: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_empty_record_writes_terminator_only() {
        let mut writer = Writer::new(Vec::new());
        writer.write_record(&Record::new()).unwrap();
        assert_eq!(writer.into_inner().unwrap(), b"\n");
    }

    #[test]
    fn test_custom_delimiter() {
        let mut writer = Writer::with_options(Vec::new(), LtsvOptions::new().with_delimiter('|'));
        let record: BTreeMap<&str, &str> = [("b", "2"), ("a", "1")].into_iter().collect();
        writer.write_record(&record).unwrap();
        assert_eq!(writer.into_inner().unwrap(), b"a:1|b:2\n");
    }

    #[test]
    fn test_multibyte_delimiter() {
        let mut writer = Writer::with_options(Vec::new(), LtsvOptions::new().with_delimiter('｜'));
        writer.write_record([("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(writer.into_inner().unwrap(), "a:1｜b:2\n".as_bytes());
    }

    #[test]
    fn test_buffered_until_flush() {
        let mut writer = Writer::new(Vec::new());
        writer.write_record([("a", "1")]).unwrap();
        assert!(writer.get_ref().is_empty());
        writer.flush().unwrap();
        assert_eq!(writer.get_ref(), b"a:1\n");
    }

    #[test]
    fn test_write_all_stops_at_first_error() {
        let sink = FailingSink {
            written: Vec::new(),
            budget: 4,
            flushes: 0,
        };
        let mut writer = Writer::new(sink);
        // The oversized value forces the buffer out to the sink mid-record.
        let records = vec![
            vec![("a", "1".to_string())],
            vec![("big", "x".repeat(16 * 1024))],
            vec![("c", "3".to_string())],
        ];
        let mut seen = 0;
        let err = writer
            .write_all(records.into_iter().inspect(|_| seen += 1))
            .unwrap_err();
        assert!(err.is_io());
        assert_eq!(seen, 2);
        assert!(writer.get_ref().written.is_empty());
        assert_eq!(writer.get_ref().flushes, 0);
    }

    #[test]
    fn test_flush_reaches_sink() {
        let sink = FailingSink {
            written: Vec::new(),
            budget: 64,
            flushes: 0,
        };
        let mut writer = Writer::new(sink);
        writer.write_record([("a", "1")]).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.get_ref().written, b"a:1\n");
        assert_eq!(writer.get_ref().flushes, 1);
    }

    #[test]
    fn test_write_all_success() {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_all(vec![vec![("a", "1")], vec![("b", "2"), ("c", "")]])
            .unwrap();
        assert_eq!(writer.get_ref(), b"a:1\nb:2\tc:\n");
    }
}

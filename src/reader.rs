//! Streaming LTSV reader.
//!
//! This module provides the [`Reader`] that turns a buffered byte stream into
//! [`Record`]s, one line at a time.
//!
//! ## Overview
//!
//! - **Streaming**: input is decoded one character at a time, nothing is read ahead
//!   beyond what the underlying [`BufRead`] buffers
//! - **Line endings**: `\r\n` and `\n` are both accepted; a lone `\r` is kept as data
//! - **Lenient segments**: text without a colon is discarded instead of failing
//! - **Comments**: optional, see [`LtsvOptions::with_comment`]
//!
//! ## Usage
//!
//! ```rust
//! use serde_ltsv::Reader;
//!
//! let input = "host:127.0.0.1\tident:-\tuser:frank\nstatus:200\tsize:2326\n";
//! let mut reader = Reader::new(input.as_bytes());
//!
//! let first = reader.read_record().unwrap().unwrap();
//! assert_eq!(first.get("user"), Some("frank"));
//!
//! let second = reader.read_record().unwrap().unwrap();
//! assert_eq!(second.get("size"), Some("2326"));
//!
//! // End of stream
//! assert!(reader.read_record().unwrap().is_none());
//! ```

use crate::{Error, LtsvOptions, Record, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead};
use unic_ucd_category::GeneralCategory;

/// Outcome of scanning one label token. The label text itself stays in the
/// reader's scratch buffer.
enum LabelToken {
    Label,
    NoLabel { end_of_line: bool },
    EndOfStream,
}

/// Reads LTSV records from a buffered byte stream.
///
/// A `Reader` keeps scratch buffers between calls and must not be shared
/// between callers without external locking.
pub struct Reader<R> {
    source: CharSource<R>,
    options: LtsvOptions,
    line: usize,
    label: String,
    field: String,
}

impl<R: BufRead> Reader<R> {
    /// Creates a reader with the default options (tab delimiter, no comments).
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, LtsvOptions::default())
    }

    pub fn with_options(inner: R, options: LtsvOptions) -> Self {
        Reader {
            source: CharSource::new(inner),
            options,
            line: 0,
            label: String::with_capacity(32),
            field: String::with_capacity(128),
        }
    }

    #[must_use]
    pub fn options(&self) -> &LtsvOptions {
        &self.options
    }

    /// Gives mutable access to the options. Changes should be made before the
    /// first record is read.
    pub fn options_mut(&mut self) -> &mut LtsvOptions {
        &mut self.options
    }

    /// Number of `read_record` calls made so far.
    ///
    /// This is the value reported by [`Error::InvalidLabel`]. It counts calls,
    /// not physical lines: skipped lines do not advance it.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn get_ref(&self) -> &R {
        &self.source.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source.inner
    }

    /// Unwraps the underlying stream. Characters already decoded for look-ahead
    /// are lost.
    pub fn into_inner(self) -> R {
        self.source.inner
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A final line without a
    /// terminator still produces its record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabel`] when a label contains a control or
    /// non-printable character, and [`Error::Io`] when the stream fails. After
    /// an error the reader's position is unspecified.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        self.line += 1;
        let mut record = Record::new();

        loop {
            if let Some(comment) = self.options.comment {
                if self.source.peek_char()? == Some(comment) {
                    self.skip_line()?;
                    tracing::trace!(line = self.line, "skipped comment");
                    continue;
                }
            }

            match self.parse_label()? {
                LabelToken::Label => {}
                LabelToken::NoLabel { end_of_line: true } => {
                    if !record.is_empty() {
                        return Ok(Some(record));
                    }
                    tracing::trace!(line = self.line, "skipped line without label");
                    continue;
                }
                LabelToken::NoLabel { end_of_line: false } => continue,
                LabelToken::EndOfStream => {
                    return Ok(if record.is_empty() { None } else { Some(record) });
                }
            }

            let end_of_record = self.parse_field()?;
            record.insert(self.label.trim(), self.field.as_str());
            if end_of_record {
                return Ok(Some(record));
            }
        }
    }

    /// Reads every remaining record.
    ///
    /// # Errors
    ///
    /// Stops at the first error; records read before it are discarded.
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        self.records().collect()
    }

    /// Returns a lazy iterator over the remaining records.
    ///
    /// The iterator ends after the stream is exhausted or after yielding the
    /// first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ltsv::Reader;
    ///
    /// let mut reader = Reader::new("a:1\nb:2\n".as_bytes());
    /// let labels: Vec<String> = reader
    ///     .records()
    ///     .map(|record| record.unwrap().labels().collect())
    ///     .collect();
    /// assert_eq!(labels, vec!["a", "b"]);
    /// ```
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }

    fn skip_line(&mut self) -> Result<()> {
        while let Some(ch) = self.source.next_char()? {
            if ch == '\n' {
                break;
            }
        }
        Ok(())
    }

    /// Scans up to a colon, a line break, the delimiter or the end of input.
    fn parse_label(&mut self) -> Result<LabelToken> {
        self.label.clear();
        loop {
            let Some(ch) = self.source.next_char()? else {
                return Ok(LabelToken::EndOfStream);
            };
            match ch {
                ':' => {
                    if self.label.trim().is_empty() {
                        return Ok(LabelToken::NoLabel { end_of_line: false });
                    }
                    return Ok(LabelToken::Label);
                }
                '\n' => return Ok(LabelToken::NoLabel { end_of_line: true }),
                ch if ch == self.options.delimiter => {
                    if !self.label.is_empty() {
                        tracing::trace!(line = self.line, segment = %self.label, "discarded segment without label");
                    }
                    return Ok(LabelToken::NoLabel { end_of_line: false });
                }
                ch if !is_label_char(ch) => {
                    tracing::debug!(line = self.line, character = ?ch, "invalid character in label");
                    return Err(Error::invalid_label(self.line));
                }
                ch => self.label.push(ch),
            }
        }
    }

    /// Scans a value into the field buffer. Returns `true` when the value
    /// also ends the record.
    fn parse_field(&mut self) -> Result<bool> {
        self.field.clear();
        loop {
            match self.source.next_char()? {
                None | Some('\n') => return Ok(true),
                Some(ch) if ch == self.options.delimiter => return Ok(false),
                Some(ch) => self.field.push(ch),
            }
        }
    }
}

/// Iterator returned by [`Reader::records`].
pub struct Records<'r, R> {
    reader: &'r mut Reader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Records<'_, R> {}

/// Labels may hold any printable character and the ASCII space.
fn is_label_char(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    let category = GeneralCategory::of(ch);
    !(category.is_separator()
        || matches!(
            category,
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        ))
}

/// Decodes UTF-8 characters from a `BufRead`, folding `\r\n` into `\n`.
///
/// Each byte that does not start a valid sequence decodes to U+FFFD.
struct CharSource<R> {
    inner: R,
    /// Normalized character returned by `peek_char`.
    peeked: Option<char>,
    /// Raw character read while checking what follows a `\r`.
    pending: Option<char>,
    /// Continuation bytes handed back after a broken sequence.
    replay: VecDeque<u8>,
}

impl<R: BufRead> CharSource<R> {
    fn new(inner: R) -> Self {
        CharSource {
            inner,
            peeked: None,
            pending: None,
            replay: VecDeque::new(),
        }
    }

    fn peek_char(&mut self) -> io::Result<Option<char>> {
        if self.peeked.is_none() {
            self.peeked = self.next_char()?;
        }
        Ok(self.peeked)
    }

    fn next_char(&mut self) -> io::Result<Option<char>> {
        if let Some(ch) = self.peeked.take() {
            return Ok(Some(ch));
        }
        match self.next_raw()? {
            Some('\r') => match self.next_raw()? {
                Some('\n') => Ok(Some('\n')),
                other => {
                    self.pending = other;
                    Ok(Some('\r'))
                }
            },
            other => Ok(other),
        }
    }

    fn next_raw(&mut self) -> io::Result<Option<char>> {
        if let Some(ch) = self.pending.take() {
            return Ok(Some(ch));
        }
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            match self.peek_byte()? {
                Some(b @ 0x80..=0xBF) => {
                    bytes[len] = b;
                    len += 1;
                    self.consume_byte();
                }
                _ => break,
            }
        }
        if let Some(ch) = std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
        {
            return Ok(Some(ch));
        }

        // A broken sequence only consumes its lead byte.
        for &b in bytes[1..len].iter().rev() {
            self.replay.push_front(b);
        }
        Ok(Some(char::REPLACEMENT_CHARACTER))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(&b) = self.replay.front() {
            return Ok(Some(b));
        }
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Drops the byte last returned by `peek_byte`.
    fn consume_byte(&mut self) {
        if self.replay.pop_front().is_none() {
            self.inner.consume(1);
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.consume_byte();
        }
        Ok(byte)
    }
}

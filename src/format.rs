//! LTSV Format Reference
//!
//! This module documents the LTSV (Labeled Tab-Separated Values) format as
//! implemented by this library. It contains no code.
//!
//! # Overview
//!
//! Each line is one record. A record is a sequence of `label:value` fields
//! separated by a delimiter (a tab unless configured otherwise):
//!
//! ```text
//! host:127.0.0.1<TAB>ident:-<TAB>user:frank<TAB>status:200
//! ```
//!
//! ```text
//! record     := field (delimiter field)* line-end
//! field      := label ":" value
//! line-end   := "\n" | "\r\n" | end-of-input
//! comment    := comment-char any* line-end        ; only when enabled
//! ```
//!
//! # Labels
//!
//! - Everything up to the first `:` is the label, so labels never contain a colon
//! - Leading and trailing whitespace is trimmed: ` host :x` has the label `host`
//! - Control characters, format characters and separators other than the ASCII
//!   space are rejected with [`Error::InvalidLabel`](crate::Error::InvalidLabel)
//! - A label that is empty after trimming is ignored, and scanning restarts
//!   right after its colon
//!
//! # Values
//!
//! - Everything after the colon up to the delimiter or the end of the line
//! - Never trimmed, may be empty, may contain further colons:
//!   `time:[10/Oct/2000:13:55:36 -0700]` is one field
//! - No quoting or escaping exists; a value cannot hold the delimiter or a line break
//!
//! # Records
//!
//! - When a label repeats within a line, the last value wins:
//!   `label:A<TAB>label:B` reads as `{label: B}`
//! - Field order carries no meaning; records compare as unordered maps
//! - A final line without a terminator is still a record
//!
//! # Lenient Parsing
//!
//! Text that never reaches a colon is dropped rather than reported:
//!
//! | Input | Result |
//! |-------|--------|
//! | `a:1<TAB>junk<TAB>b:2` | `{a: 1, b: 2}` |
//! | `a:1<TAB>junk` | `{a: 1}` |
//! | `junk` (alone on its line) | no record |
//! | empty line | no record |
//!
//! # Line Endings
//!
//! `\r\n` is read as `\n`. A `\r` that is not followed by `\n` is ordinary data
//! inside a value and invalid inside a label. Writers emit `\n` by default or
//! `\r\n` with [`LineTerminator::CrLf`](crate::LineTerminator::CrLf).
//!
//! # Comments
//!
//! With a comment character configured, the rest of the line is skipped
//! whenever that character appears where a label would start. This includes the
//! position right after a delimiter. The skipped text includes the line break,
//! so a record cut short by a comment continues on the next line:
//!
//! ```text
//! a:1<TAB>#rest of line
//! b:2
//! ```
//!
//! reads as the single record `{a: 1, b: 2}` when `#` is the comment character.

//! Customizing delimiters, comments and line endings.
//!
//! Run with: cargo run --example custom_options

use serde_ltsv::{LineTerminator, LtsvOptions, Reader, Writer};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "; exported by proxy\nhost:a.example|status:200\nhost:b.example|status:503\n";

    let options = LtsvOptions::new().with_delimiter('|').with_comment(';');
    let mut reader = Reader::with_options(input.as_bytes(), options);

    // Re-emit as standard tab-separated LTSV with Windows line endings
    let mut writer = Writer::with_options(
        Vec::new(),
        LtsvOptions::new().with_line_terminator(LineTerminator::CrLf),
    );
    for record in reader.records() {
        writer.write_record(&record?)?;
    }
    let output = writer.into_inner()?;

    println!("{:?}", String::from_utf8(output)?);

    Ok(())
}

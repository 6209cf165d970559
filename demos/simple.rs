//! Basic LTSV reading and writing.
//!
//! Run with: cargo run --example simple

use serde_ltsv::{from_str, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let log = "host:127.0.0.1\tident:-\tuser:frank\tstatus:200\tsize:2326\n\
               host:192.168.0.7\tident:-\tuser:-\tstatus:404\tsize:0\n";

    // Read every record
    let records = from_str(log)?;
    for record in &records {
        println!(
            "{} -> {}",
            record.get("host").unwrap_or("?"),
            record.get("status").unwrap_or("?")
        );
    }

    // Write them back out
    let text = to_string(&records)?;
    assert_eq!(text, log);
    println!("✓ Round-trip successful");

    Ok(())
}

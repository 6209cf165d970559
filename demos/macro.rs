//! Building records with the ltsv! macro.
//!
//! Run with: cargo run --example macro

use serde_ltsv::{ltsv, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let user = "frank";
    let records = vec![
        ltsv!({
            "host": "127.0.0.1",
            "user": user,
            "status": 200,
            "size": 2326,
        }),
        ltsv!({ "host": "127.0.0.1", "user": user, "status": 304 }),
    ];

    print!("{}", to_string(&records)?);

    Ok(())
}

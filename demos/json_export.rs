//! Converting LTSV records to JSON lines.
//!
//! Run with: cargo run --example json_export

use serde_ltsv::Reader;
use std::error::Error;
use std::io::Cursor;

fn main() -> Result<(), Box<dyn Error>> {
    let input = Cursor::new(
        "time:[10/Oct/2000:13:55:36 -0700]\treq:GET /apache_pb.gif HTTP/1.0\tstatus:200\n\
         time:[10/Oct/2000:13:55:37 -0700]\treq:GET /favicon.ico HTTP/1.0\tstatus:404\n",
    );

    let mut reader = Reader::new(input);
    while let Some(record) = reader.read_record()? {
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}

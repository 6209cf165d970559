//! Property-based tests for the write/read round-trip and for reader robustness.

use proptest::prelude::*;
use serde_ltsv::{
    from_slice, from_str_with_options, to_string_with_options, Error, LineTerminator,
    LtsvOptions, Record,
};

fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.\\-]{1,16}"
}

fn record_with(value: &'static str) -> impl Strategy<Value = Record> {
    prop::collection::vec((label(), value), 1..8)
        .prop_map(|fields| fields.into_iter().collect::<Record>())
}

fn roundtrip(records: &[Record], options: LtsvOptions) -> bool {
    match to_string_with_options(records, options.clone()) {
        Ok(text) => match from_str_with_options(&text, options) {
            Ok(back) => back == records,
            Err(e) => {
                eprintln!("Read failed: {}", e);
                eprintln!("Written was: {:?}", text);
                false
            }
        },
        Err(e) => {
            eprintln!("Write failed: {}", e);
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_tab(records in prop::collection::vec(record_with("[^\t\n\r]{0,20}"), 0..10)) {
        prop_assert!(roundtrip(&records, LtsvOptions::new()));
    }

    #[test]
    fn prop_roundtrip_crlf(records in prop::collection::vec(record_with("[^\t\n\r]{0,20}"), 0..10)) {
        prop_assert!(roundtrip(&records, LtsvOptions::new().with_line_terminator(LineTerminator::CrLf)));
    }

    #[test]
    fn prop_roundtrip_custom_delimiter(records in prop::collection::vec(record_with("[^,\n\r]{0,20}"), 0..10)) {
        prop_assert!(roundtrip(&records, LtsvOptions::new().with_delimiter(',')));
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        match from_slice(&bytes) {
            Ok(records) => prop_assert!(records.iter().all(|r| !r.is_empty())),
            Err(err) => {
                let invalid_label = matches!(err, Error::InvalidLabel { .. });
                prop_assert!(invalid_label, "unexpected error: {:?}", err);
            }
        }
    }
}

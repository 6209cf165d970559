use serde_ltsv::{ltsv, to_string, Record};

#[test]
fn test_ltsv_macro_empty() {
    let record = ltsv!({});
    assert!(record.is_empty());
    assert_eq!(record, Record::new());
}

#[test]
fn test_ltsv_macro_strings() {
    let record = ltsv!({ "host": "127.0.0.1", "ident": "-" });
    assert_eq!(record.get("host"), Some("127.0.0.1"));
    assert_eq!(record.get("ident"), Some("-"));
}

#[test]
fn test_ltsv_macro_display_values() {
    let size = 2326_u64;
    let record = ltsv!({
        "status": 200,
        "size": size,
        "ratio": 0.25,
        "cached": false,
    });
    assert_eq!(record.get("status"), Some("200"));
    assert_eq!(record.get("size"), Some("2326"));
    assert_eq!(record.get("ratio"), Some("0.25"));
    assert_eq!(record.get("cached"), Some("false"));
}

#[test]
fn test_ltsv_macro_keeps_order() {
    let record = ltsv!({ "z": 1, "a": 2 });
    assert_eq!(to_string([&record]).unwrap(), "z:1\ta:2\n");
}

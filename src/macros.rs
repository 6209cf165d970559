/// Builds a [`Record`](crate::Record) from `label: value` pairs.
///
/// Values are converted with [`ToString`], so numbers and other displayable
/// types can be used directly.
///
/// ```rust
/// use serde_ltsv::ltsv;
///
/// let record = ltsv!({
///     "host": "127.0.0.1",
///     "status": 200,
/// });
/// assert_eq!(record.get("status"), Some("200"));
/// ```
#[macro_export]
macro_rules! ltsv {
    // Handle empty record
    ({}) => {
        $crate::Record::new()
    };

    ({ $($label:literal : $value:expr),* $(,)? }) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(
                ::std::string::ToString::to_string(&$label),
                ::std::string::ToString::to_string(&$value),
            );
        )*
        record
    }};
}

#[cfg(test)]
mod tests {
    use crate::Record;

    #[test]
    fn test_ltsv_macro_empty() {
        assert_eq!(ltsv!({}), Record::new());
    }

    #[test]
    fn test_ltsv_macro_fields() {
        let status = 404;
        let record = ltsv!({
            "host": "127.0.0.1",
            "status": status,
            "size": 0.5
        });
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("host"), Some("127.0.0.1"));
        assert_eq!(record.get("status"), Some("404"));
        assert_eq!(record.get("size"), Some("0.5"));
    }

    #[test]
    fn test_ltsv_macro_duplicate_label() {
        let record = ltsv!({ "label": "A", "label": "B" });
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("label"), Some("B"));
    }
}

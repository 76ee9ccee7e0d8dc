//! BLOB containment predicate.
//!
//! Oracle has no `LIKE` over binary large objects; containment checks go
//! through `dbms_lob.instr` instead, with the search pattern cast to `RAW`.

/// Returns a boolean where-clause fragment testing whether the BLOB in
/// `column` contains a byte pattern.
///
/// The fragment carries exactly one `?` placeholder for the pattern; the
/// caller's query formatter rewrites it into the dialect's bind syntax and
/// supplies the parameter.
#[must_use]
pub fn blob_contains(column: &str) -> String {
    format!("dbms_lob.instr({column}, utl_raw.cast_to_raw(?), 1, 1) > 0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_contains_fragment() {
        assert_eq!(
            blob_contains("payload"),
            "dbms_lob.instr(payload, utl_raw.cast_to_raw(?), 1, 1) > 0"
        );
    }

    #[test]
    fn test_blob_contains_single_placeholder() {
        let fragment = blob_contains("payload");
        assert_eq!(fragment.matches('?').count(), 1);
    }
}

//! Oracle reserved words.
//!
//! Identifiers that collide with a reserved word must be double-quoted in
//! generated SQL; everything else is passed through unquoted so it follows
//! the database's default upper-case folding.

/// Oracle's reserved keywords, sorted for binary search.
///
/// This is the fixed reserved set (`V$RESERVED_WORDS` with `RESERVED = 'Y'`),
/// not the much larger keyword list; only these can never be used as an
/// unquoted identifier.
static RESERVED_WORDS: &[&str] = &[
    "ACCESS",
    "ADD",
    "ALL",
    "ALTER",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "AUDIT",
    "BETWEEN",
    "BY",
    "CHAR",
    "CHECK",
    "CLUSTER",
    "COLUMN",
    "COMMENT",
    "COMPRESS",
    "CONNECT",
    "CREATE",
    "CURRENT",
    "DATE",
    "DECIMAL",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "EXCLUSIVE",
    "EXISTS",
    "FILE",
    "FLOAT",
    "FOR",
    "FROM",
    "GRANT",
    "GROUP",
    "HAVING",
    "IDENTIFIED",
    "IMMEDIATE",
    "IN",
    "INCREMENT",
    "INDEX",
    "INITIAL",
    "INSERT",
    "INTEGER",
    "INTERSECT",
    "INTO",
    "IS",
    "LEVEL",
    "LIKE",
    "LOCK",
    "LONG",
    "MAXEXTENTS",
    "MINUS",
    "MLSLABEL",
    "MODE",
    "MODIFY",
    "NOAUDIT",
    "NOCOMPRESS",
    "NOT",
    "NOWAIT",
    "NULL",
    "NUMBER",
    "OF",
    "OFFLINE",
    "ON",
    "ONLINE",
    "OPTION",
    "OR",
    "ORDER",
    "PCTFREE",
    "PRIOR",
    "PUBLIC",
    "RAW",
    "RENAME",
    "RESOURCE",
    "REVOKE",
    "ROW",
    "ROWID",
    "ROWNUM",
    "ROWS",
    "SELECT",
    "SESSION",
    "SET",
    "SHARE",
    "SIZE",
    "SMALLINT",
    "START",
    "SUCCESSFUL",
    "SYNONYM",
    "SYSDATE",
    "TABLE",
    "THEN",
    "TO",
    "TRIGGER",
    "UID",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USER",
    "VALIDATE",
    "VALUES",
    "VARCHAR",
    "VARCHAR2",
    "VIEW",
    "WHENEVER",
    "WHERE",
    "WITH",
];

/// Returns whether `identifier` collides with a reserved word.
///
/// Matching is case-insensitive: unquoted identifiers fold to upper case on
/// the server, so `user` and `USER` collide equally.
#[must_use]
pub fn is_reserved(identifier: &str) -> bool {
    let upper = identifier.to_ascii_uppercase();
    RESERVED_WORDS.binary_search(&upper.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_sorted() {
        // binary_search relies on this
        assert!(RESERVED_WORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_reserved_word_matches() {
        for word in RESERVED_WORDS {
            assert!(is_reserved(word), "{word} should be reserved");
            assert!(
                is_reserved(&word.to_ascii_lowercase()),
                "{word} should be reserved regardless of case"
            );
        }
    }

    #[test]
    fn test_non_reserved_words() {
        for word in ["id", "username", "created_at", "users", "order_id"] {
            assert!(!is_reserved(word), "{word} should not be reserved");
        }
    }
}

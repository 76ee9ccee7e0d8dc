//! # oxide-oracle
//!
//! Oracle dialect for the oxide ORM runtime, implementing the
//! [`oxide_dialect::Dialect`] contract.
//!
//! # How Oracle differs from other dialects
//!
//! - **Pagination**: no `LIMIT`/`OFFSET`; row limiting uses
//!   `OFFSET n ROWS FETCH NEXT n ROWS ONLY` (since 12c). See
//!   [row limiting clause].
//! - **Bind variables**: positional `:1`, `:2`, ... rather than `?` or
//!   `$1`.
//! - **`FROM DUAL`**: `SELECT` requires a source table, so expression
//!   selects go through the `DUAL` dummy table.
//! - **Identifier folding**: unquoted identifiers fold to upper case;
//!   only identifiers colliding with the reserved set are quoted, and the
//!   data dictionary is matched upper-case.
//! - **No native boolean**: booleans are stored in an `INTEGER` column.
//! - **Generated keys**: inserts report generated keys through
//!   `RETURNING ... INTO` out binds, not a follow-up query. See
//!   [RETURNING INTO].
//! - **Identity columns**: auto-increment maps to
//!   `NUMBER GENERATED BY DEFAULT AS IDENTITY` (since 12c), not a
//!   keyword like `AUTOINCREMENT`.
//! - **`DEFAULT` ordering**: column DDL requires `DEFAULT` before
//!   `NOT NULL`/`UNIQUE`, unlike the ANSI-flavored order most dialects
//!   accept.
//! - **BLOB search**: no `LIKE` on BLOBs; containment goes through
//!   `dbms_lob.instr` over a `RAW`-cast pattern (see
//!   [`blob_contains`]).
//!
//! [row limiting clause]: https://docs.oracle.com/en/database/oracle/oracle-database/19/sqlrf/SELECT.html#GUID-CFA006CA-6FF1-4972-821E-6996142A51C6
//! [RETURNING INTO]: https://docs.oracle.com/en/database/oracle/oracle-database/19/lnpls/RETURNING-INTO-clause.html
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use oxide_dialect::DialectRegistry;
//! use oxide_oracle::OracleDialect;
//!
//! // `handle` implements oxide_dialect::DbHandle over the application's
//! // Oracle connection.
//! let dialect = OracleDialect::new(handle);
//! let mut registry = DialectRegistry::new();
//! registry.register(Arc::new(dialect));
//! ```

mod blob;
mod dialect;
mod reserved;
mod types;

pub use blob::blob_contains;
pub use dialect::{OracleDialect, DIALECT_NAME};
pub use reserved::is_reserved;
pub use types::oracle_type_of;

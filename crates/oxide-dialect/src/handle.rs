//! Database handle abstraction.
//!
//! Dialects never talk to a driver directly; they go through [`DbHandle`],
//! the scalar-row query and statement-execution surface the embedding
//! application implements over its connection (for Oracle, typically a
//! wrapper around a client-library connection). Implementations are expected
//! to be safe to share between threads; the dialect layer itself holds no
//! locks and performs no buffering.

use std::sync::Arc;

use crate::value::SqlValue;

/// Errors surfaced by a database handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    /// A scalar query produced no rows.
    #[error("query returned no rows")]
    NoRows,

    /// The underlying driver reported an error.
    #[error("driver error: {0}")]
    Driver(String),
}

/// Destination type of a `RETURNING ... INTO` out-bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutBind {
    /// 32-bit integer destination.
    Int,
    /// String destination.
    Text,
}

/// Result of executing a statement with an out-bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecReturn {
    /// Number of rows affected by the statement.
    pub rows_affected: u64,
    /// Value written into the out-bound parameter.
    pub value: SqlValue,
}

/// Scalar-row query and statement-execution primitives.
pub trait DbHandle: Send + Sync {
    /// Runs a query expected to produce a single scalar value.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or produces no rows.
    fn query_scalar(&self, sql: &str, params: &[SqlValue]) -> Result<SqlValue, HandleError>;

    /// Executes a statement, returning the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns an error if statement execution fails.
    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, HandleError>;

    /// Executes a statement carrying one trailing out-bound parameter.
    ///
    /// The out parameter is bound after `params`, at position
    /// `params.len() + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if statement execution fails.
    fn execute_returning(
        &self,
        sql: &str,
        params: &[SqlValue],
        out: OutBind,
    ) -> Result<ExecReturn, HandleError>;
}

impl<H: DbHandle + ?Sized> DbHandle for &H {
    fn query_scalar(&self, sql: &str, params: &[SqlValue]) -> Result<SqlValue, HandleError> {
        (**self).query_scalar(sql, params)
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, HandleError> {
        (**self).execute(sql, params)
    }

    fn execute_returning(
        &self,
        sql: &str,
        params: &[SqlValue],
        out: OutBind,
    ) -> Result<ExecReturn, HandleError> {
        (**self).execute_returning(sql, params, out)
    }
}

impl<H: DbHandle + ?Sized> DbHandle for Arc<H> {
    fn query_scalar(&self, sql: &str, params: &[SqlValue]) -> Result<SqlValue, HandleError> {
        (**self).query_scalar(sql, params)
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, HandleError> {
        (**self).execute(sql, params)
    }

    fn execute_returning(
        &self,
        sql: &str,
        params: &[SqlValue],
        out: OutBind,
    ) -> Result<ExecReturn, HandleError> {
        (**self).execute_returning(sql, params, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHandle(SqlValue);

    impl DbHandle for FixedHandle {
        fn query_scalar(&self, _sql: &str, _params: &[SqlValue]) -> Result<SqlValue, HandleError> {
            Ok(self.0.clone())
        }

        fn execute(&self, _sql: &str, _params: &[SqlValue]) -> Result<u64, HandleError> {
            Ok(1)
        }

        fn execute_returning(
            &self,
            _sql: &str,
            _params: &[SqlValue],
            _out: OutBind,
        ) -> Result<ExecReturn, HandleError> {
            Ok(ExecReturn {
                rows_affected: 1,
                value: self.0.clone(),
            })
        }
    }

    #[test]
    fn test_shared_handle_impls() {
        let handle = Arc::new(FixedHandle(SqlValue::Int(3)));

        // Arc<H> and &H both satisfy the trait, so a dialect can hold either.
        assert_eq!(
            Arc::clone(&handle).query_scalar("SELECT 3 FROM DUAL", &[]),
            Ok(SqlValue::Int(3))
        );
        let borrowed: &FixedHandle = &handle;
        assert_eq!(borrowed.execute("DELETE FROM t", &[]), Ok(1));
    }

    #[test]
    fn test_handle_error_display() {
        assert_eq!(
            HandleError::Driver(String::from("ORA-00942: table or view does not exist"))
                .to_string(),
            "driver error: ORA-00942: table or view does not exist"
        );
        assert_eq!(HandleError::NoRows.to_string(), "query returned no rows");
    }
}

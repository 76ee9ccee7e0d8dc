//! Query scope for insert operations.
//!
//! An [`InsertScope`] carries the in-progress insert from the ORM runtime to
//! the dialect: the accumulated SQL text, the bound parameters, and the
//! primary-key field the statement should report back. Because the
//! insert-with-returning capability has no error return in its contract,
//! the scope also carries the shared error accumulator failures land in.

use crate::error::DialectError;
use crate::field::FieldDescriptor;
use crate::value::SqlValue;

/// The state of an insert operation as it passes through the dialect.
#[derive(Debug, Clone)]
pub struct InsertScope {
    /// Accumulated SQL text.
    pub sql: String,
    /// Bound parameters, in bind order.
    pub params: Vec<SqlValue>,
    /// The primary-key field of the model being inserted.
    pub primary_field: FieldDescriptor,
    /// Primary-key value reported by the database, once the insert ran.
    pub primary_value: Option<SqlValue>,
    /// Rows affected by the executed statement.
    pub rows_affected: u64,
    errors: Vec<DialectError>,
}

impl InsertScope {
    /// Creates a scope for an insert statement.
    #[must_use]
    pub fn new(sql: impl Into<String>, primary_field: FieldDescriptor) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            primary_field,
            primary_value: None,
            rows_affected: 0,
            errors: Vec::new(),
        }
    }

    /// Adds a bound parameter.
    #[must_use]
    pub fn param(mut self, value: SqlValue) -> Self {
        self.params.push(value);
        self
    }

    /// Records a failure in the scope's error accumulator.
    pub fn record_error(&mut self, error: DialectError) {
        self.errors.push(error);
    }

    /// Returns whether any failure has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the recorded failures, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[DialectError] {
        &self.errors
    }

    /// Returns the most recently recorded failure.
    #[must_use]
    pub fn last_error(&self) -> Option<&DialectError> {
        self.errors.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::handle::HandleError;

    #[test]
    fn test_scope_builder() {
        let scope = InsertScope::new(
            "INSERT INTO users (name) VALUES (:1)",
            FieldDescriptor::new("id", FieldKind::Integer).primary_key(),
        )
        .param(SqlValue::Text(String::from("alice")));

        assert_eq!(scope.params.len(), 1);
        assert_eq!(scope.primary_field.name, "id");
        assert_eq!(scope.primary_value, None);
        assert_eq!(scope.rows_affected, 0);
        assert!(!scope.has_errors());
    }

    #[test]
    fn test_error_accumulator_keeps_order() {
        let mut scope = InsertScope::new(
            "INSERT INTO users (name) VALUES (:1)",
            FieldDescriptor::new("id", FieldKind::Integer).primary_key(),
        );

        scope.record_error(DialectError::Handle(HandleError::NoRows));
        scope.record_error(DialectError::Handle(HandleError::Driver(String::from(
            "ORA-01400",
        ))));

        assert!(scope.has_errors());
        assert_eq!(scope.errors().len(), 2);
        assert_eq!(
            scope.last_error(),
            Some(&DialectError::Handle(HandleError::Driver(String::from(
                "ORA-01400"
            ))))
        );
    }
}

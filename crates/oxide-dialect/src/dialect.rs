//! The dialect capability contract.
//!
//! The ORM runtime drives schema migration, query building, and row
//! insertion through this trait. Defaults cover ANSI-flavored behavior;
//! database-specific crates override what their target does differently.

use crate::error::Result;
use crate::field::FieldDescriptor;
use crate::scope::InsertScope;

/// Trait for database-specific SQL behavior.
///
/// Object-safe so registries and runtimes can hold `dyn Dialect`.
pub trait Dialect: Send + Sync {
    /// Returns the dialect name used for registry lookup.
    fn name(&self) -> &'static str;

    /// Returns the placeholder for the bind variable at `position`
    /// (1-indexed).
    fn bind_var(&self, position: usize) -> String {
        let _ = position;
        String::from("?")
    }

    /// Quotes an identifier when the dialect requires it, otherwise returns
    /// it unchanged.
    fn quote(&self, identifier: &str) -> String {
        String::from(identifier)
    }

    /// Returns the syntax for an insert with no explicit values.
    fn default_values_clause(&self) -> &'static str {
        "DEFAULT VALUES"
    }

    /// Returns the source clause for databases that forbid `SELECT` without
    /// a `FROM`. Empty when no dummy table is needed.
    fn select_from_dummy(&self) -> &'static str {
        ""
    }

    /// Returns whether the dialect supports a RETURNING-style clause on
    /// insert.
    fn supports_returning(&self) -> bool {
        false
    }

    /// Returns the SQL column type for a field.
    ///
    /// Takes the descriptor mutably: settings that only steer type mapping
    /// (such as the `RESTRICT` marker) are consumed here so they do not leak
    /// into later clause generation.
    fn data_type_of(&self, field: &mut FieldDescriptor) -> String;

    /// Produces the trailing pagination fragment for an optional limit and
    /// offset, both supplied in their tag/string form.
    ///
    /// # Errors
    ///
    /// Returns an error when a present value does not parse as a
    /// non-negative integer.
    fn limit_offset_sql(&self, limit: Option<&str>, offset: Option<&str>) -> Result<String>;

    /// Returns the current database/session identifier, or an empty string
    /// when the lookup fails (the contract has no error channel here).
    fn current_database(&self) -> String;

    /// Returns whether a table exists. Lookup failures read as `false`.
    fn has_table(&self, table_name: &str) -> bool;

    /// Returns whether a column exists on a table. Lookup failures read as
    /// `false`.
    fn has_column(&self, table_name: &str, column_name: &str) -> bool;

    /// Returns whether an index exists on a table. Lookup failures read as
    /// `false`.
    fn has_index(&self, table_name: &str, index_name: &str) -> bool;

    /// Returns whether a foreign-key constraint exists on a table. Lookup
    /// failures read as `false`.
    fn has_foreign_key(&self, table_name: &str, constraint_name: &str) -> bool;

    /// Changes a column's type.
    ///
    /// # Errors
    ///
    /// Returns an error when statement execution fails.
    fn modify_column(&self, table_name: &str, column_name: &str, sql_type: &str) -> Result<()>;

    /// Drops an index.
    ///
    /// # Errors
    ///
    /// Returns an error when statement execution fails.
    fn remove_index(&self, table_name: &str, index_name: &str) -> Result<()>;

    /// Appends a RETURNING clause to the scope's insert, executes it, and
    /// writes the generated primary-key value back into the scope.
    ///
    /// Failures are recorded in the scope's error accumulator; the contract
    /// provides no direct error return.
    fn insert_with_returning(&self, scope: &mut InsertScope);

    /// Returns the index and column names to use when comparing schema
    /// state. The default keeps both unchanged.
    fn normalize_index_and_column(&self, index_name: &str, column_name: &str) -> (String, String) {
        (String::from(index_name), String::from(column_name))
    }
}

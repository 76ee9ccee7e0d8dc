//! Oracle dialect implementation.

use oxide_dialect::{
    DbHandle, Dialect, DialectError, FieldDescriptor, FieldKind, InsertScope, OutBind, Result,
    SqlValue,
};
use tracing::{debug, warn};

use crate::reserved::is_reserved;
use crate::types::oracle_type_of;

/// Name under which this dialect registers.
pub const DIALECT_NAME: &str = "oracle";

/// The runtime encodes "limit without offset" as an offset of -1.
const NO_OFFSET_SENTINEL: &str = "-1";

const CURRENT_DATABASE_SQL: &str =
    "SELECT ORA_DATABASE_NAME as \"Current Database\" FROM DUAL";
const TABLE_EXISTS_SQL: &str = "select count(*) from user_tables where table_name = :1";
const COLUMN_EXISTS_SQL: &str =
    "SELECT count(*) FROM ALL_TAB_COLUMNS WHERE TABLE_NAME = :1 AND COLUMN_NAME = :2";
const INDEX_EXISTS_SQL: &str =
    "SELECT count(*) FROM ALL_INDEXES WHERE INDEX_NAME = :1 AND TABLE_NAME = :2";
const FOREIGN_KEY_EXISTS_SQL: &str = "SELECT count(*) FROM USER_CONSTRAINTS \
     WHERE CONSTRAINT_NAME = :1 AND constraint_type = 'R' AND table_name = :2";

/// Oracle dialect.
///
/// Holds the database handle it introspects through; everything else is
/// stateless string building. Construct one explicitly and register it with
/// the application's `DialectRegistry`.
#[derive(Debug, Clone)]
pub struct OracleDialect<H> {
    handle: H,
}

impl<H: DbHandle> OracleDialect<H> {
    /// Creates a dialect over the given database handle.
    #[must_use]
    pub const fn new(handle: H) -> Self {
        Self { handle }
    }

    /// Splits an optionally qualified `schema.table` name.
    ///
    /// Unqualified names resolve against the current database.
    fn current_database_and_table(&self, table_name: &str) -> (String, String) {
        if let Some((schema, table)) = table_name.split_once('.') {
            return (String::from(schema), String::from(table));
        }
        (self.current_database(), String::from(table_name))
    }

    /// Runs a count query against the data dictionary.
    ///
    /// Failures read as "absent": the introspection contract has no error
    /// channel, so the query error is logged and swallowed.
    fn dictionary_count_exceeds_zero(&self, sql: &str, params: &[SqlValue]) -> bool {
        debug!(sql = %sql, "dictionary lookup");
        match self.handle.query_scalar(sql, params) {
            Ok(value) => value.as_i64().is_some_and(|count| count > 0),
            Err(error) => {
                warn!(%error, sql = %sql, "dictionary lookup failed, treating as absent");
                false
            }
        }
    }
}

impl<H: DbHandle> Dialect for OracleDialect<H> {
    fn name(&self) -> &'static str {
        DIALECT_NAME
    }

    fn bind_var(&self, position: usize) -> String {
        format!(":{position}")
    }

    fn quote(&self, identifier: &str) -> String {
        if is_reserved(identifier) {
            format!("\"{identifier}\"")
        } else {
            String::from(identifier)
        }
    }

    fn default_values_clause(&self) -> &'static str {
        "VALUES (DEFAULT)"
    }

    fn select_from_dummy(&self) -> &'static str {
        "FROM DUAL"
    }

    fn supports_returning(&self) -> bool {
        true
    }

    fn data_type_of(&self, field: &mut FieldDescriptor) -> String {
        oracle_type_of(field)
    }

    fn limit_offset_sql(&self, limit: Option<&str>, offset: Option<&str>) -> Result<String> {
        let Some(limit) = limit else {
            return Ok(String::new());
        };
        let parsed_limit = parse_non_negative(limit)
            .ok_or_else(|| DialectError::InvalidLimit {
                value: String::from(limit),
            })?;

        let mut sql = String::new();
        if let Some(offset) = offset {
            if offset.trim() != NO_OFFSET_SENTINEL {
                let parsed_offset =
                    parse_non_negative(offset).ok_or_else(|| DialectError::InvalidOffset {
                        value: String::from(offset),
                    })?;
                sql.push_str(&format!(" OFFSET {parsed_offset} ROWS "));
            }
        }
        sql.push_str(&format!(" FETCH NEXT {parsed_limit} ROWS ONLY"));
        Ok(sql)
    }

    fn current_database(&self) -> String {
        match self.handle.query_scalar(CURRENT_DATABASE_SQL, &[]) {
            Ok(value) => value.as_text().map(String::from).unwrap_or_default(),
            Err(error) => {
                warn!(%error, "current database lookup failed");
                String::new()
            }
        }
    }

    fn has_table(&self, table_name: &str) -> bool {
        let (_, table) = self.current_database_and_table(table_name);
        let table = table.to_uppercase();
        self.dictionary_count_exceeds_zero(TABLE_EXISTS_SQL, &[SqlValue::Text(table)])
    }

    fn has_column(&self, table_name: &str, column_name: &str) -> bool {
        let (_, table) = self.current_database_and_table(table_name);
        let table = table.to_uppercase();
        let column = column_name.to_uppercase();
        self.dictionary_count_exceeds_zero(
            COLUMN_EXISTS_SQL,
            &[SqlValue::Text(table), SqlValue::Text(column)],
        )
    }

    fn has_index(&self, table_name: &str, index_name: &str) -> bool {
        let table = table_name.to_uppercase();
        let index = index_name.to_uppercase();
        self.dictionary_count_exceeds_zero(
            INDEX_EXISTS_SQL,
            &[SqlValue::Text(index), SqlValue::Text(table)],
        )
    }

    fn has_foreign_key(&self, table_name: &str, constraint_name: &str) -> bool {
        let table = table_name.to_uppercase();
        let constraint = constraint_name.to_uppercase();
        self.dictionary_count_exceeds_zero(
            FOREIGN_KEY_EXISTS_SQL,
            &[SqlValue::Text(constraint), SqlValue::Text(table)],
        )
    }

    fn modify_column(&self, table_name: &str, column_name: &str, sql_type: &str) -> Result<()> {
        let sql = format!("ALTER TABLE {table_name} MODIFY {column_name} {sql_type}");
        debug!(sql = %sql, "modifying column");
        self.handle.execute(&sql, &[])?;
        Ok(())
    }

    fn remove_index(&self, _table_name: &str, index_name: &str) -> Result<()> {
        let sql = format!("DROP INDEX {index_name}");
        debug!(sql = %sql, "dropping index");
        self.handle.execute(&sql, &[])?;
        Ok(())
    }

    fn insert_with_returning(&self, scope: &mut InsertScope) {
        let out = if scope.primary_field.kind == FieldKind::Text {
            OutBind::Text
        } else {
            OutBind::Int
        };
        let column = self.quote(&scope.primary_field.name);
        // The out parameter binds after the insert's own parameters.
        let position = scope.params.len() + 1;
        scope.sql = format!("{} returning {} into :{}", scope.sql, column, position);

        debug!(sql = %scope.sql, "insert with returning");
        match self.handle.execute_returning(&scope.sql, &scope.params, out) {
            Ok(result) => {
                scope.rows_affected = result.rows_affected;
                scope.primary_value = Some(result.value);
            }
            Err(error) => {
                warn!(%error, "insert with returning failed");
                scope.record_error(error.into());
            }
        }
    }
}

fn parse_non_negative(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|n| *n >= 0)
}

//! Dialect registry.
//!
//! The owning application constructs its dialects and registers them here
//! explicitly. There is no process-global registry and no load-time
//! registration side effect; whoever builds the runtime owns the registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dialect::Dialect;

/// A name-keyed collection of registered dialects.
#[derive(Default, Clone)]
pub struct DialectRegistry {
    dialects: BTreeMap<&'static str, Arc<dyn Dialect>>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a dialect under its own name, replacing any previous
    /// registration with that name.
    pub fn register(&mut self, dialect: Arc<dyn Dialect>) {
        self.dialects.insert(dialect.name(), dialect);
    }

    /// Looks up a dialect by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).map(Arc::clone)
    }

    /// Returns the registered dialect names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dialects.keys().copied()
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::field::FieldDescriptor;
    use crate::scope::InsertScope;

    struct NamedDialect(&'static str);

    impl Dialect for NamedDialect {
        fn name(&self) -> &'static str {
            self.0
        }

        fn data_type_of(&self, _field: &mut FieldDescriptor) -> String {
            String::from("INTEGER")
        }

        fn limit_offset_sql(&self, _limit: Option<&str>, _offset: Option<&str>) -> Result<String> {
            Ok(String::new())
        }

        fn current_database(&self) -> String {
            String::new()
        }

        fn has_table(&self, _table_name: &str) -> bool {
            false
        }

        fn has_column(&self, _table_name: &str, _column_name: &str) -> bool {
            false
        }

        fn has_index(&self, _table_name: &str, _index_name: &str) -> bool {
            false
        }

        fn has_foreign_key(&self, _table_name: &str, _constraint_name: &str) -> bool {
            false
        }

        fn modify_column(
            &self,
            _table_name: &str,
            _column_name: &str,
            _sql_type: &str,
        ) -> Result<()> {
            Ok(())
        }

        fn remove_index(&self, _table_name: &str, _index_name: &str) -> Result<()> {
            Ok(())
        }

        fn insert_with_returning(&self, _scope: &mut InsertScope) {}
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = DialectRegistry::new();
        registry.register(Arc::new(NamedDialect("oracle")));
        registry.register(Arc::new(NamedDialect("sqlite")));

        assert!(registry.get("oracle").is_some());
        assert!(registry.get("postgres").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["oracle", "sqlite"]);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = DialectRegistry::new();
        registry.register(Arc::new(NamedDialect("oracle")));
        registry.register(Arc::new(NamedDialect("oracle")));

        assert_eq!(registry.names().count(), 1);
    }
}

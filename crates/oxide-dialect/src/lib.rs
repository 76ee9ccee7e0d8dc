//! # oxide-dialect
//!
//! The dialect contract the oxide ORM runtime programs against.
//!
//! A dialect translates the runtime's abstract schema and query operations
//! into one database's SQL: column types for field descriptors, bind
//! variable syntax, identifier quoting, pagination fragments, data
//! dictionary introspection, and insert-with-returning. This crate defines
//! the seam; database crates (e.g. `oxide-oracle`) implement it.
//!
//! # Architecture
//!
//! - **[`Dialect`]** - the capability trait, one method per capability,
//!   with ANSI-flavored defaults
//! - **[`FieldDescriptor`]** - per-field metadata the runtime hands to
//!   [`Dialect::data_type_of`]
//! - **[`DbHandle`]** - the scalar-query/execute surface a dialect uses for
//!   introspection and returning-style inserts
//! - **[`InsertScope`]** - the in-progress insert, including the error
//!   accumulator for capabilities without an error return
//! - **[`DialectRegistry`]** - explicit, application-owned registration
//!
//! # Example
//!
//! ```rust
//! use oxide_dialect::{FieldDescriptor, FieldKind};
//!
//! let field = FieldDescriptor::new("id", FieldKind::BigInt).primary_key();
//! assert!(field.can_auto_increment());
//! ```

pub mod dialect;
pub mod error;
pub mod field;
pub mod handle;
pub mod registry;
pub mod scope;
pub mod value;

pub use dialect::Dialect;
pub use error::{DialectError, Result};
pub use field::{FieldDescriptor, FieldKind, TagSettings};
pub use handle::{DbHandle, ExecReturn, HandleError, OutBind};
pub use registry::DialectRegistry;
pub use scope::InsertScope;
pub use value::{SqlValue, ToSqlValue};

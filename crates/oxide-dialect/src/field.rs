//! Field descriptors.
//!
//! The ORM runtime describes each mapped struct field to the dialect through
//! a [`FieldDescriptor`]: the semantic kind of the field, its declared size,
//! and the settings parsed from the field's tags. Dialects read (and in a few
//! cases consume) this metadata to produce column types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Semantic kinds of mapped struct fields.
///
/// This is a closed set: dialects match it exhaustively, so adding a kind is
/// a compile-time event for every dialect rather than a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// 8-bit integer.
    SmallInt,
    /// 16/32-bit integer.
    Integer,
    /// 64-bit integer.
    BigInt,
    /// Floating point.
    Float,
    /// Boolean.
    Boolean,
    /// Character string.
    Text,
    /// Timestamp-valued field.
    DateTime,
    /// Byte sequence.
    Bytes,
}

impl FieldKind {
    /// Returns whether this kind belongs to the numeric family.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::SmallInt | Self::Integer | Self::BigInt | Self::Float
        )
    }
}

/// Tag-derived settings on a field, keyed by upper-case setting name.
///
/// Keys mirror the tag vocabulary of the ORM: `TYPE`, `AUTO_INCREMENT`,
/// `NOT NULL`, `UNIQUE`, `DEFAULT`, `COMMENT`, `RESTRICT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSettings {
    entries: BTreeMap<String, String>,
}

impl TagSettings {
    /// Creates an empty settings map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a setting, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns whether a setting is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets a setting value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes a setting, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

/// Metadata for one mapped struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// Semantic kind.
    pub kind: FieldKind,
    /// Declared size, when the tag specified one.
    pub size: Option<u32>,
    /// Whether this field is the primary key.
    pub primary_key: bool,
    /// Tag-derived settings.
    pub settings: TagSettings,
}

impl FieldDescriptor {
    /// Creates a descriptor for a column of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            size: None,
            primary_key: false,
            settings: TagSettings::new(),
        }
    }

    /// Sets the declared size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Marks the field as the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Adds a tag setting.
    #[must_use]
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.set(key, value);
        self
    }

    /// Returns whether this field should receive an auto-incrementing type.
    ///
    /// An explicit `AUTO_INCREMENT` setting wins (any value other than
    /// `"false"`, compared case-insensitively, enables it); without one the
    /// primary-key flag decides.
    #[must_use]
    pub fn can_auto_increment(&self) -> bool {
        match self.settings.get("AUTO_INCREMENT") {
            Some(value) => !value.eq_ignore_ascii_case("false"),
            None => self.primary_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let field = FieldDescriptor::new("id", FieldKind::BigInt)
            .primary_key()
            .setting("NOT NULL", "NOT NULL");

        assert_eq!(field.name, "id");
        assert_eq!(field.kind, FieldKind::BigInt);
        assert!(field.primary_key);
        assert_eq!(field.size, None);
        assert!(field.settings.contains("NOT NULL"));
    }

    #[test]
    fn test_auto_increment_defaults_to_primary_key() {
        assert!(
            FieldDescriptor::new("id", FieldKind::Integer)
                .primary_key()
                .can_auto_increment()
        );
        assert!(!FieldDescriptor::new("age", FieldKind::Integer).can_auto_increment());
    }

    #[test]
    fn test_auto_increment_explicit_setting_wins() {
        let disabled = FieldDescriptor::new("id", FieldKind::Integer)
            .primary_key()
            .setting("AUTO_INCREMENT", "FALSE");
        assert!(!disabled.can_auto_increment());

        let enabled =
            FieldDescriptor::new("seq", FieldKind::Integer).setting("AUTO_INCREMENT", "true");
        assert!(enabled.can_auto_increment());
    }

    #[test]
    fn test_tag_settings_remove() {
        let mut settings = TagSettings::new();
        settings.set("RESTRICT", "RESTRICT");
        assert_eq!(settings.remove("RESTRICT"), Some(String::from("RESTRICT")));
        assert_eq!(settings.remove("RESTRICT"), None);
        assert!(!settings.contains("RESTRICT"));
    }

    #[test]
    fn test_numeric_family() {
        assert!(FieldKind::SmallInt.is_numeric());
        assert!(FieldKind::Float.is_numeric());
        assert!(!FieldKind::Text.is_numeric());
        assert!(!FieldKind::Bytes.is_numeric());
    }
}

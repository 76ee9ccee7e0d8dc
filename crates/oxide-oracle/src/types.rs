//! Field-kind to Oracle column type mapping.

use oxide_dialect::{FieldDescriptor, FieldKind};

/// Longest string Oracle stores inline as `VARCHAR2`; anything at or past
/// this goes to `CLOB`.
const MAX_VARCHAR2_SIZE: u32 = 4000;

/// Returns the Oracle column type (plus constraint modifiers, if any) for a
/// field.
///
/// An explicit `TYPE` setting wins verbatim; otherwise the type is derived
/// from the field's kind, declared size, and auto-increment eligibility.
/// The portable `text` alias always maps to `CLOB`, and a `json` override
/// maps to a bounded `VARCHAR2` since the database has no native JSON
/// column type here. The `RESTRICT` marker only steers relation DDL and is
/// consumed before mapping.
///
/// Oracle requires `DEFAULT` to precede constraint keywords, so modifiers
/// are emitted in the order `DEFAULT`, `NOT NULL`, `UNIQUE`, `COMMENT`
/// regardless of how the runtime's generic formatter would order them.
///
/// # Panics
///
/// Panics when the mapped type comes out empty (a blank explicit `TYPE`
/// setting). Proceeding would silently corrupt schema generation, so this
/// is treated as a programming error in the model definition.
#[must_use]
pub fn oracle_type_of(field: &mut FieldDescriptor) -> String {
    field.settings.remove("RESTRICT");

    let mut sql_type = match field.settings.get("TYPE") {
        Some(explicit) => String::from(explicit.trim()),
        None => derived_type(field),
    };

    if sql_type.eq_ignore_ascii_case("text") {
        sql_type = String::from("CLOB");
    }
    if sql_type.eq_ignore_ascii_case("json") {
        sql_type = String::from("VARCHAR2 (4000)");
    }

    assert!(
        !sql_type.is_empty(),
        "no sql type determined for column {}",
        field.name
    );

    match modifiers(field) {
        Some(suffix) => format!("{sql_type} {suffix}"),
        None => sql_type,
    }
}

fn derived_type(field: &FieldDescriptor) -> String {
    match field.kind {
        FieldKind::SmallInt | FieldKind::Integer | FieldKind::BigInt | FieldKind::Float => {
            if field.can_auto_increment() {
                String::from("NUMBER GENERATED BY DEFAULT AS IDENTITY")
            } else {
                match field.kind {
                    FieldKind::SmallInt => String::from("SHORTINTEGER"),
                    FieldKind::Integer | FieldKind::BigInt => String::from("INTEGER"),
                    _ => String::from("NUMBER"),
                }
            }
        }
        FieldKind::Boolean => String::from("INTEGER"),
        FieldKind::Text => text_type(field.size),
        FieldKind::DateTime => String::from("TIMESTAMP WITH TIME ZONE"),
        FieldKind::Bytes => String::from("BLOB"),
    }
}

fn text_type(size: Option<u32>) -> String {
    match size {
        Some(size) if size > 0 && size < MAX_VARCHAR2_SIZE => format!("VARCHAR2({size})"),
        // no size declared: default to something that can be indexed
        None | Some(0) => String::from("VARCHAR2 (1000)"),
        Some(_) => String::from("CLOB"),
    }
}

fn modifiers(field: &FieldDescriptor) -> Option<String> {
    let default = field.settings.get("DEFAULT");
    let not_null = field.settings.get("NOT NULL");
    let unique = field.settings.get("UNIQUE");
    let comment = field.settings.get("COMMENT");

    if default.is_none() && not_null.is_none() && unique.is_none() && comment.is_none() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(value) = default {
        parts.push(format!("DEFAULT {value}"));
    }
    if let Some(value) = not_null {
        parts.push(String::from(value));
    }
    if let Some(value) = unique {
        parts.push(String::from(value));
    }
    if let Some(value) = comment {
        parts.push(format!("COMMENT {value}"));
    }
    Some(parts.join(" "))
}

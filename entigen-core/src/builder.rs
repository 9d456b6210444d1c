use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::column::{Column, ColumnDefinition};
use crate::entity::{EntityDefinition, EntitySpecification};
use crate::error::BuildError;
use crate::naming::{is_pascal_case, is_valid_identifier, PASCAL_CASE_PATTERN};

/// Validate a specification and freeze it into an [`EntityDefinition`].
///
/// The specification is consumed: its owned parts move into the definition
/// and nothing references the raw value afterwards.
///
/// Checks, in order:
/// - the entity name is PascalCase ([`BuildError::InvalidName`])
/// - a table entity has at least one column ([`BuildError::EmptyTable`])
/// - every column name is an identifier and unique
/// - every default type-checks against its column type
///   ([`BuildError::InvalidDefault`]); a `null` default is only accepted on
///   columns that accept NULL
///
/// Pure: no I/O and no global state beyond `tracing` events.
pub fn build(spec: EntitySpecification) -> Result<EntityDefinition, BuildError> {
    let EntitySpecification {
        name,
        table,
        columns,
        metadata,
    } = spec;

    if !is_pascal_case(&name) {
        warn!(entity = %name, "rejected entity name");
        return Err(BuildError::InvalidName {
            name,
            pattern: PASCAL_CASE_PATTERN,
        });
    }

    if table && columns.is_empty() {
        warn!(entity = %name, "rejected table entity without columns");
        return Err(BuildError::EmptyTable { entity: name });
    }

    let mut seen = HashSet::with_capacity(columns.len());
    let mut frozen = Vec::with_capacity(columns.len());

    for (column, definition) in columns {
        if !is_valid_identifier(&column) {
            return Err(BuildError::InvalidColumnName {
                entity: name,
                column,
            });
        }
        if !seen.insert(column.clone()) {
            return Err(BuildError::DuplicateColumn {
                entity: name,
                column,
            });
        }
        if let Some(found) = invalid_default(&definition) {
            warn!(entity = %name, column = %column, "rejected column default");
            return Err(BuildError::InvalidDefault {
                expected: definition.column_type.to_string(),
                entity: name,
                column,
                found,
            });
        }

        trace!(entity = %name, column = %column, column_type = %definition.column_type, "column accepted");
        frozen.push(Column::from_definition(column, definition));
    }

    debug!(entity = %name, table, columns = frozen.len(), "entity definition built");
    Ok(EntityDefinition::new(
        name,
        table,
        frozen.into_boxed_slice(),
        metadata,
    ))
}

/// The offending literal if the column default does not fit the column.
fn invalid_default(definition: &ColumnDefinition) -> Option<Value> {
    let value = definition.default.as_ref()?;
    let fits = match value {
        Value::Null => definition.nullable || definition.optional,
        other => definition.column_type.accepts(other),
    };
    (!fits).then(|| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnType, PrimitiveType};
    use serde_json::json;

    fn id() -> ColumnDefinition {
        ColumnDefinition::new(PrimitiveType::String)
    }

    #[test]
    fn test_lowercase_name_rejected() {
        let err = build(EntitySpecification::new("user").column("id", id())).unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidName {
                name: "user".into(),
                pattern: PASCAL_CASE_PATTERN
            }
        );
        assert!(err.to_string().contains("'user'"));
    }

    #[test]
    fn test_default_type_mismatch() {
        let spec = EntitySpecification::new("Counter").column(
            "count",
            ColumnDefinition::new(PrimitiveType::Number).with_default("five"),
        );
        let err = build(spec).unwrap_err();
        match &err {
            BuildError::InvalidDefault {
                entity,
                column,
                expected,
                found,
            } => {
                assert_eq!(entity, "Counter");
                assert_eq!(column, "count");
                assert_eq!(expected, "number");
                assert_eq!(found, &json!("five"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("count"));
        assert!(msg.contains("number"));
        assert!(msg.contains("\"five\""));
    }

    #[test]
    fn test_array_default_elements_checked() {
        let tags = ColumnType::array_of(PrimitiveType::String);
        let ok = EntitySpecification::new("Post")
            .column("tags", ColumnDefinition::new(tags.clone()).with_default(json!(["a", "b"])));
        assert!(build(ok).is_ok());

        let bad = EntitySpecification::new("Post")
            .column("tags", ColumnDefinition::new(tags).with_default(json!(["a", 2])));
        assert!(matches!(
            build(bad),
            Err(BuildError::InvalidDefault { ref column, .. }) if column == "tags"
        ));
    }

    #[test]
    fn test_null_default_requires_null_storage() {
        let strict = EntitySpecification::new("Note")
            .column("body", ColumnDefinition::new(PrimitiveType::String).with_default(Value::Null));
        assert!(matches!(build(strict), Err(BuildError::InvalidDefault { .. })));

        let nullable = EntitySpecification::new("Note").column(
            "body",
            ColumnDefinition::new(PrimitiveType::String)
                .nullable()
                .with_default(Value::Null),
        );
        assert!(build(nullable).is_ok());
    }

    #[test]
    fn test_integer_default_beyond_i64_rejected() {
        let spec = EntitySpecification::new("Counter").table(true).column(
            "n",
            ColumnDefinition::new(PrimitiveType::Integer).with_default(u64::MAX),
        );
        assert!(matches!(
            build(spec),
            Err(BuildError::InvalidDefault { ref column, ref found, .. })
                if column == "n" && *found == json!(u64::MAX)
        ));

        let max = EntitySpecification::new("Counter").table(true).column(
            "n",
            ColumnDefinition::new(PrimitiveType::Integer).with_default(i64::MAX),
        );
        assert!(build(max).is_ok());
    }

    #[test]
    fn test_date_default_must_be_iso() {
        let spec = EntitySpecification::new("Event").column(
            "at",
            ColumnDefinition::new(PrimitiveType::Date).with_default("last tuesday"),
        );
        assert!(matches!(build(spec), Err(BuildError::InvalidDefault { .. })));
    }

    #[test]
    fn test_empty_table_rejected_but_empty_shape_allowed() {
        let err = build(EntitySpecification::new("Nothing").table(true)).unwrap_err();
        assert_eq!(err, BuildError::EmptyTable { entity: "Nothing".into() });

        let shape = build(EntitySpecification::new("Nothing")).unwrap();
        assert!(shape.columns().is_empty());
        assert!(!shape.is_table());
    }

    #[test]
    fn test_duplicate_and_invalid_columns() {
        let dup = EntitySpecification::new("User").column("id", id()).column("id", id());
        assert_eq!(
            build(dup).unwrap_err(),
            BuildError::DuplicateColumn {
                entity: "User".into(),
                column: "id".into()
            }
        );

        let bad = EntitySpecification::new("User").column("first name", id());
        assert!(matches!(build(bad), Err(BuildError::InvalidColumnName { .. })));
    }

    #[test]
    fn test_nested_arrays_accepted() {
        let grid = ColumnType::array_of(ColumnType::array_of(PrimitiveType::Integer));
        let entity = build(
            EntitySpecification::new("Board")
                .table(true)
                .column("cells", ColumnDefinition::new(grid).with_default(json!([[1, 2], [3]]))),
        )
        .unwrap();
        assert!(entity.column("cells").unwrap().column_type().is_nested_array());
    }

    #[test]
    fn test_column_order_preserved() {
        let entity = build(
            EntitySpecification::new("User")
                .column("zeta", id())
                .column("alpha", id())
                .column("mid", id()),
        )
        .unwrap();
        let names: Vec<&str> = entity.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}

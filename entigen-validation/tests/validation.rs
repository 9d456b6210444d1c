use entigen_core::prelude::*;
use entigen_validation::{to_validation_schema, SchemaNode};
use proptest::prelude::*;
use serde_json::json;

fn user() -> EntityDefinition {
    EntitySpecification::new("User")
        .table(true)
        .column("id", ColumnDefinition::new(PrimitiveType::String))
        .column("email", ColumnDefinition::new(PrimitiveType::String))
        .column(
            "createdAt",
            ColumnDefinition::new(PrimitiveType::Date).with_default("1970-01-01T00:00:00.000Z"),
        )
        .column(
            "settings",
            ColumnDefinition::new(ColumnType::array_of(PrimitiveType::Json)).optional(),
        )
        .build()
        .unwrap()
}

// ── Schema derivation ───────────────────────────────────────────────────

#[test]
fn settings_is_the_only_optional_field() {
    let schema = to_validation_schema(&user());
    let object = schema.as_object().unwrap();
    let optional: Vec<&str> = object
        .fields
        .iter()
        .filter(|f| !f.required)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(optional, vec!["settings"]);
    assert_eq!(
        object.required_fields().collect::<Vec<_>>(),
        vec!["id", "email", "createdAt"]
    );
}

#[test]
fn array_column_becomes_sequence_node() {
    let schema = to_validation_schema(&user());
    let settings = schema.as_object().unwrap().field("settings").unwrap();
    assert_eq!(
        settings.node,
        SchemaNode::Array {
            items: Box::new(SchemaNode::Json)
        }
    );
    assert!(settings.nullable);
}

#[test]
fn schema_is_deterministic() {
    let user = user();
    assert_eq!(to_validation_schema(&user), to_validation_schema(&user));
}

// ── Runtime validation ──────────────────────────────────────────────────

#[test]
fn valid_record_passes() {
    let schema = to_validation_schema(&user());
    let record = json!({
        "id": "u1",
        "email": "a@b.c",
        "createdAt": "2024-05-01T10:00:00Z",
        "settings": [{"theme": "dark"}]
    });
    assert_eq!(schema.validate(&record).unwrap(), record);
}

#[test]
fn missing_required_fields_are_all_reported() {
    let schema = to_validation_schema(&user());
    let report = schema.validate(&json!({"id": "u1"})).unwrap_err();
    let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "createdAt"]);
    assert!(report.errors.iter().all(|e| e.code == "required"));
}

#[test]
fn required_field_with_default_stays_required() {
    let schema = to_validation_schema(&user());
    let report = schema
        .validate(&json!({"id": "u1", "email": "a@b.c"}))
        .unwrap_err();
    assert_eq!(report.for_field("createdAt").count(), 1);
}

#[test]
fn omitted_optional_takes_default() {
    let post = EntitySpecification::new("Post")
        .column("title", ColumnDefinition::new(PrimitiveType::String))
        .column(
            "tags",
            ColumnDefinition::new(ColumnType::array_of(PrimitiveType::String))
                .optional()
                .with_default(json!(["news"])),
        )
        .column("summary", ColumnDefinition::new(PrimitiveType::String).optional())
        .build()
        .unwrap();
    let schema = to_validation_schema(&post);
    let record = schema.validate(&json!({"title": "t"})).unwrap();
    assert_eq!(record, json!({"title": "t", "tags": ["news"]}));
}

#[test]
fn null_rejected_unless_nullable() {
    let schema = to_validation_schema(&user());
    let report = schema
        .validate(&json!({
            "id": null,
            "email": "a@b.c",
            "createdAt": "2024-05-01T10:00:00Z",
            "settings": null
        }))
        .unwrap_err();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].field, "id");
    assert_eq!(report.errors[0].code, "null");
}

#[test]
fn unknown_fields_are_dropped() {
    let schema = to_validation_schema(&user());
    let record = schema
        .validate(&json!({
            "id": "u1",
            "email": "a@b.c",
            "createdAt": "2024-05-01T10:00:00Z",
            "admin": true
        }))
        .unwrap();
    assert!(record.get("admin").is_none());
}

#[test]
fn nested_paths_in_report() {
    let matrix = EntitySpecification::new("Matrix")
        .column(
            "cells",
            ColumnDefinition::new(ColumnType::array_of(ColumnType::array_of(
                PrimitiveType::Integer,
            ))),
        )
        .build()
        .unwrap();
    let schema = to_validation_schema(&matrix);
    let report = schema
        .validate(&json!({"cells": [[1, 2], [3, "x"]]}))
        .unwrap_err();
    assert_eq!(report.errors[0].field, "cells[1][1]");
    assert_eq!(report.errors[0].code, "type");
    assert!(report.to_string().contains("cells[1][1]"));
}

#[test]
fn integer_outside_i64_rejected() {
    let counter = EntitySpecification::new("Counter")
        .column("n", ColumnDefinition::new(PrimitiveType::Integer))
        .build()
        .unwrap();
    let schema = to_validation_schema(&counter);
    assert!(schema.validate(&json!({"n": i64::MAX})).is_ok());

    let report = schema.validate(&json!({"n": u64::MAX})).unwrap_err();
    assert_eq!(report.errors[0].field, "n");
    assert_eq!(report.errors[0].code, "type");
}

#[test]
fn non_object_record() {
    let schema = to_validation_schema(&user());
    let report = schema.validate(&json!([1, 2])).unwrap_err();
    assert_eq!(report.errors[0].field, "value");
    assert_eq!(report.errors[0].message, "expected object, found array");
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validation_is_idempotent(id in "[a-z0-9]{1,12}", count in any::<i64>(), extra in any::<bool>()) {
        let item = EntitySpecification::new("Item")
            .column("id", ColumnDefinition::new(PrimitiveType::String))
            .column("count", ColumnDefinition::new(PrimitiveType::Integer).optional().with_default(0))
            .build()
            .unwrap();
        let schema = to_validation_schema(&item);

        let input = if extra {
            json!({"id": id, "count": count, "noise": 1})
        } else {
            json!({"id": id})
        };
        let once = schema.validate(&input).unwrap();
        let twice = schema.validate(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}

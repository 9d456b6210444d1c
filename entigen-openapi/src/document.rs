use entigen_core::{Column, ColumnType, EntityDefinition, PrimitiveType};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::options::{DocumentOptions, OpenApiVersion};

/// One OpenAPI component: the entity name and its object schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDocument {
    pub name: String,
    pub schema: Value,
}

impl ApiDocument {
    /// Names listed under `required`, in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required_fields().contains(&field)
    }

    pub fn property(&self, field: &str) -> Option<&Value> {
        self.schema.get("properties")?.get(field)
    }

    /// Whether the property of `field` admits null, in either the 3.0 or
    /// the 3.1 spelling.
    pub fn is_nullable(&self, field: &str) -> bool {
        self.property(field).is_some_and(admits_null)
    }
}

fn admits_null(property: &Value) -> bool {
    if property.get("nullable") == Some(&Value::Bool(true)) {
        return true;
    }
    if let Some(Value::Array(types)) = property.get("type") {
        return types.iter().any(|t| t == "null");
    }
    if let Some(Value::Array(variants)) = property.get("anyOf") {
        return variants.iter().any(|v| v.get("type") == Some(&json!("null")));
    }
    false
}

/// Describe an entity as an OpenAPI object schema.
///
/// `required` lists the columns with [`Column::is_required`] and a property
/// admits null exactly when [`Column::accepts_null`] holds, so the document
/// never disagrees with the validation schema or the DDL.
pub fn to_api_document(entity: &EntityDefinition, options: &DocumentOptions) -> ApiDocument {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for column in entity.columns() {
        properties.insert(column.name().to_string(), property(column, options));
        if column.is_required() {
            required.push(json!(column.name()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    // An empty `required` array is invalid in 3.0.
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }

    debug!(entity = entity.name(), version = %options.version, "Generated API document");
    ApiDocument {
        name: entity.name().to_string(),
        schema: Value::Object(schema),
    }
}

fn property(column: &Column, options: &DocumentOptions) -> Value {
    let mut schema = type_schema(column.column_type());
    if column.accepts_null() {
        schema = with_null(schema, options.version);
    } else if options.version == OpenApiVersion::V3_1 && schema.get("type").is_none() {
        // `{}` admits null in 3.1. In 3.0 a schema without `nullable: true`
        // already excludes it.
        schema = json!({ "not": { "type": "null" } });
    }
    if let Value::Object(obj) = &mut schema {
        if let Some(description) = column.description() {
            obj.insert("description".into(), json!(description));
        }
        if options.include_defaults {
            if let Some(default) = column.default() {
                obj.insert("default".into(), default.clone());
            }
        }
    }
    schema
}

fn type_schema(column_type: &ColumnType) -> Value {
    match column_type {
        ColumnType::Primitive(p) => match p {
            PrimitiveType::String => json!({ "type": "string" }),
            PrimitiveType::Integer => json!({ "type": "integer", "format": "int64" }),
            PrimitiveType::Number => json!({ "type": "number", "format": "double" }),
            PrimitiveType::Boolean => json!({ "type": "boolean" }),
            PrimitiveType::Date => json!({ "type": "string", "format": "date-time" }),
            PrimitiveType::Json => json!({}),
        },
        ColumnType::Array { items } => json!({
            "type": "array",
            "items": type_schema(items),
        }),
    }
}

fn with_null(mut schema: Value, version: OpenApiVersion) -> Value {
    match version {
        OpenApiVersion::V3_0 => {
            if let Value::Object(obj) = &mut schema {
                obj.insert("nullable".into(), json!(true));
            }
            schema
        }
        OpenApiVersion::V3_1 => match schema.get("type").cloned() {
            Some(Value::String(t)) => {
                if let Value::Object(obj) = &mut schema {
                    obj.insert("type".into(), json!([t, "null"]));
                }
                schema
            }
            // Untyped schemas (json columns) get an explicit null branch.
            _ => json!({ "anyOf": [schema, { "type": "null" }] }),
        },
    }
}

use entigen_core::types::is_iso_instant;
use entigen_core::PrimitiveType;
use serde_json::{Map, Value};
use tracing::debug;

use crate::report::{FieldError, ValidationReport};
use crate::schema::{ObjectSchema, SchemaNode};

impl SchemaNode {
    /// Check `value` against this node.
    ///
    /// On success returns the normalized value: omitted optional fields carry
    /// their default and fields not declared by the schema are dropped. On
    /// failure every error in the record is reported, not only the first.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationReport> {
        let mut errors = Vec::new();
        let normalized = check(self, value, "", &mut errors);
        if errors.is_empty() {
            Ok(normalized)
        } else {
            debug!(errors = errors.len(), "Record rejected");
            Err(ValidationReport { errors })
        }
    }
}

fn check(node: &SchemaNode, value: &Value, path: &str, errors: &mut Vec<FieldError>) -> Value {
    match node {
        SchemaNode::Object(object) => match value {
            Value::Object(record) => Value::Object(check_object(object, record, path, errors)),
            other => {
                errors.push(type_error(path, "object", other));
                Value::Null
            }
        },
        SchemaNode::Array { items } => match value {
            Value::Array(elements) => {
                let base = if path.is_empty() { "value" } else { path };
                Value::Array(
                    elements
                        .iter()
                        .enumerate()
                        .map(|(i, e)| check(items, e, &format!("{base}[{i}]"), errors))
                        .collect(),
                )
            }
            other => {
                errors.push(type_error(path, "array", other));
                Value::Null
            }
        },
        primitive => {
            if let Some(p) = primitive.primitive() {
                check_primitive(p, value, path, errors);
            }
            value.clone()
        }
    }
}

fn check_object(
    object: &ObjectSchema,
    record: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Map<String, Value> {
    let mut out = Map::new();
    for field in &object.fields {
        let field_path = if path.is_empty() {
            field.name.clone()
        } else {
            format!("{path}.{}", field.name)
        };
        match record.get(&field.name) {
            None if field.required => errors.push(FieldError::new(
                &field_path,
                "required",
                format!("missing required field '{}'", field.name),
            )),
            None => {
                if let Some(default) = &field.default {
                    out.insert(field.name.clone(), default.clone());
                }
            }
            Some(Value::Null) if field.nullable => {
                out.insert(field.name.clone(), Value::Null);
            }
            Some(Value::Null) => errors.push(FieldError::new(
                &field_path,
                "null",
                format!("field '{}' may not be null", field.name),
            )),
            Some(value) => {
                let checked = check(&field.node, value, &field_path, errors);
                out.insert(field.name.clone(), checked);
            }
        }
    }
    out
}

fn check_primitive(primitive: PrimitiveType, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
    if primitive.accepts(value) {
        return;
    }
    match (primitive, value) {
        (PrimitiveType::Date, Value::String(s)) if !is_iso_instant(s) => errors.push(FieldError::new(
            path,
            "format",
            format!("'{s}' is not an ISO-8601 instant"),
        )),
        _ => errors.push(type_error(path, primitive.as_str(), value)),
    }
}

fn type_error(path: &str, expected: &str, found: &Value) -> FieldError {
    FieldError::new(path, "type", format!("expected {expected}, found {}", kind(found)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_mismatch() {
        let report = SchemaNode::Integer.validate(&json!(1.5)).unwrap_err();
        assert_eq!(report.errors[0].field, "value");
        assert_eq!(report.errors[0].code, "type");
        assert_eq!(report.errors[0].message, "expected integer, found number");
    }

    #[test]
    fn test_date_format() {
        let report = SchemaNode::Date.validate(&json!("yesterday")).unwrap_err();
        assert_eq!(report.errors[0].code, "format");
        assert!(SchemaNode::Date.validate(&json!("2024-01-01T00:00:00Z")).is_ok());
        assert_eq!(SchemaNode::Date.validate(&json!(3)).unwrap_err().errors[0].code, "type");
    }

    #[test]
    fn test_array_element_paths() {
        let node = SchemaNode::Array {
            items: Box::new(SchemaNode::Boolean),
        };
        let report = node.validate(&json!([true, "no", false, 0])).unwrap_err();
        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["value[1]", "value[3]"]);
    }

    #[test]
    fn test_json_accepts_anything() {
        for v in [json!(null), json!(1), json!({"a": [1]}), json!("s")] {
            assert_eq!(SchemaNode::Json.validate(&v).unwrap(), v);
        }
    }
}

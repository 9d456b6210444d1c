use entigen_openapi::schema::{SchemaProvider, SchemaRegistry};
use serde_json::{json, Value};

// ── SchemaRegistry ──────────────────────────────────────────────────────────

#[test]
fn registry_new_empty() {
    let registry = SchemaRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.into_schemas().is_empty());
}

#[test]
fn register_single_schema() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object"}));

    assert!(registry.contains("User"));
    assert_eq!(registry.get("User"), Some(&json!({"type": "object"})));
    let schemas = registry.into_schemas();
    assert_eq!(schemas.len(), 1);
}

#[test]
fn register_duplicate_overwrites() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object", "description": "v1"}));
    registry.register("User", json!({"type": "object", "description": "v2"}));

    assert_eq!(registry.len(), 1);
    let schemas = registry.into_schemas();
    assert_eq!(schemas["User"]["description"], "v2");
}

#[test]
fn contains_unregistered() {
    let registry = SchemaRegistry::default();
    assert!(!registry.contains("Unknown"));
}

#[test]
fn into_schemas_sorted_by_name() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object"}));
    registry.register("Role", json!({"type": "string", "enum": ["admin", "user"]}));

    let names: Vec<String> = registry.into_schemas().into_keys().collect();
    assert_eq!(names, vec!["Role", "User"]);
}

// ── SchemaProvider trait ────────────────────────────────────────────────────

struct Health;

impl SchemaProvider for Health {
    fn schema_name(&self) -> &str {
        "Health"
    }

    fn json_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "status": { "type": "string" } },
            "required": ["status"]
        })
    }
}

#[test]
fn register_schema_populates_registry() {
    let mut registry = SchemaRegistry::new();
    Health.register_schema(&mut registry);

    assert!(registry.contains("Health"));
    let schemas = registry.into_schemas();
    assert_eq!(schemas["Health"]["properties"]["status"]["type"], "string");
}

use std::collections::BTreeMap;

use serde_json::Value;

use crate::document::ApiDocument;

/// Registry that collects component schemas for an OpenAPI document.
///
/// Anything implementing [`SchemaProvider`] can register itself here. The
/// registry is then merged into the document's `components/schemas`, sorted
/// by name so the output is stable.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Value>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under the given name, replacing any previous one.
    pub fn register(&mut self, name: &str, schema: Value) {
        self.schemas.insert(name.to_string(), schema);
    }

    /// Register a generated entity document.
    pub fn register_document(&mut self, document: &ApiDocument) {
        document.register_schema(self);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Consume the registry and return the schemas map for embedding.
    pub fn into_schemas(self) -> BTreeMap<String, Value> {
        self.schemas
    }
}

/// Something that can describe itself as a named component schema.
pub trait SchemaProvider {
    /// Component name, e.g. `"User"`.
    fn schema_name(&self) -> &str;

    fn json_schema(&self) -> Value;

    /// Register this schema in the given registry.
    fn register_schema(&self, registry: &mut SchemaRegistry) {
        registry.register(self.schema_name(), self.json_schema());
    }
}

impl SchemaProvider for ApiDocument {
    fn schema_name(&self) -> &str {
        &self.name
    }

    fn json_schema(&self) -> Value {
        self.schema.clone()
    }
}

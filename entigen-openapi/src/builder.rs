use serde_json::{json, Map, Value};

use crate::options::OpenApiVersion;
use crate::schema::SchemaRegistry;

/// Configuration for the combined OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiConfig {
    pub title: String,
    /// Version of the described API, written to `info.version`.
    pub version: String,
    pub description: Option<String>,
    pub openapi: OpenApiVersion,
}

impl OpenApiConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
            openapi: OpenApiVersion::default(),
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn with_openapi_version(mut self, version: OpenApiVersion) -> Self {
        self.openapi = version;
        self
    }
}

/// Wrap the registered components into a complete OpenAPI document.
///
/// Paths are left empty; routing belongs to whoever merges the document.
pub fn build_spec(config: &OpenApiConfig, registry: SchemaRegistry) -> Value {
    let mut info: Map<String, Value> = Map::new();
    info.insert("title".into(), json!(config.title));
    info.insert("version".into(), json!(config.version));
    if let Some(ref desc) = config.description {
        info.insert("description".into(), json!(desc));
    }

    let mut components: Map<String, Value> = Map::new();
    if !registry.is_empty() {
        let schemas: Map<String, Value> = registry.into_schemas().into_iter().collect();
        components.insert("schemas".into(), Value::Object(schemas));
    }

    json!({
        "openapi": config.openapi.as_str(),
        "info": info,
        "paths": {},
        "components": components
    })
}

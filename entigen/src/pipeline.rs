use std::sync::Arc;

use entigen_core::{DefinitionCache, EntityDefinition, EntitySpecification};
use entigen_ddl::{DdlGenerator, Dialect};
use entigen_openapi::{to_api_document, ApiDocument};
use entigen_validation::{to_validation_schema, SchemaNode};
use tracing::{debug, warn};

use crate::error::GenerateError;
use crate::settings::GenerationConfig;

/// Everything generated for one entity.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub definition: Arc<EntityDefinition>,
    /// One statement per configured dialect, empty for non-table entities.
    pub ddl: Vec<(Dialect, String)>,
    pub schema: SchemaNode,
    pub document: ApiDocument,
}

impl Artifacts {
    pub fn ddl_for(&self, dialect: Dialect) -> Option<&str> {
        self.ddl
            .iter()
            .find(|(d, _)| *d == dialect)
            .map(|(_, sql)| sql.as_str())
    }
}

/// Builds specifications and runs every backend over the result.
///
/// Definitions are memoized in a [`DefinitionCache`]; cloning a pipeline
/// shares the cache.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: GenerationConfig,
    cache: DefinitionCache,
}

impl Pipeline {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            cache: DefinitionCache::new(),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn cache(&self) -> &DefinitionCache {
        &self.cache
    }

    /// Build `spec` (through the cache) and generate all artifacts.
    ///
    /// Fails as a whole: a DDL error in any dialect discards the other
    /// artifacts.
    pub fn generate(&self, spec: EntitySpecification) -> Result<Artifacts, GenerateError> {
        let definition = self.cache.get_or_build(spec).inspect_err(|e| {
            warn!(entity = e.entity(), error = %e, "Specification rejected");
        })?;
        self.generate_for(definition)
    }

    /// Generate all artifacts of an already built definition.
    pub fn generate_for(&self, definition: Arc<EntityDefinition>) -> Result<Artifacts, GenerateError> {
        let ddl = self
            .config
            .dialects
            .iter()
            .map(|&dialect| -> Result<(Dialect, String), GenerateError> {
                let sql = self.generator(dialect).generate(&definition)?;
                Ok((dialect, sql))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let schema = to_validation_schema(&definition);
        let document = to_api_document(&definition, &self.config.document);

        debug!(entity = definition.name(), dialects = ddl.len(), "Artifacts generated");
        Ok(Artifacts {
            definition,
            ddl,
            schema,
            document,
        })
    }

    /// One migration script per configured dialect over many specifications.
    pub fn migration<I>(&self, specs: I) -> Result<Vec<(Dialect, String)>, GenerateError>
    where
        I: IntoIterator<Item = EntitySpecification>,
    {
        let definitions = specs
            .into_iter()
            .map(|spec| self.cache.get_or_build(spec))
            .collect::<Result<Vec<_>, _>>()?;

        self.config
            .dialects
            .iter()
            .map(|&dialect| -> Result<(Dialect, String), GenerateError> {
                let script = self
                    .generator(dialect)
                    .migration(definitions.iter().map(Arc::as_ref))?;
                Ok((dialect, script))
            })
            .collect()
    }

    fn generator(&self, dialect: Dialect) -> DdlGenerator {
        DdlGenerator::new(dialect).if_not_exists(self.config.if_not_exists)
    }
}

/// Parse one entity specification from YAML (or JSON) text.
pub fn load_specification(text: &str) -> Result<EntitySpecification, GenerateError> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = load_specification("name: [").unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid entity specification"));
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(
            load_specification("table: true"),
            Err(GenerateError::Parse(_))
        ));
    }

    #[test]
    fn test_misspelt_flag_is_a_parse_error() {
        let err = load_specification("name: Note\ncolumns:\n  body: { type: string, optinal: true }\n")
            .unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }

    #[test]
    fn test_json_input() {
        let spec = load_specification(r#"{"name": "Tag", "columns": {"label": {"type": "string"}}}"#)
            .unwrap();
        assert_eq!(spec.name, "Tag");
        assert!(!spec.table);
    }
}

use entigen_core::{ConfigError, EntigenConfig};
use entigen_ddl::Dialect;
use entigen_openapi::{DocumentOptions, OpenApiVersion};

use crate::error::GenerateError;

/// Settings of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Dialects a DDL statement is produced for, in order.
    pub dialects: Vec<Dialect>,
    pub if_not_exists: bool,
    pub document: DocumentOptions,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            dialects: vec![Dialect::Postgres],
            if_not_exists: false,
            document: DocumentOptions::default(),
        }
    }
}

impl GenerationConfig {
    /// Read the `ddl.*` and `openapi.*` keys, defaulting absent ones.
    ///
    /// ```
    /// use entigen::{EntigenConfig, GenerationConfig};
    /// use entigen::ddl::Dialect;
    ///
    /// let config = EntigenConfig::from_yaml_str("ddl:\n  dialects: [sqlite, mysql]\n", "test").unwrap();
    /// let settings = GenerationConfig::from_config(&config).unwrap();
    /// assert_eq!(settings.dialects, vec![Dialect::Sqlite, Dialect::MySql]);
    /// ```
    pub fn from_config(config: &EntigenConfig) -> Result<Self, GenerateError> {
        let names: Vec<String> = config.get_or("ddl.dialects", vec!["postgres".to_string()])?;
        let dialects = names
            .iter()
            .map(|name| name.parse::<Dialect>())
            .collect::<Result<Vec<_>, _>>()?;

        let version: String = config.get_or("openapi.version", "3.1".to_string())?;
        let version =
            OpenApiVersion::from_name(&version).ok_or_else(|| ConfigError::TypeMismatch {
                key: "openapi.version".to_string(),
                expected: "\"3.0\" or \"3.1\"",
            })?;

        Ok(Self {
            dialects,
            if_not_exists: config.get_or("ddl.if_not_exists", false)?,
            document: DocumentOptions::new()
                .with_version(version)
                .with_defaults(config.get_or("openapi.include_defaults", true)?),
        })
    }
}

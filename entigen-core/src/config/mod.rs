mod loader;
pub mod value;

use std::fmt;
use std::path::Path;

use loader::Values;
pub use value::{ConfigValue, FromConfigValue};

/// Prefix of environment variables mapped into the configuration.
pub const ENV_PREFIX: &str = "ENTIGEN_";

const PROFILE_VAR: &str = "ENTIGEN_PROFILE";

#[derive(Debug)]
pub enum ConfigError {
    /// No layer defines the key.
    NotFound(String),
    /// The key is defined but holds a value of another shape.
    TypeMismatch { key: String, expected: &'static str },
    /// A settings file exists but could not be read or parsed.
    Load(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "setting `{key}` is not defined"),
            Self::TypeMismatch { key, expected } => {
                write!(f, "setting `{key}` must be a {expected}")
            }
            Self::Load(reason) => write!(f, "cannot load settings: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Layered generation settings.
///
/// Layers, later ones winning key by key:
/// 1. `entigen.yaml`
/// 2. `entigen-{profile}.yaml`
/// 3. `ENTIGEN_*` environment variables, `__` separating key segments
///    (`ENTIGEN_DDL__IF_NOT_EXISTS` sets `ddl.if_not_exists`)
///
/// A `.env` file next to the YAML files is read into the process
/// environment first; variables already set keep their value.
/// `ENTIGEN_PROFILE` takes precedence over the profile argument.
#[derive(Debug, Clone)]
pub struct EntigenConfig {
    profile: String,
    values: Values,
}

impl EntigenConfig {
    /// [`EntigenConfig::load_from_dir`] on the working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from_dir(Path::new("."), profile)
    }

    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile = std::env::var(PROFILE_VAR).unwrap_or_else(|_| profile.to_owned());
        let mut config = Self::with_profile(&profile);

        loader::merge_file(&dir.join("entigen.yaml"), &mut config.values)?;
        loader::merge_file(&dir.join(format!("entigen-{profile}.yaml")), &mut config.values)?;

        if let Err(e) = dotenvy::from_path(dir.join(".env")) {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }
        config.values.extend(
            std::env::vars()
                .filter_map(|(name, raw)| Some((env_key_to_config_key(&name)?, ConfigValue::String(raw)))),
        );

        tracing::debug!(profile = %config.profile, keys = config.values.len(), "configuration loaded");
        Ok(config)
    }

    /// Settings parsed from a single YAML document, without file or
    /// environment layers.
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut config = Self::with_profile(profile);
        loader::merge_str(yaml, &mut config.values)?;
        Ok(config)
    }

    /// No layers at all: every lookup falls back to its default.
    pub fn empty() -> Self {
        Self::with_profile("test")
    }

    fn with_profile(profile: &str) -> Self {
        EntigenConfig {
            profile: profile.to_owned(),
            values: Values::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_owned(), value);
    }

    /// Typed lookup of a dotted key such as `ddl.dialects`.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        match self.values.get(key) {
            Some(value) => V::from_config_value(value, key),
            None => Err(ConfigError::NotFound(key.to_owned())),
        }
    }

    /// Like [`EntigenConfig::get`], with `default` standing in for an
    /// undefined key. A defined key of the wrong shape is still an error.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> Result<V, ConfigError> {
        match self.get(key) {
            Err(ConfigError::NotFound(_)) => Ok(default),
            other => other,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }
}

/// `ENTIGEN_OPENAPI__INCLUDE_DEFAULTS` -> `openapi.include_defaults`.
fn env_key_to_config_key(env_key: &str) -> Option<String> {
    let rest = env_key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() || env_key == PROFILE_VAR {
        return None;
    }
    Some(rest.to_lowercase().replace("__", "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_mapping() {
        assert_eq!(
            env_key_to_config_key("ENTIGEN_DDL__IF_NOT_EXISTS").as_deref(),
            Some("ddl.if_not_exists")
        );
        assert_eq!(
            env_key_to_config_key("ENTIGEN_OPENAPI__VERSION").as_deref(),
            Some("openapi.version")
        );
        assert_eq!(env_key_to_config_key("ENTIGEN_PROFILE"), None);
        assert_eq!(env_key_to_config_key("PATH"), None);
    }

    #[test]
    fn test_get_or_keeps_type_errors() {
        let mut config = EntigenConfig::empty();
        assert_eq!(config.get_or("ddl.if_not_exists", false).unwrap(), false);
        config.set("ddl.if_not_exists", ConfigValue::String("perhaps".into()));
        assert!(matches!(
            config.get_or("ddl.if_not_exists", false),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }
}

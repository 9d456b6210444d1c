use super::ConfigError;

/// A flattened configuration leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    pub(crate) fn from_yaml(value: &serde_yaml::Value) -> Self {
        use serde_yaml::Value as Yaml;
        match value {
            Yaml::Null => ConfigValue::Null,
            Yaml::Bool(b) => ConfigValue::Bool(*b),
            Yaml::Number(n) => n
                .as_i64()
                .map(ConfigValue::Integer)
                .or_else(|| n.as_f64().map(ConfigValue::Float))
                .unwrap_or_else(|| ConfigValue::String(n.to_string())),
            Yaml::String(s) => ConfigValue::String(s.clone()),
            Yaml::Sequence(items) => ConfigValue::List(items.iter().map(Self::from_yaml).collect()),
            Yaml::Mapping(_) | Yaml::Tagged(_) => ConfigValue::String(format!("{value:?}")),
        }
    }

    /// Scalar rendered as text; `None` for null and lists.
    fn as_text(&self) -> Option<String> {
        match self {
            ConfigValue::String(s) => Some(s.clone()),
            ConfigValue::Integer(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Null | ConfigValue::List(_) => None,
        }
    }
}

/// Conversion from a [`ConfigValue`] into a typed setting.
pub trait FromConfigValue: Sized {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError>;
}

fn mismatch(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        value.as_text().ok_or_else(|| mismatch(key, "String"))
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::String(s) => s.trim().parse().map_err(|_| mismatch(key, "i64")),
            _ => Err(mismatch(key, "i64")),
        }
    }
}

/// Environment values are strings, so `yes`/`no` and `1`/`0` are accepted too.
impl FromConfigValue for bool {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::Integer(0) => Ok(false),
            ConfigValue::Integer(1) => Ok(true),
            ConfigValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(mismatch(key, "bool")),
            },
            _ => Err(mismatch(key, "bool")),
        }
    }
}

impl<T: FromConfigValue> FromConfigValue for Option<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        if *value == ConfigValue::Null {
            return Ok(None);
        }
        T::from_config_value(value, key).map(Some)
    }
}

/// Lists come from YAML sequences, or from one comma-separated string
/// (`ENTIGEN_DDL__DIALECTS=postgres,sqlite`).
impl<T: FromConfigValue> FromConfigValue for Vec<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| T::from_config_value(v, &format!("{key}[{i}]")))
                .collect(),
            ConfigValue::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| T::from_config_value(&ConfigValue::String(part.to_string()), key))
                .collect(),
            ConfigValue::Null => Ok(Vec::new()),
            single => Ok(vec![T::from_config_value(single, key)?]),
        }
    }
}

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value as Yaml;

use super::value::ConfigValue;
use super::ConfigError;

pub(crate) type Values = HashMap<String, ConfigValue>;

/// Merge `path` into `values`. A missing file contributes nothing.
pub(crate) fn merge_file(path: &Path, values: &mut Values) -> Result<(), ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ConfigError::Load(format!("{}: {e}", path.display()))),
    };
    merge_str(&content, values).map_err(|e| match e {
        ConfigError::Load(msg) => ConfigError::Load(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Merge a YAML document into `values`; later merges win key by key.
pub(crate) fn merge_str(content: &str, values: &mut Values) -> Result<(), ConfigError> {
    let document: Yaml =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    let mut pending: Vec<(String, &Yaml)> = vec![(String::new(), &document)];

    while let Some((key, node)) = pending.pop() {
        match node {
            Yaml::Mapping(map) => {
                for (segment, child) in map {
                    pending.push((join_key(&key, segment), child));
                }
            }
            // Lists stay whole: `ddl.dialects: [postgres, sqlite]`.
            leaf if !key.is_empty() => {
                values.insert(key, ConfigValue::from_yaml(leaf));
            }
            _ => {}
        }
    }
    Ok(())
}

fn join_key(prefix: &str, segment: &Yaml) -> String {
    let segment = match segment {
        Yaml::String(s) => s.clone(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    };
    if prefix.is_empty() {
        segment
    } else {
        format!("{prefix}.{segment}")
    }
}

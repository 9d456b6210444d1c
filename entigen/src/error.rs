use entigen_core::{BuildError, ConfigError};
use entigen_ddl::DdlError;

/// Any failure of a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// The specification text is not valid YAML/JSON for an entity.
    Parse(String),
    Build(BuildError),
    Ddl(DdlError),
    Config(ConfigError),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Parse(msg) => write!(f, "Invalid entity specification: {msg}"),
            GenerateError::Build(e) => write!(f, "{e}"),
            GenerateError::Ddl(e) => write!(f, "{e}"),
            GenerateError::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Parse(_) => None,
            GenerateError::Build(e) => Some(e),
            GenerateError::Ddl(e) => Some(e),
            GenerateError::Config(e) => Some(e),
        }
    }
}

impl From<BuildError> for GenerateError {
    fn from(e: BuildError) -> Self {
        GenerateError::Build(e)
    }
}

impl From<DdlError> for GenerateError {
    fn from(e: DdlError) -> Self {
        GenerateError::Ddl(e)
    }
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

impl From<serde_yaml::Error> for GenerateError {
    fn from(e: serde_yaml::Error) -> Self {
        GenerateError::Parse(e.to_string())
    }
}

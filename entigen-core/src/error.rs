use serde_json::Value;

/// Errors raised while turning an [`EntitySpecification`](crate::EntitySpecification)
/// into an [`EntityDefinition`](crate::EntityDefinition).
///
/// Construction is all-or-nothing: when one of these is returned no
/// definition exists.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The entity name is not PascalCase.
    InvalidName { name: String, pattern: &'static str },
    /// A column name is not a plain identifier.
    InvalidColumnName { entity: String, column: String },
    /// The same column name appears twice.
    DuplicateColumn { entity: String, column: String },
    /// A column default does not type-check against the declared type.
    InvalidDefault {
        entity: String,
        column: String,
        expected: String,
        found: Value,
    },
    /// A table entity declares no columns.
    EmptyTable { entity: String },
}

impl BuildError {
    /// The entity the error refers to.
    pub fn entity(&self) -> &str {
        match self {
            BuildError::InvalidName { name, .. } => name,
            BuildError::InvalidColumnName { entity, .. }
            | BuildError::DuplicateColumn { entity, .. }
            | BuildError::InvalidDefault { entity, .. }
            | BuildError::EmptyTable { entity } => entity,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::InvalidName { name, pattern } => {
                write!(f, "Invalid entity name '{name}': expected PascalCase matching {pattern}")
            }
            BuildError::InvalidColumnName { entity, column } => {
                write!(f, "Invalid column name '{column}' in entity '{entity}'")
            }
            BuildError::DuplicateColumn { entity, column } => {
                write!(f, "Duplicate column '{column}' in entity '{entity}'")
            }
            BuildError::InvalidDefault {
                entity,
                column,
                expected,
                found,
            } => write!(
                f,
                "Invalid default for column '{column}' in entity '{entity}': declared type {expected} does not accept {found}"
            ),
            BuildError::EmptyTable { entity } => {
                write!(f, "Table entity '{entity}' must declare at least one column")
            }
        }
    }
}

impl std::error::Error for BuildError {}

use crate::dialect::Dialect;

/// Errors that can occur while generating DDL.
///
/// Generation is all-or-nothing: no partial statement is returned alongside
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlError {
    /// The requested dialect name is not one of [`Dialect::ALL`].
    UnsupportedDialect(String),
    /// A column type has no representation in the dialect.
    UnsupportedColumnType {
        entity: String,
        column: String,
        column_type: String,
        dialect: Dialect,
    },
}

impl std::fmt::Display for DdlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DdlError::UnsupportedDialect(name) => write!(
                f,
                "Unsupported SQL dialect '{name}': expected one of postgres, sqlite, mysql"
            ),
            DdlError::UnsupportedColumnType {
                entity,
                column,
                column_type,
                dialect,
            } => write!(
                f,
                "Column '{column}' of entity '{entity}' has type {column_type}, which {dialect} cannot represent"
            ),
        }
    }
}

impl std::error::Error for DdlError {}

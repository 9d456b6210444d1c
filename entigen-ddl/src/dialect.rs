use std::fmt;
use std::str::FromStr;

use entigen_core::{ColumnType, PrimitiveType};
use serde::{Deserialize, Serialize};

use crate::error::DdlError;

/// Target SQL dialect.
///
/// Array capability differs per dialect and is part of the contract:
///
/// | Dialect    | Scalar arrays        | Nested arrays            | Booleans       |
/// |------------|----------------------|--------------------------|----------------|
/// | `Postgres` | native (`TEXT[]`)    | unsupported (error)      | `BOOLEAN`      |
/// | `Sqlite`   | JSON text (`TEXT`)   | JSON text (`TEXT`)       | `INTEGER` 0/1  |
/// | `MySql`    | `JSON`               | `JSON`                   | `BOOLEAN`      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "postgres", alias = "postgresql")]
    Postgres,
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::Sqlite, Dialect::MySql];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::MySql => "mysql",
        }
    }

    fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Sqlite | Dialect::Postgres => '"',
        }
    }

    /// Quote an identifier, doubling any embedded quote character.
    pub fn quote_identifier(self, ident: &str) -> String {
        let quote = self.quote_char();
        let escaped = ident.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Whether array-of columns map to a native array type.
    pub fn supports_native_arrays(self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    /// Native type name of a primitive.
    pub fn primitive_type(self, primitive: PrimitiveType) -> &'static str {
        match (self, primitive) {
            (Dialect::Postgres, PrimitiveType::String) => "TEXT",
            (Dialect::Postgres, PrimitiveType::Integer) => "BIGINT",
            (Dialect::Postgres, PrimitiveType::Number) => "DOUBLE PRECISION",
            (Dialect::Postgres, PrimitiveType::Boolean) => "BOOLEAN",
            (Dialect::Postgres, PrimitiveType::Date) => "TIMESTAMPTZ",
            (Dialect::Postgres, PrimitiveType::Json) => "JSONB",

            (Dialect::Sqlite, PrimitiveType::String) => "TEXT",
            (Dialect::Sqlite, PrimitiveType::Integer) => "INTEGER",
            (Dialect::Sqlite, PrimitiveType::Number) => "REAL",
            (Dialect::Sqlite, PrimitiveType::Boolean) => "INTEGER",
            (Dialect::Sqlite, PrimitiveType::Date) => "TEXT",
            (Dialect::Sqlite, PrimitiveType::Json) => "TEXT",

            (Dialect::MySql, PrimitiveType::String) => "TEXT",
            (Dialect::MySql, PrimitiveType::Integer) => "BIGINT",
            (Dialect::MySql, PrimitiveType::Number) => "DOUBLE",
            (Dialect::MySql, PrimitiveType::Boolean) => "BOOLEAN",
            (Dialect::MySql, PrimitiveType::Date) => "DATETIME(3)",
            (Dialect::MySql, PrimitiveType::Json) => "JSON",
        }
    }

    /// Native type name of a column type, `None` when the dialect cannot
    /// represent it.
    pub fn column_type(self, column_type: &ColumnType) -> Option<String> {
        match column_type {
            ColumnType::Primitive(p) => Some(self.primitive_type(*p).to_string()),
            ColumnType::Array { items } => match self {
                Dialect::Postgres => match items.as_ref() {
                    ColumnType::Primitive(p) => Some(format!("{}[]", self.primitive_type(*p))),
                    ColumnType::Array { .. } => None,
                },
                Dialect::Sqlite => Some("TEXT".to_string()),
                Dialect::MySql => Some("JSON".to_string()),
            },
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::MySql),
            _ => Err(DdlError::UnsupportedDialect(s.to_string())),
        }
    }
}

//! `DEFAULT` clause literals.
//!
//! Inputs have already been type-checked by the entity builder, so every
//! function here is infallible.

use chrono::{DateTime, Utc};
use entigen_core::{ColumnType, PrimitiveType};
use serde_json::Value;

use crate::dialect::Dialect;

/// Render `value` as a default literal for a column of `column_type`.
///
/// `sql_type` is the already-resolved native column type, used for the
/// postgres array cast.
pub(crate) fn default_literal(
    dialect: Dialect,
    column_type: &ColumnType,
    sql_type: &str,
    value: &Value,
) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }
    match column_type {
        ColumnType::Primitive(p) => primitive_literal(dialect, *p, value),
        ColumnType::Array { items } => match dialect {
            Dialect::Postgres => {
                let elements: Vec<String> = value
                    .as_array()
                    .map(|elements| {
                        elements
                            .iter()
                            .map(|e| default_literal(dialect, items, sql_type, e))
                            .collect()
                    })
                    .unwrap_or_default();
                format!("ARRAY[{}]::{sql_type}", elements.join(", "))
            }
            Dialect::Sqlite => quote_string(dialect, &value.to_string()),
            Dialect::MySql => format!("({})", quote_string(dialect, &value.to_string())),
        },
    }
}

fn primitive_literal(dialect: Dialect, primitive: PrimitiveType, value: &Value) -> String {
    match primitive {
        PrimitiveType::String => {
            let quoted = quote_string(dialect, value.as_str().unwrap_or_default());
            match dialect {
                // TEXT columns only take expression defaults.
                Dialect::MySql => format!("({quoted})"),
                Dialect::Postgres | Dialect::Sqlite => quoted,
            }
        }
        PrimitiveType::Integer | PrimitiveType::Number => value.to_string(),
        PrimitiveType::Boolean => {
            let b = value.as_bool().unwrap_or_default();
            match (dialect, b) {
                (Dialect::Sqlite, true) => "1".to_string(),
                (Dialect::Sqlite, false) => "0".to_string(),
                (Dialect::Postgres | Dialect::MySql, true) => "TRUE".to_string(),
                (Dialect::Postgres | Dialect::MySql, false) => "FALSE".to_string(),
            }
        }
        PrimitiveType::Date => {
            let raw = value.as_str().unwrap_or_default();
            match dialect {
                Dialect::MySql => quote_string(dialect, &mysql_datetime(raw)),
                Dialect::Postgres | Dialect::Sqlite => quote_string(dialect, raw),
            }
        }
        PrimitiveType::Json => {
            let quoted = quote_string(dialect, &value.to_string());
            match dialect {
                Dialect::MySql => format!("({quoted})"),
                Dialect::Postgres | Dialect::Sqlite => quoted,
            }
        }
    }
}

/// Single-quote a string literal. MySQL additionally treats `\` as an escape.
fn quote_string(dialect: Dialect, s: &str) -> String {
    let mut escaped = s.replace('\'', "''");
    if dialect == Dialect::MySql {
        escaped = escaped.replace('\\', "\\\\");
    }
    format!("'{escaped}'")
}

/// `DATETIME(3)` has no zone: normalize the instant to UTC.
fn mysql_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S%.3f")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

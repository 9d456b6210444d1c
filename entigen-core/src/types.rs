use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of primitive column types.
///
/// Every generator matches on this enum exhaustively, so adding a variant is a
/// compile error in each backend until it is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    String,
    /// Whole numbers (`i64` / `u64` range).
    #[serde(alias = "int")]
    Integer,
    /// Any JSON number, including fractional values.
    Number,
    #[serde(alias = "bool")]
    Boolean,
    /// ISO-8601 / RFC 3339 instant carried as a string.
    Date,
    /// Opaque structured value.
    Json,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 6] = [
        PrimitiveType::String,
        PrimitiveType::Integer,
        PrimitiveType::Number,
        PrimitiveType::Boolean,
        PrimitiveType::Date,
        PrimitiveType::Json,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Date => "date",
            PrimitiveType::Json => "json",
        }
    }

    /// Parse a primitive from its name. Accepts the `int` and `bool` aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(PrimitiveType::String),
            "integer" | "int" => Some(PrimitiveType::Integer),
            "number" => Some(PrimitiveType::Number),
            "boolean" | "bool" => Some(PrimitiveType::Boolean),
            "date" => Some(PrimitiveType::Date),
            "json" => Some(PrimitiveType::Json),
            _ => None,
        }
    }

    /// Whether a JSON literal is a value of this primitive.
    ///
    /// `null` is never accepted here (except by `json`); nullability is a
    /// column-level concern.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            PrimitiveType::String => value.is_string(),
            // Every backend stores integers as signed 64-bit.
            PrimitiveType::Integer => value.is_i64(),
            PrimitiveType::Number => value.is_number(),
            PrimitiveType::Boolean => value.is_boolean(),
            PrimitiveType::Date => value.as_str().is_some_and(is_iso_instant),
            PrimitiveType::Json => true,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column type: a primitive, or an array wrapping exactly one column type.
///
/// Serialized as the primitive name (`"string"`) or as `{ "arrayOf": <type> }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnType {
    Primitive(PrimitiveType),
    Array {
        #[serde(rename = "arrayOf")]
        items: Box<ColumnType>,
    },
}

impl ColumnType {
    /// Wrap a column type into an array-of type.
    pub fn array_of(items: impl Into<ColumnType>) -> Self {
        ColumnType::Array {
            items: Box::new(items.into()),
        }
    }

    /// Whether this is an array-of wrapper rather than a primitive.
    pub fn is_array_column_type(&self) -> bool {
        matches!(self, ColumnType::Array { .. })
    }

    /// The wrapped element type of an array-of column, `None` for primitives.
    pub fn element_type(&self) -> Option<&ColumnType> {
        match self {
            ColumnType::Array { items } => Some(items),
            ColumnType::Primitive(_) => None,
        }
    }

    /// The primitive, `None` for array-of types.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            ColumnType::Primitive(p) => Some(*p),
            ColumnType::Array { .. } => None,
        }
    }

    /// An array whose element type is itself an array.
    pub fn is_nested_array(&self) -> bool {
        self.element_type()
            .is_some_and(ColumnType::is_array_column_type)
    }

    /// The primitive at the bottom of any number of array wrappers.
    pub fn innermost(&self) -> PrimitiveType {
        match self {
            ColumnType::Primitive(p) => *p,
            ColumnType::Array { items } => items.innermost(),
        }
    }

    /// Type-check a JSON literal against this column type.
    ///
    /// Array types only accept array literals, each element checked against
    /// the element type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ColumnType::Primitive(p) => p.accepts(value),
            ColumnType::Array { items } => match value {
                Value::Array(elements) => elements.iter().all(|e| items.accepts(e)),
                _ => false,
            },
        }
    }
}

impl From<PrimitiveType> for ColumnType {
    fn from(p: PrimitiveType) -> Self {
        ColumnType::Primitive(p)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Primitive(p) => write!(f, "{p}"),
            ColumnType::Array { items } => write!(f, "array of {items}"),
        }
    }
}

/// RFC 3339 check used for `date` literals.
pub fn is_iso_instant(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_name() {
        assert_eq!(PrimitiveType::from_name("string"), Some(PrimitiveType::String));
        assert_eq!(PrimitiveType::from_name("int"), Some(PrimitiveType::Integer));
        assert_eq!(PrimitiveType::from_name("bool"), Some(PrimitiveType::Boolean));
        assert_eq!(PrimitiveType::from_name("uuid"), None);
    }

    #[test]
    fn test_array_discriminator() {
        let tags = ColumnType::array_of(PrimitiveType::String);
        assert!(tags.is_array_column_type());
        assert_eq!(tags.element_type(), Some(&ColumnType::Primitive(PrimitiveType::String)));
        assert!(!tags.is_nested_array());

        let scalar = ColumnType::from(PrimitiveType::Date);
        assert!(!scalar.is_array_column_type());
        assert!(scalar.element_type().is_none());

        let grid = ColumnType::array_of(ColumnType::array_of(PrimitiveType::Integer));
        assert!(grid.is_nested_array());
        assert_eq!(grid.innermost(), PrimitiveType::Integer);
    }

    #[test]
    fn test_literal_checks() {
        assert!(PrimitiveType::Integer.accepts(&json!(5)));
        assert!(!PrimitiveType::Integer.accepts(&json!(5.5)));
        assert!(PrimitiveType::Integer.accepts(&json!(i64::MIN)));
        assert!(!PrimitiveType::Integer.accepts(&json!(u64::MAX)));
        assert!(PrimitiveType::Number.accepts(&json!(5.5)));
        assert!(!PrimitiveType::Number.accepts(&json!("five")));
        assert!(PrimitiveType::Date.accepts(&json!("1970-01-01T00:00:00.000Z")));
        assert!(!PrimitiveType::Date.accepts(&json!("yesterday")));
        assert!(PrimitiveType::Json.accepts(&json!({"a": [1, 2]})));
        assert!(!PrimitiveType::String.accepts(&Value::Null));
    }

    #[test]
    fn test_array_literal_checks() {
        let tags = ColumnType::array_of(PrimitiveType::String);
        assert!(tags.accepts(&json!([])));
        assert!(tags.accepts(&json!(["a", "b"])));
        assert!(!tags.accepts(&json!(["a", 1])));
        assert!(!tags.accepts(&json!("a")));
    }

    #[test]
    fn test_display() {
        let grid = ColumnType::array_of(ColumnType::array_of(PrimitiveType::Json));
        assert_eq!(grid.to_string(), "array of array of json");
    }

    #[test]
    fn test_serde_shape() {
        let parsed: ColumnType = serde_json::from_value(json!({"arrayOf": "json"})).unwrap();
        assert_eq!(parsed, ColumnType::array_of(PrimitiveType::Json));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!({"arrayOf": "json"}));

        let parsed: ColumnType = serde_json::from_value(json!("bool")).unwrap();
        assert_eq!(parsed, ColumnType::Primitive(PrimitiveType::Boolean));
    }
}

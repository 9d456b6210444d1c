use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::ColumnType;

/// Raw column definition, as written in an entity specification.
///
/// `optional` and `nullable` are independent: `optional` removes the column
/// from the required set, `nullable` lets a present value be `null`.
///
/// Unknown keys are rejected, so a misspelt flag (`nulable: true`) fails to
/// parse instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDefinition {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub nullable: bool,
    /// `default: null` is kept as `Some(Value::Null)` and checked like any
    /// other default.
    #[serde(
        default,
        deserialize_with = "present_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColumnDefinition {
    pub fn new(column_type: impl Into<ColumnType>) -> Self {
        Self {
            column_type: column_type.into(),
            optional: false,
            nullable: false,
            default: None,
            description: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

fn present_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Ordered column mapping of a specification.
///
/// Insertion order is the emitted column order in every artifact. Duplicate
/// names are kept here and rejected when the entity is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap(Vec<(String, ColumnDefinition)>);

impl ColumnMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: &str, definition: ColumnDefinition) {
        self.0.push((name.to_string(), definition));
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDefinition> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDefinition)> {
        self.0.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ColumnMap {
    type Item = (String, ColumnDefinition);
    type IntoIter = std::vec::IntoIter<(String, ColumnDefinition)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, ColumnDefinition)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (String, ColumnDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ColumnMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, definition) in &self.0 {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnMapVisitor;

        impl<'de> Visitor<'de> for ColumnMapVisitor {
            type Value = ColumnMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column name to column definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColumnMap, A::Error> {
                let mut columns = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, definition)) = access.next_entry::<String, ColumnDefinition>()? {
                    columns.push((name, definition));
                }
                Ok(ColumnMap(columns))
            }
        }

        deserializer.deserialize_map(ColumnMapVisitor)
    }
}

/// A validated, read-only column of an [`EntityDefinition`](crate::EntityDefinition).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    #[serde(rename = "type")]
    column_type: ColumnType,
    optional: bool,
    nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Column {
    pub(crate) fn from_definition(name: String, definition: ColumnDefinition) -> Self {
        let ColumnDefinition {
            column_type,
            optional,
            nullable,
            default,
            description,
        } = definition;
        Self {
            name,
            column_type,
            optional,
            nullable,
            default,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> &ColumnType {
        &self.column_type
    }

    /// The declared `optional` flag.
    pub fn optional(&self) -> bool {
        self.optional
    }

    /// The declared `nullable` flag.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether a record must carry this column. Shared by every generator.
    pub fn is_required(&self) -> bool {
        !self.optional
    }

    /// Whether the stored value may be NULL. Shared by every generator.
    ///
    /// An omitted optional column persists as NULL, so optional implies
    /// nullable storage.
    pub fn accepts_null(&self) -> bool {
        self.nullable || self.optional
    }
}

use entigen_core::{ColumnType, EntityDefinition, PrimitiveType};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Executable schema tree derived from an entity definition.
///
/// Primitive nodes mirror [`PrimitiveType`] one to one; array-of columns
/// become [`SchemaNode::Array`] recursively; the entity itself is the root
/// [`SchemaNode::Object`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    String,
    Integer,
    Number,
    Boolean,
    Date,
    Json,
    Array { items: Box<SchemaNode> },
    Object(ObjectSchema),
}

/// An object node: the fields of one entity in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    pub name: String,
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    pub node: SchemaNode,
    pub required: bool,
    pub nullable: bool,
    /// Applied when an optional field is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl SchemaNode {
    /// Node validating values of `column_type`.
    pub fn for_column_type(column_type: &ColumnType) -> Self {
        match column_type {
            ColumnType::Primitive(p) => Self::for_primitive(*p),
            ColumnType::Array { items } => SchemaNode::Array {
                items: Box::new(Self::for_column_type(items)),
            },
        }
    }

    fn for_primitive(primitive: PrimitiveType) -> Self {
        match primitive {
            PrimitiveType::String => SchemaNode::String,
            PrimitiveType::Integer => SchemaNode::Integer,
            PrimitiveType::Number => SchemaNode::Number,
            PrimitiveType::Boolean => SchemaNode::Boolean,
            PrimitiveType::Date => SchemaNode::Date,
            PrimitiveType::Json => SchemaNode::Json,
        }
    }

    /// The primitive this node checks, `None` for arrays and objects.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            SchemaNode::String => Some(PrimitiveType::String),
            SchemaNode::Integer => Some(PrimitiveType::Integer),
            SchemaNode::Number => Some(PrimitiveType::Number),
            SchemaNode::Boolean => Some(PrimitiveType::Boolean),
            SchemaNode::Date => Some(PrimitiveType::Date),
            SchemaNode::Json => Some(PrimitiveType::Json),
            SchemaNode::Array { .. } | SchemaNode::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            SchemaNode::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl ObjectSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}

/// Derive the validation schema of an entity.
///
/// `required` comes from [`Column::is_required`](entigen_core::Column::is_required)
/// and `nullable` from [`Column::accepts_null`](entigen_core::Column::accepts_null),
/// the same classification the DDL and API document backends read.
pub fn to_validation_schema(entity: &EntityDefinition) -> SchemaNode {
    let fields: Vec<FieldSchema> = entity
        .columns()
        .iter()
        .map(|column| FieldSchema {
            name: column.name().to_string(),
            node: SchemaNode::for_column_type(column.column_type()),
            required: column.is_required(),
            nullable: column.accepts_null(),
            default: column.default().cloned(),
        })
        .collect();

    debug!(entity = entity.name(), fields = fields.len(), "Generated validation schema");
    SchemaNode::Object(ObjectSchema {
        name: entity.name().to_string(),
        fields,
    })
}

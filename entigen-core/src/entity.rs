use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnDefinition, ColumnMap};
use crate::error::BuildError;

/// Pass-through flags consumed by tooling outside the generators
/// (documentation and smoke-test scaffolding). No generator reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    #[serde(default)]
    pub doc: bool,
    #[serde(default)]
    pub test: bool,
}

/// Raw entity description, freely mutable until it is built.
///
/// # Example
///
/// ```
/// use entigen_core::{ColumnDefinition, ColumnType, EntitySpecification, PrimitiveType};
///
/// let user = EntitySpecification::new("User")
///     .table(true)
///     .column("id", ColumnDefinition::new(PrimitiveType::String))
///     .column("tags", ColumnDefinition::new(ColumnType::array_of(PrimitiveType::String)).optional())
///     .build()
///     .unwrap();
///
/// assert_eq!(user.name(), "User");
/// assert_eq!(user.columns().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSpecification")]
pub struct EntitySpecification {
    pub name: String,
    pub table: bool,
    pub columns: ColumnMap,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Wire shape of [`EntitySpecification`]. `flatten` cannot be combined with
/// `deny_unknown_fields`, so the metadata flags are spelled out here.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpecification {
    name: String,
    #[serde(default)]
    table: bool,
    #[serde(default)]
    columns: ColumnMap,
    #[serde(default)]
    doc: bool,
    #[serde(default)]
    test: bool,
}

impl From<RawSpecification> for EntitySpecification {
    fn from(raw: RawSpecification) -> Self {
        Self {
            name: raw.name,
            table: raw.table,
            columns: raw.columns,
            metadata: EntityMetadata {
                doc: raw.doc,
                test: raw.test,
            },
        }
    }
}

impl EntitySpecification {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            table: false,
            columns: ColumnMap::new(),
            metadata: EntityMetadata::default(),
        }
    }

    pub fn table(mut self, table: bool) -> Self {
        self.table = table;
        self
    }

    pub fn column(mut self, name: &str, definition: ColumnDefinition) -> Self {
        self.columns.insert(name, definition);
        self
    }

    pub fn metadata(mut self, metadata: EntityMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Validate and freeze. See [`crate::builder::build`].
    pub fn build(self) -> Result<EntityDefinition, BuildError> {
        crate::builder::build(self)
    }
}

/// The frozen, validated entity every generator reads from.
///
/// Only obtainable through [`build`](crate::builder::build), which consumes the
/// specification. Fields are private and no accessor hands out `&mut`, so
/// neither the entity, its column list, nor any column can change after
/// construction. The value is `Send + Sync` and can be shared across threads
/// without locking.
///
/// ```compile_fail
/// # use entigen_core::{ColumnDefinition, EntitySpecification, PrimitiveType};
/// let mut user = EntitySpecification::new("User")
///     .column("id", ColumnDefinition::new(PrimitiveType::String))
///     .build()
///     .unwrap();
/// user.name = "Account".to_string();
/// ```
///
/// ```compile_fail
/// # use entigen_core::{Column, ColumnDefinition, EntitySpecification, PrimitiveType};
/// let mut user = EntitySpecification::new("User")
///     .column("id", ColumnDefinition::new(PrimitiveType::String))
///     .build()
///     .unwrap();
/// let columns: &mut [Column] = user.columns();
/// ```
///
/// ```compile_fail
/// # use entigen_core::{ColumnDefinition, EntitySpecification, PrimitiveType};
/// let mut user = EntitySpecification::new("User")
///     .column("id", ColumnDefinition::new(PrimitiveType::String))
///     .build()
///     .unwrap();
/// user.columns()[0].nullable = true;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDefinition {
    name: String,
    table: bool,
    columns: Box<[Column]>,
    metadata: EntityMetadata,
}

impl EntityDefinition {
    pub(crate) fn new(
        name: String,
        table: bool,
        columns: Box<[Column]>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            name,
            table,
            columns,
            metadata,
        }
    }

    /// Entity name; also the table, schema type and API component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the entity materializes as a persisted table.
    pub fn is_table(&self) -> bool {
        self.table
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    /// Names of the required columns, in declaration order.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.is_required())
            .map(Column::name)
    }
}

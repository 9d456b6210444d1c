//! Core of entigen: the column type taxonomy, the raw entity specification,
//! the builder that validates it, and the frozen [`EntityDefinition`] every
//! generator reads from.
//!
//! ```
//! use entigen_core::prelude::*;
//!
//! let user = EntitySpecification::new("User")
//!     .table(true)
//!     .column("id", ColumnDefinition::new(PrimitiveType::String))
//!     .build()?;
//! assert!(user.is_table());
//! # Ok::<(), entigen_core::BuildError>(())
//! ```

pub mod builder;
pub mod cache;
pub mod column;
pub mod config;
pub mod entity;
pub mod error;
pub mod layers;
pub mod naming;
pub mod prelude;
pub mod types;

pub use builder::build;
pub use cache::DefinitionCache;
pub use column::{Column, ColumnDefinition, ColumnMap};
pub use config::{ConfigError, ConfigValue, EntigenConfig, FromConfigValue};
pub use entity::{EntityDefinition, EntityMetadata, EntitySpecification};
pub use error::BuildError;
pub use layers::{init_tracing, init_tracing_to, init_tracing_with};
pub use naming::PASCAL_CASE_PATTERN;
pub use types::{ColumnType, PrimitiveType};

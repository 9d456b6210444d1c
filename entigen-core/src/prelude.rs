//! Re-exports of the types needed to declare and build entities.
//!
//! ```
//! use entigen_core::prelude::*;
//! ```

pub use crate::builder::build;
pub use crate::column::{Column, ColumnDefinition};
pub use crate::entity::{EntityDefinition, EntityMetadata, EntitySpecification};
pub use crate::error::BuildError;
pub use crate::types::{ColumnType, PrimitiveType};

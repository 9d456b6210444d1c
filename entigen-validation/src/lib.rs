//! Validation schema backend.
//!
//! [`to_validation_schema`] derives a [`SchemaNode`] tree from a frozen
//! entity definition; [`SchemaNode::validate`] runs it against a JSON record.
//!
//! ```
//! use entigen_core::prelude::*;
//! use entigen_validation::to_validation_schema;
//! use serde_json::json;
//!
//! let post = EntitySpecification::new("Post")
//!     .column("title", ColumnDefinition::new(PrimitiveType::String))
//!     .column("draft", ColumnDefinition::new(PrimitiveType::Boolean).optional().with_default(true))
//!     .build()
//!     .unwrap();
//!
//! let schema = to_validation_schema(&post);
//! let record = schema.validate(&json!({"title": "Hello"})).unwrap();
//! assert_eq!(record, json!({"title": "Hello", "draft": true}));
//! ```

pub mod report;
pub mod schema;
mod validate;

pub use report::{FieldError, ValidationReport};
pub use schema::{to_validation_schema, FieldSchema, ObjectSchema, SchemaNode};

//! OpenAPI backend.
//!
//! [`to_api_document`] turns one entity into a component schema;
//! [`SchemaRegistry`] and [`build_spec`] merge many of them into a complete
//! document.

mod builder;
pub mod document;
pub mod options;
pub mod schema;

pub use builder::{build_spec, OpenApiConfig};
pub use document::{to_api_document, ApiDocument};
pub use options::{DocumentOptions, OpenApiVersion};
pub use schema::{SchemaProvider, SchemaRegistry};

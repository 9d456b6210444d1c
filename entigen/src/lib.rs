//! entigen: one entity description, three consistent artifacts.
//!
//! This facade crate re-exports every entigen sub-crate through a single
//! dependency and adds the [`Pipeline`] that runs all backends at once.
//!
//! ```
//! use entigen::prelude::*;
//!
//! let spec = load_specification(r#"
//! name: User
//! table: true
//! columns:
//!   id: { type: string }
//!   settings: { type: { arrayOf: json }, optional: true }
//! "#).unwrap();
//!
//! let artifacts = Pipeline::default().generate(spec).unwrap();
//! assert!(artifacts.ddl_for(Dialect::Postgres).unwrap().contains("\"settings\" JSONB[]"));
//! assert_eq!(artifacts.document.required_fields(), vec!["id"]);
//! ```
//!
//! | Module        | Crate                 | Artifact                  |
//! |---------------|-----------------------|---------------------------|
//! | (top level)   | `entigen-core`        | entity definition         |
//! | `ddl`         | `entigen-ddl`         | `CREATE TABLE` statements |
//! | `validation`  | `entigen-validation`  | executable record schema  |
//! | `openapi`     | `entigen-openapi`     | OpenAPI component         |

pub mod error;
pub mod pipeline;
pub mod settings;

// Re-export everything from entigen-core at the top level for convenience.
pub use entigen_core::*;

pub use entigen_ddl as ddl;
pub use entigen_openapi as openapi;
pub use entigen_validation as validation;

pub use error::GenerateError;
pub use pipeline::{load_specification, Artifacts, Pipeline};
pub use settings::GenerationConfig;

/// Unified prelude: import everything with `use entigen::prelude::*`.
pub mod prelude {
    pub use entigen_core::prelude::*;
    pub use entigen_ddl::prelude::*;
    pub use entigen_openapi::{to_api_document, ApiDocument, DocumentOptions, OpenApiVersion};
    pub use entigen_validation::{to_validation_schema, SchemaNode, ValidationReport};

    pub use crate::{load_specification, Artifacts, GenerateError, GenerationConfig, Pipeline};
}

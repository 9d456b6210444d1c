//! SQL DDL backend.
//!
//! Turns a frozen [`EntityDefinition`](entigen_core::EntityDefinition) into a
//! `CREATE TABLE` statement. Columns keep their declared order; a column is
//! `NOT NULL` unless it is nullable or optional.

pub mod dialect;
pub mod error;
pub mod generator;
mod literal;

pub use dialect::Dialect;
pub use error::DdlError;
pub use generator::{to_ddl, to_migration, DdlGenerator};

pub mod prelude {
    //! Re-exports of the most commonly used DDL types.
    pub use crate::{to_ddl, to_migration, DdlError, DdlGenerator, Dialect};
}

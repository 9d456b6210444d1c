use entigen_core::{Column, EntityDefinition};
use tracing::{debug, trace};

use crate::dialect::Dialect;
use crate::error::DdlError;
use crate::literal::default_literal;

/// Renders `CREATE TABLE` statements for one dialect.
///
/// Output is a pure function of the entity and the generator settings:
/// calling [`generate`](Self::generate) twice yields identical text.
///
/// ```
/// use entigen_core::prelude::*;
/// use entigen_ddl::{Dialect, DdlGenerator};
///
/// let post = EntitySpecification::new("Post")
///     .table(true)
///     .column("id", ColumnDefinition::new(PrimitiveType::String))
///     .build()
///     .unwrap();
///
/// let sql = DdlGenerator::new(Dialect::Sqlite).generate(&post).unwrap();
/// assert_eq!(sql, "CREATE TABLE \"Post\" (\n  \"id\" TEXT NOT NULL\n);");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdlGenerator {
    dialect: Dialect,
    if_not_exists: bool,
}

impl DdlGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            if_not_exists: false,
        }
    }

    /// Emit `CREATE TABLE IF NOT EXISTS`.
    pub fn if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Render one entity. Non-table entities produce an empty string.
    pub fn generate(&self, entity: &EntityDefinition) -> Result<String, DdlError> {
        if !entity.is_table() {
            debug!(entity = entity.name(), "Skipping non-table entity");
            return Ok(String::new());
        }

        let lines = entity
            .columns()
            .iter()
            .map(|column| self.column_line(entity.name(), column))
            .collect::<Result<Vec<_>, _>>()?;

        let keyword = if self.if_not_exists {
            "CREATE TABLE IF NOT EXISTS"
        } else {
            "CREATE TABLE"
        };
        let sql = format!(
            "{keyword} {} (\n{}\n);",
            self.dialect.quote_identifier(entity.name()),
            lines.join(",\n")
        );

        debug!(
            entity = entity.name(),
            dialect = %self.dialect,
            columns = lines.len(),
            "Generated DDL"
        );
        Ok(sql)
    }

    /// Render several entities, skipping non-table ones.
    pub fn generate_all<'a, I>(&self, entities: I) -> Result<Vec<String>, DdlError>
    where
        I: IntoIterator<Item = &'a EntityDefinition>,
    {
        let mut statements = Vec::new();
        for entity in entities {
            let sql = self.generate(entity)?;
            if !sql.is_empty() {
                statements.push(sql);
            }
        }
        Ok(statements)
    }

    /// Same as [`to_migration`] with this generator's settings.
    pub fn migration<'a, I>(&self, entities: I) -> Result<String, DdlError>
    where
        I: IntoIterator<Item = &'a EntityDefinition>,
    {
        migration_script(self, entities)
    }

    fn column_line(&self, entity: &str, column: &Column) -> Result<String, DdlError> {
        let sql_type = self.dialect.column_type(column.column_type()).ok_or_else(|| {
            DdlError::UnsupportedColumnType {
                entity: entity.to_string(),
                column: column.name().to_string(),
                column_type: column.column_type().to_string(),
                dialect: self.dialect,
            }
        })?;

        let mut line = format!("  {} {sql_type}", self.dialect.quote_identifier(column.name()));
        if !column.accepts_null() {
            line.push_str(" NOT NULL");
        }
        if let Some(value) = column.default() {
            line.push_str(" DEFAULT ");
            line.push_str(&default_literal(
                self.dialect,
                column.column_type(),
                &sql_type,
                value,
            ));
        }
        trace!(column = column.name(), sql = %line.trim_start(), "Column rendered");
        Ok(line)
    }
}

/// Render one entity as a `CREATE TABLE` statement in `dialect`.
pub fn to_ddl(entity: &EntityDefinition, dialect: Dialect) -> Result<String, DdlError> {
    DdlGenerator::new(dialect).generate(entity)
}

/// Render several entities as a single migration script.
///
/// Statements are separated by a blank line and the script ends with a
/// newline. An input with no table entities yields an empty string.
pub fn to_migration<'a, I>(entities: I, dialect: Dialect) -> Result<String, DdlError>
where
    I: IntoIterator<Item = &'a EntityDefinition>,
{
    migration_script(&DdlGenerator::new(dialect), entities)
}

fn migration_script<'a, I>(
    generator: &DdlGenerator,
    entities: I,
) -> Result<String, DdlError>
where
    I: IntoIterator<Item = &'a EntityDefinition>,
{
    let statements = generator.generate_all(entities)?;
    if statements.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("{}\n", statements.join("\n\n")))
}

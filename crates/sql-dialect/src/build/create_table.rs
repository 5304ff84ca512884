//! The `CREATE TABLE` statement builder.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use crate::build::join_clauses;
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::{ClauseOptions, Schemas};
use crate::types::{ConstraintSpec, FieldSpec, MetaKind};

#[derive(Debug)]
pub struct CreateTable<'a> {
    dialect: &'a Dialect,
    table: Option<String>,
    if_not_exists: bool,
    columns: Vec<FieldSpec>,
    constraints: Vec<ConstraintSpec>,
    meta: IndexMap<String, Value>,
}

impl<'a> CreateTable<'a> {
    pub fn new(dialect: &'a Dialect) -> CreateTable<'a> {
        CreateTable {
            dialect,
            table: None,
            if_not_exists: false,
            columns: Vec::new(),
            constraints: Vec::new(),
            meta: IndexMap::new(),
        }
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn column(mut self, spec: FieldSpec) -> Self {
        self.columns.push(spec);
        self
    }

    pub fn columns(mut self, specs: Vec<FieldSpec>) -> Self {
        self.columns.extend(specs);
        self
    }

    pub fn constraint(mut self, spec: ConstraintSpec) -> Self {
        self.constraints.push(spec);
        self
    }

    pub fn meta(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(name.to_string(), value.into());
        self
    }

    /// The abstract type of a declared column, `string` when the spec
    /// leaves it implicit.
    pub fn column_kind(&self, name: &str) -> Option<String> {
        self.columns
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind.clone().unwrap_or_else(|| "string".to_string()))
    }

    /// The field-to-type lookup this table declares, as consumed by the
    /// casting hook while compiling check expressions.
    fn schemas(&self) -> Schemas {
        let mut fields = HashMap::new();
        for spec in &self.columns {
            fields.insert(
                spec.name.clone(),
                spec.kind.clone().unwrap_or_else(|| "string".to_string()),
            );
        }
        let mut schemas = HashMap::new();
        schemas.insert(String::new(), fields);
        schemas
    }

    pub fn to_sql(&self) -> Result<String> {
        let table = self
            .table
            .as_deref()
            .ok_or(DialectError::MissingTableName("CREATE TABLE"))?;
        if self.columns.is_empty() {
            return Err(DialectError::MissingColumns("CREATE TABLE"));
        }

        let options = ClauseOptions {
            schemas: Some(self.schemas()),
            ..ClauseOptions::default()
        };
        let mut body = Vec::with_capacity(self.columns.len() + self.constraints.len() + 1);
        for spec in &self.columns {
            body.push(self.dialect.column(spec)?);
        }
        for spec in &self.constraints {
            body.push(self.dialect.constraint(&spec.kind, spec, &options)?);
        }

        // Serial columns imply a primary key unless one was declared.
        if !self.constraints.iter().any(|spec| spec.kind == "primary") {
            let mut primary = ConstraintSpec::kind("primary");
            for spec in &self.columns {
                if self.dialect.field(spec)?.serial {
                    primary = primary.column(&spec.name);
                }
            }
            if !primary.columns.is_empty() {
                body.push(self.dialect.constraint("primary", &primary, &options)?);
            }
        }

        let clauses = vec![
            "CREATE TABLE".to_string(),
            if self.if_not_exists {
                "IF NOT EXISTS".to_string()
            } else {
                String::new()
            },
            format!("{} ({})", self.dialect.name(table), body.join(", ")),
            self.dialect.meta(MetaKind::Table, &self.meta, None),
        ];
        Ok(join_clauses(clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_with_serial_primary_key() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .create_table()
            .table("table1")
            .column(FieldSpec::new("id").kind("serial"))
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"table1\" (\"id\" serial NOT NULL, PRIMARY KEY (\"id\"))"
        );
    }

    #[test]
    fn test_create_table_missing_table() {
        let dialect = Dialect::ansi();
        let err = dialect
            .create_table()
            .column(FieldSpec::new("id"))
            .to_sql()
            .unwrap_err();
        assert_eq!(err, DialectError::MissingTableName("CREATE TABLE"));
    }

    #[test]
    fn test_create_table_missing_columns() {
        let dialect = Dialect::ansi();
        let err = dialect.create_table().table("table1").to_sql().unwrap_err();
        assert_eq!(err, DialectError::MissingColumns("CREATE TABLE"));
    }

    #[test]
    fn test_explicit_primary_suppresses_serial_one() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .create_table()
            .table("table1")
            .column(FieldSpec::new("id").kind("serial"))
            .column(FieldSpec::new("code").kind("string").length(10))
            .constraint(ConstraintSpec::kind("primary").column("code"))
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"table1\" (\"id\" serial NOT NULL, \
             \"code\" varchar(10), PRIMARY KEY (\"code\"))"
        );
    }
}

//! The `DELETE` statement builder.

use crate::ast::Node;
use crate::build::join_clauses;
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::{ClauseOptions, Schemas};

#[derive(Debug)]
pub struct Delete<'a> {
    dialect: &'a Dialect,
    table: Option<String>,
    conditions: Vec<Node>,
    schemas: Option<Schemas>,
}

impl<'a> Delete<'a> {
    pub fn new(dialect: &'a Dialect) -> Delete<'a> {
        Delete {
            dialect,
            table: None,
            conditions: Vec::new(),
            schemas: None,
        }
    }

    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn where_(mut self, conditions: Vec<Node>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    /// Supplies schema hints forwarded to the dialect's casting hook.
    pub fn schemas(mut self, schemas: Schemas) -> Self {
        self.schemas = Some(schemas);
        self
    }

    pub fn to_sql(&self) -> Result<String> {
        let table = self
            .table
            .as_deref()
            .ok_or(DialectError::MissingTableName("DELETE"))?;
        let clauses = vec![
            format!("DELETE FROM {}", self.dialect.name(table)),
            self.dialect.conditions(
                &self.conditions,
                &ClauseOptions {
                    prepend: Some("WHERE".to_string()),
                    schemas: self.schemas.clone(),
                    ..ClauseOptions::default()
                },
            )?,
        ];
        Ok(join_clauses(clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn test_delete() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .delete()
            .from("users")
            .where_(vec![field!("id", 1)])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM \"users\" WHERE \"id\" = 1");
    }

    #[test]
    fn test_delete_without_conditions() {
        let dialect = Dialect::ansi();
        let sql = dialect.delete().from("users").to_sql().unwrap();
        assert_eq!(sql, "DELETE FROM \"users\"");
    }

    #[test]
    fn test_delete_missing_table() {
        let dialect = Dialect::ansi();
        let err = dialect.delete().to_sql().unwrap_err();
        assert_eq!(err, DialectError::MissingTableName("DELETE"));
    }
}

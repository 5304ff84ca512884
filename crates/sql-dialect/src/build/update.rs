//! The `UPDATE` statement builder.

use indexmap::IndexMap;
use serde_json::Value;

use crate::ast::Node;
use crate::build::insert::render_assignment;
use crate::build::join_clauses;
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::{ClauseOptions, RenderState, Schemas};

#[derive(Debug)]
pub struct Update<'a> {
    dialect: &'a Dialect,
    table: Option<String>,
    values: IndexMap<String, Node>,
    conditions: Vec<Node>,
    schemas: Option<Schemas>,
}

impl<'a> Update<'a> {
    pub fn new(dialect: &'a Dialect) -> Update<'a> {
        Update {
            dialect,
            table: None,
            values: IndexMap::new(),
            conditions: Vec::new(),
            schemas: None,
        }
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values
            .insert(field.to_string(), Node::Value(value.into()));
        self
    }

    /// Assigns a compiled expression rather than a literal.
    pub fn set_expr(mut self, field: &str, node: Node) -> Self {
        self.values.insert(field.to_string(), node);
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
            .ok_or(DialectError::MissingTableName("UPDATE"))?;
        if self.values.is_empty() {
            return Err(DialectError::MissingColumns("UPDATE"));
        }
        let mut state = RenderState::with_schemas(self.schemas.as_ref());
        let mut assignments = Vec::with_capacity(self.values.len());
        for (field, node) in &self.values {
            let rendered = render_assignment(self.dialect, field, node, &mut state)?;
            assignments.push(format!("{} = {rendered}", self.dialect.name(field)));
        }
        let clauses = vec![
            format!("UPDATE {}", self.dialect.name(table)),
            format!("SET {}", assignments.join(", ")),
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
    fn test_update() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .update()
            .table("users")
            .set("name", "ada")
            .where_(vec![field!("id", 1)])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "UPDATE \"users\" SET \"name\" = 'ada' WHERE \"id\" = 1");
    }

    #[test]
    fn test_update_without_conditions() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .update()
            .table("users")
            .set("active", false)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "UPDATE \"users\" SET \"active\" = FALSE");
    }

    #[test]
    fn test_update_missing_columns() {
        let dialect = Dialect::ansi();
        let err = dialect.update().table("users").to_sql().unwrap_err();
        assert_eq!(err, DialectError::MissingColumns("UPDATE"));
    }
}

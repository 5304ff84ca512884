//! The `INSERT` statement builder.

use indexmap::IndexMap;
use serde_json::Value;

use crate::ast::Node;
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::names::split_identifier;
use crate::render::{RenderState, Schemas};

#[derive(Debug)]
pub struct Insert<'a> {
    dialect: &'a Dialect,
    table: Option<String>,
    values: IndexMap<String, Node>,
    schemas: Option<Schemas>,
}

impl<'a> Insert<'a> {
    pub fn new(dialect: &'a Dialect) -> Insert<'a> {
        Insert {
            dialect,
            table: None,
            values: IndexMap::new(),
            schemas: None,
        }
    }

    pub fn into(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn value(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.values
            .insert(field.to_string(), Node::Value(value.into()));
        self
    }

    /// Inserts a compiled expression rather than a literal.
    pub fn value_expr(mut self, field: &str, node: Node) -> Self {
        self.values.insert(field.to_string(), node);
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
            .ok_or(DialectError::MissingTableName("INSERT"))?;
        if self.values.is_empty() {
            return Err(DialectError::MissingColumns("INSERT"));
        }
        let mut state = RenderState::with_schemas(self.schemas.as_ref());
        let mut columns = Vec::with_capacity(self.values.len());
        let mut values = Vec::with_capacity(self.values.len());
        for (field, node) in &self.values {
            columns.push(self.dialect.name(field));
            values.push(render_assignment(self.dialect, field, node, &mut state)?);
        }
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.dialect.name(table),
            columns.join(", "),
            values.join(", ")
        ))
    }
}

/// Renders one assignment value with the field's name and abstract type
/// loaded into the casting context.
pub(crate) fn render_assignment(
    dialect: &Dialect,
    field: &str,
    node: &Node,
    state: &mut RenderState<'_>,
) -> Result<String> {
    let (qualifier, leaf) = split_identifier(field);
    state.name = Some(leaf.to_string());
    state.kind = state
        .schemas
        .and_then(|schemas| schemas.get(qualifier.unwrap_or("")))
        .and_then(|schema| schema.get(leaf))
        .cloned();
    dialect.compile_entry(node, state)
}

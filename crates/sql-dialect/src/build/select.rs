//! The `SELECT` statement builder.

use crate::ast::{FieldRef, Node};
use crate::build::{join_clauses, JoinKind, OrderDir};
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::{ClauseOptions, Schemas};

#[derive(Debug)]
struct Join {
    kind: JoinKind,
    table: FieldRef,
    on: Vec<Node>,
}

#[derive(Debug)]
pub struct Select<'a> {
    dialect: &'a Dialect,
    distinct: bool,
    fields: Vec<FieldRef>,
    from: Vec<FieldRef>,
    joins: Vec<Join>,
    conditions: Vec<Node>,
    group: Vec<FieldRef>,
    having: Vec<Node>,
    order: Vec<(FieldRef, Option<OrderDir>)>,
    limit: Option<u64>,
    offset: Option<u64>,
    schemas: Option<Schemas>,
}

impl<'a> Select<'a> {
    pub fn new(dialect: &'a Dialect) -> Select<'a> {
        Select {
            dialect,
            distinct: false,
            fields: Vec::new(),
            from: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            group: Vec::new(),
            having: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
            schemas: None,
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Adds projected fields; an empty projection renders as `*`.
    pub fn fields(mut self, fields: Vec<FieldRef>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(mut self, field: impl Into<FieldRef>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn from(mut self, table: impl Into<FieldRef>) -> Self {
        self.from.push(table.into());
        self
    }

    /// Sources from an aliased table, rendered as `"table" AS "alias"`.
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.from.push(FieldRef::alias(table, alias));
        self
    }

    pub fn join(mut self, kind: JoinKind, table: impl Into<FieldRef>, on: Vec<Node>) -> Self {
        self.joins.push(Join {
            kind,
            table: table.into(),
            on,
        });
        self
    }

    pub fn where_(mut self, conditions: Vec<Node>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn group_by(mut self, field: impl Into<FieldRef>) -> Self {
        self.group.push(field.into());
        self
    }

    pub fn having(mut self, conditions: Vec<Node>) -> Self {
        self.having.extend(conditions);
        self
    }

    pub fn order_by(mut self, field: impl Into<FieldRef>, direction: Option<OrderDir>) -> Self {
        self.order.push((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Supplies schema hints forwarded to the dialect's casting hook.
    pub fn schemas(mut self, schemas: Schemas) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Renders the statement as a derived table usable inside another
    /// projection or `FROM` clause.
    pub fn into_subquery(self, alias: &str) -> Result<FieldRef> {
        let sql = self.to_sql()?;
        Ok(FieldRef::Sub(sql, alias.to_string()))
    }

    pub fn to_sql(&self) -> Result<String> {
        if self.from.is_empty() {
            return Err(DialectError::MissingTableName("SELECT"));
        }
        let mut clauses = vec!["SELECT".to_string()];
        if self.distinct {
            clauses.push("DISTINCT".to_string());
        }
        clauses.push(if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.dialect.names(&self.fields)?
        });
        clauses.push(format!("FROM {}", self.dialect.names(&self.from)?));
        for join in &self.joins {
            let mut clause = format!(
                "{} {}",
                join.kind.keyword(),
                self.dialect.names(std::slice::from_ref(&join.table))?
            );
            let on = self
                .dialect
                .conditions(&join.on, &ClauseOptions::prepend("ON"))?;
            if !on.is_empty() {
                clause.push(' ');
                clause.push_str(&on);
            }
            clauses.push(clause);
        }
        clauses.push(self.dialect.conditions(
            &self.conditions,
            &ClauseOptions {
                prepend: Some("WHERE".to_string()),
                schemas: self.schemas.clone(),
                ..ClauseOptions::default()
            },
        )?);
        if !self.group.is_empty() {
            clauses.push(format!("GROUP BY {}", self.dialect.names(&self.group)?));
        }
        clauses.push(
            self.dialect
                .conditions(&self.having, &ClauseOptions::prepend("HAVING"))?,
        );
        if !self.order.is_empty() {
            let mut entries = Vec::with_capacity(self.order.len());
            for (field, direction) in &self.order {
                let rendered = self.dialect.names(std::slice::from_ref(field))?;
                entries.push(match direction {
                    Some(direction) => format!("{rendered} {}", direction.keyword()),
                    None => rendered,
                });
            }
            clauses.push(format!("ORDER BY {}", entries.join(", ")));
        }
        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            clauses.push(format!("OFFSET {offset}"));
        }
        Ok(join_clauses(clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field, lit, name, op};

    #[test]
    fn test_minimal_select() {
        let dialect = Dialect::ansi();
        let sql = dialect.select().from("users").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM \"users\"");
    }

    #[test]
    fn test_select_with_conditions_and_ordering() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .select()
            .field("name")
            .field("score")
            .from("players")
            .where_(vec![field!("score", ":between", lit!(90), lit!(100))])
            .order_by("score", Some(OrderDir::Desc))
            .limit(10)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT \"name\", \"score\" FROM \"players\" \
             WHERE \"score\" BETWEEN 90 AND 100 ORDER BY \"score\" DESC LIMIT 10"
        );
    }

    #[test]
    fn test_select_with_join() {
        let dialect = Dialect::ansi();
        let sql = dialect
            .select()
            .from_as("users", "u")
            .join(
                JoinKind::Left,
                FieldRef::alias("orders", "o"),
                vec![op!("=", name!("u.id"), name!("o.user_id"))],
            )
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM \"users\" AS \"u\" \
             LEFT JOIN \"orders\" AS \"o\" ON \"u\".\"id\" = \"o\".\"user_id\""
        );
    }

    #[test]
    fn test_select_missing_table() {
        let dialect = Dialect::ansi();
        let err = dialect.select().to_sql().unwrap_err();
        assert_eq!(err, DialectError::MissingTableName("SELECT"));
    }

    #[test]
    fn test_select_as_subquery() {
        let dialect = Dialect::ansi();
        let sub = dialect
            .select()
            .field("id")
            .from("users")
            .into_subquery("ids")
            .unwrap();
        let sql = dialect.names(&[sub]).unwrap();
        assert_eq!(sql, "(SELECT \"id\" FROM \"users\") AS \"ids\"");
    }
}

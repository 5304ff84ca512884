//! The `DROP TABLE` statement builder.

use crate::build::join_clauses;
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};

#[derive(Debug)]
pub struct DropTable<'a> {
    dialect: &'a Dialect,
    table: Option<String>,
    if_exists: bool,
    cascade: bool,
}

impl<'a> DropTable<'a> {
    pub fn new(dialect: &'a Dialect) -> DropTable<'a> {
        DropTable {
            dialect,
            table: None,
            if_exists: false,
            cascade: false,
        }
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn cascade(mut self) -> Self {
        self.cascade = true;
        self
    }

    pub fn to_sql(&self) -> Result<String> {
        let table = self
            .table
            .as_deref()
            .ok_or(DialectError::MissingTableName("DROP TABLE"))?;
        let clauses = vec![
            "DROP TABLE".to_string(),
            if self.if_exists {
                "IF EXISTS".to_string()
            } else {
                String::new()
            },
            self.dialect.name(table),
            if self.cascade {
                "CASCADE".to_string()
            } else {
                String::new()
            },
        ];
        Ok(join_clauses(clauses))
    }
}

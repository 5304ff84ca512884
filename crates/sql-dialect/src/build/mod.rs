//! Fluent statement builders. Each builder borrows its dialect and
//! renders with `to_sql`.

pub mod create_table;
pub mod delete;
pub mod drop_table;
pub mod insert;
pub mod select;
pub mod update;

pub use create_table::CreateTable;
pub use delete::Delete;
pub use drop_table::DropTable;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::dialect::Dialect;
use crate::error::{DialectError, Result};

/// A statement builder resolved by name.
#[derive(Debug)]
pub enum Statement<'a> {
    Select(Select<'a>),
    Insert(Insert<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
    CreateTable(CreateTable<'a>),
    DropTable(DropTable<'a>),
}

/// Sort direction of an `ORDER BY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }
}

/// Join flavor of a `SELECT` join clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

impl Dialect {
    /// Resolves a statement builder by its SQL name.
    pub fn statement(&self, name: &str) -> Result<Statement<'_>> {
        match name.to_lowercase().as_str() {
            "select" => Ok(Statement::Select(Select::new(self))),
            "insert" => Ok(Statement::Insert(Insert::new(self))),
            "update" => Ok(Statement::Update(Update::new(self))),
            "delete" => Ok(Statement::Delete(Delete::new(self))),
            "create table" => Ok(Statement::CreateTable(CreateTable::new(self))),
            "drop table" => Ok(Statement::DropTable(DropTable::new(self))),
            _ => Err(DialectError::UnsupportedStatement(name.to_string())),
        }
    }

    pub fn select(&self) -> Select<'_> {
        Select::new(self)
    }

    pub fn insert(&self) -> Insert<'_> {
        Insert::new(self)
    }

    pub fn update(&self) -> Update<'_> {
        Update::new(self)
    }

    pub fn delete(&self) -> Delete<'_> {
        Delete::new(self)
    }

    pub fn create_table(&self) -> CreateTable<'_> {
        CreateTable::new(self)
    }

    pub fn drop_table(&self) -> DropTable<'_> {
        DropTable::new(self)
    }
}

/// Space-joins non-empty statement clauses.
pub(crate) fn join_clauses(clauses: Vec<String>) -> String {
    clauses
        .into_iter()
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_dispatch() {
        let dialect = Dialect::ansi();
        assert!(matches!(dialect.statement("select"), Ok(Statement::Select(_))));
        assert!(matches!(
            dialect.statement("CREATE TABLE"),
            Ok(Statement::CreateTable(_))
        ));
    }

    #[test]
    fn test_unsupported_statement() {
        let dialect = Dialect::ansi();
        let err = dialect.statement("merge").unwrap_err();
        assert_eq!(err, DialectError::UnsupportedStatement("merge".to_string()));
    }
}

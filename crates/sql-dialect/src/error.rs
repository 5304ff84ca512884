use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialectError {
    #[error("Unsupported statement `'{0}'`")]
    UnsupportedStatement(String),

    #[error("Unexisting operator `'{0}'`")]
    UnknownOperator(String),

    #[error("Unexisting formatter `'{0}'`")]
    UnknownFormatter(String),

    #[error("Missing column name")]
    MissingColumnName,

    #[error("Column type `'{0}'` does not exist")]
    UnknownColumnType(String),

    #[error("No type matching has been defined for `'{0}'`")]
    UnknownTypeMatch(String),

    #[error("Invalid constraint template `'{0}'`")]
    InvalidConstraintTemplate(String),

    #[error("Missing constraint type")]
    MissingConstraintType,

    #[error("Invalid `{0}` statement: missing table name")]
    MissingTableName(&'static str),

    #[error("Invalid `{0}` statement: missing columns")]
    MissingColumns(&'static str),
}

pub type Result<T> = std::result::Result<T, DialectError>;

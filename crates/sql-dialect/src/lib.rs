//! Data-source-agnostic SQL generation.
//!
//! A [`dialect::Dialect`] is a long-lived configuration object holding
//! operator, formatter, type and constraint registries for one backend.
//! On top of it sit the rendering entry points (identifier lists,
//! condition structures, column definitions) and the fluent statement
//! builders in [`build`].
//!
//! ```
//! use sql_dialect::dialect::Dialect;
//! use sql_dialect::{field, lit};
//!
//! let dialect = Dialect::mysql();
//! let sql = dialect
//!     .select()
//!     .from("players")
//!     .where_(vec![field!("score", ":between", lit!(90), lit!(100))])
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "SELECT * FROM `players` WHERE `score` BETWEEN 90 AND 100");
//! ```

pub mod ast;
pub mod build;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod operators;
pub mod render;
pub mod types;

pub use ast::{FieldCond, FieldRef, Node};
pub use dialect::Dialect;
pub use error::{DialectError, Result};

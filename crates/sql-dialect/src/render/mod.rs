//! Rendering entry points, split per concern: identifier resolution,
//! value formatting, condition compilation, and schema (DDL) rendering.

pub mod conditions;
pub mod names;
pub mod schema;
pub mod value;

use std::collections::HashMap;

/// Per-alias field -> abstract type lookup, made available to casting
/// hooks while compiling conditions. Unqualified fields live under the
/// empty alias.
pub type Schemas = HashMap<String, HashMap<String, String>>;

/// Options recognized by `Dialect::conditions`.
#[derive(Debug, Clone, Default)]
pub struct ClauseOptions {
    /// Clause keyword emitted only if the compiled body is non-empty.
    pub prepend: Option<String>,
    /// Combinator applied between top-level entries; `:and` by default.
    pub operator: Option<String>,
    /// Schema hints forwarded to the casting hook.
    pub schemas: Option<Schemas>,
}

impl ClauseOptions {
    pub fn prepend(keyword: &str) -> ClauseOptions {
        ClauseOptions {
            prepend: Some(keyword.to_string()),
            ..ClauseOptions::default()
        }
    }

    pub fn operator(token: &str) -> ClauseOptions {
        ClauseOptions {
            operator: Some(token.to_string()),
            ..ClauseOptions::default()
        }
    }
}

/// Rendering context threaded through a compile run; the casting hook
/// receives it so collaborators can cast values based on the field
/// currently being compared.
#[derive(Debug, Default)]
pub struct RenderState<'a> {
    pub schemas: Option<&'a Schemas>,
    /// Leaf name of the field being compared, if any.
    pub name: Option<String>,
    /// Abstract type of that field, resolved from `schemas`.
    pub kind: Option<String>,
}

impl<'a> RenderState<'a> {
    pub(crate) fn with_schemas(schemas: Option<&'a Schemas>) -> RenderState<'a> {
        RenderState {
            schemas,
            ..RenderState::default()
        }
    }
}

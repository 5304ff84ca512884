//! Defines the identifier-list input of the identifier resolver.

use serde::{Deserialize, Serialize};

use crate::ast::expr::{prefix_name, Node};

/// One entry of an identifier list, at any nesting depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldRef {
    /// A bare qualified or unqualified name, e.g. `"tablename.fieldname"`.
    Name(String),

    /// An aliased name: `name AS alias`.
    Alias(String, String),

    /// Positional nesting. Entries keep the ambient qualifier.
    Group(Vec<FieldRef>),

    /// A qualifier applied to every nested entry, recursively.
    Scoped(String, Vec<FieldRef>),

    /// A rendered sub-statement paired with a forced alias:
    /// `(<sql>) AS <alias>`.
    Sub(String, String),

    /// An embedded operator expression, delegated whole to the condition
    /// compiler.
    Expr(Node),
}

impl FieldRef {
    pub fn name(name: impl Into<String>) -> FieldRef {
        FieldRef::Name(name.into())
    }

    pub fn alias(name: impl Into<String>, alias: impl Into<String>) -> FieldRef {
        FieldRef::Alias(name.into(), alias.into())
    }

    pub fn scoped(qualifier: impl Into<String>, fields: Vec<FieldRef>) -> FieldRef {
        FieldRef::Scoped(qualifier.into(), fields)
    }

    /// Returns a copy where every unqualified name gains `qualifier.`;
    /// scoped entries already carry their own qualifier and are left
    /// untouched.
    pub fn prefixed(&self, qualifier: &str) -> FieldRef {
        match self {
            FieldRef::Name(name) => FieldRef::Name(prefix_name(name, qualifier)),
            FieldRef::Alias(name, alias) => {
                FieldRef::Alias(prefix_name(name, qualifier), alias.clone())
            }
            FieldRef::Group(fields) => FieldRef::Group(
                fields.iter().map(|f| f.prefixed(qualifier)).collect(),
            ),
            FieldRef::Expr(node) => FieldRef::Expr(node.prefixed(qualifier)),
            other => other.clone(),
        }
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_bare_names() {
        let fields = [FieldRef::name("field1"), FieldRef::name("field2")];
        let prefixed: Vec<_> = fields.iter().map(|f| f.prefixed("prefix")).collect();
        assert_eq!(
            prefixed,
            vec![
                FieldRef::name("prefix.field1"),
                FieldRef::name("prefix.field2")
            ]
        );
    }

    #[test]
    fn test_prefixed_skips_qualified_names() {
        let field = FieldRef::name("t.field");
        assert_eq!(field.prefixed("prefix"), FieldRef::name("t.field"));
    }
}

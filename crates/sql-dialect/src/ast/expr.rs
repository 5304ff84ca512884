//! Defines the recursive expression input of the condition compiler.
//!
//! The grammar accepts several structurally different shapes for the same
//! logical expression (a field compared to a literal, an operator applied
//! to operands, a formatted leaf, raw pass-through SQL). Each shape is a
//! distinct variant, so the compiler dispatches on structure rather than
//! on the runtime type of an untyped container.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a condition structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A positional literal value.
    Value(Value),

    /// A named formatter applied to a raw value, e.g. `name`, `value`,
    /// `plain`.
    Format(String, Value),

    /// An operator applied to an ordered operand list, e.g.
    /// `Op(":between", [subject, lower, upper])`.
    Op(String, Vec<Node>),

    /// A field condition entry: `field` compared against a right-hand
    /// shape (see [`FieldCond`]).
    Field(String, FieldCond),

    /// A positional nested collection. Its compiled fragments are spliced
    /// flat into the surrounding operand list, which is what lets bare
    /// lists of conditions associate under the ambient combinator.
    Group(Vec<Node>),

    /// Already-rendered SQL, emitted verbatim.
    Raw(String),
}

/// The right-hand shapes accepted by a field condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldCond {
    /// `field = <literal>`
    Value(Value),

    /// `field = <formatted value>`
    Format(String, Value),

    /// Shorthand operator form: the field becomes the first operand,
    /// e.g. `Field("score", Op(":between", [90, 100]))`.
    Op(String, Vec<Node>),

    /// Implicit membership test: `field IN (v1, v2, ...)`.
    In(Vec<Value>),
}

impl Node {
    /// An operator expression.
    pub fn op(token: impl Into<String>, operands: Vec<Node>) -> Node {
        Node::Op(token.into(), operands)
    }

    /// A field reference leaf, rendered through the identifier resolver.
    pub fn name(name: impl Into<String>) -> Node {
        Node::Format("name".to_string(), Value::String(name.into()))
    }

    /// A literal value leaf.
    pub fn value(value: impl Into<Value>) -> Node {
        Node::Value(value.into())
    }

    /// Raw SQL passed through unchanged.
    pub fn plain(sql: impl Into<String>) -> Node {
        Node::Format("plain".to_string(), Value::String(sql.into()))
    }

    /// A `field = literal` condition.
    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Node {
        Node::Field(name.into(), FieldCond::Value(value.into()))
    }

    /// A `field IN (...)` condition.
    pub fn field_in(name: impl Into<String>, values: Vec<Value>) -> Node {
        Node::Field(name.into(), FieldCond::In(values))
    }

    /// A shorthand `op(field, operands...)` condition.
    pub fn field_op(
        name: impl Into<String>,
        token: impl Into<String>,
        operands: Vec<Node>,
    ) -> Node {
        Node::Field(name.into(), FieldCond::Op(token.into(), operands))
    }

    /// Returns a structurally identical copy where every unqualified field
    /// reference gains `qualifier.`. Identifiers that already carry a
    /// qualifier are left untouched.
    pub fn prefixed(&self, qualifier: &str) -> Node {
        match self {
            Node::Field(name, cond) => Node::Field(
                prefix_name(name, qualifier),
                cond.prefixed(qualifier),
            ),
            Node::Format(tag, value) if tag == "name" => match value {
                Value::String(name) => Node::Format(
                    tag.clone(),
                    Value::String(prefix_name(name, qualifier)),
                ),
                other => Node::Format(tag.clone(), other.clone()),
            },
            Node::Op(token, operands) => Node::Op(
                token.clone(),
                operands.iter().map(|n| n.prefixed(qualifier)).collect(),
            ),
            Node::Group(nodes) => {
                Node::Group(nodes.iter().map(|n| n.prefixed(qualifier)).collect())
            }
            other => other.clone(),
        }
    }
}

impl FieldCond {
    fn prefixed(&self, qualifier: &str) -> FieldCond {
        match self {
            FieldCond::Op(token, operands) => FieldCond::Op(
                token.clone(),
                operands.iter().map(|n| n.prefixed(qualifier)).collect(),
            ),
            other => other.clone(),
        }
    }
}

/// Prepends `qualifier.` to a dotted identifier that has no qualifier yet.
pub(crate) fn prefix_name(name: &str, qualifier: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{qualifier}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prefix_leaves_qualified_names_untouched() {
        let node = Node::field("t1.field", 1);
        assert_eq!(node.prefixed("t2"), Node::field("t1.field", 1));
    }

    #[test]
    fn test_prefix_recurses_through_operator_trees() {
        let node = Node::op(
            "=",
            vec![Node::name("field1"), Node::name("other.field2")],
        );
        let expected = Node::op(
            "=",
            vec![Node::name("prefix.field1"), Node::name("other.field2")],
        );
        assert_eq!(node.prefixed("prefix"), expected);
    }

    #[test]
    fn test_prefix_keeps_literals_intact() {
        let node = Node::op("=", vec![Node::name("field"), Node::value(json!("text"))]);
        let prefixed = node.prefixed("t");
        assert_eq!(
            prefixed,
            Node::op("=", vec![Node::name("t.field"), Node::value(json!("text"))])
        );
    }
}

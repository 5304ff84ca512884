//! Identifier resolution: splitting, escaping and list rendering with
//! aliasing, prefixing and first-seen-order deduplication.

use indexmap::IndexSet;
use tracing::trace;

use crate::ast::{FieldRef, Node};
use crate::dialect::Dialect;
use crate::error::Result;
use crate::render::RenderState;

/// Splits a dotted identifier on its last `.`.
pub fn split_identifier(name: &str) -> (Option<&str>, &str) {
    match name.rfind('.') {
        Some(pos) => (Some(&name[..pos]), &name[pos + 1..]),
        None => (None, name),
    }
}

impl Dialect {
    /// Wraps an identifier part in the dialect's quote character. The
    /// literal `*` passes through unescaped.
    pub fn escape(&self, part: &str) -> String {
        if part == "*" {
            return "*".to_string();
        }
        format!("{0}{1}{0}", self.escape, part)
    }

    /// Escapes a column/table/schema reference with dotted syntax support.
    pub fn name(&self, name: &str) -> String {
        match split_identifier(name) {
            (Some(qualifier), leaf) => {
                format!("{}.{}", self.escape(qualifier), self.escape(leaf))
            }
            (None, leaf) => self.escape(leaf),
        }
    }

    /// Renders an identifier list as a single comma-joined string.
    ///
    /// Identical rendered fragments are emitted once, in first-seen
    /// order. `*` and `qualifier.*` are never escaped and never aliased.
    pub fn names(&self, fields: &[FieldRef]) -> Result<String> {
        trace!(count = fields.len(), "rendering identifier list");
        let mut rendered = IndexSet::new();
        self.escape_list(fields, None, &mut rendered)?;
        Ok(rendered.into_iter().collect::<Vec<_>>().join(", "))
    }

    fn escape_list(
        &self,
        fields: &[FieldRef],
        prefix: Option<&str>,
        out: &mut IndexSet<String>,
    ) -> Result<()> {
        for field in fields {
            match field {
                FieldRef::Name(name) => {
                    out.insert(self.prefixed_fragment(self.name(name), prefix));
                }
                FieldRef::Alias(name, alias) => {
                    let rendered = self.name(name);
                    let fragment = if name.ends_with('*') {
                        rendered
                    } else {
                        let escaped_alias = self.name(alias);
                        if rendered == escaped_alias {
                            rendered
                        } else {
                            format!("{rendered} AS {escaped_alias}")
                        }
                    };
                    out.insert(self.prefixed_fragment(fragment, prefix));
                }
                FieldRef::Group(nested) => {
                    self.escape_list(nested, prefix, out)?;
                }
                FieldRef::Scoped(qualifier, nested) => {
                    let escaped = self.escape(qualifier);
                    self.escape_list(nested, Some(&escaped), out)?;
                }
                FieldRef::Sub(sql, alias) => {
                    out.insert(format!("({sql}) AS {}", self.name(alias)));
                }
                FieldRef::Expr(node) => {
                    let mut state = RenderState::default();
                    out.insert(self.compile_entry(node, &mut state)?);
                }
            }
        }
        Ok(())
    }

    fn prefixed_fragment(&self, fragment: String, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}.{fragment}"),
            None => fragment,
        }
    }

    /// Returns a structurally identical copy of a condition structure
    /// where every unqualified field reference gains `qualifier.`. Used
    /// to re-home conditions onto a joined table alias.
    pub fn prefix(&self, nodes: &[Node], qualifier: &str) -> Vec<Node> {
        nodes.iter().map(|node| node.prefixed(qualifier)).collect()
    }

    /// Identifier-list counterpart of [`Self::prefix`].
    pub fn prefix_fields(&self, fields: &[FieldRef], qualifier: &str) -> Vec<FieldRef> {
        fields.iter().map(|field| field.prefixed(qualifier)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_identifier() {
        assert_eq!(split_identifier("schema.table"), (Some("schema"), "table"));
        assert_eq!(split_identifier("field"), (None, "field"));
        assert_eq!(split_identifier("a.b.c"), (Some("a.b"), "c"));
    }

    #[test]
    fn test_name_with_table_prefix() {
        let dialect = Dialect::ansi();
        assert_eq!(dialect.name("tablename.fieldname"), "\"tablename\".\"fieldname\"");
    }

    #[test]
    fn test_star_is_not_escaped() {
        let dialect = Dialect::ansi();
        assert_eq!(dialect.name("prefix.*"), "\"prefix\".*");
        assert_eq!(dialect.escape("*"), "*");
    }
}

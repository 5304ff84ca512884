//! The condition compiler: resolves operator tokens to builder
//! strategies and recursively compiles nested expression structures into
//! rendered SQL fragments.

use tracing::trace;

use crate::ast::{FieldCond, Node};
use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::operators::{BuilderKind, OperatorDef};
use crate::render::names::split_identifier;
use crate::render::{ClauseOptions, RenderState};

impl Dialect {
    /// True if `token` carries the keyword marker or matches a registered
    /// symbolic operator.
    pub fn is_operator(&self, token: &str) -> bool {
        token.starts_with(':') || self.operators.contains_key(&token.to_lowercase())
    }

    /// Compiles a condition structure into a SQL fragment.
    ///
    /// Entries combine under `options.operator` (logical AND by default).
    /// `options.prepend` is emitted only if the compiled body is
    /// non-empty; an empty structure yields the empty string.
    pub fn conditions(&self, nodes: &[Node], options: &ClauseOptions) -> Result<String> {
        if nodes.is_empty() {
            return Ok(String::new());
        }
        trace!(count = nodes.len(), "compiling conditions");
        let operator = options
            .operator
            .as_deref()
            .unwrap_or(":and")
            .to_lowercase();
        let mut state = RenderState::with_schemas(options.schemas.as_ref());
        let result = self.compile_operator(&operator, nodes, &mut state)?;
        match (&options.prepend, result.is_empty()) {
            (Some(prepend), false) => Ok(format!("{prepend} {result}")),
            _ => Ok(result),
        }
    }

    /// Compiles one entry the way `conditions` would a singleton list.
    pub(crate) fn compile_entry(
        &self,
        node: &Node,
        state: &mut RenderState<'_>,
    ) -> Result<String> {
        self.compile_operator(":and", std::slice::from_ref(node), state)
    }

    fn compile_operator(
        &self,
        token: &str,
        operands: &[Node],
        state: &mut RenderState<'_>,
    ) -> Result<String> {
        let token = token.to_lowercase();
        let function_call = token.ends_with("()");
        let def = if function_call {
            &FUNCTION_DEF
        } else {
            self.operators
                .get(&token)
                .ok_or_else(|| DialectError::UnknownOperator(token.clone()))?
        };

        let parts = self.compile_operands(operands, state)?;

        // Equality against NULL swaps the operator for its substitute
        // (`=` becomes `IS`, `!=` becomes `IS NOT`).
        let resolved = match (def.null_sub, parts.get(1)) {
            (Some(sub), Some(part)) if part == "NULL" => sub,
            _ => token.as_str(),
        };
        let keyword = match def.keyword {
            Some(keyword) => keyword.to_string(),
            None => match resolved.strip_prefix(':') {
                Some(stripped) => stripped.to_uppercase(),
                None => resolved.to_string(),
            },
        };

        if !function_call {
            if let Some(template) = def.format {
                return Ok(apply_template(template, &parts));
            }
        }
        Ok(build(def.builder, &keyword, parts))
    }

    fn compile_operands(
        &self,
        operands: &[Node],
        state: &mut RenderState<'_>,
    ) -> Result<Vec<String>> {
        let mut parts = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand {
                Node::Op(token, nested) => {
                    parts.push(self.compile_operator(token, nested, state)?);
                }
                Node::Format(tag, value) => {
                    parts.push(self.format(tag, value, state)?);
                }
                Node::Group(nested) => {
                    parts.extend(self.compile_operands(nested, state)?);
                }
                Node::Value(value) => {
                    parts.push(self.value(value, state));
                }
                Node::Raw(sql) => {
                    parts.push(sql.clone());
                }
                Node::Field(name, cond) => {
                    parts.push(self.compile_field(name, cond, state)?);
                }
            }
        }
        Ok(parts)
    }

    /// Compiles a `<fieldname> <op> <value>` condition from its shorthand
    /// forms.
    fn compile_field(
        &self,
        name: &str,
        cond: &FieldCond,
        state: &mut RenderState<'_>,
    ) -> Result<String> {
        let (qualifier, leaf) = split_identifier(name);
        state.name = Some(leaf.to_string());
        state.kind = state
            .schemas
            .and_then(|schemas| schemas.get(qualifier.unwrap_or("")))
            .and_then(|schema| schema.get(leaf))
            .cloned();

        match cond {
            FieldCond::Value(value) => self.compile_operator(
                "=",
                &[Node::name(name), Node::Value(value.clone())],
                state,
            ),
            FieldCond::Format(tag, value) => self.compile_operator(
                "=",
                &[Node::name(name), Node::Format(tag.clone(), value.clone())],
                state,
            ),
            FieldCond::Op(token, operands) => {
                let mut nodes = Vec::with_capacity(operands.len() + 1);
                nodes.push(Node::name(name));
                nodes.extend(operands.iter().cloned());
                self.compile_operator(token, &nodes, state)
            }
            FieldCond::In(values) => {
                let members: Vec<Node> =
                    values.iter().cloned().map(Node::Value).collect();
                self.compile_operator(
                    ":in",
                    &[Node::name(name), Node::Group(members)],
                    state,
                )
            }
        }
    }
}

/// Definition resolved for tokens ending in the call marker, regardless
/// of registration.
static FUNCTION_DEF: OperatorDef = OperatorDef {
    null_sub: None,
    builder: Some(BuilderKind::Function),
    format: None,
    keyword: None,
};

/// Dispatches rendered `(keyword, operands)` to a builder strategy;
/// infix join when none is registered.
fn build(builder: Option<BuilderKind>, keyword: &str, parts: Vec<String>) -> String {
    match builder {
        None => parts.join(&format!(" {keyword} ")),
        Some(BuilderKind::Prefix) => {
            format!("{keyword} {}", parts.first().map(String::as_str).unwrap_or(""))
        }
        Some(BuilderKind::Function) => {
            let name = keyword.trim_end_matches("()").to_uppercase();
            format!("{name}({})", parts.join(", "))
        }
        Some(BuilderKind::List) => {
            let mut parts = parts.into_iter();
            let subject = parts.next().unwrap_or_default();
            format!("{subject} {keyword} ({})", parts.collect::<Vec<_>>().join(", "))
        }
        Some(BuilderKind::Between) => {
            let subject = parts.first().map(String::as_str).unwrap_or("");
            let first = parts.get(1).map(String::as_str).unwrap_or("");
            let last = parts.last().map(String::as_str).unwrap_or("");
            format!("{subject} {keyword} {first} AND {last}")
        }
        Some(BuilderKind::Set) => parts.join(&format!(" {keyword} ")),
        Some(BuilderKind::Alias) => {
            let expr = parts.first().map(String::as_str).unwrap_or("");
            let alias = parts.get(1).map(String::as_str).unwrap_or("");
            format!("({expr}) {keyword} {alias}")
        }
    }
}

/// Substitutes compiled operands into the positional `%s` slots of a
/// literal format template.
fn apply_template(template: &str, parts: &[String]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut slots = template.split("%s");
    let mut parts = parts.iter();
    if let Some(head) = slots.next() {
        result.push_str(head);
    }
    for tail in slots {
        if let Some(part) = parts.next() {
            result.push_str(part);
        }
        result.push_str(tail);
    }
    result
}

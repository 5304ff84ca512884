//! Operator definitions and the builder strategies they dispatch to.

use std::collections::HashMap;

/// The rendering strategy a resolved operator dispatches to.
///
/// Operators without a builder render as an infix join of their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    /// `<keyword> <first operand>`
    Prefix,
    /// `<keyword>(<operands comma-joined>)`, keyword taken from the text
    /// preceding the `()` call marker.
    Function,
    /// `<subject> <keyword> (<rest comma-joined>)`
    List,
    /// `<subject> <keyword> <first bound> AND <last bound>`
    Between,
    /// `<operands joined by keyword>`, no parens (UNION-style combinators).
    Set,
    /// `(<first operand>) <keyword> <second operand>`
    Alias,
}

/// Handling options paired with a registered operator token.
#[derive(Debug, Clone, Default)]
pub struct OperatorDef {
    /// Substitute token used when the second rendered operand denotes the
    /// SQL NULL literal (`=` becomes `IS`, `!=` becomes `IS NOT`).
    pub null_sub: Option<&'static str>,
    /// Rendering strategy; infix join when absent.
    pub builder: Option<BuilderKind>,
    /// Literal template with positional `%s` slots, bypassing builder
    /// dispatch (e.g. `%s REGEXP %s`).
    pub format: Option<&'static str>,
    /// Rendered keyword override (`:except` renders `MINUS`).
    pub keyword: Option<&'static str>,
}

impl OperatorDef {
    fn plain() -> OperatorDef {
        OperatorDef::default()
    }

    fn builder(kind: BuilderKind) -> OperatorDef {
        OperatorDef {
            builder: Some(kind),
            ..OperatorDef::default()
        }
    }

    fn null_sub(token: &'static str) -> OperatorDef {
        OperatorDef {
            null_sub: Some(token),
            ..OperatorDef::default()
        }
    }

    fn format(template: &'static str) -> OperatorDef {
        OperatorDef {
            format: Some(template),
            ..OperatorDef::default()
        }
    }
}

/// The ANSI layer every dialect starts from.
pub(crate) fn ansi_operators() -> HashMap<String, OperatorDef> {
    let defs: Vec<(&str, OperatorDef)> = vec![
        ("=", OperatorDef::null_sub(":is")),
        ("<=>", OperatorDef::plain()),
        ("<", OperatorDef::plain()),
        (">", OperatorDef::plain()),
        ("<=", OperatorDef::plain()),
        (">=", OperatorDef::plain()),
        ("!=", OperatorDef::null_sub(":is not")),
        ("<>", OperatorDef::plain()),
        ("-", OperatorDef::plain()),
        ("+", OperatorDef::plain()),
        ("*", OperatorDef::plain()),
        ("/", OperatorDef::plain()),
        ("%", OperatorDef::plain()),
        (">>", OperatorDef::plain()),
        ("<<", OperatorDef::plain()),
        (":=", OperatorDef::plain()),
        ("&", OperatorDef::plain()),
        ("|", OperatorDef::plain()),
        (":mod", OperatorDef::plain()),
        (":div", OperatorDef::plain()),
        (":like", OperatorDef::plain()),
        (":not like", OperatorDef::plain()),
        (":is", OperatorDef::plain()),
        (":is not", OperatorDef::plain()),
        (":distinct", OperatorDef::builder(BuilderKind::Prefix)),
        ("~", OperatorDef::builder(BuilderKind::Prefix)),
        (":between", OperatorDef::builder(BuilderKind::Between)),
        (":not between", OperatorDef::builder(BuilderKind::Between)),
        (":in", OperatorDef::builder(BuilderKind::List)),
        (":not in", OperatorDef::builder(BuilderKind::List)),
        (":exists", OperatorDef::builder(BuilderKind::List)),
        (":not exists", OperatorDef::builder(BuilderKind::List)),
        (":all", OperatorDef::builder(BuilderKind::List)),
        (":any", OperatorDef::builder(BuilderKind::List)),
        (":some", OperatorDef::builder(BuilderKind::List)),
        (":as", OperatorDef::builder(BuilderKind::Alias)),
        // logical operators
        (":not", OperatorDef::builder(BuilderKind::Prefix)),
        (":and", OperatorDef::plain()),
        (":or", OperatorDef::plain()),
        (":xor", OperatorDef::plain()),
        ("()", OperatorDef::format("(%s)")),
    ];
    defs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Backend extension layer shared by the concrete dialects: algebraic set
/// operators plus backend comparison operators.
pub(crate) fn backend_operators() -> Vec<(&'static str, OperatorDef)> {
    vec![
        ("#", OperatorDef::format("%s ^ %s")),
        (":regex", OperatorDef::format("%s REGEXP %s")),
        (":rlike", OperatorDef::plain()),
        (":sounds like", OperatorDef::plain()),
        (":union", OperatorDef::builder(BuilderKind::Set)),
        (":union all", OperatorDef::builder(BuilderKind::Set)),
        (":minus", OperatorDef::builder(BuilderKind::Set)),
        (
            ":except",
            OperatorDef {
                builder: Some(BuilderKind::Set),
                keyword: Some("MINUS"),
                ..OperatorDef::default()
            },
        ),
    ]
}

//! The dialect engine: one long-lived, read-mostly configuration per
//! backend, driving the shared compiler. Backends differ only in
//! identifier quoting, native type mapping, and the constraint/meta
//! templates (plus the column-rendering knobs those imply).

pub mod mysql;
pub mod sqlite;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{DialectError, Result};
use crate::operators::{ansi_operators, OperatorDef};
use crate::render::value::Formatter;
use crate::render::RenderState;
use crate::types::{ConstraintTemplate, MetaRule, TypeDef, TypeMatch};

/// Pluggable string-quoting hook: `(text) -> quoted literal`.
pub type QuoteHook = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Pluggable value-casting hook: `(value, context) -> rendered literal`.
/// The context carries the field name and abstract type currently being
/// compared, enabling schema-aware casting by the caller.
pub type CastHook = Box<dyn Fn(&Value, &RenderState<'_>) -> String + Send + Sync>;

pub struct Dialect {
    pub(crate) label: &'static str,
    /// Identifier quoting character.
    pub(crate) escape: char,
    pub(crate) operators: HashMap<String, OperatorDef>,
    pub(crate) formatters: HashMap<String, Formatter>,
    pub(crate) types: HashMap<String, TypeDef>,
    pub(crate) matches: HashMap<String, TypeMatch>,
    pub(crate) table_meta: HashMap<&'static str, MetaRule>,
    pub(crate) column_meta: HashMap<&'static str, MetaRule>,
    pub(crate) constraints: HashMap<&'static str, ConstraintTemplate>,
    /// Meta attributes stamped before the nullability clause of a column.
    pub(crate) column_meta_pre: &'static [&'static str],
    /// Meta attributes stamped after the default clause of a column.
    pub(crate) column_meta_post: &'static [&'static str],
    /// Clause replacing nullability/default for `serial` columns.
    pub(crate) serial_clause: &'static str,
    /// Native type substituted for `float` with an explicit precision.
    pub(crate) fixed_point: &'static str,
    pub(crate) quoter: Option<QuoteHook>,
    pub(crate) caster: Option<CastHook>,
}

impl std::fmt::Debug for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialect")
            .field("label", &self.label)
            .field("escape", &self.escape)
            .finish_non_exhaustive()
    }
}

impl Dialect {
    /// The ANSI layer: base operator catalog, default formatters, generic
    /// type table and the shared constraint templates. Backends extend
    /// this, never replace it.
    pub fn ansi() -> Dialect {
        let mut dialect = Dialect {
            label: "ANSI",
            escape: '"',
            operators: ansi_operators(),
            formatters: Formatter::registry(),
            types: HashMap::new(),
            matches: HashMap::new(),
            table_meta: HashMap::new(),
            column_meta: HashMap::new(),
            constraints: ansi_constraints(),
            column_meta_pre: &[],
            column_meta_post: &[],
            serial_clause: "NOT NULL",
            fixed_point: "numeric",
            quoter: None,
            caster: None,
        };
        dialect.seed_types(ansi_types());
        dialect
    }

    /// The backend's name, e.g. `"MySQL"`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Gets the installed quoting hook.
    pub fn quoter(&self) -> Option<&QuoteHook> {
        self.quoter.as_ref()
    }

    /// Installs or replaces the quoting hook.
    pub fn set_quoter(&mut self, quoter: QuoteHook) {
        self.quoter = Some(quoter);
    }

    /// Gets the installed casting hook.
    pub fn caster(&self) -> Option<&CastHook> {
        self.caster.as_ref()
    }

    /// Installs or replaces the casting hook.
    pub fn set_caster(&mut self, caster: CastHook) {
        self.caster = Some(caster);
    }

    /// Looks up an abstract type definition.
    pub fn column_type(&self, kind: &str) -> Result<&TypeDef> {
        self.types
            .get(kind)
            .ok_or_else(|| DialectError::UnknownColumnType(kind.to_string()))
    }

    /// Registers (or replaces) an abstract type definition.
    pub fn register_type(&mut self, kind: &str, def: TypeDef) {
        self.types.insert(kind.to_string(), def);
    }

    /// Looks up the abstract type matched by a native type.
    pub fn type_match(&self, native: &str) -> Result<&TypeMatch> {
        self.matches
            .get(native)
            .ok_or_else(|| DialectError::UnknownTypeMatch(native.to_string()))
    }

    /// Registers (or replaces) a native-to-abstract type matching.
    pub fn register_type_match(&mut self, native: &str, matched: TypeMatch) {
        self.matches.insert(native.to_string(), matched);
    }

    pub(crate) fn seed_types(&mut self, types: Vec<(&str, TypeDef)>) {
        for (kind, def) in types {
            self.register_type(kind, def);
        }
    }

    pub(crate) fn seed_matches(&mut self, matches: Vec<(&str, TypeMatch)>) {
        for (native, matched) in matches {
            self.register_type_match(native, matched);
        }
    }

    pub(crate) fn seed_operators(&mut self, operators: Vec<(&'static str, OperatorDef)>) {
        for (token, def) in operators {
            self.operators.insert(token.to_string(), def);
        }
    }
}

/// Generic type table used by the ANSI layer.
fn ansi_types() -> Vec<(&'static str, TypeDef)> {
    vec![
        ("id", TypeDef::native("integer")),
        ("serial", TypeDef::native("serial").serial()),
        ("string", TypeDef::native("varchar").length(255)),
        ("text", TypeDef::native("text")),
        ("integer", TypeDef::native("integer")),
        ("boolean", TypeDef::native("boolean")),
        ("float", TypeDef::native("real")),
        ("decimal", TypeDef::native("numeric").precision(2)),
        ("date", TypeDef::native("date")),
        ("time", TypeDef::native("time")),
        ("datetime", TypeDef::native("timestamp")),
        ("binary", TypeDef::native("blob")),
    ]
}

/// Constraint templates shared by every backend.
fn ansi_constraints() -> HashMap<&'static str, ConstraintTemplate> {
    let mut constraints = HashMap::new();
    constraints.insert("primary", ConstraintTemplate::template("PRIMARY KEY ({:column})"));
    constraints.insert(
        "foreign key",
        ConstraintTemplate::template(
            "FOREIGN KEY ({:foreignKey}) REFERENCES {:to} ({:primaryKey}) {:on}",
        ),
    );
    constraints.insert("unique", ConstraintTemplate::template("UNIQUE {:index} ({:column})"));
    constraints.insert("check", ConstraintTemplate::template("{:constraint} CHECK ({:expr})"));
    constraints
}

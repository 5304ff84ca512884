//! Schema-facing data model: abstract column types, field specs, and the
//! meta/constraint template tables driving DDL rendering.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ast::Node;

/// An abstract column type definition, mapped to a native type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    /// The backend's native type keyword.
    pub native: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    #[serde(default)]
    pub serial: bool,
    pub default: Option<ColumnDefault>,
    pub null: Option<bool>,
}

impl TypeDef {
    pub fn native(native: &str) -> TypeDef {
        TypeDef {
            native: native.to_string(),
            ..TypeDef::default()
        }
    }

    pub fn length(mut self, length: u32) -> TypeDef {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32) -> TypeDef {
        self.precision = Some(precision);
        self
    }

    pub fn serial(mut self) -> TypeDef {
        self.serial = true;
        self
    }
}

/// A reverse mapping from a native type to an abstract type, used for
/// schema introspection. Independent of the forward type catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeMatch {
    pub kind: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
}

impl TypeMatch {
    pub fn kind(kind: &str) -> TypeMatch {
        TypeMatch {
            kind: kind.to_string(),
            length: None,
            precision: None,
        }
    }

    pub fn length(mut self, length: u32) -> TypeMatch {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32) -> TypeMatch {
        self.precision = Some(precision);
        self
    }
}

/// A column default: either a literal value or a formatted one, e.g.
/// `ColumnDefault::format("plain", "CURRENT_TIMESTAMP")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnDefault {
    Value(Value),
    Format(String, Value),
}

impl ColumnDefault {
    pub fn value(value: impl Into<Value>) -> ColumnDefault {
        ColumnDefault::Value(value.into())
    }

    pub fn format(tag: &str, value: impl Into<Value>) -> ColumnDefault {
        ColumnDefault::Format(tag.to_string(), value.into())
    }
}

/// A caller-supplied partial column description. Unset attributes are
/// filled from the resolved [`TypeDef`] by `Dialect::field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Abstract type name.
    pub kind: Option<String>,
    /// Raw native type, bypassing the type catalog.
    pub native: Option<String>,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub serial: Option<bool>,
    pub default: Option<ColumnDefault>,
    pub null: Option<bool>,
    /// Free-form meta attributes (charset, collate, comment...), checked
    /// against the dialect's meta templates at render time.
    #[serde(default)]
    pub meta: IndexMap<String, Value>,
}

impl FieldSpec {
    pub fn new(name: &str) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            ..<FieldSpec as Default>::default()
        }
    }

    pub fn kind(mut self, kind: &str) -> FieldSpec {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn native(mut self, native: &str) -> FieldSpec {
        self.native = Some(native.to_string());
        self
    }

    pub fn length(mut self, length: u32) -> FieldSpec {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32) -> FieldSpec {
        self.precision = Some(precision);
        self
    }

    pub fn null(mut self, null: bool) -> FieldSpec {
        self.null = Some(null);
        self
    }

    pub fn default(mut self, default: ColumnDefault) -> FieldSpec {
        self.default = Some(default);
        self
    }

    pub fn meta(mut self, name: &str, value: impl Into<Value>) -> FieldSpec {
        self.meta.insert(name.to_string(), value.into());
        self
    }
}

/// A complete, normalized column spec as produced by `Dialect::field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: Option<String>,
    pub native: String,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub serial: bool,
    pub default: Option<ColumnDefault>,
    pub null: Option<bool>,
    pub meta: IndexMap<String, Value>,
}

/// The artifact a meta attribute applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Table,
    Column,
}

/// Keyword/value stamping rule for one (artifact, attribute) pair.
#[derive(Debug, Clone)]
pub struct MetaRule {
    pub keyword: &'static str,
    pub escape: bool,
    pub join: &'static str,
    /// When set, values outside the whitelist are silently dropped.
    pub options: Option<Vec<Value>>,
}

impl MetaRule {
    pub fn keyword(keyword: &'static str) -> MetaRule {
        MetaRule {
            keyword,
            escape: false,
            join: " ",
            options: None,
        }
    }

    pub fn escaped(mut self) -> MetaRule {
        self.escape = true;
        self
    }
}

/// Placeholder-based template for one constraint kind.
#[derive(Debug, Clone)]
pub struct ConstraintTemplate {
    pub template: &'static str,
    /// Resolves the `key`/`index` selector of templates carrying an
    /// `{:index}` placeholder.
    pub extras: HashMap<&'static str, &'static str>,
}

impl ConstraintTemplate {
    pub fn template(template: &'static str) -> ConstraintTemplate {
        ConstraintTemplate {
            template,
            extras: HashMap::new(),
        }
    }

    pub fn extra(mut self, name: &'static str, value: &'static str) -> ConstraintTemplate {
        self.extras.insert(name, value);
        self
    }
}

/// Caller input for constraint rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSpec {
    /// Constraint kind: `primary`, `foreign key`, `unique`, `check`...
    pub kind: String,
    /// Fills the `{:column}` placeholder.
    pub columns: Vec<String>,
    /// Fills the `{:foreignKey}` placeholder.
    pub foreign_key: Vec<String>,
    /// Fills the `{:primaryKey}` placeholder.
    pub primary_key: Vec<String>,
    /// Referenced table, fills `{:to}`.
    pub to: Option<String>,
    /// Referential action, fills `{:on}` as `ON <raw text>`.
    pub on: Option<String>,
    /// Constraint name, fills `{:constraint}` as `CONSTRAINT <name>`.
    pub name: Option<String>,
    /// Condition nodes compiled into `{:expr}`.
    pub expr: Vec<Node>,
    /// `key`/`index` selector resolved against the template extras.
    pub index: Option<String>,
}

impl ConstraintSpec {
    pub fn kind(kind: &str) -> ConstraintSpec {
        ConstraintSpec {
            kind: kind.to_string(),
            ..ConstraintSpec::default()
        }
    }

    pub fn column(mut self, column: &str) -> ConstraintSpec {
        self.columns.push(column.to_string());
        self
    }

    pub fn foreign_key(mut self, column: &str) -> ConstraintSpec {
        self.foreign_key.push(column.to_string());
        self
    }

    pub fn primary_key(mut self, column: &str) -> ConstraintSpec {
        self.primary_key.push(column.to_string());
        self
    }

    pub fn to(mut self, table: &str) -> ConstraintSpec {
        self.to = Some(table.to_string());
        self
    }

    pub fn on(mut self, action: &str) -> ConstraintSpec {
        self.on = Some(action.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> ConstraintSpec {
        self.name = Some(name.to_string());
        self
    }

    pub fn expr(mut self, node: Node) -> ConstraintSpec {
        self.expr.push(node);
        self
    }
}

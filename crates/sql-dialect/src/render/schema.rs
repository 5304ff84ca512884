//! DDL rendering: column definitions, meta attributes, and constraint
//! templates.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::{ClauseOptions, RenderState};
use crate::types::{Column, ColumnDefault, ConstraintSpec, FieldSpec, MetaKind};

impl Dialect {
    /// Normalizes a partial field spec into a complete column: resolves
    /// the abstract type and fills unset attributes from its definition.
    /// A spec with neither a type nor a native type falls back to
    /// `string`.
    pub fn field(&self, spec: &FieldSpec) -> Result<Column> {
        if spec.name.is_empty() {
            return Err(DialectError::MissingColumnName);
        }
        let (kind, def) = match (&spec.kind, &spec.native) {
            (Some(kind), _) => (Some(kind.clone()), self.column_type(kind)?.clone()),
            (None, Some(_)) => (None, Default::default()),
            (None, None) => (Some("string".to_string()), self.column_type("string")?.clone()),
        };
        Ok(Column {
            name: spec.name.clone(),
            kind,
            native: spec.native.clone().unwrap_or(def.native),
            length: spec.length.or(def.length),
            precision: spec.precision.or(def.precision),
            serial: spec.serial.unwrap_or(def.serial),
            default: spec.default.clone().or(def.default),
            null: spec.null.or(def.null),
            meta: spec.meta.clone(),
        })
    }

    /// Renders one column definition of a `CREATE TABLE` body.
    pub fn column(&self, spec: &FieldSpec) -> Result<String> {
        let mut column = self.field(spec)?;

        // Numeric and boolean columns can't default to the empty string;
        // such specs render as nullable with no default.
        if let (Some(kind), Some(ColumnDefault::Value(Value::String(text)))) =
            (&column.kind, &column.default)
        {
            if text.is_empty() && matches!(kind.as_str(), "integer" | "float" | "boolean") {
                column.null = Some(true);
                column.default = None;
            }
        }

        let mut native = column.native.to_lowercase();
        if column.kind.as_deref() == Some("float") && column.precision.is_some() {
            native = self.fixed_point.to_string();
        }
        let size = match (column.length, column.precision) {
            (Some(length), Some(precision)) => format!("({length},{precision})"),
            (Some(length), None) => format!("({length})"),
            _ => String::new(),
        };

        let mut parts = vec![format!("{} {native}{size}", self.name(&column.name))];
        let pre = self.meta(MetaKind::Column, &column.meta, Some(self.column_meta_pre));
        if !pre.is_empty() {
            parts.push(pre);
        }
        if column.serial {
            parts.push(self.serial_clause.to_string());
        } else {
            match column.null {
                Some(true) => parts.push("NULL".to_string()),
                Some(false) => parts.push("NOT NULL".to_string()),
                None => {}
            }
            if let Some(default) = &column.default {
                let state = RenderState {
                    schemas: None,
                    name: Some(column.name.clone()),
                    kind: column.kind.clone(),
                };
                let rendered = match default {
                    ColumnDefault::Value(value) => self.format("value", value, &state)?,
                    ColumnDefault::Format(tag, value) => self.format(tag, value, &state)?,
                };
                parts.push(format!("DEFAULT {rendered}"));
            }
        }
        let post = self.meta(MetaKind::Column, &column.meta, Some(self.column_meta_post));
        if !post.is_empty() {
            parts.push(post);
        }
        Ok(parts.join(" "))
    }

    /// Renders meta attributes against the dialect's stamping rules.
    ///
    /// Falsy values, attributes with no registered rule, attributes
    /// outside `only`, and whitelisted rules given an out-of-list value
    /// are all silently skipped.
    pub fn meta(
        &self,
        kind: MetaKind,
        meta: &IndexMap<String, Value>,
        only: Option<&[&str]>,
    ) -> String {
        let rules = match kind {
            MetaKind::Table => &self.table_meta,
            MetaKind::Column => &self.column_meta,
        };
        let mut parts = Vec::new();
        for (name, value) in meta {
            if is_falsy(value) {
                continue;
            }
            if let Some(only) = only {
                if !only.contains(&name.as_str()) {
                    continue;
                }
            }
            let Some(rule) = rules.get(name.as_str()) else {
                continue;
            };
            if let Some(options) = &rule.options {
                if !options.contains(value) {
                    continue;
                }
            }
            let rendered = if rule.escape {
                self.value(value, &RenderState::default())
            } else {
                plain_text(value)
            };
            parts.push(format!("{}{}{rendered}", rule.keyword, rule.join));
        }
        parts.join(" ")
    }

    /// Renders a table constraint from its registered template.
    pub fn constraint(
        &self,
        kind: &str,
        spec: &ConstraintSpec,
        options: &ClauseOptions,
    ) -> Result<String> {
        if kind.is_empty() {
            return Err(DialectError::MissingConstraintType);
        }
        let template = self
            .constraints
            .get(kind)
            .ok_or_else(|| DialectError::InvalidConstraintTemplate(kind.to_string()))?;
        trace!(kind, "rendering constraint");

        let join_names =
            |names: &[String]| names.iter().map(|n| self.name(n)).collect::<Vec<_>>().join(", ");

        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("column", join_names(&spec.columns));
        values.insert("foreignKey", join_names(&spec.foreign_key));
        values.insert("primaryKey", join_names(&spec.primary_key));
        values.insert("to", spec.to.as_deref().map(|t| self.name(t)).unwrap_or_default());
        values.insert(
            "on",
            spec.on.as_deref().map(|a| format!("ON {a}")).unwrap_or_default(),
        );
        values.insert(
            "constraint",
            spec.name
                .as_deref()
                .map(|n| format!("CONSTRAINT {}", self.name(n)))
                .unwrap_or_default(),
        );
        values.insert("expr", self.conditions(&spec.expr, options)?);
        values.insert(
            "index",
            spec.index
                .as_deref()
                .and_then(|selector| template.extras.get(selector))
                .map(|keyword| keyword.to_string())
                .unwrap_or_default(),
        );

        let mut rendered = fill_template(template.template, &values);
        while rendered.contains("  ") {
            rendered = rendered.replace("  ", " ");
        }
        Ok(rendered.trim().to_string())
    }
}

/// Falsy meta values (null, false, empty text, zero) are never stamped.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Substitutes `{:placeholder}` slots; unknown placeholders vanish.
fn fill_template(template: &str, values: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{:") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                if let Some(value) = values.get(&after[..end]) {
                    out.push_str(value);
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

//! Literal value rendering and the formatter registry.

use std::collections::HashMap;

use serde_json::Value;

use crate::dialect::Dialect;
use crate::error::{DialectError, Result};
use crate::render::RenderState;

/// A named value-rendering transform usable at any leaf position of the
/// expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Renders the argument through the identifier resolver.
    Name,
    /// Renders the argument as a SQL literal.
    Value,
    /// Renders the argument verbatim. The only escape hatch for raw SQL
    /// and for embedding compiled sub-statements as scalar expressions.
    Plain,
}

impl Formatter {
    pub(crate) fn registry() -> HashMap<String, Formatter> {
        let mut formatters = HashMap::new();
        formatters.insert("name".to_string(), Formatter::Name);
        formatters.insert("value".to_string(), Formatter::Value);
        formatters.insert("plain".to_string(), Formatter::Plain);
        formatters
    }
}

impl Dialect {
    /// Quotes a string literal: the installed quoting hook if present,
    /// otherwise the fixed escape table plus backslash-escaping of the
    /// LIKE wildcards.
    pub fn quote(&self, text: &str) -> String {
        if let Some(quoter) = &self.quoter {
            return quoter(text);
        }
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push('\'');
        for ch in text.chars() {
            match ch {
                '\0' => quoted.push_str("\\x00"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\\' => quoted.push_str("\\\\"),
                '\'' => quoted.push_str("\\'"),
                '\x1a' => quoted.push_str("\\x1a"),
                '%' => quoted.push_str("\\%"),
                '_' => quoted.push_str("\\_"),
                _ => quoted.push(ch),
            }
        }
        quoted.push('\'');
        quoted
    }

    /// Renders a literal value: the installed casting hook if present,
    /// otherwise booleans as `TRUE`/`FALSE`, text through [`Self::quote`],
    /// sequences as `{v1,v2,...}` and everything else via its textual
    /// conversion.
    pub fn value(&self, value: &Value, state: &RenderState<'_>) -> String {
        if let Some(caster) = &self.caster {
            return caster(value, state);
        }
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(true) => "TRUE".to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            Value::String(text) => self.quote(text),
            Value::Array(items) => array_literal(items),
            other => other.to_string(),
        }
    }

    /// Applies a registered formatter to a raw value.
    pub fn format(&self, tag: &str, value: &Value, state: &RenderState<'_>) -> Result<String> {
        let key = tag.trim_start_matches(':').to_lowercase();
        let formatter = self
            .formatters
            .get(&key)
            .ok_or_else(|| DialectError::UnknownFormatter(tag.to_string()))?;
        Ok(match formatter {
            Formatter::Name => match value {
                Value::String(name) => self.name(name),
                other => self.value(other, state),
            },
            Formatter::Value => self.value(value, state),
            Formatter::Plain => match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            },
        })
    }
}

/// Dialect array literal. Scalar elements use their direct textual
/// conversion; nested sequences recurse.
fn array_literal(items: &[Value]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::Array(nested) => array_literal(nested),
            Value::String(text) => text.clone(),
            Value::Null => "NULL".to_string(),
            Value::Bool(true) => "TRUE".to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            other => other.to_string(),
        })
        .collect();
    format!("{{{}}}", rendered.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_escapes_special_characters() {
        let dialect = Dialect::ansi();
        assert_eq!(dialect.quote("it's"), "'it\\'s'");
        assert_eq!(dialect.quote("100%"), "'100\\%'");
        assert_eq!(dialect.quote("a_b"), "'a\\_b'");
        assert_eq!(dialect.quote("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn test_value_booleans_and_null() {
        let dialect = Dialect::ansi();
        let state = RenderState::default();
        assert_eq!(dialect.value(&json!(true), &state), "TRUE");
        assert_eq!(dialect.value(&json!(false), &state), "FALSE");
        assert_eq!(dialect.value(&Value::Null, &state), "NULL");
    }

    #[test]
    fn test_value_array_literal() {
        let dialect = Dialect::ansi();
        let state = RenderState::default();
        assert_eq!(dialect.value(&json!([1, 2, 3]), &state), "{1,2,3}");
        assert_eq!(dialect.value(&json!([[1, 2], [3]]), &state), "{{1,2},{3}}");
    }

    #[test]
    fn test_format_name_value_plain() {
        let dialect = Dialect::ansi();
        let state = RenderState::default();
        assert_eq!(
            dialect.format("name", &json!("fieldname"), &state).unwrap(),
            "\"fieldname\""
        );
        assert_eq!(
            dialect.format("value", &json!("value"), &state).unwrap(),
            "'value'"
        );
        assert_eq!(
            dialect.format("plain", &json!("plain"), &state).unwrap(),
            "plain"
        );
    }

    #[test]
    fn test_format_unknown_formatter() {
        let dialect = Dialect::ansi();
        let state = RenderState::default();
        let err = dialect
            .format("undefined", &json!("value"), &state)
            .unwrap_err();
        assert_eq!(err, DialectError::UnknownFormatter("undefined".to_string()));
    }

    #[test]
    fn test_caster_overrides_value_rendering() {
        let mut dialect = Dialect::ansi();
        dialect.set_caster(Box::new(|value, _| format!("<{value}>")));
        let state = RenderState::default();
        assert_eq!(dialect.value(&json!(1), &state), "<1>");
    }
}

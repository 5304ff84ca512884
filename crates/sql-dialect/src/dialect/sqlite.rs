//! SQLite backend: double-quote escaping, SQLite type affinities and the
//! COLLATE column attribute.

use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::operators::backend_operators;
use crate::types::{MetaRule, TypeDef, TypeMatch};

impl Dialect {
    pub fn sqlite() -> Dialect {
        let mut dialect = Dialect::ansi();
        dialect.label = "SQLite";
        dialect.seed_operators(backend_operators());
        dialect.seed_types(sqlite_types());
        dialect.seed_matches(sqlite_matches());
        dialect.column_meta = column_meta();
        dialect.column_meta_pre = &["collate"];
        dialect
    }
}

fn sqlite_types() -> Vec<(&'static str, TypeDef)> {
    vec![
        ("id", TypeDef::native("integer")),
        ("serial", TypeDef::native("integer").serial()),
        ("string", TypeDef::native("varchar").length(255)),
        ("text", TypeDef::native("text")),
        ("integer", TypeDef::native("integer")),
        ("boolean", TypeDef::native("boolean")),
        ("float", TypeDef::native("real")),
        ("decimal", TypeDef::native("text").precision(2)),
        ("date", TypeDef::native("date")),
        ("time", TypeDef::native("time")),
        ("datetime", TypeDef::native("timestamp")),
        ("binary", TypeDef::native("blob")),
    ]
}

fn sqlite_matches() -> Vec<(&'static str, TypeMatch)> {
    vec![
        ("boolean", TypeMatch::kind("boolean")),
        ("blob", TypeMatch::kind("binary")),
        ("date", TypeMatch::kind("date")),
        ("integer", TypeMatch::kind("integer")),
        ("numeric", TypeMatch::kind("decimal").precision(2)),
        ("real", TypeMatch::kind("float")),
        ("text", TypeMatch::kind("text")),
        ("time", TypeMatch::kind("time")),
        ("timestamp", TypeMatch::kind("datetime")),
        ("varchar", TypeMatch::kind("string")),
    ]
}

fn column_meta() -> HashMap<&'static str, MetaRule> {
    let mut meta = HashMap::new();
    meta.insert("collate", MetaRule::keyword("COLLATE").escaped());
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldSpec;

    #[test]
    fn test_double_quote_escaping() {
        let dialect = Dialect::sqlite();
        assert_eq!(dialect.name("table.field"), "\"table\".\"field\"");
    }

    #[test]
    fn test_serial_column_has_no_autoincrement_clause() {
        let dialect = Dialect::sqlite();
        let sql = dialect.column(&FieldSpec::new("id").kind("serial")).unwrap();
        assert_eq!(sql, "\"id\" integer NOT NULL");
    }

    #[test]
    fn test_collate_meta_is_escaped() {
        let dialect = Dialect::sqlite();
        let spec = FieldSpec::new("title").meta("collate", "NOCASE");
        assert_eq!(
            dialect.column(&spec).unwrap(),
            "\"title\" varchar(255) COLLATE 'NOCASE'"
        );
    }

    #[test]
    fn test_type_matching() {
        let dialect = Dialect::sqlite();
        assert_eq!(dialect.type_match("real").unwrap().kind, "float");
        let matched = dialect.type_match("numeric").unwrap();
        assert_eq!(matched.kind, "decimal");
        assert_eq!(matched.precision, Some(2));
    }
}

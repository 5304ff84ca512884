//! MySQL backend: backtick escaping, MySQL native types and the
//! engine/charset/collate meta attributes.

use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::operators::backend_operators;
use crate::types::{ConstraintTemplate, MetaRule, TypeDef, TypeMatch};

impl Dialect {
    pub fn mysql() -> Dialect {
        let mut dialect = Dialect::ansi();
        dialect.label = "MySQL";
        dialect.escape = '`';
        dialect.seed_operators(backend_operators());
        dialect.seed_types(mysql_types());
        dialect.seed_matches(mysql_matches());
        dialect.column_meta = column_meta();
        dialect.table_meta = table_meta();
        dialect.constraints.insert("index", ConstraintTemplate::template("INDEX ({:column})"));
        dialect.constraints.insert(
            "unique",
            ConstraintTemplate::template("UNIQUE {:index} ({:column})")
                .extra("key", "KEY")
                .extra("index", "INDEX"),
        );
        dialect.column_meta_pre = &["charset", "collate"];
        dialect.column_meta_post = &["comment"];
        dialect.serial_clause = "NOT NULL AUTO_INCREMENT";
        dialect.fixed_point = "decimal";
        dialect
    }
}

fn mysql_types() -> Vec<(&'static str, TypeDef)> {
    vec![
        ("id", TypeDef::native("int")),
        ("serial", TypeDef::native("int").serial()),
        ("string", TypeDef::native("varchar").length(255)),
        ("text", TypeDef::native("text")),
        ("integer", TypeDef::native("int")),
        ("boolean", TypeDef::native("boolean")),
        ("float", TypeDef::native("float")),
        ("decimal", TypeDef::native("decimal").precision(2)),
        ("date", TypeDef::native("date")),
        ("time", TypeDef::native("time")),
        ("datetime", TypeDef::native("datetime")),
        ("binary", TypeDef::native("blob")),
    ]
}

fn mysql_matches() -> Vec<(&'static str, TypeMatch)> {
    vec![
        ("bigint", TypeMatch::kind("integer")),
        ("bit", TypeMatch::kind("string")),
        ("blob", TypeMatch::kind("string")),
        ("char", TypeMatch::kind("string")),
        ("date", TypeMatch::kind("date")),
        ("datetime", TypeMatch::kind("datetime")),
        ("decimal", TypeMatch::kind("decimal")),
        ("double", TypeMatch::kind("float")),
        ("float", TypeMatch::kind("float")),
        ("geometry", TypeMatch::kind("string")),
        ("geometrycollection", TypeMatch::kind("string")),
        ("int", TypeMatch::kind("integer")),
        ("linestring", TypeMatch::kind("string")),
        ("longblob", TypeMatch::kind("string")),
        ("longtext", TypeMatch::kind("string")),
        ("mediumblob", TypeMatch::kind("string")),
        ("mediumint", TypeMatch::kind("integer")),
        ("mediumtext", TypeMatch::kind("string")),
        ("multilinestring", TypeMatch::kind("string")),
        ("multipolygon", TypeMatch::kind("string")),
        ("multipoint", TypeMatch::kind("string")),
        ("point", TypeMatch::kind("string")),
        ("polygon", TypeMatch::kind("string")),
        ("smallint", TypeMatch::kind("integer")),
        ("text", TypeMatch::kind("string")),
        ("time", TypeMatch::kind("string")),
        ("timestamp", TypeMatch::kind("datetime")),
        ("tinyblob", TypeMatch::kind("string")),
        ("tinyint", TypeMatch::kind("integer")),
        ("tinytext", TypeMatch::kind("string")),
        ("varchar", TypeMatch::kind("string")),
        ("year", TypeMatch::kind("string")),
    ]
}

fn column_meta() -> HashMap<&'static str, MetaRule> {
    let mut meta = HashMap::new();
    meta.insert("charset", MetaRule::keyword("CHARACTER SET"));
    meta.insert("collate", MetaRule::keyword("COLLATE"));
    meta.insert("comment", MetaRule::keyword("COMMENT").escaped());
    meta
}

fn table_meta() -> HashMap<&'static str, MetaRule> {
    let mut meta = HashMap::new();
    meta.insert("charset", MetaRule::keyword("DEFAULT CHARSET"));
    meta.insert("collate", MetaRule::keyword("COLLATE"));
    meta.insert("engine", MetaRule::keyword("ENGINE"));
    meta.insert("tablespace", MetaRule::keyword("TABLESPACE"));
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldSpec;

    #[test]
    fn test_backtick_escaping() {
        let dialect = Dialect::mysql();
        assert_eq!(dialect.name("table.field"), "`table`.`field`");
    }

    #[test]
    fn test_serial_column() {
        let dialect = Dialect::mysql();
        let sql = dialect.column(&FieldSpec::new("id").kind("serial")).unwrap();
        assert_eq!(sql, "`id` int NOT NULL AUTO_INCREMENT");
    }

    #[test]
    fn test_type_matching() {
        let dialect = Dialect::mysql();
        assert_eq!(dialect.type_match("tinyint").unwrap().kind, "integer");
        assert_eq!(dialect.type_match("timestamp").unwrap().kind, "datetime");
    }

    #[test]
    fn test_column_meta_placement() {
        let dialect = Dialect::mysql();
        let spec = FieldSpec::new("body")
            .kind("text")
            .meta("collate", "utf8mb4_unicode_ci")
            .meta("comment", "free text");
        assert_eq!(
            dialect.column(&spec).unwrap(),
            "`body` text COLLATE utf8mb4_unicode_ci COMMENT 'free text'"
        );
    }
}

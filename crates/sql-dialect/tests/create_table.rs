use sql_dialect::dialect::Dialect;
use sql_dialect::types::{ColumnDefault, ConstraintSpec, FieldSpec};
use sql_dialect::{lit, name, op, DialectError};

#[test]
fn create_table_with_a_serial_primary_key() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("table1")
        .column(FieldSpec::new("id").kind("serial"))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"table1\" (\"id\" serial NOT NULL, PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn create_table_with_column_attributes() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("table1")
        .column(FieldSpec::new("id").kind("serial"))
        .column(
            FieldSpec::new("name")
                .kind("string")
                .null(false)
                .default(ColumnDefault::value("unknown")),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"table1\" (\"id\" serial NOT NULL, \
         \"name\" varchar(255) NOT NULL DEFAULT 'unknown', PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn numeric_columns_drop_an_empty_string_default() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("cities")
        .column(
            FieldSpec::new("population")
                .kind("integer")
                .default(ColumnDefault::value("")),
        )
        .to_sql()
        .unwrap();
    assert_eq!(sql, "CREATE TABLE \"cities\" (\"population\" integer NULL)");
}

#[test]
fn decimal_columns_carry_length_and_precision() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("products")
        .column(FieldSpec::new("price").kind("decimal").length(10))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "CREATE TABLE \"products\" (\"price\" numeric(10,2))");
}

#[test]
fn datetime_default_uses_the_plain_formatter() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("events")
        .column(
            FieldSpec::new("created")
                .kind("datetime")
                .default(ColumnDefault::format("plain", "CURRENT_TIMESTAMP")),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"events\" (\"created\" timestamp DEFAULT CURRENT_TIMESTAMP)"
    );
}

#[test]
fn check_constraints_compile_their_expression() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("cities")
        .column(FieldSpec::new("population").kind("integer"))
        .constraint(
            ConstraintSpec::kind("check").expr(op!(">", name!("population"), lit!(20))),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"cities\" (\"population\" integer, CHECK (\"population\" > 20))"
    );
}

#[test]
fn named_check_constraints_emit_a_constraint_clause() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("cities")
        .column(FieldSpec::new("population").kind("integer"))
        .constraint(
            ConstraintSpec::kind("check")
                .name("pop_check")
                .expr(op!(">", name!("population"), lit!(20))),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"cities\" (\"population\" integer, \
         CONSTRAINT \"pop_check\" CHECK (\"population\" > 20))"
    );
}

#[test]
fn foreign_key_constraints() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("orders")
        .column(FieldSpec::new("id").kind("serial"))
        .column(FieldSpec::new("user_id").kind("integer"))
        .constraint(
            ConstraintSpec::kind("foreign key")
                .foreign_key("user_id")
                .to("users")
                .primary_key("id")
                .on("DELETE CASCADE"),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"orders\" (\"id\" serial NOT NULL, \"user_id\" integer, \
         FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\") ON DELETE CASCADE, \
         PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn unique_constraints_resolve_the_index_selector() {
    let dialect = Dialect::mysql();
    let mut spec = ConstraintSpec::kind("unique").column("email");
    spec.index = Some("index".to_string());
    let sql = dialect
        .create_table()
        .table("users")
        .column(FieldSpec::new("email").kind("string"))
        .constraint(spec)
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE `users` (`email` varchar(255), UNIQUE INDEX (`email`))"
    );
}

#[test]
fn mysql_table_meta_attributes() {
    let dialect = Dialect::mysql();
    let sql = dialect
        .create_table()
        .table("table1")
        .column(FieldSpec::new("id").kind("serial"))
        .meta("charset", "utf8")
        .meta("engine", "InnoDB")
        .meta("tablespace", "myspace")
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE `table1` (`id` int NOT NULL AUTO_INCREMENT, PRIMARY KEY (`id`)) \
         DEFAULT CHARSET utf8 ENGINE InnoDB TABLESPACE myspace"
    );
}

#[test]
fn mysql_column_meta_attributes() {
    let dialect = Dialect::mysql();
    let sql = dialect
        .create_table()
        .table("posts")
        .column(
            FieldSpec::new("body")
                .kind("text")
                .meta("charset", "utf8mb4")
                .meta("comment", "post body"),
        )
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE `posts` (`body` text CHARACTER SET utf8mb4 COMMENT 'post body')"
    );
}

#[test]
fn sqlite_serial_has_no_autoincrement_clause() {
    let dialect = Dialect::sqlite();
    let sql = dialect
        .create_table()
        .table("table1")
        .column(FieldSpec::new("id").kind("serial"))
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"table1\" (\"id\" integer NOT NULL, PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn create_table_if_not_exists() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("table1")
        .if_not_exists()
        .column(FieldSpec::new("id").kind("id"))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "CREATE TABLE IF NOT EXISTS \"table1\" (\"id\" integer)");
}

#[test]
fn native_types_bypass_the_catalog() {
    let dialect = Dialect::ansi();
    let sql = dialect
        .create_table()
        .table("geo")
        .column(FieldSpec::new("shape").native("GEOGRAPHY"))
        .to_sql()
        .unwrap();
    assert_eq!(sql, "CREATE TABLE \"geo\" (\"shape\" geography)");
}

#[test]
fn constraints_without_a_kind_are_rejected() {
    let dialect = Dialect::ansi();
    let err = dialect
        .create_table()
        .table("table1")
        .column(FieldSpec::new("id"))
        .constraint(ConstraintSpec::default())
        .to_sql()
        .unwrap_err();
    assert_eq!(err, DialectError::MissingConstraintType);
}

use sql2mongo::{LexError, ParseError, TranslateError, translate};

fn command(sql: &str) -> String {
    translate(sql)
        .unwrap_or_else(|e| panic!("failed to translate {:?}: {}", sql, e))
        .command
}

// ============================================================================
// End-to-end translations
// ============================================================================

#[test]
fn test_select_with_projection() {
    assert_eq!(
        command("SELECT nombre, edad FROM usuarios WHERE edad > 20;"),
        r#"db.usuarios.find({"edad":{"$gt":20}}, {"nombre":1,"edad":1});"#
    );
}

#[test]
fn test_delete_many() {
    assert_eq!(
        command("DELETE FROM sesiones WHERE expirado = 1;"),
        r#"db.sesiones.deleteMany({"expirado":1});"#
    );
}

#[test]
fn test_update_many() {
    assert_eq!(
        command("UPDATE usuarios SET puntos = 100 WHERE id = 5;"),
        r#"db.usuarios.updateMany({"id":5}, {"$set":{"puntos":100}});"#
    );
}

#[test]
fn test_insert_one() {
    assert_eq!(
        command("INSERT INTO usuarios (nombre,edad,email) VALUES ('Ana', 28, 'ana@mail.com');"),
        r#"db.usuarios.insertOne({"nombre":"Ana","edad":28,"email":"ana@mail.com"});"#
    );
}

#[test]
fn test_insert_without_columns() {
    assert_eq!(
        command("INSERT INTO t VALUES (1,2)"),
        r#"db.t.insertOne({"col0":1,"col1":2});"#
    );
}

#[test]
fn test_select_and_with_limit() {
    assert_eq!(
        command(
            "SELECT nombre, libro_id, text_id FROM productos WHERE precio >= 100 AND categoria = 'libros' LIMIT 10;"
        ),
        r#"db.productos.find({"$and":[{"precio":{"$gte":100}},{"categoria":"libros"}]}, {"nombre":1,"libro_id":1,"text_id":1}).limit(10);"#
    );
}

#[test]
fn test_select_everything_sorted() {
    assert_eq!(
        command("select * from productos order by precio desc limit 3"),
        r#"db.productos.find({}).sort({ "precio": -1 }).limit(3);"#
    );
}

#[test]
fn test_or_of_and() {
    assert_eq!(
        command("SELECT * FROM t WHERE (a = 1 OR b <> 'x') AND c <= 2.5"),
        r#"db.t.find({"$and":[{"$or":[{"a":1},{"b":{"$ne":"x"}}]},{"c":{"$lte":2.5}}]});"#
    );
}

#[test]
fn test_left_associative_and_chain() {
    assert_eq!(
        command("DELETE FROM t WHERE a = 1 AND b = 2 AND c = 3"),
        r#"db.t.deleteMany({"$and":[{"$and":[{"a":1},{"b":2}]},{"c":3}]});"#
    );
}

// ============================================================================
// Numeric coercion
// ============================================================================

#[test]
fn test_quoted_word_stays_string() {
    assert_eq!(
        command("SELECT * FROM t WHERE categoria = 'libros'"),
        r#"db.t.find({"categoria":"libros"});"#
    );
}

#[test]
fn test_quoted_number_becomes_number() {
    assert_eq!(
        command("SELECT * FROM t WHERE codigo = '100'"),
        r#"db.t.find({"codigo":100});"#
    );
}

#[test]
fn test_coercion_in_insert_and_update() {
    assert_eq!(
        command("INSERT INTO t (zip, name) VALUES ('08001', \"Ana\")"),
        r#"db.t.insertOne({"zip":8001,"name":"Ana"});"#
    );
    assert_eq!(
        command("UPDATE t SET precio = '9.90' WHERE id = '7'"),
        r#"db.t.updateMany({"id":7}, {"$set":{"precio":9.9}});"#
    );
}

#[test]
fn test_large_and_small_numbers_print_like_javascript() {
    assert_eq!(
        command("SELECT * FROM t WHERE id = 10000000000000000 LIMIT 9007199254740993"),
        r#"db.t.find({"id":10000000000000000}).limit(9007199254740992);"#
    );
    assert_eq!(
        command("INSERT INTO t (big, tiny, tinier) VALUES (123456789012345680000, 0.000001, '1e-7')"),
        r#"db.t.insertOne({"big":123456789012345680000,"tiny":0.000001,"tinier":1e-7});"#
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_translation_is_deterministic() {
    let sql = "SELECT c, b, a FROM t WHERE x > 1 OR y < 2 ORDER BY a LIMIT 4";
    let first = translate(sql).unwrap();
    for _ in 0..10 {
        assert_eq!(translate(sql).unwrap(), first);
    }
}

#[test]
fn test_single_comparison_has_single_key() {
    for op in ["=", "!=", "<>", ">", "<", ">=", "<="] {
        let sql = format!("SELECT * FROM t WHERE campo {} 3", op);
        let filter_text = command(&sql)
            .trim_start_matches("db.t.find(")
            .trim_end_matches(");")
            .to_string();
        let filter: serde_json::Value = serde_json::from_str(&filter_text).unwrap();
        let object = filter.as_object().unwrap();
        assert_eq!(object.len(), 1, "Failed for operator: {}", op);
        assert!(object.contains_key("campo"));
    }
}

#[test]
fn test_translation_exposes_statement() {
    let translation = translate("DELETE FROM sesiones").unwrap();
    assert_eq!(translation.statement.kind(), "delete");
    assert_eq!(translation.statement.table(), "sesiones");
}

#[test]
fn test_trailing_statements_are_ignored() {
    assert_eq!(
        command("DELETE FROM a; DELETE FROM b;"),
        "db.a.deleteMany({});"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_lex_error_is_reported() {
    let err = translate("SELECT * FROM t WHERE a = #").unwrap_err();
    assert!(matches!(err, TranslateError::Lex(LexError::UnexpectedChar { ch: '#', .. })));
    assert_eq!(err.to_string(), "lex error: unexpected character '#' at position 26");
}

#[test]
fn test_unterminated_string_is_reported() {
    let err = translate("SELECT * FROM t WHERE a = 'abc").unwrap_err();
    assert!(err.to_string().starts_with("lex error: unterminated string"));
}

#[test]
fn test_parse_error_is_reported() {
    let err = translate("SELECT a FROM t LIMIT many").unwrap_err();
    assert!(matches!(err, TranslateError::Parse(ParseError::Unexpected { .. })));
    assert_eq!(
        err.to_string(),
        "parse error: expected number after LIMIT, found identifier 'many'"
    );
}

#[test]
fn test_join_is_reported() {
    let err = translate("SELECT a FROM t JOIN u").unwrap_err();
    assert_eq!(err.to_string(), "parse error: JOIN is reserved but not supported");
}

#[test]
fn test_arithmetic_in_condition_is_a_parse_error() {
    let err = translate("SELECT a FROM t WHERE a * 2").unwrap_err();
    assert!(matches!(err, TranslateError::Parse(_)));
}

#[test]
fn test_deep_condition_is_an_error() {
    let chain = vec!["a = 1"; 1_000].join(" AND ");
    let err = translate(&format!("SELECT * FROM t WHERE {}", chain)).unwrap_err();
    assert!(matches!(err, TranslateError::Parse(ParseError::TooDeep { limit: 128 })));

    let parens = format!("SELECT * FROM t WHERE {}a = 1{}", "(".repeat(1_000), ")".repeat(1_000));
    let err = translate(&parens).unwrap_err();
    assert_eq!(err.to_string(), "parse error: condition nests deeper than 128 levels");
}

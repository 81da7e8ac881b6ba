// tests/generator_tests.rs

use indexmap::IndexMap;
use serde_json::{Value, json};
use sql2mongo::ast::{Direction, Expr, Field, Literal, Operator, OrderBy, Statement};
use sql2mongo::generator::{GenerateError, filter, generate};

fn cmp(column: &str, op: Operator, value: Literal) -> Expr {
    Expr::Comparison {
        column: column.to_string(),
        op,
        value,
    }
}

fn filter_of(expr: &Expr) -> Value {
    filter(Some(expr)).unwrap()
}

fn select(fields: Vec<Field>) -> Statement {
    Statement::Select {
        table: "t".into(),
        fields,
        where_clause: None,
        order_by: None,
        limit: None,
    }
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_operator_mapping() {
    let test_cases = vec![
        (Operator::Equal, json!({"a": 5})),
        (Operator::NotEqual, json!({"a": {"$ne": 5}})),
        (Operator::LessGreater, json!({"a": {"$ne": 5}})),
        (Operator::GreaterThan, json!({"a": {"$gt": 5}})),
        (Operator::LessThan, json!({"a": {"$lt": 5}})),
        (Operator::GreaterEqual, json!({"a": {"$gte": 5}})),
        (Operator::LessEqual, json!({"a": {"$lte": 5}})),
    ];

    for (op, expected) in test_cases {
        let result = filter_of(&cmp("a", op, Literal::Number(5.0)));
        assert_eq!(result, expected, "Failed for operator: {}", op);
        assert_eq!(result.as_object().unwrap().len(), 1);
    }
}

#[test]
fn test_no_where_is_empty_filter() {
    assert_eq!(filter(None).unwrap(), json!({}));
}

#[test]
fn test_and_or_nesting() {
    let a = cmp("a", Operator::Equal, Literal::Number(1.0));
    let b = cmp("b", Operator::Equal, Literal::Number(2.0));
    let c = cmp("c", Operator::Equal, Literal::Number(3.0));

    let and_chain = Expr::And {
        left: Box::new(Expr::And {
            left: Box::new(a.clone()),
            right: Box::new(b.clone()),
        }),
        right: Box::new(c.clone()),
    };
    assert_eq!(
        filter_of(&and_chain),
        json!({"$and": [{"$and": [{"a": 1}, {"b": 2}]}, {"c": 3}]})
    );

    let or = Expr::Or {
        left: Box::new(a),
        right: Box::new(Expr::And {
            left: Box::new(b),
            right: Box::new(c),
        }),
    };
    assert_eq!(
        filter_of(&or),
        json!({"$or": [{"a": 1}, {"$and": [{"b": 2}, {"c": 3}]}]})
    );
}

#[test]
fn test_arithmetic_operator_is_rejected() {
    for op in [Operator::Plus, Operator::Minus, Operator::Star, Operator::Slash] {
        let statement = Statement::Delete {
            table: "t".into(),
            where_clause: Some(cmp("a", op, Literal::Number(1.0))),
        };
        let err = generate(&statement).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedOperator(o) if o == op));
        assert_eq!(err.to_string(), format!("unsupported operator '{}' in condition", op));
    }
}

// ============================================================================
// Literal coercion in filters
// ============================================================================

#[test]
fn test_quoted_text_stays_string() {
    let result = filter_of(&cmp("categoria", Operator::Equal, Literal::String("libros".into())));
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"categoria":"libros"}"#);
}

#[test]
fn test_quoted_number_is_coerced() {
    let result = filter_of(&cmp("codigo", Operator::Equal, Literal::String("100".into())));
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"codigo":100}"#);
}

#[test]
fn test_bare_word_value() {
    let result = filter_of(&cmp("estado", Operator::NotEqual, Literal::Identifier("activo".into())));
    assert_eq!(result, json!({"estado": {"$ne": "activo"}}));
}

#[test]
fn test_decimal_values() {
    let result = filter_of(&cmp("precio", Operator::LessThan, Literal::Number(9.5)));
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"precio":{"$lt":9.5}}"#);
}

// ============================================================================
// SELECT rendering
// ============================================================================

#[test]
fn test_lone_wildcard_has_no_projection() {
    assert_eq!(generate(&select(vec![Field::Wildcard])).unwrap(), "db.t.find({});");
}

#[test]
fn test_projection_keeps_select_order() {
    let statement = select(vec![
        Field::Named("zeta".into()),
        Field::Named("alfa".into()),
        Field::Named("medio".into()),
    ]);
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.t.find({}, {"zeta":1,"alfa":1,"medio":1});"#
    );
}

#[test]
fn test_wildcard_mixed_with_names_is_skipped() {
    let statement = select(vec![Field::Wildcard, Field::Named("a".into())]);
    assert_eq!(generate(&statement).unwrap(), r#"db.t.find({}, {"a":1});"#);
}

#[test]
fn test_sort_then_limit() {
    let statement = Statement::Select {
        table: "t".into(),
        fields: vec![Field::Wildcard],
        where_clause: None,
        order_by: Some(OrderBy {
            column: "edad".into(),
            direction: Direction::Desc,
        }),
        limit: Some(10.0),
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.t.find({}).sort({ "edad": -1 }).limit(10);"#
    );
}

#[test]
fn test_sort_ascending() {
    let statement = Statement::Select {
        table: "t".into(),
        fields: vec![Field::Named("a".into())],
        where_clause: None,
        order_by: Some(OrderBy {
            column: "a".into(),
            direction: Direction::Asc,
        }),
        limit: None,
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.t.find({}, {"a":1}).sort({ "a": 1 });"#
    );
}

#[test]
fn test_limit_zero_is_rendered() {
    let statement = Statement::Select {
        table: "t".into(),
        fields: vec![Field::Wildcard],
        where_clause: None,
        order_by: None,
        limit: Some(0.0),
    };
    assert_eq!(generate(&statement).unwrap(), "db.t.find({}).limit(0);");
}

// ============================================================================
// INSERT rendering
// ============================================================================

#[test]
fn test_insert_synthesized_columns() {
    let statement = Statement::Insert {
        table: "t".into(),
        columns: vec![],
        values: vec![Literal::Number(1.0), Literal::Number(2.0)],
    };
    assert_eq!(generate(&statement).unwrap(), r#"db.t.insertOne({"col0":1,"col1":2});"#);
}

#[test]
fn test_insert_pairs_columns_and_values() {
    let statement = Statement::Insert {
        table: "usuarios".into(),
        columns: vec!["nombre".into(), "edad".into(), "zip".into()],
        values: vec![
            Literal::String("Ana".into()),
            Literal::Number(28.0),
            Literal::String("08001".into()),
        ],
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.usuarios.insertOne({"nombre":"Ana","edad":28,"zip":8001});"#
    );
}

#[test]
fn test_insert_count_mismatch_drops_surplus() {
    let more_columns = Statement::Insert {
        table: "t".into(),
        columns: vec!["a".into(), "b".into()],
        values: vec![Literal::Number(1.0)],
    };
    assert_eq!(generate(&more_columns).unwrap(), r#"db.t.insertOne({"a":1});"#);

    let more_values = Statement::Insert {
        table: "t".into(),
        columns: vec!["a".into()],
        values: vec![Literal::Number(1.0), Literal::Number(2.0)],
    };
    assert_eq!(generate(&more_values).unwrap(), r#"db.t.insertOne({"a":1});"#);
}

// ============================================================================
// UPDATE and DELETE rendering
// ============================================================================

#[test]
fn test_update_set_document() {
    let mut assignments = IndexMap::new();
    assignments.insert("puntos".to_string(), Literal::Number(100.0));
    assignments.insert("nivel".to_string(), Literal::String("oro".into()));

    let statement = Statement::Update {
        table: "usuarios".into(),
        assignments,
        where_clause: Some(cmp("id", Operator::Equal, Literal::Number(5.0))),
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.usuarios.updateMany({"id":5}, {"$set":{"puntos":100,"nivel":"oro"}});"#
    );
}

#[test]
fn test_update_without_where() {
    let mut assignments = IndexMap::new();
    assignments.insert("a".to_string(), Literal::Identifier("b".into()));

    let statement = Statement::Update {
        table: "t".into(),
        assignments,
        where_clause: None,
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.t.updateMany({}, {"$set":{"a":"b"}});"#
    );
}

#[test]
fn test_delete_without_where() {
    let statement = Statement::Delete {
        table: "sesiones".into(),
        where_clause: None,
    };
    assert_eq!(generate(&statement).unwrap(), "db.sesiones.deleteMany({});");
}

#[test]
fn test_string_escaping() {
    let statement = Statement::Delete {
        table: "t".into(),
        where_clause: Some(cmp("nota", Operator::Equal, Literal::String("dijo \"hola\"\n".into()))),
    };
    assert_eq!(
        generate(&statement).unwrap(),
        r#"db.t.deleteMany({"nota":"dijo \"hola\"\n"});"#
    );
}

//! MongoDB shell command generation.
//!
//! Walks a parsed [`Statement`] and renders the equivalent `db.<collection>`
//! call. Documents are built as insertion-ordered [`serde_json::Map`]s so the
//! keys come out in the order they were written in the SQL.
//!
//! | SQL | MongoDB |
//! |-----|---------|
//! | `SELECT a, b FROM t WHERE x > 1` | `db.t.find({"x":{"$gt":1}}, {"a":1,"b":1});` |
//! | `INSERT INTO t (a) VALUES (1)` | `db.t.insertOne({"a":1});` |
//! | `UPDATE t SET a = 1 WHERE id = 5` | `db.t.updateMany({"id":5}, {"$set":{"a":1}});` |
//! | `DELETE FROM t WHERE x = 1` | `db.t.deleteMany({"x":1});` |

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::ast::{Direction, Expr, Field, Literal, Operator, OrderBy, Statement};
use crate::value::{self, normalize};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unsupported operator '{0}' in condition")]
    UnsupportedOperator(Operator),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders `statement` as a MongoDB shell command.
pub fn generate(statement: &Statement) -> Result<String, GenerateError> {
    match statement {
        Statement::Select {
            table,
            fields,
            where_clause,
            order_by,
            limit,
        } => generate_select(table, fields, where_clause.as_ref(), order_by.as_ref(), *limit),
        Statement::Insert {
            table,
            columns,
            values,
        } => generate_insert(table, columns, values),
        Statement::Update {
            table,
            assignments,
            where_clause,
        } => {
            let filter = filter(where_clause.as_ref())?;
            let set: Map<String, Value> = assignments
                .iter()
                .map(|(column, literal)| (column.clone(), normalize(literal)))
                .collect();
            let update = json!({ "$set": set });
            Ok(format!(
                "db.{}.updateMany({}, {});",
                table,
                serde_json::to_string(&filter)?,
                serde_json::to_string(&update)?
            ))
        }
        Statement::Delete {
            table,
            where_clause,
        } => {
            let filter = filter(where_clause.as_ref())?;
            Ok(format!(
                "db.{}.deleteMany({});",
                table,
                serde_json::to_string(&filter)?
            ))
        }
    }
}

fn generate_select(
    table: &str,
    fields: &[Field],
    where_clause: Option<&Expr>,
    order_by: Option<&OrderBy>,
    limit: Option<f64>,
) -> Result<String, GenerateError> {
    let filter = filter(where_clause)?;
    let mut out = format!("db.{}.find({}", table, serde_json::to_string(&filter)?);

    if let Some(projection) = projection(fields) {
        out.push_str(", ");
        out.push_str(&serde_json::to_string(&projection)?);
    }
    out.push(')');

    if let Some(order_by) = order_by {
        let direction = match order_by.direction {
            Direction::Asc => 1,
            Direction::Desc => -1,
        };
        out.push_str(&format!(
            ".sort({{ {}: {} }})",
            serde_json::to_string(&order_by.column)?,
            direction
        ));
    }

    if let Some(limit) = limit {
        out.push_str(&format!(".limit({})", value::number(limit)));
    }

    out.push(';');
    Ok(out)
}

/// `None` for a lone `*`, otherwise every named column mapped to `1`.
fn projection(fields: &[Field]) -> Option<Map<String, Value>> {
    if let [Field::Wildcard] = fields {
        return None;
    }
    Some(
        fields
            .iter()
            .filter_map(|field| match field {
                Field::Named(column) => Some((column.clone(), Value::from(1))),
                Field::Wildcard => None,
            })
            .collect(),
    )
}

fn generate_insert(
    table: &str,
    columns: &[String],
    values: &[Literal],
) -> Result<String, GenerateError> {
    // Without a column list the values get synthesized names; otherwise
    // surplus columns or values on either side are dropped.
    let document: Map<String, Value> = if columns.is_empty() {
        values
            .iter()
            .enumerate()
            .map(|(i, literal)| (format!("col{}", i), normalize(literal)))
            .collect()
    } else {
        columns
            .iter()
            .zip(values)
            .map(|(column, literal)| (column.clone(), normalize(literal)))
            .collect()
    };

    Ok(format!(
        "db.{}.insertOne({});",
        table,
        serde_json::to_string(&document)?
    ))
}

/// Filter document for an optional WHERE clause; no clause is `{}`.
pub fn filter(where_clause: Option<&Expr>) -> Result<Value, GenerateError> {
    match where_clause {
        Some(expr) => expr_to_filter(expr),
        None => Ok(Value::Object(Map::new())),
    }
}

fn expr_to_filter(expr: &Expr) -> Result<Value, GenerateError> {
    match expr {
        Expr::Comparison { column, op, value } => {
            let fragment = comparison(*op, normalize(value))?;
            let mut document = Map::new();
            document.insert(column.clone(), fragment);
            Ok(Value::Object(document))
        }
        Expr::And { left, right } => Ok(json!({
            "$and": [expr_to_filter(left)?, expr_to_filter(right)?]
        })),
        Expr::Or { left, right } => Ok(json!({
            "$or": [expr_to_filter(left)?, expr_to_filter(right)?]
        })),
    }
}

fn comparison(op: Operator, value: Value) -> Result<Value, GenerateError> {
    let operator = match op {
        Operator::Equal => return Ok(value),
        Operator::NotEqual | Operator::LessGreater => "$ne",
        Operator::GreaterThan => "$gt",
        Operator::LessThan => "$lt",
        Operator::GreaterEqual => "$gte",
        Operator::LessEqual => "$lte",
        Operator::Plus | Operator::Minus | Operator::Star | Operator::Slash => {
            return Err(GenerateError::UnsupportedOperator(op));
        }
    };
    let mut fragment = Map::new();
    fragment.insert(operator.to_string(), value);
    Ok(Value::Object(fragment))
}

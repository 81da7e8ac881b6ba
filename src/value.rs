//! Literal normalization.
//!
//! Every literal that ends up in a generated document goes through
//! [`normalize`]. Numbers pass through; text that reads as a number is
//! coerced to that number, even when it was written as a quoted string:
//!
//! ```
//! use sql2mongo::ast::Literal;
//! use sql2mongo::value::normalize;
//! use serde_json::json;
//!
//! assert_eq!(normalize(&Literal::String("libros".into())), json!("libros"));
//! assert_eq!(normalize(&Literal::String("100".into())), json!(100));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::ast::Literal;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is valid")
});

static RADIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").expect("radix pattern is valid")
});

/// Converts a literal into the JSON value written to the output.
pub fn normalize(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => number(*n),
        Literal::String(text) | Literal::Identifier(text) => match numeric_text(text) {
            Some(n) => number(n),
            None => Value::String(text.clone()),
        },
    }
}

/// Returns the number `text` denotes, if it reads as one.
///
/// Accepted: surrounding whitespace around a signed decimal with optional
/// fraction and exponent (`42`, ` -3.5 `, `1e3`, `.5`, `7.`) and unsigned
/// `0x`, `0o`, `0b` integers. Empty text and values that overflow to
/// infinity are not numeric.
pub fn numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    let value = if DECIMAL.is_match(trimmed) {
        trimmed.parse::<f64>().ok()?
    } else if RADIX.is_match(trimmed) {
        let radix = match trimmed.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        trimmed[2..]
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
    } else {
        return None;
    };

    value.is_finite().then_some(value)
}

/// JSON form of a number, spelled the way a JavaScript runtime prints it:
/// shortest round-trip digits, plain notation for magnitudes in
/// `[1e-6, 1e21)` and exponent notation outside it (`20`, `2.5`,
/// `10000000000000000`, `1e+21`, `1e-7`). NaN and infinities become `null`.
pub fn number(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    // Relies on serde_json's `arbitrary_precision` keeping the text as is
    number_text(n)
        .parse::<serde_json::Number>()
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn number_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    // `{:e}` gives the shortest digits that round-trip, as `d.ddde<exp>`
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let count = digits.len() as i32;
    let point = exponent + 1;

    let body = if count <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    };

    if n < 0.0 { format!("-{}", body) } else { body }
}

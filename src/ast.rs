//! # SQL Dialect - Abstract Syntax Tree
//!
//! This module defines the tokens and syntax tree for the small SQL dialect
//! that `sql2mongo` translates into MongoDB shell commands.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and the keyword table
//! - **[operators]** - Comparison and arithmetic operators
//! - **[expressions]** - WHERE conditions and literal values
//! - **[statements]** - SELECT, INSERT, UPDATE and DELETE
//!
//! ## Quick Start
//!
//! ```text
//! SELECT nombre, edad FROM usuarios WHERE edad > 20;
//! ```
//!
//! parses into
//!
//! ```text
//! Statement::Select {
//!     table: "usuarios",
//!     fields: [Named("nombre"), Named("edad")],
//!     where_clause: Some(Comparison { column: "edad", op: GreaterThan, value: Number(20.0) }),
//!     order_by: None,
//!     limit: None,
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Names
//!
//! Table and column names are single tokens and may contain dots, so
//! `users.id` is one identifier. A keyword in name position is accepted
//! and lowercased (`SELECT order FROM t` selects the column `order`).
//!
//! ### Literals
//!
//! Values keep the form they were written in (number, quoted string or bare
//! word). Numeric coercion happens later, during generation.
//!
//! ### Conditions
//!
//! `AND` binds tighter than `OR`, both are left-associative, and
//! parentheses group:
//!
//! ```text
//! a = 1 OR b = 2 AND c = 3      // Or(a, And(b, c))
//! (a = 1 OR b = 2) AND c = 3    // And(Or(a, b), c)
//! ```
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use operators::Operator;
pub use statements::{Direction, Field, OrderBy, Statement};
pub use tokens::{Keyword, Token};

use indexmap::IndexMap;
use thiserror::Error;

use crate::ast::{
    Direction, Expr, Field, Keyword, Literal, Operator, OrderBy, Statement, Token,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    Unexpected { expected: String, found: Token },

    #[error("{keyword} is reserved but not supported")]
    Unsupported { keyword: Keyword },

    #[error("condition nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Deepest condition tree, or parenthesis nesting, the parser accepts.
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent parser over a token sequence.
///
/// Parsing is fail-fast: the first mismatch aborts the statement and
/// nothing that was built so far escapes.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    /// Open parentheses around the condition being parsed
    nesting: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::Eof) {
            tokens.push(Token::Eof);
        }
        Parser {
            tokens,
            position: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof and `advance` never moves past it
        &self.tokens[self.position]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token != Token::Eof {
            self.position += 1;
        }
        token
    }

    fn check(&self, token: &Token) -> bool {
        self.peek() == token
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(&Token::Keyword(keyword))
    }

    fn unexpected<T>(&self, expected: impl Into<String>) -> Result<T, ParseError> {
        Err(ParseError::Unexpected {
            expected: expected.into(),
            found: self.peek().clone(),
        })
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return self.unexpected(expected.to_string());
        }
        self.advance();
        Ok(())
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        self.expect(Token::Keyword(keyword))
    }

    /// Parses the first statement. Tokens after it are ignored.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        match self.peek() {
            Token::Keyword(Keyword::Select) => self.parse_select(),
            Token::Keyword(Keyword::Insert) => self.parse_insert(),
            Token::Keyword(Keyword::Update) => self.parse_update(),
            Token::Keyword(Keyword::Delete) => self.parse_delete(),
            _ => self.unexpected("SELECT, INSERT, UPDATE or DELETE"),
        }
    }

    /// Table or column name. A keyword in name position is accepted and
    /// lowercased.
    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        let name = match self.peek() {
            Token::Identifier(name) => name.clone(),
            Token::Keyword(keyword) if keyword.is_unsupported() => {
                return Err(ParseError::Unsupported { keyword: *keyword });
            }
            Token::Keyword(keyword) => keyword.as_str().to_lowercase(),
            _ => return self.unexpected("identifier"),
        };
        self.advance();
        Ok(name)
    }

    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let literal = match self.peek() {
            Token::Number(n) => Literal::Number(*n),
            Token::String(s) => Literal::String(s.clone()),
            Token::Identifier(name) => Literal::Identifier(name.clone()),
            _ => return self.unexpected("string, number or identifier"),
        };
        self.advance();
        Ok(literal)
    }

    fn parse_select(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let fields = self.parse_select_list()?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_identifier()?;

        let mut where_clause = None;
        let mut order_by = None;
        let mut limit = None;

        // Scanning stops quietly at the first token that does not start a
        // clause; whatever follows is ignored.
        loop {
            match self.peek() {
                Token::Keyword(Keyword::Where) => {
                    self.advance();
                    where_clause = Some(self.parse_expression()?);
                }
                Token::Keyword(Keyword::Limit) => {
                    self.advance();
                    match self.peek() {
                        Token::Number(n) => {
                            limit = Some(*n);
                            self.advance();
                        }
                        _ => return self.unexpected("number after LIMIT"),
                    }
                }
                Token::Keyword(Keyword::Order) => {
                    self.advance();
                    self.expect_keyword(Keyword::By)?;
                    order_by = Some(self.parse_order_by()?);
                }
                Token::Keyword(keyword) if keyword.is_unsupported() => {
                    return Err(ParseError::Unsupported { keyword: *keyword });
                }
                _ => break,
            }
        }

        Ok(Statement::Select {
            table,
            fields,
            where_clause,
            order_by,
            limit,
        })
    }

    fn parse_select_list(&mut self) -> Result<Vec<Field>, ParseError> {
        let mut fields = vec![];
        loop {
            let field = match self.peek() {
                Token::Operator(Operator::Star) => {
                    self.advance();
                    Field::Wildcard
                }
                Token::Identifier(_) | Token::Keyword(_) => Field::Named(self.parse_identifier()?),
                _ => return self.unexpected("'*' or column name in select list"),
            };
            fields.push(field);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }
        Ok(fields)
    }

    fn parse_order_by(&mut self) -> Result<OrderBy, ParseError> {
        let column = self.parse_identifier()?;
        let direction = match self.peek() {
            Token::Keyword(Keyword::Asc) => {
                self.advance();
                Direction::Asc
            }
            Token::Keyword(Keyword::Desc) => {
                self.advance();
                Direction::Desc
            }
            _ => Direction::Asc,
        };
        Ok(OrderBy { column, direction })
    }

    fn parse_insert(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.parse_identifier()?;

        let columns = if self.check(&Token::LParen) {
            self.advance();
            self.parse_list(Self::parse_identifier)?
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        self.expect(Token::LParen)?;
        let values = self.parse_list(Self::parse_literal)?;

        Ok(Statement::Insert {
            table,
            columns,
            values,
        })
    }

    /// Comma-separated items up to and including the closing `)`. The
    /// opening `(` has already been consumed.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![];
        loop {
            items.push(item(self)?);
            match self.peek() {
                Token::Comma => {
                    self.advance();
                }
                Token::RParen => {
                    self.advance();
                    return Ok(items);
                }
                _ => return self.unexpected("',' or ')'"),
            }
        }
    }

    fn parse_update(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_identifier()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = IndexMap::new();
        loop {
            let column = self.parse_identifier()?;
            self.expect(Token::Operator(Operator::Equal))?;
            let value = self.parse_literal()?;
            assignments.insert(column, value);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }

        let where_clause = self.parse_optional_where()?;
        Ok(Statement::Update {
            table,
            assignments,
            where_clause,
        })
    }

    fn parse_delete(&mut self) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.parse_identifier()?;
        let where_clause = self.parse_optional_where()?;
        Ok(Statement::Delete {
            table,
            where_clause,
        })
    }

    fn parse_optional_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if !self.check_keyword(Keyword::Where) {
            return Ok(None);
        }
        self.advance();
        self.parse_expression().map(Some)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or().map(|(expr, _)| expr)
    }

    // The helpers below return the built tree together with its depth so
    // that an AND/OR chain or a stack of parentheses past MAX_DEPTH is a
    // parse error instead of unbounded recursion further down.

    fn deeper(depth: usize) -> Result<usize, ParseError> {
        let depth = depth + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(depth)
    }

    fn parse_or(&mut self) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut depth) = self.parse_and()?;

        while self.check_keyword(Keyword::Or) {
            self.advance();
            let (right, right_depth) = self.parse_and()?;
            depth = Self::deeper(depth.max(right_depth))?;

            left = Expr::Or {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok((left, depth))
    }

    fn parse_and(&mut self) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut depth) = self.parse_comparison()?;

        while self.check_keyword(Keyword::And) {
            self.advance();
            let (right, right_depth) = self.parse_comparison()?;
            depth = Self::deeper(depth.max(right_depth))?;

            left = Expr::And {
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok((left, depth))
    }

    fn parse_comparison(&mut self) -> Result<(Expr, usize), ParseError> {
        if self.check(&Token::LParen) {
            self.advance();
            self.nesting = Self::deeper(self.nesting)?;
            let inner = self.parse_or()?;
            self.expect(Token::RParen)?;
            self.nesting -= 1;
            return Ok(inner);
        }

        let column = match self.peek() {
            Token::Identifier(name) => name.clone(),
            _ => return self.unexpected("column name in condition"),
        };
        self.advance();

        let op = match self.peek() {
            Token::Operator(op) if op.is_comparison() => *op,
            _ => return self.unexpected("comparison operator"),
        };
        self.advance();

        let value = self.parse_literal()?;
        Ok((Expr::Comparison { column, op, value }, 1))
    }
}

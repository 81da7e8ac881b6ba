use thiserror::Error;

use crate::ast::{Keyword, Operator, Token};

/// Character offset into the source text.
pub type Position = usize;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: Position },

    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: Position },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: Position },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenizes the whole input. The result always ends with a single
    /// [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '$') {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some(escaped) => result.push(escaped),
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match number.parse::<f64>() {
            Ok(n) => Ok(Token::Number(n)),
            Err(_) => Err(LexError::InvalidNumber {
                text: number,
                position: start,
            }),
        }
    }

    fn two_char_operator(&self) -> Option<Operator> {
        let op = match (self.current_char()?, self.peek_char(1)?) {
            ('>', '=') => Operator::GreaterEqual,
            ('<', '=') => Operator::LessEqual,
            ('!', '=') => Operator::NotEqual,
            ('<', '>') => Operator::LessGreater,
            _ => return None,
        };
        Some(op)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if let Some(op) = self.two_char_operator() {
            self.advance();
            self.advance();
            return Ok(Token::Operator(op));
        }

        let token = match self.current_char() {
            None => return Ok(Token::Eof),
            Some(',') => Token::Comma,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(';') => Token::Semicolon,
            Some('=') => Token::Operator(Operator::Equal),
            Some('<') => Token::Operator(Operator::LessThan),
            Some('>') => Token::Operator(Operator::GreaterThan),
            Some('+') => Token::Operator(Operator::Plus),
            Some('-') => Token::Operator(Operator::Minus),
            Some('*') => Token::Operator(Operator::Star),
            Some('/') => Token::Operator(Operator::Slash),
            Some(quote @ ('\'' | '"')) => return self.read_string(quote).map(Token::String),
            Some(ch) if ch.is_ascii_digit() => return self.read_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let word = self.read_word();
                return Ok(match Keyword::lookup(&word) {
                    Some(keyword) => Token::Keyword(keyword),
                    None => Token::Identifier(word),
                });
            }
            Some(ch) => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    position: self.position,
                });
            }
        };

        self.advance();
        Ok(token)
    }
}

/// Tokenizes `input` in one call.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_keywords_ignore_case() {
    let mut lexer = Lexer::new("select From wHeRe");
    assert_eq!(lexer.next_token().unwrap(), Token::Keyword(Keyword::Select));
    assert_eq!(lexer.next_token().unwrap(), Token::Keyword(Keyword::From));
    assert_eq!(lexer.next_token().unwrap(), Token::Keyword(Keyword::Where));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_comparison() {
    let mut lexer = Lexer::new("edad >= 20;");
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("edad".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Operator(Operator::GreaterEqual));
    assert_eq!(lexer.next_token().unwrap(), Token::Number(20.0));
    assert_eq!(lexer.next_token().unwrap(), Token::Semicolon);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

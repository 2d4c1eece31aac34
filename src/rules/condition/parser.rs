// SPDX-License-Identifier: MIT

//! Condition expression parser
//!
//! Parses expressions like:
//! - `tier == 'gold'`
//! - `score >= 0.8`
//! - `not (a == 'x' or b > 5) and tags contains 'vip'`
//!
//! `or` binds looser than `and`, which binds looser than `not`.

use super::ast::{CompareOp, Expression, Literal};
use crate::error::ConditionError;

/// Deepest expression tree the parser will build
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Str(String),
    Op(CompareOp),
    LParen,
    RParen,
}

/// Parse a condition expression string into an AST
pub fn parse(input: &str) -> Result<Expression, ConditionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ConditionError::Empty);
    }

    let mut parser = Parser {
        input,
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_or()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token::RParen) => Err(ConditionError::UnbalancedParens(input.to_string())),
        Some(token) => Err(parser.unexpected(token)),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '+')
}

fn tokenize(input: &str) -> Result<Vec<Token>, ConditionError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::LParen),
            ')' => tokens.push(Token::RParen),
            '\'' | '"' => {
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some(q) if q == c => break,
                        Some(ch) => s.push(ch),
                        None => {
                            return Err(ConditionError::InvalidLiteral(format!("{}{}", c, s)));
                        }
                    }
                }
                tokens.push(Token::Str(s));
            }
            '=' | '!' | '>' | '<' => {
                let followed_by_eq = chars.next_if_eq(&'=').is_some();
                let op = match (c, followed_by_eq) {
                    ('=', true) => CompareOp::Eq,
                    ('!', true) => CompareOp::NotEq,
                    ('>', true) => CompareOp::Gte,
                    ('<', true) => CompareOp::Lte,
                    ('>', false) => CompareOp::Gt,
                    ('<', false) => CompareOp::Lt,
                    _ => {
                        return Err(ConditionError::UnexpectedToken {
                            token: c.to_string(),
                            input: input.to_string(),
                        });
                    }
                };
                tokens.push(Token::Op(op));
            }
            c if is_word_char(c) => {
                let mut word = c.to_string();
                while let Some(next) = chars.next_if(|ch| is_word_char(*ch)) {
                    word.push(next);
                }
                tokens.push(Token::Word(word));
            }
            other => {
                return Err(ConditionError::UnexpectedToken {
                    token: other.to_string(),
                    input: input.to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

struct Parser<'i> {
    input: &'i str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        match self.peek() {
            Some(Token::Word(w)) if w == keyword => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn unexpected(&self, token: &Token) -> ConditionError {
        let token = match token {
            Token::Word(w) => w.clone(),
            Token::Str(s) => format!("'{}'", s),
            Token::Op(op) => op.to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        };
        ConditionError::UnexpectedToken {
            token,
            input: self.input.to_string(),
        }
    }

    /// Account for one more level of tree depth.
    ///
    /// Left-nested `and`/`or` chains count every link, so the counter is an
    /// upper bound on the depth of the tree being built.
    fn descend(&mut self) -> Result<(), ConditionError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ConditionError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn parse_or(&mut self) -> Result<Expression, ConditionError> {
        let outer = self.depth;
        let mut left = self.parse_and()?;
        while self.eat_keyword("or") {
            self.descend()?;
            let right = self.parse_and()?;
            left = Expression::Or(Box::new(left), Box::new(right));
        }
        self.depth = outer;
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expression, ConditionError> {
        let outer = self.depth;
        let mut left = self.parse_not()?;
        while self.eat_keyword("and") {
            self.descend()?;
            let right = self.parse_not()?;
            left = Expression::And(Box::new(left), Box::new(right));
        }
        self.depth = outer;
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expression, ConditionError> {
        if self.eat_keyword("not") {
            self.descend()?;
            let inner = self.parse_not()?;
            self.depth -= 1;
            return Ok(Expression::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ConditionError> {
        match self.next() {
            Some(Token::LParen) => {
                self.descend()?;
                let inner = self.parse_or()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ConditionError::UnbalancedParens(self.input.to_string())),
                }
            }
            Some(Token::Word(word)) => self.parse_comparison(word),
            Some(token) => Err(self.unexpected(&token)),
            None => Err(ConditionError::MissingOperator(self.input.to_string())),
        }
    }

    fn parse_comparison(&mut self, path: String) -> Result<Expression, ConditionError> {
        let op = match self.peek() {
            Some(Token::Op(op)) => Some(*op),
            Some(Token::Word(w)) if w == "contains" => Some(CompareOp::Contains),
            _ => None,
        };

        let op = match (op, path.as_str()) {
            (Some(op), _) => op,
            (None, "true") => return Ok(Expression::True),
            (None, "false") => return Ok(Expression::False),
            (None, _) => return Err(ConditionError::MissingOperator(self.input.to_string())),
        };
        self.pos += 1;

        let right = match self.next() {
            Some(Token::Str(s)) => Literal::String(s),
            Some(Token::Word(w)) => parse_literal(&w)?,
            Some(token) => return Err(self.unexpected(&token)),
            None => return Err(ConditionError::InvalidLiteral(String::new())),
        };

        Ok(Expression::Compare { path, op, right })
    }
}

fn parse_literal(word: &str) -> Result<Literal, ConditionError> {
    match word {
        "null" => Ok(Literal::Null),
        "true" => Ok(Literal::Boolean(true)),
        "false" => Ok(Literal::Boolean(false)),
        _ => word
            .parse::<f64>()
            .map(Literal::Number)
            .map_err(|_| ConditionError::InvalidLiteral(word.to_string())),
    }
}

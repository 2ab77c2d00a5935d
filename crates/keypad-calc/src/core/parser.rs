//! Tokenizer and recursive descent parser for keypad expressions
//!
//! Grammar:
//! ```text
//! expression ::= term (('+' | '-') term)*
//! term       ::= unary (('*' | '/' | '%') unary)*
//! unary      ::= '-' unary | NUMBER
//! ```
//! There is no grouping: the keypad has no parentheses.

use crate::core::{EvalError, EvalResult, Operation};

/// Lexical token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Decimal literal
    Number(f64),
    /// One of `+ - * / %`
    Operator(Operation),
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "'{op}'"),
        }
    }
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary minus
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a number node
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a binary operation node
    #[must_use]
    pub fn binary(left: Self, op: Operation, right: Self) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a negation node
    #[must_use]
    pub fn negate(inner: Self) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Converts an expression string into tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unconsumed input
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Tokenizes the whole input
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` at end of input
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operation::from_symbol(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(EvalError::UnexpectedChar { ch, pos: self.pos }),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        parse_literal(literal).map(Token::Number)
    }
}

/// Parses `12`, `3.`, `.5` and `0.25`; a bare `.` is rejected
fn parse_literal(literal: &str) -> EvalResult<f64> {
    if !literal.bytes().any(|b| b.is_ascii_digit()) {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }

    let mut normalized = String::with_capacity(literal.len() + 2);
    if literal.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(literal);
    if literal.ends_with('.') {
        normalized.push('0');
    }

    normalized
        .parse()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

/// Recursive descent parser over a token list
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser from tokens
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Tokenizes and parses a string
    pub fn parse_str(input: &str) -> EvalResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into a single tree
    pub fn parse(&mut self) -> EvalResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(EvalError::UnexpectedToken(token.to_string()));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next operator if it has the given precedence
    fn take_operator(&mut self, precedence: u8) -> Option<Operation> {
        match self.current() {
            Some(Token::Operator(op)) if op.precedence() == precedence => {
                let op = *op;
                self.pos += 1;
                Some(op)
            }
            _ => None,
        }
    }

    fn parse_expression(&mut self) -> EvalResult<AstNode> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.take_operator(1) {
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> EvalResult<AstNode> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.take_operator(2) {
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<AstNode> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(AstNode::number(*n)),
            Some(Token::Operator(Operation::Subtract)) => {
                let inner = self.parse_unary()?;
                Ok(AstNode::negate(inner))
            }
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

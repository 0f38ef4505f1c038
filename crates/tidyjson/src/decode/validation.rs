//! Grammar check over the token sequence. Builds nothing; reports the
//! first left-to-right violation with its position.
//!
//! ```text
//! Value  := Object | Array | String | Literal
//! Object := '{' ( Pair (',' Pair)* )? '}'
//! Pair   := String ':' Value
//! Array  := '[' ( Value (',' Value)* )? ']'
//! String := Quote Literal? Quote
//! ```

use crate::decode::scanner::{Token, TokenKind};
use crate::error::{ErrorKind, ParseError};
use crate::number::is_json_number;

/// Accept exactly one well-formed top-level object or array with
/// nothing left over.
pub fn validate(tokens: &[Token]) -> Result<(), ParseError> {
    let Some(first) = tokens.first() else {
        return Err(ParseError::new(ErrorKind::Empty, "empty input", 1, 1));
    };
    if !matches!(first.kind, TokenKind::ObjectOpen | TokenKind::ArrayOpen) {
        return Err(ParseError::new(
            ErrorKind::MissingContainer,
            "top-level value must be an object or an array",
            first.line,
            first.column,
        ));
    }

    let mut cursor = Cursor { tokens, pos: 0 };
    cursor.value()?;
    if let Some(extra) = cursor.peek() {
        return Err(ParseError::new(
            ErrorKind::UnexpectedSymbol,
            "extra data after root value",
            extra.line,
            extra.column,
        ));
    }
    Ok(())
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Position reported when the token stream ends prematurely.
    fn end(&self) -> (usize, usize) {
        match self.tokens.last() {
            Some(token) => (token.line, token.column),
            None => (1, 1),
        }
    }

    fn value(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.advance() else {
            let (line, column) = self.end();
            return Err(ParseError::new(
                ErrorKind::MissingValue,
                "expected a value",
                line,
                column,
            ));
        };
        match token.kind {
            TokenKind::ObjectOpen => self.object(),
            TokenKind::ArrayOpen => self.array(),
            TokenKind::Quote => self.string_tail(),
            TokenKind::Literal => {
                if matches!(token.text.as_str(), "true" | "false" | "null")
                    || is_json_number(&token.text)
                {
                    Ok(())
                } else {
                    Err(ParseError::new(
                        ErrorKind::InvalidLiteral,
                        format!("invalid literal '{}'", token.text),
                        token.line,
                        token.column,
                    ))
                }
            }
            _ => Err(ParseError::new(
                ErrorKind::UnexpectedSymbol,
                "expected a value",
                token.line,
                token.column,
            )),
        }
    }

    /// The opening quote has been consumed; accept `Literal? Quote`.
    /// The optional literal makes the empty string valid both as a
    /// value and as an object key.
    fn string_tail(&mut self) -> Result<(), ParseError> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::Literal) {
            self.advance();
        }
        match self.advance() {
            Some(token) if token.kind == TokenKind::Quote => Ok(()),
            Some(token) => Err(ParseError::new(
                ErrorKind::InvalidString,
                "malformed string literal",
                token.line,
                token.column,
            )),
            None => {
                let (line, column) = self.end();
                Err(ParseError::new(
                    ErrorKind::InvalidString,
                    "unterminated string literal",
                    line,
                    column,
                ))
            }
        }
    }

    fn object(&mut self) -> Result<(), ParseError> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::ObjectClose) {
            self.advance();
            return Ok(());
        }
        loop {
            match self.peek() {
                Some(token) if token.kind == TokenKind::Quote => {
                    self.advance();
                    self.string_tail()?;
                }
                Some(token) => {
                    return Err(ParseError::new(
                        ErrorKind::InvalidKey,
                        "invalid or missing key string",
                        token.line,
                        token.column,
                    ));
                }
                None => {
                    let (line, column) = self.end();
                    return Err(ParseError::new(
                        ErrorKind::MissingSymbol,
                        "missing closing '}' for object",
                        line,
                        column,
                    ));
                }
            }

            match self.peek() {
                Some(token) if token.kind == TokenKind::Colon => {
                    self.advance();
                }
                Some(token) => {
                    return Err(ParseError::new(
                        ErrorKind::MissingSymbol,
                        "expected ':' after object key",
                        token.line,
                        token.column,
                    ));
                }
                None => {
                    let (line, column) = self.end();
                    return Err(ParseError::new(
                        ErrorKind::MissingSymbol,
                        "expected ':' after object key",
                        line,
                        column,
                    ));
                }
            }

            self.value()?;

            match self.peek() {
                Some(token) if token.kind == TokenKind::Comma => {
                    self.advance();
                }
                Some(token) if token.kind == TokenKind::ObjectClose => {
                    self.advance();
                    return Ok(());
                }
                Some(token) => {
                    return Err(ParseError::new(
                        ErrorKind::UnexpectedSymbol,
                        "expected ',' or '}' in object",
                        token.line,
                        token.column,
                    ));
                }
                None => {
                    let (line, column) = self.end();
                    return Err(ParseError::new(
                        ErrorKind::MissingSymbol,
                        "missing closing '}' for object",
                        line,
                        column,
                    ));
                }
            }
        }
    }

    fn array(&mut self) -> Result<(), ParseError> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::ArrayClose) {
            self.advance();
            return Ok(());
        }
        loop {
            self.value()?;

            match self.peek() {
                Some(token) if token.kind == TokenKind::Comma => {
                    self.advance();
                }
                Some(token) if token.kind == TokenKind::ArrayClose => {
                    self.advance();
                    return Ok(());
                }
                Some(token) => {
                    return Err(ParseError::new(
                        ErrorKind::UnexpectedSymbol,
                        "expected ',' or ']' in array",
                        token.line,
                        token.column,
                    ));
                }
                None => {
                    let (line, column) = self.end();
                    return Err(ParseError::new(
                        ErrorKind::MissingSymbol,
                        "missing closing ']' for array",
                        line,
                        column,
                    ));
                }
            }
        }
    }
}

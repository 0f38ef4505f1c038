use crate::error::{ErrorKind, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Comma,
    Colon,
    Quote,
    Literal,
}

/// A classified lexical unit with its 1-based source position. Columns
/// count bytes. `text` is non-empty only for `Literal` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub(crate) fn symbol(kind: TokenKind, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: String::new(),
            line,
            column,
        }
    }

    pub(crate) fn literal(text: String, line: usize, column: usize) -> Self {
        Token {
            kind: TokenKind::Literal,
            text,
            line,
            column,
        }
    }
}

/// Bytes that end a bare literal run: structural symbols, the string
/// delimiter, and whitespace.
pub(crate) fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'{' | b'}' | b'[' | b']' | b',' | b'"' | b':' | b' ' | b'\t' | b'\r' | b'\n'
    )
}

/// Decoded replacement for a recognized escape character. `\u` is not
/// recognized by design.
pub(crate) fn escape_replacement(b: u8) -> Option<u8> {
    Some(match b {
        b'"' => b'"',
        b'\\' => b'\\',
        b'/' => b'/',
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => return None,
    })
}

/// Tokenize an in-memory document. Always returns the full best-effort
/// token sequence; the first string-decoding error, if any, is returned
/// alongside it.
pub fn scan(input: &str) -> (Vec<Token>, Option<ParseError>) {
    let mut scanner = Scanner::new(input);
    scanner.run();
    (scanner.tokens, scanner.error)
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    error: Option<ParseError>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            error: None,
        }
    }

    fn bump(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.pos)?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Only the first error is kept; the rest of the scan is best-effort.
    fn record(&mut self, error: ParseError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn run(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            let (line, column) = (self.line, self.column);
            let kind = match b {
                b'{' => TokenKind::ObjectOpen,
                b'}' => TokenKind::ObjectClose,
                b'[' => TokenKind::ArrayOpen,
                b']' => TokenKind::ArrayClose,
                b',' => TokenKind::Comma,
                b':' => TokenKind::Colon,
                b'"' => {
                    self.bump();
                    self.tokens.push(Token::symbol(TokenKind::Quote, line, column));
                    self.string_body();
                    continue;
                }
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.bump();
                    continue;
                }
                _ => {
                    self.bare_literal();
                    continue;
                }
            };
            self.bump();
            self.tokens.push(Token::symbol(kind, line, column));
        }
    }

    /// Maximal run of non-delimiter bytes, emitted as one literal token.
    /// Numbers and keywords both take this path; discrimination happens
    /// during validation.
    fn bare_literal(&mut self) {
        let start = self.pos;
        let (line, column) = (self.line, self.column);
        while let Some(&b) = self.bytes.get(self.pos) {
            if is_delimiter(b) {
                break;
            }
            self.bump();
        }
        self.tokens
            .push(Token::literal(self.input[start..self.pos].to_string(), line, column));
    }

    /// Decode a string body. The opening quote has already been emitted.
    /// On a decoding error the closing quote token is still emitted so
    /// later structural tokens balance, and the scan resumes after the
    /// offending byte.
    fn string_body(&mut self) {
        let (body_line, body_column) = (self.line, self.column);
        let mut body = String::new();
        let mut run_start = self.pos;
        loop {
            let (line, column) = (self.line, self.column);
            match self.bytes.get(self.pos).copied() {
                None => {
                    body.push_str(&self.input[run_start..self.pos]);
                    self.record(ParseError::new(
                        ErrorKind::InvalidString,
                        "unterminated string",
                        line,
                        column,
                    ));
                    break;
                }
                Some(b'"') => {
                    body.push_str(&self.input[run_start..self.pos]);
                    self.bump();
                    if !body.is_empty() {
                        self.tokens.push(Token::literal(body, body_line, body_column));
                    }
                    self.tokens.push(Token::symbol(TokenKind::Quote, line, column));
                    return;
                }
                Some(b'\n') | Some(b'\r') => {
                    body.push_str(&self.input[run_start..self.pos]);
                    self.record(ParseError::new(
                        ErrorKind::InvalidString,
                        "raw line break in string",
                        line,
                        column,
                    ));
                    self.bump();
                    break;
                }
                Some(b'\\') => {
                    body.push_str(&self.input[run_start..self.pos]);
                    self.bump();
                    match self.bytes.get(self.pos).copied() {
                        None => {
                            self.record(ParseError::new(
                                ErrorKind::InvalidString,
                                "escape sequence at end of input",
                                self.line,
                                self.column,
                            ));
                            break;
                        }
                        Some(b'u') => {
                            self.record(ParseError::new(
                                ErrorKind::InvalidString,
                                "\\u escapes are not supported",
                                line,
                                column,
                            ));
                            self.bump();
                            break;
                        }
                        Some(escaped) => match escape_replacement(escaped) {
                            Some(replacement) => {
                                body.push(replacement as char);
                                self.bump();
                                run_start = self.pos;
                            }
                            None => {
                                self.record(ParseError::new(
                                    ErrorKind::InvalidString,
                                    format!("invalid escape \\{}", escaped as char),
                                    line,
                                    column,
                                ));
                                self.bump();
                                break;
                            }
                        },
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
        if !body.is_empty() {
            self.tokens.push(Token::literal(body, body_line, body_column));
        }
        self.tokens
            .push(Token::symbol(TokenKind::Quote, self.line, self.column));
    }
}

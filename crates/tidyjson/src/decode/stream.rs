use std::io::{self, Read};

use crate::decode::scanner::{Token, TokenKind, escape_replacement, is_delimiter};
use crate::error::{ErrorKind, ParseError};

/// Tokenize directly from a byte source, one byte at a time with a
/// single byte of lookahead. Semantics match [`scan`](super::scanner::scan)
/// exactly: the same bytes yield the same tokens and the same recorded
/// error. Read failures abort the scan.
pub fn scan_reader<R: Read>(reader: R) -> io::Result<(Vec<Token>, Option<ParseError>)> {
    let mut scanner = StreamScanner::new(reader);
    scanner.run()?;
    Ok((scanner.tokens, scanner.error))
}

/// Single-byte-lookahead wrapper over a reader. The lookahead is needed
/// only to stop bare-literal runs without consuming the delimiter.
struct ByteReader<R: Read> {
    inner: R,
    peeked: Option<u8>,
}

impl<R: Read> ByteReader<R> {
    fn new(inner: R) -> Self {
        ByteReader {
            inner,
            peeked: None,
        }
    }

    fn next(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.peeked.take() {
            return Ok(Some(b));
        }
        self.read_byte()
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.read_byte()?;
        }
        Ok(self.peeked)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

struct StreamScanner<R: Read> {
    source: ByteReader<R>,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    error: Option<ParseError>,
}

impl<R: Read> StreamScanner<R> {
    fn new(reader: R) -> Self {
        StreamScanner {
            source: ByteReader::new(reader),
            line: 1,
            column: 1,
            tokens: Vec::new(),
            error: None,
        }
    }

    fn consume(&mut self) -> io::Result<Option<u8>> {
        let b = self.source.next()?;
        match b {
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        Ok(b)
    }

    fn record(&mut self, error: ParseError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn run(&mut self) -> io::Result<()> {
        while let Some(b) = self.source.peek()? {
            let (line, column) = (self.line, self.column);
            let kind = match b {
                b'{' => TokenKind::ObjectOpen,
                b'}' => TokenKind::ObjectClose,
                b'[' => TokenKind::ArrayOpen,
                b']' => TokenKind::ArrayClose,
                b',' => TokenKind::Comma,
                b':' => TokenKind::Colon,
                b'"' => {
                    self.consume()?;
                    self.tokens.push(Token::symbol(TokenKind::Quote, line, column));
                    self.string_body()?;
                    continue;
                }
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.consume()?;
                    continue;
                }
                _ => {
                    self.bare_literal()?;
                    continue;
                }
            };
            self.consume()?;
            self.tokens.push(Token::symbol(kind, line, column));
        }
        Ok(())
    }

    fn bare_literal(&mut self) -> io::Result<()> {
        let (line, column) = (self.line, self.column);
        let mut buf = Vec::new();
        while let Some(b) = self.source.peek()? {
            if is_delimiter(b) {
                break;
            }
            self.consume()?;
            buf.push(b);
        }
        let text = self.into_text(buf, ErrorKind::InvalidLiteral, line, column);
        self.tokens.push(Token::literal(text, line, column));
        Ok(())
    }

    fn string_body(&mut self) -> io::Result<()> {
        let (body_line, body_column) = (self.line, self.column);
        let mut body = Vec::new();
        loop {
            let (line, column) = (self.line, self.column);
            match self.source.peek()? {
                None => {
                    self.record(ParseError::new(
                        ErrorKind::InvalidString,
                        "unterminated string",
                        line,
                        column,
                    ));
                    break;
                }
                Some(b'"') => {
                    self.consume()?;
                    if !body.is_empty() {
                        let text =
                            self.into_text(body, ErrorKind::InvalidString, body_line, body_column);
                        self.tokens.push(Token::literal(text, body_line, body_column));
                    }
                    self.tokens.push(Token::symbol(TokenKind::Quote, line, column));
                    return Ok(());
                }
                Some(b'\n') | Some(b'\r') => {
                    self.record(ParseError::new(
                        ErrorKind::InvalidString,
                        "raw line break in string",
                        line,
                        column,
                    ));
                    self.consume()?;
                    break;
                }
                Some(b'\\') => {
                    self.consume()?;
                    match self.source.peek()? {
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
                            self.consume()?;
                            break;
                        }
                        Some(escaped) => match escape_replacement(escaped) {
                            Some(replacement) => {
                                body.push(replacement);
                                self.consume()?;
                            }
                            None => {
                                self.record(ParseError::new(
                                    ErrorKind::InvalidString,
                                    format!("invalid escape \\{}", escaped as char),
                                    line,
                                    column,
                                ));
                                self.consume()?;
                                break;
                            }
                        },
                    }
                }
                Some(b) => {
                    self.consume()?;
                    body.push(b);
                }
            }
        }
        if !body.is_empty() {
            let text = self.into_text(body, ErrorKind::InvalidString, body_line, body_column);
            self.tokens.push(Token::literal(text, body_line, body_column));
        }
        self.tokens
            .push(Token::symbol(TokenKind::Quote, self.line, self.column));
        Ok(())
    }

    /// Arbitrary readers are not guaranteed UTF-8; in-memory input is a
    /// `&str`, so this failure class exists only here.
    fn into_text(&mut self, buf: Vec<u8>, kind: ErrorKind, line: usize, column: usize) -> String {
        match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => {
                self.record(ParseError::new(kind, "invalid UTF-8 sequence", line, column));
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }
    }
}

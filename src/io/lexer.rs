//! Tokenizer for the keyword/value lens description format.
//!
//! Recognizes:
//! - keywords (`LEN`, `RD`, glass names such as `N-BK7`)
//! - strings (`"Tessar"`, with `\n` and `\X` escapes)
//! - numbers (anything starting with a digit, `.`, `+` or `-`)
//! - comments (`//` to end of line)

use std::fmt;

use crate::io::cursor::Cursor;
use crate::io::error::{Position, ReadError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-')
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphabetic() || is_numeric(c) || c == '_'
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(input),
        }
    }

    fn error<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(ReadError::Syntax {
            message: message.into(),
            position: self.cursor.position(),
        })
    }

    /// Kind of the next token without consuming it, `None` at end of input.
    pub fn peek(&mut self) -> Option<TokenKind> {
        self.cursor.skip_while(is_whitespace);
        let c = self.cursor.peek()?;
        Some(match c {
            '"' => TokenKind::String,
            '/' => TokenKind::Comment,
            c if is_numeric(c) => TokenKind::Number,
            _ => TokenKind::Keyword,
        })
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(kind) = self.peek() else {
            return Ok(None);
        };
        let position = self.cursor.position();
        let text = match kind {
            TokenKind::String => self.read_string()?,
            TokenKind::Comment => self.read_comment()?,
            TokenKind::Keyword | TokenKind::Number => self.read_word()?,
        };
        Ok(Some(Token {
            kind,
            text,
            position,
        }))
    }

    fn read_word(&mut self) -> Result<String> {
        match self.cursor.peek() {
            Some(c) if is_word(c) => Ok(self.cursor.take_while(is_word)),
            Some(c) => self.error(format!("unexpected character '{}'", c)),
            None => self.error("unexpected end of input"),
        }
    }

    fn read_comment(&mut self) -> Result<String> {
        for _ in 0..2 {
            if self.cursor.bump() != Some('/') {
                return self.error("expected comment");
            }
        }
        let text = self.cursor.take_while(|c| c != '\n');
        self.cursor.bump();
        Ok(text)
    }

    fn read_string(&mut self) -> Result<String> {
        self.cursor.bump();
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                Some('"') => return Ok(text),
                Some('\\') => match self.cursor.bump() {
                    Some('n') => text.push('\n'),
                    Some(c) => text.push(c),
                    None => return self.error("unterminated string"),
                },
                Some(c) => text.push(c),
                None => return self.error("unterminated string"),
            }
        }
    }

    /// Next non-comment token, which must be of `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = loop {
            match self.next_token()? {
                None => {
                    return Err(ReadError::UnexpectedEof {
                        expected: kind.name(),
                        position: self.cursor.position(),
                    })
                }
                Some(t) if t.kind == TokenKind::Comment && kind != TokenKind::Comment => continue,
                Some(t) => break t,
            }
        };

        if token.kind != kind {
            return Err(ReadError::Syntax {
                message: format!("expected {}, but got {} '{}'", kind, token.kind, token.text),
                position: token.position,
            });
        }
        Ok(token)
    }

    pub fn expect_keyword(&mut self, keyword: &str) -> Result<()> {
        let token = self.expect(TokenKind::Keyword)?;
        if token.text != keyword {
            return Err(ReadError::Syntax {
                message: format!(
                    "expected '{}' keyword but found '{}' instead",
                    keyword, token.text
                ),
                position: token.position,
            });
        }
        Ok(())
    }

    pub fn expect_string(&mut self) -> Result<String> {
        Ok(self.expect(TokenKind::String)?.text)
    }

    pub fn expect_int(&mut self) -> Result<i64> {
        let token = self.expect(TokenKind::Number)?;
        token.text.parse().map_err(|_| ReadError::InvalidNumber {
            text: token.text,
            position: token.position,
        })
    }

    pub fn expect_float(&mut self) -> Result<f64> {
        let token = self.expect(TokenKind::Number)?;
        token.text.parse().map_err(|_| ReadError::InvalidNumber {
            text: token.text,
            position: token.position,
        })
    }

    /// Skip numbers and strings up to the next keyword or comment.
    pub fn skip_arguments(&mut self) -> Result<()> {
        while matches!(self.peek(), Some(TokenKind::Number | TokenKind::String)) {
            self.next_token()?;
        }
        Ok(())
    }
}

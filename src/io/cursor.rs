use std::iter::Peekable;
use std::str::Chars;

use crate::io::error::Position;

/// Character cursor that tracks line and column.
#[derive(Clone)]
pub(crate) struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            chars: input.chars().peekable(),
            pos: Position::default(),
        }
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        Some(c)
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    /// Consume characters while `pred` holds and return them.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    pub(crate) fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }
}

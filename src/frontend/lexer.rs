use crate::config::scanner::{LINE_BUF_SIZE, MAX_TOKEN_LEN};
use crate::config::Dialect;
use crate::errors::FrontResult;
use crate::frontend::token::{reserved_word, Token, TokenKind};
use log::trace;
use std::io::{BufRead, Read};

// States of the scanner DFA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InComment,
    InAssign,
    InIdent,
    InInteger,
    InFloat,
    Done,
}

/// Character-level scanner over a line-buffered source.
///
/// The source is pulled one chunk at a time: a chunk ends after a newline or
/// after `LINE_BUF_SIZE - 1` bytes, whichever comes first, and every chunk
/// loaded advances the line counter. One character of lookahead can be
/// pushed back into the current chunk.
pub struct Lexer<R> {
    source: R,
    line_buf: Vec<u8>,
    line_pos: usize,
    line: usize,
    at_eof: bool,
    exhausted: bool,
    scanned: usize,
    dialect: Dialect,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(source: R, dialect: Dialect) -> Self {
        Self {
            source,
            line_buf: Vec::with_capacity(LINE_BUF_SIZE),
            line_pos: 0,
            line: 0,
            at_eof: false,
            exhausted: false,
            scanned: 0,
            dialect,
        }
    }

    // Index of the line currently buffered (1-based, 0 before the first read)
    pub fn line(&self) -> usize {
        self.line
    }

    // Tokens returned so far, EndOfFile included
    pub fn token_count(&self) -> usize {
        self.scanned
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn next_char(&mut self) -> FrontResult<Option<u8>> {
        if self.line_pos < self.line_buf.len() {
            let ch = self.line_buf[self.line_pos];
            self.line_pos += 1;
            return Ok(Some(ch));
        }
        if self.at_eof {
            return Ok(None);
        }
        self.line_buf.clear();
        self.line_pos = 0;
        let limit = (LINE_BUF_SIZE - 1) as u64;
        let read = self.source.by_ref().take(limit).read_until(b'\n', &mut self.line_buf)?;
        if read == 0 {
            self.at_eof = true;
            return Ok(None);
        }
        self.line += 1;
        self.line_pos = 1;
        Ok(Some(self.line_buf[0]))
    }

    // Give back the character returned by the last next_char call
    fn unread(&mut self) {
        if !self.at_eof {
            self.line_pos -= 1;
        }
    }

    // Decode the UTF-8 sequence starting with `lead` into one character.
    // Malformed sequences come back as U+FFFD.
    fn multibyte_char(&mut self, lead: u8) -> FrontResult<String> {
        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        let mut bytes = vec![lead];
        while bytes.len() < width {
            match self.next_char()? {
                Some(next @ 0x80..=0xBF) => bytes.push(next),
                Some(_) => {
                    self.unread();
                    break;
                }
                None => break,
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Scan the next token. After the end of input has been reached every
    /// call returns an `EndOfFile` token.
    pub fn next_token(&mut self) -> FrontResult<Token> {
        let mut lexeme = String::new();
        let mut saved = 0;
        let mut line = self.line;
        let mut kind = TokenKind::Error;
        let mut state = State::Start;

        while state != State::Done {
            let current = self.next_char()?;
            let mut save = true;
            match state {
                State::Start => match current {
                    Some(b' ' | b'\t' | b'\n') => save = false,
                    Some(b'{') => {
                        state = State::InComment;
                        save = false;
                    }
                    Some(b':') => state = State::InAssign,
                    Some(ch) if ch.is_ascii_alphabetic() => state = State::InIdent,
                    Some(ch) if ch.is_ascii_digit() => state = State::InInteger,
                    Some(ch) if !ch.is_ascii() => {
                        line = self.line;
                        lexeme = self.multibyte_char(ch)?;
                        kind = TokenKind::Error;
                        save = false;
                        state = State::Done;
                    }
                    Some(ch) => {
                        kind = single_char_token(ch);
                        state = State::Done;
                    }
                    None => {
                        kind = TokenKind::EndOfFile;
                        state = State::Done;
                    }
                },
                State::InComment => {
                    save = false;
                    match current {
                        Some(b'}') => state = State::Start,
                        Some(_) => {}
                        None => {
                            kind = TokenKind::EndOfFile;
                            state = State::Done;
                        }
                    }
                }
                State::InAssign => {
                    if current == Some(b'=') {
                        kind = TokenKind::Assign;
                    } else {
                        // a lone ':' is not a symbol
                        kind = TokenKind::Error;
                        self.unread();
                        save = false;
                    }
                    state = State::Done;
                }
                State::InIdent => match current {
                    Some(ch) if ch.is_ascii_alphanumeric() => {}
                    _ => {
                        kind = TokenKind::Ident;
                        self.unread();
                        save = false;
                        state = State::Done;
                    }
                },
                State::InInteger => match current {
                    Some(ch) if ch.is_ascii_digit() => {}
                    Some(b'.') if self.dialect.floats() => state = State::InFloat,
                    _ => {
                        kind = TokenKind::Integer;
                        self.unread();
                        save = false;
                        state = State::Done;
                    }
                },
                State::InFloat => match current {
                    Some(ch) if ch.is_ascii_digit() => {}
                    _ => {
                        kind = TokenKind::Float;
                        self.unread();
                        save = false;
                        state = State::Done;
                    }
                },
                State::Done => unreachable!("scanner loop exits on Done"),
            }

            if let (true, Some(ch)) = (save, current) {
                if saved == 0 {
                    line = self.line;
                }
                if saved < MAX_TOKEN_LEN {
                    lexeme.push(ch as char);
                    saved += 1;
                }
            }
        }

        if kind == TokenKind::Ident {
            kind = reserved_word(&lexeme, self.dialect).unwrap_or(TokenKind::Ident);
        }
        if kind == TokenKind::EndOfFile {
            line = self.line;
        }
        let token = Token::new(kind, lexeme, line);
        self.scanned += 1;
        trace!("line {}: {}", token.line, token);
        Ok(token)
    }
}

fn single_char_token(ch: u8) -> TokenKind {
    match ch {
        b'=' => TokenKind::Equal,
        b'<' => TokenKind::LessThan,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Multiply,
        b'/' => TokenKind::Divide,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b';' => TokenKind::Semicolon,
        _ => TokenKind::Error,
    }
}

// Yields every token up to and including the first EndOfFile
impl<R: BufRead> Iterator for Lexer<R> {
    type Item = FrontResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if !matches!(&token, Ok(t) if !t.is(TokenKind::EndOfFile)) {
            self.exhausted = true;
        }
        Some(token)
    }
}

// Convenience function to scan a whole source at once
pub fn scan<R: BufRead>(source: R, dialect: Dialect) -> FrontResult<Vec<Token>> {
    Lexer::new(source, dialect).collect()
}

pub fn scan_str(source: &str, dialect: Dialect) -> FrontResult<Vec<Token>> {
    scan(source.as_bytes(), dialect)
}

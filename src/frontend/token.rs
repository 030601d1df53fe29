use crate::config::Dialect;
use crate::printer::print_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // reserved words
    Read,
    Write,
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Break,
    Continue,
    Proc,
    Begin,
    Call,
    // multi-character tokens
    Ident,
    Integer,
    Float,
    // special symbols
    Assign,
    Equal,
    LessThan,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Semicolon,
    // book-keeping
    EndOfFile,
    Error,
}

// Reserved-word table, searched linearly
const RESERVED_WORDS: [(&str, TokenKind); 13] = [
    ("read", TokenKind::Read),
    ("write", TokenKind::Write),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("end", TokenKind::End),
    ("repeat", TokenKind::Repeat),
    ("until", TokenKind::Until),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("proc", TokenKind::Proc),
    ("begin", TokenKind::Begin),
    ("call", TokenKind::Call),
];

/// Look up `text` in the reserved-word table. Matching is exact and
/// case-sensitive; words belonging to features the dialect lacks are not
/// reserved.
pub fn reserved_word(text: &str, dialect: Dialect) -> Option<TokenKind> {
    RESERVED_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, kind)| *kind)
        .filter(|kind| kind.available_in(dialect))
}

impl TokenKind {
    pub fn is_reserved_word(self) -> bool {
        RESERVED_WORDS.iter().any(|(_, kind)| *kind == self)
    }

    // Fixed spelling of the one- and two-character symbols
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Assign => ":=",
            TokenKind::Equal => "=",
            TokenKind::LessThan => "<",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semicolon => ";",
            _ => return None,
        };
        Some(text)
    }

    fn available_in(self, dialect: Dialect) -> bool {
        match self {
            TokenKind::Proc | TokenKind::Begin | TokenKind::Call => dialect.procedures(),
            TokenKind::Break | TokenKind::Continue => dialect.loop_control(),
            TokenKind::Float => dialect.floats(),
            _ => true,
        }
    }
}

/// One scanned token: its class, the matched text and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&print_token(self.kind, &self.lexeme))
    }
}

use std::io;
use thiserror::Error;

use crate::frontend::token::{Token, TokenKind};

#[derive(Error, Debug)]
pub enum FrontError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Parsing errors
    #[error("Syntax error at line {line}: Unexpected Token -> {found}")]
    UnexpectedToken {
        found: Token,
        expected: Option<TokenKind>,
        line: usize,
    },
    #[error("Syntax error at line {line}: Code ends before file!")]
    TrailingInput {
        found: Token,
        line: usize,
    },
}

impl FrontError {
    /// Create an unexpected-token error for a token that could not be matched
    pub fn unexpected(found: &Token, expected: Option<TokenKind>) -> Self {
        FrontError::UnexpectedToken {
            found: found.clone(),
            expected,
            line: found.line,
        }
    }

    /// Create the error reported when input remains after a complete program
    pub fn trailing(found: &Token) -> Self {
        FrontError::TrailingInput {
            found: found.clone(),
            line: found.line,
        }
    }

    // Source line of a syntax error, None for I/O failures
    pub fn line(&self) -> Option<usize> {
        match self {
            FrontError::UnexpectedToken { line, .. } | FrontError::TrailingInput { line, .. } => {
                Some(*line)
            }
            FrontError::FileReadError(_) | FrontError::IoError(_) => None,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        self.line().is_some()
    }
}

// Type alias for Result with FrontError
pub type FrontResult<T> = Result<T, FrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_messages() {
        let token = Token::new(TokenKind::Ident, "x", 3);
        let err = FrontError::unexpected(&token, Some(TokenKind::Assign));
        assert_eq!(err.to_string(), "Syntax error at line 3: Unexpected Token -> ID: x");
        assert_eq!(err.line(), Some(3));

        let err = FrontError::trailing(&Token::new(TokenKind::RParen, ")", 1));
        assert_eq!(err.to_string(), "Syntax error at line 1: Code ends before file!");
    }

    #[test]
    fn io_errors_have_no_line() {
        let err = FrontError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(!err.is_syntax_error());
    }
}

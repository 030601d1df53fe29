// Scanner limits
pub mod scanner {
    // Longest lexeme kept; extra characters are dropped
    pub const MAX_TOKEN_LEN: usize = 50;

    // Size of the line buffer; one refill reads at most LINE_BUF_SIZE - 1 bytes
    pub const LINE_BUF_SIZE: usize = 256;
}

// Tree printer layout
pub mod printer {
    pub const INDENT_WIDTH: usize = 4;
    pub const AST_BANNER: &str = "[========== AST ==========]";
}

// Source files
pub mod source {
    pub const FILE_EXTENSION: &str = "tny";
}

/// Language dialect accepted by the scanner and parser.
///
/// `Full` is the complete language. `Core` is the base subset without
/// procedures, `break`/`continue` and float literals: those words scan as
/// plain identifiers and `1.5` scans as an integer followed by an error token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Full,
    Core,
}

impl Dialect {
    // proc / begin / call
    pub fn procedures(self) -> bool {
        matches!(self, Dialect::Full)
    }

    // break / continue
    pub fn loop_control(self) -> bool {
        matches!(self, Dialect::Full)
    }

    pub fn floats(self) -> bool {
        matches!(self, Dialect::Full)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Full => write!(f, "full"),
            Dialect::Core => write!(f, "core"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_dialect_disables_extensions() {
        let core = Dialect::Core;
        assert!(!core.procedures());
        assert!(!core.loop_control());
        assert!(!core.floats());
        assert!(Dialect::default().procedures());
    }
}

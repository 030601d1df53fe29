use crate::ast::{walk_expr, walk_proc, walk_stmt, AstVisitor, Expr, ExprKind, ProcDef, Program, Stmt, StmtKind};
use crate::config::printer::{AST_BANNER, INDENT_WIDTH};
use crate::frontend::token::{Token, TokenKind};

/// Render a token class and its text in a stable, human-readable form.
pub fn print_token(kind: TokenKind, lexeme: &str) -> String {
    if kind.is_reserved_word() {
        return format!("Reserved Word: {}", lexeme);
    }
    if let Some(symbol) = kind.symbol() {
        return symbol.to_string();
    }
    match kind {
        TokenKind::Ident => format!("ID: {}", lexeme),
        TokenKind::Integer => format!("Integer: {}", lexeme),
        TokenKind::Float => format!("Float: {}", lexeme),
        TokenKind::EndOfFile => "EOF".to_string(),
        _ => format!("Error: {}", lexeme),
    }
}

// One line per token, as produced by --tokens
pub fn print_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{}: {}\n", token.line, token))
        .collect()
}

/// Indented pre-order dump of a syntax tree.
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 1,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, label: &str) {
        let indent = self.depth * INDENT_WIDTH;
        self.out.extend(std::iter::repeat(' ').take(indent));
        self.out.push_str(label);
        self.out.push('\n');
    }

    fn nested<F>(&mut self, walk: F)
    where
        F: FnOnce(&mut Self),
    {
        self.depth += 1;
        walk(self);
        self.depth -= 1;
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for TreePrinter {
    fn visit_proc(&mut self, proc_def: &ProcDef) {
        self.line(&format!("Proc: {}", proc_def.name));
        self.nested(|p| walk_proc(p, proc_def))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        let label = match &stmt.kind {
            StmtKind::Read { name } => format!("Read: {}", name),
            StmtKind::Write { .. } => "Write".to_string(),
            StmtKind::If { .. } => "If".to_string(),
            StmtKind::Repeat { .. } => "Repeat".to_string(),
            StmtKind::Break => "Break".to_string(),
            StmtKind::Continue => "Continue".to_string(),
            StmtKind::Assign { name, .. } => format!("Assign to: {}", name),
            StmtKind::Call { name } => format!("Call: {}", name),
        };
        self.line(&label);
        self.nested(|p| walk_stmt(p, stmt))
    }

    fn visit_expr(&mut self, expr: &Expr) {
        let label = match &expr.kind {
            ExprKind::Ident(name) => format!("ID: {}", name),
            ExprKind::Integer(value) => format!("Integer: {}", value),
            ExprKind::Float(value) => format!("Float: {:?}", value),
            ExprKind::Binary { op, .. } => format!("Op: {}", print_token(op.token_kind(), op.symbol())),
        };
        self.line(&label);
        self.nested(|p| walk_expr(p, expr))
    }
}

/// Render the tree below `program`, without the banner.
pub fn print_tree(program: &Program) -> String {
    let mut printer = TreePrinter::new();
    printer.visit_program(program);
    printer.finish()
}

// Banner line followed by the tree
pub fn render_ast(program: &Program) -> String {
    format!("{}\n{}", AST_BANNER, print_tree(program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_forms() {
        assert_eq!(print_token(TokenKind::If, "if"), "Reserved Word: if");
        assert_eq!(print_token(TokenKind::Assign, ":="), ":=");
        assert_eq!(print_token(TokenKind::Ident, "abc"), "ID: abc");
        assert_eq!(print_token(TokenKind::Float, "1.5"), "Float: 1.5");
        assert_eq!(print_token(TokenKind::EndOfFile, ""), "EOF");
        assert_eq!(print_token(TokenKind::Error, "?"), "Error: ?");
    }

    #[test]
    fn empty_program_prints_only_banner() {
        assert_eq!(render_ast(&Program::default()), "[========== AST ==========]\n");
    }
}

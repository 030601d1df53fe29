use crate::ast::{AstVisitor, Node};
use crate::frontend::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    LessThan,
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LessThan => Some(BinaryOp::LessThan),
            TokenKind::Equal => Some(BinaryOp::Equal),
            TokenKind::Plus => Some(BinaryOp::Plus),
            TokenKind::Minus => Some(BinaryOp::Minus),
            TokenKind::Multiply => Some(BinaryOp::Multiply),
            TokenKind::Divide => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            BinaryOp::LessThan => TokenKind::LessThan,
            BinaryOp::Equal => TokenKind::Equal,
            BinaryOp::Plus => TokenKind::Plus,
            BinaryOp::Minus => TokenKind::Minus,
            BinaryOp::Multiply => TokenKind::Multiply,
            BinaryOp::Divide => TokenKind::Divide,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::LessThan => "<",
            BinaryOp::Equal => "=",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Ident(String),
    // digits only, saturated at u128::MAX
    Integer(u128),
    Float(f64),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Expression node stamped with the line of its leading token. For a
/// binary operation that is the operator's line.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: usize,
}

impl Expr {
    pub fn new(kind: ExprKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, line: usize) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            line,
        )
    }

    // Operands in evaluation order; empty for leaves
    pub fn operands(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Binary { lhs, rhs, .. } => vec![lhs.as_ref(), rhs.as_ref()],
            _ => Vec::new(),
        }
    }
}

impl Node for Expr {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_expr(self)
    }

    fn line(&self) -> usize {
        self.line
    }
}

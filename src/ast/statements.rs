use crate::ast::{AstVisitor, Expr, Node};

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Read {
        name: String,
    },
    Write {
        expr: Expr,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    Repeat {
        body: Vec<Stmt>,
        condition: Expr,
    },
    Break,
    Continue,
    Assign {
        name: String,
        expr: Expr,
    },
    Call {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            StmtKind::Read { name } | StmtKind::Assign { name, .. } | StmtKind::Call { name } => {
                Some(name)
            }
            _ => None,
        }
    }
}

impl Node for Stmt {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_stmt(self)
    }

    fn line(&self) -> usize {
        self.line
    }
}

use crate::ast::{AstVisitor, Node, NodeCounter, Stmt};

/// Procedure definition: `proc name begin ... end`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcDef {
    pub name: String,
    pub body: Vec<Stmt>,
    pub line: usize,
}

impl ProcDef {
    pub fn new(name: String, body: Vec<Stmt>, line: usize) -> Self {
        Self { name, body, line }
    }
}

impl Node for ProcDef {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_proc(self)
    }

    fn line(&self) -> usize {
        self.line
    }
}

/// Root of a parsed source: procedure definitions followed by the main
/// statement sequence. Dropping it releases the whole tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub procedures: Vec<ProcDef>,
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(procedures: Vec<ProcDef>, body: Vec<Stmt>) -> Self {
        Self { procedures, body }
    }

    // Number of procedure, statement and expression nodes
    pub fn node_count(&self) -> usize {
        let mut counter = NodeCounter::default();
        self.accept(&mut counter);
        counter.count
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_program(self)
    }

    fn line(&self) -> usize {
        self.procedures
            .first()
            .map(|p| p.line)
            .or_else(|| self.body.first().map(|s| s.line))
            .unwrap_or(0)
    }
}

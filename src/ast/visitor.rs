use crate::ast::{Expr, ProcDef, Program, Stmt, StmtKind};

/// Pre-order tree traversal. The default methods visit children in field
/// order; overriding a method and calling the matching `walk_*` function
/// keeps the traversal going.
pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program)
    }

    fn visit_proc(&mut self, proc_def: &ProcDef) {
        walk_proc(self, proc_def)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt)
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr)
    }
}

pub fn walk_program<V: AstVisitor + ?Sized>(visitor: &mut V, program: &Program) {
    for proc_def in &program.procedures {
        visitor.visit_proc(proc_def);
    }
    walk_sequence(visitor, &program.body)
}

pub fn walk_proc<V: AstVisitor + ?Sized>(visitor: &mut V, proc_def: &ProcDef) {
    walk_sequence(visitor, &proc_def.body)
}

pub fn walk_sequence<V: AstVisitor + ?Sized>(visitor: &mut V, stmts: &[Stmt]) {
    for stmt in stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: AstVisitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Write { expr } | StmtKind::Assign { expr, .. } => visitor.visit_expr(expr),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(condition);
            walk_sequence(visitor, then_branch);
            if let Some(else_branch) = else_branch {
                walk_sequence(visitor, else_branch);
            }
        }
        StmtKind::Repeat { body, condition } => {
            walk_sequence(visitor, body);
            visitor.visit_expr(condition);
        }
        StmtKind::Read { .. } | StmtKind::Break | StmtKind::Continue | StmtKind::Call { .. } => {}
    }
}

pub fn walk_expr<V: AstVisitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    for operand in expr.operands() {
        visitor.visit_expr(operand);
    }
}

/// Counts every procedure, statement and expression node.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl AstVisitor for NodeCounter {
    fn visit_proc(&mut self, proc_def: &ProcDef) {
        self.count += 1;
        walk_proc(self, proc_def)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        self.count += 1;
        walk_stmt(self, stmt)
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.count += 1;
        walk_expr(self, expr)
    }
}

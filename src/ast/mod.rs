// Syntax tree for the TINY front end.
// Parents own their children; dropping a Program releases the whole tree.

mod traits;
pub use traits::Node;

mod expressions;
mod program;
mod statements;
mod visitor;

pub use expressions::{BinaryOp, Expr, ExprKind};
pub use program::{ProcDef, Program};
pub use statements::{Stmt, StmtKind};
pub use visitor::{walk_expr, walk_proc, walk_program, walk_sequence, walk_stmt, AstVisitor, NodeCounter};

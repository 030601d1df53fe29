/*
*                    tinyc -- TINY language front end.
*
* program       = { proc-def } stmt-seq ;
* proc-def      = "proc" ident "begin" stmt-seq "end" ;
* stmt-seq      = stmt { ";" stmt } ;
* stmt          = read-stmt | write-stmt | if-stmt | repeat-stmt
*               | break-stmt | continue-stmt | assign-stmt | call-stmt ;
* if-stmt       = "if" expr "then" stmt-seq [ "else" stmt-seq ] "end" ;
* repeat-stmt   = "repeat" stmt-seq "until" expr ;
* assign-stmt   = ident ":=" expr ;
* read-stmt     = "read" ident ;
* write-stmt    = "write" expr ;
* call-stmt     = "call" ident ;
* break-stmt    = "break" ;
* continue-stmt = "continue" ;
* expr          = simple-expr [ ( "<" | "=" ) simple-expr ] ;
* simple-expr   = term { ( "+" | "-" ) term } ;
* term          = factor { ( "*" | "/" ) factor } ;
* factor        = "(" expr ")" | ident | integer | float ;
*/

use crate::ast::AstVisitor;

pub trait Node {
    fn accept(&self, visitor: &mut dyn AstVisitor);
    fn line(&self) -> usize;
}

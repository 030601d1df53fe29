use crate::ast::{BinaryOp, Expr, ExprKind, ProcDef, Program, Stmt, StmtKind};
use crate::config::Dialect;
use crate::errors::{FrontError, FrontResult};
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use log::{debug, info};
use std::io::BufRead;
use std::mem;

/// Recursive-descent parser pulling tokens from a `Lexer` one at a time.
///
/// Every grammar function returns `FrontResult`; the first syntax error is
/// propagated to `parse` and ends the parse.
pub struct Parser<R> {
    lexer: Lexer<R>,
    current_token: Token,
    dialect: Dialect,
}

impl<R: BufRead> Parser<R> {
    pub fn new(source: R, dialect: Dialect) -> FrontResult<Self> {
        let mut lexer = Lexer::new(source, dialect);
        let current_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token,
            dialect,
        })
    }

    // Move to the next token, returning the one just consumed
    fn next(&mut self) -> FrontResult<Token> {
        let following = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current_token, following))
    }

    fn expect(&mut self, expected: TokenKind) -> FrontResult<Token> {
        if !self.current_token.is(expected) {
            return Err(FrontError::unexpected(&self.current_token, Some(expected)));
        }
        self.next()
    }

    fn expect_ident(&mut self) -> FrontResult<String> {
        Ok(self.expect(TokenKind::Ident)?.lexeme)
    }

    pub fn tokens_scanned(&self) -> usize {
        self.lexer.token_count()
    }

    fn unexpected(&self) -> FrontError {
        FrontError::unexpected(&self.current_token, None)
    }

    /**
     * Parse a program according to the grammar:
     * program = { proc-def } stmt-seq
     */
    fn program(&mut self) -> FrontResult<Program> {
        let mut procedures = Vec::new();
        while self.dialect.procedures() && self.current_token.is(TokenKind::Proc) {
            procedures.push(self.proc_def()?);
        }
        let body = self.stmt_seq()?;
        Ok(Program::new(procedures, body))
    }

    /**
     * Parse a procedure definition according to the grammar:
     * proc-def = "proc" ident "begin" stmt-seq "end"
     */
    fn proc_def(&mut self) -> FrontResult<ProcDef> {
        let line = self.expect(TokenKind::Proc)?.line;
        let name = self.expect_ident()?;
        self.expect(TokenKind::Begin)?;
        let body = self.stmt_seq()?;
        self.expect(TokenKind::End)?;
        debug!("parsed procedure '{}' ({} statements) at line {}", name, body.len(), line);
        Ok(ProcDef::new(name, body, line))
    }

    /**
     * Parse a statement sequence according to the grammar:
     * stmt-seq = stmt { ";" stmt }
     *
     * A single ";" before the first statement is skipped. Every other
     * separator must be followed by a statement.
     */
    fn stmt_seq(&mut self) -> FrontResult<Vec<Stmt>> {
        if self.current_token.is(TokenKind::Semicolon) {
            self.next()?;
        }
        let mut stmts = vec![self.stmt()?];
        while self.current_token.is(TokenKind::Semicolon) {
            self.next()?;
            stmts.push(self.stmt()?);
        }
        Ok(stmts)
    }

    /**
     * Parse a statement according to the grammar:
     * stmt = read-stmt | write-stmt | if-stmt | repeat-stmt
     *      | break-stmt | continue-stmt | assign-stmt | call-stmt
     */
    fn stmt(&mut self) -> FrontResult<Stmt> {
        match self.current_token.kind {
            TokenKind::Read => self.read_stmt(),
            TokenKind::Write => self.write_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::Repeat => self.repeat_stmt(),
            TokenKind::Break => self.break_stmt(),
            TokenKind::Continue => self.continue_stmt(),
            TokenKind::Ident => self.assign_stmt(),
            TokenKind::Call => self.call_stmt(),
            _ => Err(self.unexpected()),
        }
    }

    // read-stmt = "read" ident
    fn read_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Read)?.line;
        let name = self.expect_ident()?;
        Ok(Stmt::new(StmtKind::Read { name }, line))
    }

    // write-stmt = "write" expr
    fn write_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Write)?.line;
        let expr = self.expr()?;
        Ok(Stmt::new(StmtKind::Write { expr }, line))
    }

    // if-stmt = "if" expr "then" stmt-seq [ "else" stmt-seq ] "end"
    fn if_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::If)?.line;
        let condition = self.expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.stmt_seq()?;
        let else_branch = if self.current_token.is(TokenKind::Else) {
            self.expect(TokenKind::Else)?;
            Some(self.stmt_seq()?)
        } else {
            None
        };
        self.expect(TokenKind::End)?;
        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            line,
        ))
    }

    // repeat-stmt = "repeat" stmt-seq "until" expr
    fn repeat_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Repeat)?.line;
        let body = self.stmt_seq()?;
        self.expect(TokenKind::Until)?;
        let condition = self.expr()?;
        Ok(Stmt::new(StmtKind::Repeat { body, condition }, line))
    }

    fn break_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Break)?.line;
        Ok(Stmt::new(StmtKind::Break, line))
    }

    fn continue_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Continue)?.line;
        Ok(Stmt::new(StmtKind::Continue, line))
    }

    // assign-stmt = ident ":=" expr
    fn assign_stmt(&mut self) -> FrontResult<Stmt> {
        let target = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::Assign)?;
        let expr = self.expr()?;
        Ok(Stmt::new(
            StmtKind::Assign {
                name: target.lexeme,
                expr,
            },
            target.line,
        ))
    }

    // call-stmt = "call" ident
    fn call_stmt(&mut self) -> FrontResult<Stmt> {
        let line = self.expect(TokenKind::Call)?.line;
        let name = self.expect_ident()?;
        Ok(Stmt::new(StmtKind::Call { name }, line))
    }

    /**
     * Parse an expression according to the grammar:
     * expr = simple-expr [ ( "<" | "=" ) simple-expr ]
     */
    fn expr(&mut self) -> FrontResult<Expr> {
        let lhs = self.simple_expr()?;
        if matches!(self.current_token.kind, TokenKind::LessThan | TokenKind::Equal) {
            let (op, line) = self.operator()?;
            let rhs = self.simple_expr()?;
            return Ok(Expr::binary(op, lhs, rhs, line));
        }
        Ok(lhs)
    }

    /**
     * Parse a simple expression according to the grammar:
     * simple-expr = term { ( "+" | "-" ) term }
     */
    fn simple_expr(&mut self) -> FrontResult<Expr> {
        let mut lhs = self.term()?;
        while matches!(self.current_token.kind, TokenKind::Plus | TokenKind::Minus) {
            let (op, line) = self.operator()?;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs, line);
        }
        Ok(lhs)
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "/" ) factor }
     */
    fn term(&mut self) -> FrontResult<Expr> {
        let mut lhs = self.factor()?;
        while matches!(self.current_token.kind, TokenKind::Multiply | TokenKind::Divide) {
            let (op, line) = self.operator()?;
            let rhs = self.factor()?;
            lhs = Expr::binary(op, lhs, rhs, line);
        }
        Ok(lhs)
    }

    // Consume the current operator token
    fn operator(&mut self) -> FrontResult<(BinaryOp, usize)> {
        let op = BinaryOp::from_token(self.current_token.kind).ok_or_else(|| self.unexpected())?;
        let line = self.next()?.line;
        Ok((op, line))
    }

    /**
     * Parse a factor according to the grammar:
     * factor = "(" expr ")" | ident | integer | float
     */
    fn factor(&mut self) -> FrontResult<Expr> {
        match self.current_token.kind {
            TokenKind::LParen => {
                self.expect(TokenKind::LParen)?;
                let expr = self.expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Ident => {
                let token = self.next()?;
                Ok(Expr::new(ExprKind::Ident(token.lexeme), token.line))
            }
            TokenKind::Integer => {
                let token = self.next()?;
                Ok(Expr::new(ExprKind::Integer(integer_value(&token.lexeme)), token.line))
            }
            TokenKind::Float => {
                let token = self.next()?;
                Ok(Expr::new(ExprKind::Float(float_value(&token.lexeme)), token.line))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse the whole source. Input left over after a complete program is
    /// reported as a trailing-input error.
    pub fn parse(&mut self) -> FrontResult<Program> {
        let program = self.program()?;
        if !self.current_token.is(TokenKind::EndOfFile) {
            return Err(FrontError::trailing(&self.current_token));
        }
        info!(
            "parsed {} procedures and {} statements through line {}",
            program.procedures.len(),
            program.body.len(),
            self.lexer.line()
        );
        Ok(program)
    }
}

// Integer lexemes are plain digits; values past u128::MAX saturate
fn integer_value(lexeme: &str) -> u128 {
    lexeme.parse::<u128>().unwrap_or(u128::MAX)
}

// Float lexemes are digits, a dot and optional digits ("3." is allowed)
fn float_value(lexeme: &str) -> f64 {
    let text = if lexeme.ends_with('.') {
        format!("{}0", lexeme)
    } else {
        lexeme.to_string()
    };
    text.parse::<f64>().unwrap_or(f64::INFINITY)
}

// Convenience function to parse a whole source at once
pub fn parse<R: BufRead>(source: R, dialect: Dialect) -> FrontResult<Program> {
    let mut parser = Parser::new(source, dialect)?;
    parser.parse()
}

pub fn parse_str(source: &str, dialect: Dialect) -> FrontResult<Program> {
    parse(source.as_bytes(), dialect)
}

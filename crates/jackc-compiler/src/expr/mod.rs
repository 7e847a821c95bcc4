//! Expression compiler.
//!
//! Compiles a flat, bracket-bounded token run into stack operations. The
//! source language defines no operator precedence, so a run
//! `term0 op0 term1 op1 term2` evaluates strictly left to right:
//! `term0; term1; op0; term2; op1`. Each term is classified once, from the
//! current token and one token of lookahead, into a literal, a variable
//! reference, an array entry, a call, a parenthesized sub-expression, or a
//! unary-prefixed term.

mod calls;
mod identifiers;
mod literals;

use jackc_core::{CompileError, ErrorKind};
use jackc_lexer::{Token, TokenKind};

use crate::context::CompilationContext;
use crate::cursor::TokenCursor;
use crate::emit::{Emitter, is_binary_op};
use crate::symbols::SymbolTable;
use crate::vm::Command;

type Result<T> = std::result::Result<T, CompileError>;

/// Compiles expression token runs into instructions.
///
/// Expressions only read the symbol table and context; the emitter is the
/// sole mutable collaborator.
pub struct ExprCompiler<'a> {
    ctx: &'a CompilationContext,
    symbols: &'a SymbolTable,
    emitter: &'a mut Emitter,
}

impl<'a> ExprCompiler<'a> {
    pub fn new(
        ctx: &'a CompilationContext,
        symbols: &'a SymbolTable,
        emitter: &'a mut Emitter,
    ) -> Self {
        Self {
            ctx,
            symbols,
            emitter,
        }
    }

    /// Compile one expression run.
    ///
    /// The run must be a well-formed term/operator alternation; anything
    /// else (empty run, consecutive operators, trailing operator) is a
    /// `MalformedExpression`.
    pub fn compile(&mut self, tokens: &[Token]) -> Result<()> {
        let mut cursor = TokenCursor::new(tokens);
        if cursor.is_eof() {
            return Err(self.error(ErrorKind::malformed("empty expression")));
        }

        self.compile_term(&mut cursor)?;

        while let Some(token) = cursor.peek() {
            if token.kind != TokenKind::Symbol || !is_binary_op(&token.text) {
                return Err(self.error(ErrorKind::malformed(format!(
                    "expected operator, found '{}'",
                    token.text
                ))));
            }
            let op = token.text.as_str();
            cursor.advance();

            if cursor.is_eof() {
                return Err(self.error(ErrorKind::malformed(format!("trailing operator '{op}'"))));
            }
            // Push the next term first, then apply the pending operator.
            self.compile_term(&mut cursor)?;
            self.emitter.emit_binary_op(op);
        }

        Ok(())
    }

    /// Classify and compile a single term.
    fn compile_term(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        let Some(token) = cursor.peek() else {
            return Err(self.error(ErrorKind::malformed("missing term")));
        };

        match token.kind {
            TokenKind::IntegerConstant => {
                cursor.advance();
                self.compile_integer(&token.text)
            }
            TokenKind::StringConstant => {
                cursor.advance();
                self.compile_string(&token.text);
                Ok(())
            }
            TokenKind::Keyword => {
                cursor.advance();
                self.compile_keyword_constant(&token.text)
            }
            TokenKind::Symbol => match token.text.as_str() {
                "(" => {
                    let inner = cursor
                        .take_delimited("(", ")")
                        .map_err(|kind| self.error(kind))?;
                    self.compile(inner)
                }
                // In term position these symbols are unary prefixes; the
                // binary '-' is only ever consumed in operator position.
                "-" => {
                    cursor.advance();
                    self.compile_term(cursor)?;
                    self.emitter.emit_command(Command::Neg);
                    Ok(())
                }
                "~" => {
                    cursor.advance();
                    self.compile_term(cursor)?;
                    self.emitter.emit_command(Command::Not);
                    Ok(())
                }
                _ => Err(self.error(ErrorKind::malformed(format!(
                    "expected term, found '{}'",
                    token.text
                )))),
            },
            TokenKind::Identifier => {
                let name = token.text.as_str();
                match cursor.peek_nth(1) {
                    Some(next) if next.is_symbol("[") => {
                        cursor.advance();
                        self.compile_array_entry(cursor, name)
                    }
                    Some(next) if next.is_symbol("(") => {
                        cursor.advance();
                        self.compile_unqualified_call(cursor, name)
                    }
                    Some(next) if next.is_symbol(".") => {
                        cursor.advance();
                        self.compile_qualified_call(cursor, name)
                    }
                    _ => {
                        cursor.advance();
                        self.compile_variable(name)
                    }
                }
            }
        }
    }

    fn error(&self, kind: ErrorKind) -> CompileError {
        self.ctx.error(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::StorageClass;
    use jackc_lexer::tokenize;

    fn compile_expr(source: &str) -> Vec<String> {
        let ctx = CompilationContext::new();
        let symbols = SymbolTable::new();
        compile_with(source, &ctx, &symbols)
    }

    fn compile_with(source: &str, ctx: &CompilationContext, symbols: &SymbolTable) -> Vec<String> {
        let tokens = tokenize(source).unwrap();
        let mut emitter = Emitter::new();
        ExprCompiler::new(ctx, symbols, &mut emitter)
            .compile(&tokens)
            .unwrap();
        emitter.finish().iter().map(ToString::to_string).collect()
    }

    fn expr_error(source: &str) -> ErrorKind {
        let tokens = tokenize(source).unwrap();
        let ctx = CompilationContext::new();
        let symbols = SymbolTable::new();
        let mut emitter = Emitter::new();
        ExprCompiler::new(&ctx, &symbols, &mut emitter)
            .compile(&tokens)
            .unwrap_err()
            .kind
    }

    #[test]
    fn single_constant() {
        assert_eq!(compile_expr("5"), ["push constant 5"]);
    }

    #[test]
    fn left_to_right_evaluation() {
        // No precedence: 2 + 3 * 4 is (2 + 3) * 4, term-then-operator order.
        assert_eq!(
            compile_expr("2 + 3 * 4"),
            [
                "push constant 2",
                "push constant 3",
                "add",
                "push constant 4",
                "call Math.multiply 2",
            ]
        );
    }

    #[test]
    fn parenthesized_subexpression() {
        assert_eq!(
            compile_expr("2 * (3 + 4)"),
            [
                "push constant 2",
                "push constant 3",
                "push constant 4",
                "add",
                "call Math.multiply 2",
            ]
        );
    }

    #[test]
    fn unary_minus_vs_binary_minus() {
        assert_eq!(
            compile_expr("1 - - 2"),
            ["push constant 1", "push constant 2", "neg", "sub"]
        );
    }

    #[test]
    fn unary_not() {
        assert_eq!(compile_expr("~(1 = 2)"), [
            "push constant 1",
            "push constant 2",
            "eq",
            "not"
        ]);
    }

    #[test]
    fn variable_reference() {
        let ctx = CompilationContext::new();
        let mut symbols = SymbolTable::new();
        symbols.declare("x", "int", StorageClass::Local).unwrap();
        assert_eq!(compile_with("x + 1", &ctx, &symbols), [
            "push local 0",
            "push constant 1",
            "add"
        ]);
    }

    #[test]
    fn array_entry_read() {
        let ctx = CompilationContext::new();
        let mut symbols = SymbolTable::new();
        symbols.declare("arr", "Array", StorageClass::Local).unwrap();
        assert_eq!(
            compile_with("arr[2]", &ctx, &symbols),
            [
                "push constant 2",
                "push local 0",
                "add",
                "pop pointer 1",
                "push that 0",
            ]
        );
    }

    #[test]
    fn empty_expression_is_malformed() {
        assert_eq!(expr_error("()"), ErrorKind::malformed("empty expression"));
    }

    #[test]
    fn consecutive_operators_are_malformed() {
        assert_eq!(
            expr_error("1 + + 2"),
            ErrorKind::malformed("expected term, found '+'")
        );
    }

    #[test]
    fn trailing_operator_is_malformed() {
        assert_eq!(expr_error("1 +"), ErrorKind::malformed("trailing operator '+'"));
    }

    #[test]
    fn undeclared_identifier() {
        assert_eq!(
            expr_error("y"),
            ErrorKind::UndeclaredIdentifier { name: "y".into() }
        );
    }
}

//! Subroutine call compilation.
//!
//! An invocation is one of three shapes:
//! - `name(...)` where the unit declares `name` - a call on the implicit
//!   receiver (`pointer 0` pushed as the hidden first argument);
//! - `name(...)` otherwise - a free-standing external call;
//! - `qualifier.name(...)` - a call through an object-valued variable when
//!   `qualifier` resolves in the symbol table (the variable's *declared
//!   type* forms the call target and its value becomes the hidden first
//!   argument), else a plain `<Unit>.<member>` call with no receiver.

use jackc_lexer::Token;

use crate::cursor::TokenCursor;
use crate::vm::Segment;

use super::{ExprCompiler, Result};

impl ExprCompiler<'_> {
    /// Compile `name(args)` - no qualifier.
    pub(super) fn compile_unqualified_call(
        &mut self,
        cursor: &mut TokenCursor<'_>,
        name: &str,
    ) -> Result<()> {
        let args = cursor
            .take_delimited("(", ")")
            .map_err(|kind| self.error(kind))?;

        if self.ctx.declares_subroutine(name) {
            self.emitter.emit_push(Segment::Pointer, 0);
            let count = self.compile_arguments(args)?;
            self.emitter.emit_call(&self.ctx.qualify(name), count + 1);
        } else {
            let count = self.compile_arguments(args)?;
            self.emitter.emit_call(name, count);
        }
        Ok(())
    }

    /// Compile `qualifier.member(args)`. The qualifier identifier has
    /// already been consumed; the cursor sits on the dot.
    pub(super) fn compile_qualified_call(
        &mut self,
        cursor: &mut TokenCursor<'_>,
        qualifier: &str,
    ) -> Result<()> {
        cursor.expect_symbol(".").map_err(|kind| self.error(kind))?;
        let member = cursor
            .expect_identifier()
            .map_err(|kind| self.error(kind))?;
        let args = cursor
            .take_delimited("(", ")")
            .map_err(|kind| self.error(kind))?;

        match self.symbols.resolve(qualifier) {
            Some(symbol) => {
                // Call through an object reference: the object becomes the
                // implicit receiver and its declared type names the target.
                let target = format!("{}.{}", symbol.declared_type, member);
                self.emitter.emit_push(symbol.segment(), symbol.slot);
                let count = self.compile_arguments(args)?;
                self.emitter.emit_call(&target, count + 1);
            }
            None => {
                let target = format!("{qualifier}.{member}");
                let count = self.compile_arguments(args)?;
                self.emitter.emit_call(&target, count);
            }
        }
        Ok(())
    }

    /// Compile an argument list left to right, returning the argument count.
    fn compile_arguments(&mut self, tokens: &[Token]) -> Result<u16> {
        let mut count = 0;
        for run in split_arguments(tokens) {
            self.compile(run)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Split an argument-list run on top-level commas.
///
/// Commas nested inside parenthesized or bracketed sub-terms do not split.
/// An empty run yields no arguments.
fn split_arguments(tokens: &[Token]) -> Vec<&[Token]> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut runs = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.is_symbol("(") || token.is_symbol("[") {
            depth += 1;
        } else if token.is_symbol(")") || token.is_symbol("]") {
            depth -= 1;
        } else if token.is_symbol(",") && depth == 0 {
            runs.push(&tokens[start..index]);
            start = index + 1;
        }
    }
    runs.push(&tokens[start..]);
    runs
}

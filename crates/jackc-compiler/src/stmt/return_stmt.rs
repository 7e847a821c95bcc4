//! `return` statements.

use crate::cursor::TokenCursor;
use crate::vm::Segment;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `return;` or `return expr;`.
    ///
    /// The calling convention requires every subroutine to leave exactly one
    /// value on the stack, so a bare `return` pushes a placeholder zero.
    pub(super) fn compile_return(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor
            .expect_keyword("return")
            .map_err(|kind| self.fail(kind))?;
        let value_run = cursor.take_until_symbol(";");
        if value_run.is_empty() {
            self.emitter.emit_push(Segment::Constant, 0);
        } else {
            self.expr().compile(value_run)?;
        }
        cursor.expect_symbol(";").map_err(|kind| self.fail(kind))?;
        self.emitter.emit_return();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::stmt::test_support::{compile_statements, try_compile_statements};
    use crate::symbols::StorageClass;
    use jackc_core::ErrorKind;

    #[test]
    fn bare_return_pushes_placeholder_zero() {
        assert_eq!(
            compile_statements("return;", |_| {}),
            ["push constant 0", "return"]
        );
    }

    #[test]
    fn value_return_compiles_the_expression() {
        let rendered = compile_statements("return i + 1;", |symbols| {
            symbols.declare("i", "int", StorageClass::Local).unwrap();
        });
        assert_eq!(
            rendered,
            ["push local 0", "push constant 1", "add", "return"]
        );
    }

    #[test]
    fn return_this_from_constructor_body() {
        assert_eq!(
            compile_statements("return this;", |_| {}),
            ["push pointer 0", "return"]
        );
    }

    #[test]
    fn missing_semicolon_fails() {
        let err = try_compile_statements("return", |_| {}).unwrap_err();
        assert_eq!(err.kind, ErrorKind::unexpected("end of input"));
    }
}

//! `let` assignment statements.

use crate::cursor::TokenCursor;
use crate::vm::{Command, Segment};

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `let name = expr;` or `let name[index] = expr;`.
    ///
    /// For the indexed form the element address is computed before the
    /// right-hand side, then the value is parked in `temp 0` while `pointer
    /// 1` is aimed at the element, and stored through `that 0`.
    pub(super) fn compile_let(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_keyword("let").map_err(|kind| self.fail(kind))?;
        let name = cursor
            .expect_identifier()
            .map_err(|kind| self.fail(kind))?
            .to_owned();

        if cursor.peek().is_some_and(|t| t.is_symbol("[")) {
            let index_run = cursor
                .take_delimited("[", "]")
                .map_err(|kind| self.fail(kind))?;
            cursor.expect_symbol("=").map_err(|kind| self.fail(kind))?;
            let value_run = cursor.take_until_symbol(";");

            self.expr().compile(index_run)?;
            let (segment, slot) = self.resolve(&name)?;
            self.emitter.emit_push(segment, slot);
            self.emitter.emit_command(Command::Add);

            self.expr().compile(value_run)?;
            self.emitter.emit_pop(Segment::Temp, 0);
            self.emitter.emit_pop(Segment::Pointer, 1);
            self.emitter.emit_push(Segment::Temp, 0);
            self.emitter.emit_pop(Segment::That, 0);
        } else {
            cursor.expect_symbol("=").map_err(|kind| self.fail(kind))?;
            let value_run = cursor.take_until_symbol(";");

            self.expr().compile(value_run)?;
            let (segment, slot) = self.resolve(&name)?;
            self.emitter.emit_pop(segment, slot);
        }

        cursor.expect_symbol(";").map_err(|kind| self.fail(kind))?;
        Ok(())
    }
}

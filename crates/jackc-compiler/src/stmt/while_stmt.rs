//! `while` statements.

use crate::cursor::TokenCursor;
use crate::vm::Command;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `while (cond) { body }`.
    ///
    /// The condition re-evaluates on every iteration, complemented so a
    /// false value exits the loop.
    pub(super) fn compile_while(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor
            .expect_keyword("while")
            .map_err(|kind| self.fail(kind))?;
        let condition = cursor
            .take_delimited("(", ")")
            .map_err(|kind| self.fail(kind))?;
        let (begin_label, end_label) = self.emitter.next_while_labels();

        self.emitter.emit_label(&begin_label);
        self.expr().compile(condition)?;
        self.emitter.emit_command(Command::Not);
        self.emitter.emit_if_goto(&end_label);

        self.compile_block(cursor)?;
        self.emitter.emit_goto(&begin_label);
        self.emitter.emit_label(&end_label);
        Ok(())
    }
}

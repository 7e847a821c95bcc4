//! `if`/`else` statements.

use crate::cursor::TokenCursor;
use crate::vm::Command;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `if (cond) { then } [else { else }]`.
    ///
    /// The condition is complemented so a false value jumps over the then
    /// branch. Both labels are emitted whether or not an `else` branch is
    /// present, so the shape of the output is uniform.
    pub(super) fn compile_if(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_keyword("if").map_err(|kind| self.fail(kind))?;
        let condition = cursor
            .take_delimited("(", ")")
            .map_err(|kind| self.fail(kind))?;
        let (else_label, end_label) = self.emitter.next_if_labels();

        self.expr().compile(condition)?;
        self.emitter.emit_command(Command::Not);
        self.emitter.emit_if_goto(&else_label);

        self.compile_block(cursor)?;
        self.emitter.emit_goto(&end_label);
        self.emitter.emit_label(&else_label);

        if cursor.peek().is_some_and(|t| t.is_keyword("else")) {
            cursor.advance();
            self.compile_block(cursor)?;
        }
        self.emitter.emit_label(&end_label);
        Ok(())
    }
}

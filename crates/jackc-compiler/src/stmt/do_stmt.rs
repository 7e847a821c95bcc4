//! `do` call statements.

use crate::cursor::TokenCursor;
use crate::vm::Segment;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `do call;`.
    ///
    /// Every call leaves one value on the stack; `do` discards it into
    /// `temp 0`.
    pub(super) fn compile_do(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_keyword("do").map_err(|kind| self.fail(kind))?;
        let call_run = cursor.take_until_symbol(";");
        self.expr().compile(call_run)?;
        cursor.expect_symbol(";").map_err(|kind| self.fail(kind))?;
        self.emitter.emit_pop(Segment::Temp, 0);
        Ok(())
    }
}

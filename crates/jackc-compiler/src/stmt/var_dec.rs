//! Variable declarations.
//!
//! `static`/`field` declarations populate the unit scope tier, `var`
//! declarations the subroutine tier. Declarations emit nothing; their whole
//! effect is symbol table registration.

use crate::cursor::TokenCursor;
use crate::symbols::StorageClass;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile `static type name, ...;` or `field type name, ...;`.
    pub(super) fn compile_unit_var_dec(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        let class = match cursor.advance() {
            Some(token) if token.is_keyword("static") => StorageClass::Static,
            Some(token) if token.is_keyword("field") => StorageClass::Field,
            _ => return Err(self.fail(cursor.unexpected())),
        };
        self.declare_list(cursor, class)
    }

    /// Compile `var type name, ...;`.
    pub(super) fn compile_var_dec(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_keyword("var").map_err(|kind| self.fail(kind))?;
        self.declare_list(cursor, StorageClass::Local)
    }

    /// Declare a comma-separated name list sharing one type and storage
    /// class, then consume the closing semicolon.
    fn declare_list(&mut self, cursor: &mut TokenCursor<'_>, class: StorageClass) -> Result<()> {
        let declared_type = self.expect_type(cursor)?;
        loop {
            let name = cursor.expect_identifier().map_err(|kind| self.fail(kind))?;
            self.symbols
                .declare(name, &declared_type, class)
                .map_err(|kind| self.fail(kind))?;

            if cursor.peek().is_some_and(|t| t.is_symbol(",")) {
                cursor.advance();
            } else {
                break;
            }
        }
        cursor.expect_symbol(";").map_err(|kind| self.fail(kind))?;
        Ok(())
    }
}

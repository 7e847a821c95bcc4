//! Compilation unit (`class`) declaration.

use log::debug;

use crate::cursor::TokenCursor;

use super::{Result, StmtCompiler};

impl StmtCompiler<'_> {
    /// Compile a whole unit: `class Name { ... }`.
    ///
    /// This is the entry production; the unit's name qualifies every
    /// subroutine it declares. Tokens after the closing brace are an error.
    pub fn compile_unit(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_keyword("class").map_err(|kind| self.fail(kind))?;
        let name = cursor.expect_identifier().map_err(|kind| self.fail(kind))?;
        self.ctx.set_unit_name(name);
        debug!("compiling unit '{name}'");

        let close = cursor
            .matching_close("{", "}")
            .map_err(|kind| self.fail(kind))?;
        cursor.expect_symbol("{").map_err(|kind| self.fail(kind))?;
        while cursor.position() < close {
            self.compile_construct(cursor)?;
        }
        cursor.expect_symbol("}").map_err(|kind| self.fail(kind))?;

        if !cursor.is_eof() {
            return Err(self.fail(cursor.unexpected()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CompilationContext;
    use crate::emit::Emitter;
    use crate::symbols::SymbolTable;
    use jackc_core::{CompileError, ErrorKind};
    use jackc_lexer::tokenize;

    fn compile_unit_source(source: &str) -> Result<Vec<String>> {
        let tokens = tokenize(source).unwrap();
        let mut ctx = CompilationContext::new();
        let mut symbols = SymbolTable::new();
        let mut emitter = Emitter::new();
        let mut cursor = TokenCursor::new(&tokens);
        StmtCompiler::new(&mut ctx, &mut symbols, &mut emitter).compile_unit(&mut cursor)?;
        Ok(emitter.finish().iter().map(ToString::to_string).collect())
    }

    #[test]
    fn empty_unit_emits_nothing() {
        assert_eq!(compile_unit_source("class Main { }").unwrap(), [""; 0]);
    }

    #[test]
    fn unit_name_qualifies_subroutines() {
        let rendered =
            compile_unit_source("class Game { function void run() { return; } }").unwrap();
        assert_eq!(rendered[0], "function Game.run 0");
    }

    #[test]
    fn missing_class_keyword_fails() {
        let err = compile_unit_source("Main { }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::unexpected("Main"));
    }

    #[test]
    fn tokens_after_closing_brace_fail() {
        let err = compile_unit_source("class Main { } class Other { }").unwrap_err();
        assert_eq!(err.kind, ErrorKind::unexpected("class"));
    }

    #[test]
    fn unbalanced_body_fails() {
        let err = compile_unit_source("class Main {").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnbalancedBrackets { close: '}' });
    }
}

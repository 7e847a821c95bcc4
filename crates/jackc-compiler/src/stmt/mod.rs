//! Statement and declaration compiler.
//!
//! A state machine over the source grammar's productions: each statement or
//! declaration is recognized from its leading keyword, parsed, resolved
//! against the symbol table, and immediately lowered to instructions - no
//! intermediate tree is retained. Identifier registration is delegated to
//! the symbol table, expression emission to [`ExprCompiler`].

mod class;
mod do_stmt;
mod if_stmt;
mod let_stmt;
mod return_stmt;
mod subroutine;
mod var_dec;
mod while_stmt;

use jackc_core::{CompileError, ErrorKind};
use jackc_lexer::TokenKind;

use crate::context::CompilationContext;
use crate::cursor::TokenCursor;
use crate::emit::Emitter;
use crate::expr::ExprCompiler;
use crate::symbols::SymbolTable;
use crate::vm::Segment;

type Result<T> = std::result::Result<T, CompileError>;

/// Compiles statements and declarations to instructions.
///
/// Drives the whole pipeline: it owns the traversal and calls into the
/// expression compiler and symbol table as the grammar requires.
pub struct StmtCompiler<'a> {
    ctx: &'a mut CompilationContext,
    symbols: &'a mut SymbolTable,
    emitter: &'a mut Emitter,
}

impl<'a> StmtCompiler<'a> {
    pub fn new(
        ctx: &'a mut CompilationContext,
        symbols: &'a mut SymbolTable,
        emitter: &'a mut Emitter,
    ) -> Self {
        Self {
            ctx,
            symbols,
            emitter,
        }
    }

    /// Compile the next statement or declaration, dispatching on its leading
    /// keyword. Anything unrecognized is a fatal `UnexpectedToken`.
    pub fn compile_construct(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        if let Some(token) = cursor.peek()
            && token.kind == TokenKind::Keyword
        {
            match token.text.as_str() {
                "static" | "field" => return self.compile_unit_var_dec(cursor),
                "constructor" | "function" | "method" => return self.compile_subroutine(cursor),
                "var" => return self.compile_var_dec(cursor),
                "let" => return self.compile_let(cursor),
                "do" => return self.compile_do(cursor),
                "if" => return self.compile_if(cursor),
                "while" => return self.compile_while(cursor),
                "return" => return self.compile_return(cursor),
                _ => {}
            }
        }
        Err(self.fail(cursor.unexpected()))
    }

    /// Compile a brace-delimited body of constructs.
    ///
    /// The matching close brace is located up front by a balanced scan, so
    /// the construct loop knows exactly where to stop.
    fn compile_block(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        let close = cursor
            .matching_close("{", "}")
            .map_err(|kind| self.fail(kind))?;
        cursor.expect_symbol("{").map_err(|kind| self.fail(kind))?;
        while cursor.position() < close {
            self.compile_construct(cursor)?;
        }
        cursor.expect_symbol("}").map_err(|kind| self.fail(kind))?;
        Ok(())
    }

    /// Consume a type token: `int`, `char`, `boolean`, or a unit name.
    fn expect_type(&mut self, cursor: &mut TokenCursor<'_>) -> Result<String> {
        match cursor.peek() {
            Some(token)
                if token.kind == TokenKind::Identifier
                    || token.is_keyword("int")
                    || token.is_keyword("char")
                    || token.is_keyword("boolean") =>
            {
                cursor.advance();
                Ok(token.text.clone())
            }
            _ => Err(self.fail(cursor.unexpected())),
        }
    }

    /// Resolve a referenced (not declared) identifier to its storage
    /// location.
    fn resolve(&self, name: &str) -> Result<(Segment, u16)> {
        match self.symbols.resolve(name) {
            Some(symbol) => Ok((symbol.segment(), symbol.slot)),
            None => Err(self.fail(ErrorKind::UndeclaredIdentifier { name: name.into() })),
        }
    }

    /// An expression compiler over this compiler's collaborators.
    fn expr(&mut self) -> ExprCompiler<'_> {
        ExprCompiler::new(self.ctx, self.symbols, self.emitter)
    }

    fn fail(&self, kind: ErrorKind) -> CompileError {
        self.ctx.error(kind)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use jackc_lexer::tokenize;

    /// Compile a run of statements (not a whole unit) with pre-declared
    /// symbols, returning the rendered instructions.
    pub(crate) fn compile_statements(
        source: &str,
        declare: impl FnOnce(&mut SymbolTable),
    ) -> Vec<String> {
        try_compile_statements(source, declare).unwrap()
    }

    pub(crate) fn try_compile_statements(
        source: &str,
        declare: impl FnOnce(&mut SymbolTable),
    ) -> std::result::Result<Vec<String>, CompileError> {
        let tokens = tokenize(source).unwrap();
        let mut ctx = CompilationContext::new();
        ctx.set_unit_name("Main");
        let mut symbols = SymbolTable::new();
        declare(&mut symbols);
        let mut emitter = Emitter::new();

        let mut cursor = TokenCursor::new(&tokens);
        let mut compiler = StmtCompiler::new(&mut ctx, &mut symbols, &mut emitter);
        while !cursor.is_eof() {
            compiler.compile_construct(&mut cursor)?;
        }
        Ok(emitter.finish().iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::try_compile_statements;
    use jackc_core::ErrorKind;

    #[test]
    fn unrecognized_leading_token_fails() {
        let err = try_compile_statements("else { }", |_| {}).unwrap_err();
        assert_eq!(err.kind, ErrorKind::unexpected("else"));
    }

    #[test]
    fn unrecognized_identifier_statement_fails() {
        let err = try_compile_statements("x = 5;", |_| {}).unwrap_err();
        assert_eq!(err.kind, ErrorKind::unexpected("x"));
    }
}

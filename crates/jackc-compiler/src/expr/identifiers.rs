//! Variable and array-entry term compilation.

use jackc_core::ErrorKind;

use crate::cursor::TokenCursor;
use crate::vm::{Command, Segment};

use super::{ExprCompiler, Result};

impl ExprCompiler<'_> {
    /// Push a variable's value from its segment/slot.
    pub(super) fn compile_variable(&mut self, name: &str) -> Result<()> {
        let (segment, slot) = self.resolve(name)?;
        self.emitter.emit_push(segment, slot);
        Ok(())
    }

    /// Read an array entry: `name[index]`.
    ///
    /// The element address is the array base plus the index value; the read
    /// goes through the `that` indirection segment.
    pub(super) fn compile_array_entry(
        &mut self,
        cursor: &mut TokenCursor<'_>,
        name: &str,
    ) -> Result<()> {
        let index_run = cursor
            .take_delimited("[", "]")
            .map_err(|kind| self.error(kind))?;
        self.compile(index_run)?;

        let (segment, slot) = self.resolve(name)?;
        self.emitter.emit_push(segment, slot);
        self.emitter.emit_command(Command::Add);
        self.emitter.emit_pop(Segment::Pointer, 1);
        self.emitter.emit_push(Segment::That, 0);
        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<(Segment, u16)> {
        match self.symbols.resolve(name) {
            Some(symbol) => Ok((symbol.segment(), symbol.slot)),
            None => Err(self.error(ErrorKind::UndeclaredIdentifier { name: name.into() })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CompilationContext;
    use crate::emit::Emitter;
    use crate::symbols::{StorageClass, SymbolTable};
    use jackc_lexer::tokenize;

    fn symbols_with(entries: &[(&str, &str, StorageClass)]) -> SymbolTable {
        let mut symbols = SymbolTable::new();
        for (name, ty, class) in entries {
            symbols.declare(name, ty, *class).unwrap();
        }
        symbols
    }

    fn compile_with(source: &str, symbols: &SymbolTable) -> Vec<String> {
        let tokens = tokenize(source).unwrap();
        let ctx = CompilationContext::new();
        let mut emitter = Emitter::new();
        ExprCompiler::new(&ctx, symbols, &mut emitter)
            .compile(&tokens)
            .unwrap();
        emitter.finish().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn field_pushes_from_this_segment() {
        let symbols = symbols_with(&[
            ("size", "int", StorageClass::Field),
            ("x", "int", StorageClass::Field),
        ]);
        assert_eq!(compile_with("x", &symbols), ["push this 1"]);
    }

    #[test]
    fn argument_pushes_from_argument_segment() {
        let symbols = symbols_with(&[("n", "int", StorageClass::Argument)]);
        assert_eq!(compile_with("n", &symbols), ["push argument 0"]);
    }

    #[test]
    fn array_entry_with_expression_index() {
        let symbols = symbols_with(&[
            ("arr", "Array", StorageClass::Local),
            ("i", "int", StorageClass::Local),
        ]);
        assert_eq!(
            compile_with("arr[i + 1]", &symbols),
            [
                "push local 1",
                "push constant 1",
                "add",
                "push local 0",
                "add",
                "pop pointer 1",
                "push that 0",
            ]
        );
    }

    #[test]
    fn undeclared_array_base_fails() {
        let tokens = tokenize("arr[0]").unwrap();
        let ctx = CompilationContext::new();
        let symbols = SymbolTable::new();
        let mut emitter = Emitter::new();
        let err = ExprCompiler::new(&ctx, &symbols, &mut emitter)
            .compile(&tokens)
            .unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::UndeclaredIdentifier { name: "arr".into() }
        );
    }
}

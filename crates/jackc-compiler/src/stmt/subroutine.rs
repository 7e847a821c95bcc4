//! Subroutine declarations.
//!
//! The `function N` header needs the subroutine's local count, which is only
//! known once the whole body has compiled. The body therefore compiles into
//! the emitter first, and the header (plus the kind-specific prologue) is
//! inserted at a mark taken before the body.

use log::debug;

use crate::cursor::TokenCursor;
use crate::symbols::StorageClass;
use crate::vm::{Instruction, Segment};

use super::{Result, StmtCompiler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubroutineKind {
    Constructor,
    Function,
    Method,
}

impl StmtCompiler<'_> {
    /// Compile `constructor|function|method ret name(params) { body }`.
    pub(super) fn compile_subroutine(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        let kind = match cursor.advance() {
            Some(token) if token.is_keyword("constructor") => SubroutineKind::Constructor,
            Some(token) if token.is_keyword("function") => SubroutineKind::Function,
            Some(token) if token.is_keyword("method") => SubroutineKind::Method,
            _ => return Err(self.fail(cursor.unexpected())),
        };
        let is_void = self.expect_return_type(cursor)? == "void";
        let name = cursor
            .expect_identifier()
            .map_err(|kind| self.fail(kind))?
            .to_owned();
        debug!("compiling subroutine '{name}'");

        // Fresh subroutine scope: symbols, label counters, context location.
        self.ctx.begin_subroutine(&name);
        self.symbols.begin_subroutine();
        self.emitter.reset_labels();

        // A method's receiver occupies argument slot 0, shifting explicit
        // parameters right by one.
        if kind == SubroutineKind::Method {
            let unit = self.ctx.unit_name().to_owned();
            self.symbols
                .declare("this", &unit, StorageClass::Argument)
                .map_err(|kind| self.fail(kind))?;
        }
        self.compile_parameter_list(cursor)?;

        let mark = self.emitter.mark();
        self.compile_block(cursor)?;

        // A void body may fall off its end without a `return`; callers still
        // expect one value on the stack.
        if is_void && !self.emitter.last_is_return() {
            self.emitter.emit_push(Segment::Constant, 0);
            self.emitter.emit_return();
        }

        let header = self.header(kind, &name);
        self.emitter.insert_at(mark, header);
        self.ctx.end_subroutine();
        Ok(())
    }

    /// The `function` header and kind-specific prologue, placed before the
    /// already-compiled body.
    fn header(&self, kind: SubroutineKind, name: &str) -> Vec<Instruction> {
        let mut header = vec![Instruction::Function {
            name: self.ctx.qualify(name),
            locals: self.symbols.local_count(),
        }];
        match kind {
            // Anchor `this` at the receiver passed in argument 0.
            SubroutineKind::Method => {
                header.push(Instruction::Push {
                    segment: Segment::Argument,
                    index: 0,
                });
                header.push(Instruction::Pop {
                    segment: Segment::Pointer,
                    index: 0,
                });
            }
            // Allocate the object and anchor `this` at it.
            SubroutineKind::Constructor => {
                header.push(Instruction::Push {
                    segment: Segment::Constant,
                    index: self.symbols.field_count(),
                });
                header.push(Instruction::Call {
                    name: "Memory.alloc".into(),
                    args: 1,
                });
                header.push(Instruction::Pop {
                    segment: Segment::Pointer,
                    index: 0,
                });
            }
            SubroutineKind::Function => {}
        }
        header
    }

    /// `void` or a value type.
    fn expect_return_type(&mut self, cursor: &mut TokenCursor<'_>) -> Result<String> {
        if cursor.peek().is_some_and(|t| t.is_keyword("void")) {
            cursor.advance();
            return Ok("void".to_owned());
        }
        self.expect_type(cursor)
    }

    /// Compile `(type name, ...)`, declaring each parameter as an argument.
    fn compile_parameter_list(&mut self, cursor: &mut TokenCursor<'_>) -> Result<()> {
        cursor.expect_symbol("(").map_err(|kind| self.fail(kind))?;
        if cursor.peek().is_some_and(|t| t.is_symbol(")")) {
            cursor.advance();
            return Ok(());
        }
        loop {
            let declared_type = self.expect_type(cursor)?;
            let name = cursor.expect_identifier().map_err(|kind| self.fail(kind))?;
            self.symbols
                .declare(name, &declared_type, StorageClass::Argument)
                .map_err(|kind| self.fail(kind))?;

            if cursor.peek().is_some_and(|t| t.is_symbol(",")) {
                cursor.advance();
            } else {
                break;
            }
        }
        cursor.expect_symbol(")").map_err(|kind| self.fail(kind))?;
        Ok(())
    }
}

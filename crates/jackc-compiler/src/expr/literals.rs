//! Literal term compilation.

use jackc_core::ErrorKind;

use crate::vm::{Command, Segment};

use super::{ExprCompiler, Result};

impl ExprCompiler<'_> {
    /// Compile an integer constant term.
    pub(super) fn compile_integer(&mut self, text: &str) -> Result<()> {
        let value: u16 = text
            .parse()
            .map_err(|_| self.error(ErrorKind::malformed(format!("invalid integer '{text}'"))))?;
        self.emitter.emit_push(Segment::Constant, value);
        Ok(())
    }

    /// Compile a string constant term.
    ///
    /// The VM has no string literals: the string is built at runtime by
    /// allocating via `String.new` and appending one character code at a
    /// time.
    pub(super) fn compile_string(&mut self, text: &str) {
        self.emitter.emit_push(Segment::Constant, text.len() as u16);
        self.emitter.emit_call("String.new", 1);
        for ch in text.chars() {
            self.emitter.emit_push(Segment::Constant, ch as u16);
            self.emitter.emit_call("String.appendChar", 2);
        }
    }

    /// Compile a keyword constant term: `true`, `false`, `null`, or `this`.
    pub(super) fn compile_keyword_constant(&mut self, keyword: &str) -> Result<()> {
        match keyword {
            // All-bits-set, built by complementing zero.
            "true" => {
                self.emitter.emit_push(Segment::Constant, 0);
                self.emitter.emit_command(Command::Not);
            }
            "false" | "null" => self.emitter.emit_push(Segment::Constant, 0),
            "this" => self.emitter.emit_push(Segment::Pointer, 0),
            _ => {
                return Err(self.error(ErrorKind::malformed(format!(
                    "'{keyword}' is not a term"
                ))));
            }
        }
        Ok(())
    }
}

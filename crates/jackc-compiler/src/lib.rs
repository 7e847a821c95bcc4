//! Single-pass compiler from token streams to stack-machine instructions.
//!
//! The compiler walks a unit's token sequence exactly once, resolving
//! identifiers against a two-tier symbol table and emitting instructions as
//! it goes - there is no syntax tree. One [`Compiler`] value compiles one
//! unit; independent units share nothing and can compile in parallel.
//!
//! ```
//! use jackc_compiler::compile;
//! use jackc_lexer::tokenize;
//!
//! let tokens = tokenize("class Main { function void run() { return; } }").unwrap();
//! let instructions = compile(&tokens).unwrap();
//! assert_eq!(instructions[0].to_string(), "function Main.run 0");
//! ```

pub mod context;
pub mod cursor;
pub mod emit;
pub mod expr;
pub mod stmt;
pub mod symbols;
pub mod vm;

use jackc_lexer::Token;
use log::debug;

pub use context::CompilationContext;
pub use cursor::TokenCursor;
pub use emit::Emitter;
pub use expr::ExprCompiler;
pub use jackc_core::{CompileError, ErrorKind};
pub use stmt::StmtCompiler;
pub use symbols::{StorageClass, Symbol, SymbolTable};
pub use vm::{Command, Instruction, Segment};

/// Compiles one unit's token stream into instructions.
#[derive(Debug, Default)]
pub struct Compiler {
    ctx: CompilationContext,
    symbols: SymbolTable,
    emitter: Emitter,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a complete unit declaration.
    ///
    /// The tokens must form exactly one `class` declaration; trailing
    /// tokens are an error.
    pub fn compile(mut self, tokens: &[Token]) -> Result<Vec<Instruction>, CompileError> {
        let mut cursor = TokenCursor::new(tokens);
        StmtCompiler::new(&mut self.ctx, &mut self.symbols, &mut self.emitter)
            .compile_unit(&mut cursor)?;

        let instructions = self.emitter.finish();
        debug!(
            "unit '{}' compiled to {} instructions",
            self.ctx.unit_name(),
            instructions.len()
        );
        Ok(instructions)
    }
}

/// Compile a unit's tokens with a fresh [`Compiler`].
pub fn compile(tokens: &[Token]) -> Result<Vec<Instruction>, CompileError> {
    Compiler::new().compile(tokens)
}

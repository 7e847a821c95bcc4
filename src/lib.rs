//! Facade over the compilation pipeline.
//!
//! Re-exports the lexer and compiler crates and offers [`compile_source`]
//! for the common source-text-in, instruction-text-out path used by the
//! command-line driver and by embedders.

pub use jackc_compiler::{
    Command, CompilationContext, CompileError, Compiler, Emitter, ErrorKind, ExprCompiler,
    Instruction, Segment, StorageClass, Symbol, SymbolTable, compile,
};
pub use jackc_lexer::{LexError, Lexer, Token, TokenKind, tokenize};

/// Any failure along the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Compile unit source text to rendered instruction lines.
pub fn compile_source(source: &str) -> Result<Vec<String>, Error> {
    let tokens = tokenize(source)?;
    let instructions = compile(&tokens)?;
    Ok(instructions.iter().map(ToString::to_string).collect())
}

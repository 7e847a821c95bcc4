//! Compilation error types.
//!
//! All errors are fatal to the unit being compiled: the compiler performs no
//! recovery, retry, or default substitution. [`ErrorKind`] is produced by the
//! component that detects the problem; the compilation context wraps it into
//! a [`CompileError`] carrying the unit and subroutine names so the caller
//! can report a useful diagnostic.

use thiserror::Error;

/// What went wrong, without location context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A statement or declaration production saw a leading token matching
    /// none of its grammar alternatives.
    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    /// A bracket scan exhausted the token stream before finding its match.
    #[error("unbalanced brackets: no matching '{close}'")]
    UnbalancedBrackets { close: char },

    /// A name redeclared in a scope where it already exists.
    #[error("duplicate declaration of '{name}'")]
    DuplicateDeclaration { name: String },

    /// A reference to a name not resolvable in either scope.
    #[error("undeclared identifier '{name}'")]
    UndeclaredIdentifier { name: String },

    /// An expression run that is not a well-formed term/operator alternation.
    #[error("malformed expression: {detail}")]
    MalformedExpression { detail: String },
}

impl ErrorKind {
    /// Shorthand for an `UnexpectedToken` from whatever text was found.
    pub fn unexpected(found: impl Into<String>) -> Self {
        ErrorKind::UnexpectedToken {
            found: found.into(),
        }
    }

    /// Shorthand for a `MalformedExpression` with a detail message.
    pub fn malformed(detail: impl Into<String>) -> Self {
        ErrorKind::MalformedExpression {
            detail: detail.into(),
        }
    }
}

/// A fatal error with the context needed for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in unit '{unit}'{}", subroutine.as_ref().map(|s| format!(", subroutine '{s}'")).unwrap_or_default())]
pub struct CompileError {
    pub kind: ErrorKind,
    /// Name of the unit being compiled. Empty when the error precedes the
    /// unit declaration itself.
    pub unit: String,
    /// Name of the subroutine being compiled, if any.
    pub subroutine: Option<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, unit: impl Into<String>, subroutine: Option<String>) -> Self {
        Self {
            kind,
            unit: unit.into(),
            subroutine,
        }
    }
}

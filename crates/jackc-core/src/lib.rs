//! Shared error vocabulary for the Jack compiler.
//!
//! Every crate in the workspace reports fatal conditions through the types
//! defined here: [`ErrorKind`] names what went wrong, [`CompileError`] adds
//! where it happened (unit and, when set, subroutine).

mod error;

pub use error::{CompileError, ErrorKind};

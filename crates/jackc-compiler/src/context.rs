//! Per-unit compilation context.

use jackc_core::{CompileError, ErrorKind};
use rustc_hash::FxHashSet;

/// State scoped to one compiled unit.
///
/// Owned by the per-unit compiler value and discarded after emission, so
/// independent units can compile in parallel with no shared state.
#[derive(Debug, Default)]
pub struct CompilationContext {
    unit_name: String,
    subroutine_name: Option<String>,
    /// Subroutine names declared so far in the unit. Distinguishes an
    /// unqualified call to an own member from a call to an external routine.
    declared_subroutines: FxHashSet<String>,
}

impl CompilationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    pub fn set_unit_name(&mut self, name: &str) {
        self.unit_name = name.to_owned();
    }

    /// Record that a subroutine declaration has begun. The name is added to
    /// the declared set immediately so recursive calls resolve.
    pub fn begin_subroutine(&mut self, name: &str) {
        self.subroutine_name = Some(name.to_owned());
        self.declared_subroutines.insert(name.to_owned());
    }

    pub fn end_subroutine(&mut self) {
        self.subroutine_name = None;
    }

    pub fn subroutine_name(&self) -> Option<&str> {
        self.subroutine_name.as_deref()
    }

    /// Whether the unit has declared a subroutine of this name so far.
    pub fn declares_subroutine(&self, name: &str) -> bool {
        self.declared_subroutines.contains(name)
    }

    /// Fully qualify a member name as `<Unit>.<name>`.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.unit_name, name)
    }

    /// Attach this context's location to an error kind.
    pub fn error(&self, kind: ErrorKind) -> CompileError {
        CompileError::new(kind, self.unit_name.clone(), self.subroutine_name.clone())
    }
}

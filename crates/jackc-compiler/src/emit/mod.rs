//! Instruction emitter.
//!
//! The [`Emitter`] owns the output instruction sequence, the binary operator
//! table, and control-flow label generation. It renders unconditionally:
//! every instruction it is asked to emit, it emits - all control-flow logic
//! lives in the statement and expression compilers.
//!
//! Labels follow the `<construct><running-index>` scheme with one counter
//! per construct kind, reset together with the subroutine scope, so labels
//! are unique within a subroutine even for nested or sibling constructs.

use crate::vm::{Command, Instruction, Segment};

/// The symbols usable as binary operators in an expression.
pub const BINARY_OPS: [&str; 9] = ["+", "-", "*", "/", "&", "|", "<", ">", "="];

/// Check whether a symbol is a binary operator.
pub fn is_binary_op(symbol: &str) -> bool {
    BINARY_OPS.contains(&symbol)
}

/// Builds the instruction sequence for one compilation unit.
#[derive(Debug, Default)]
pub struct Emitter {
    instructions: Vec<Instruction>,
    while_counter: u32,
    if_counter: u32,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn emit_push(&mut self, segment: Segment, index: u16) {
        self.emit(Instruction::Push { segment, index });
    }

    pub fn emit_pop(&mut self, segment: Segment, index: u16) {
        self.emit(Instruction::Pop { segment, index });
    }

    pub fn emit_call(&mut self, name: &str, args: u16) {
        self.emit(Instruction::Call {
            name: name.to_owned(),
            args,
        });
    }

    pub fn emit_label(&mut self, name: &str) {
        self.emit(Instruction::Label(name.to_owned()));
    }

    pub fn emit_goto(&mut self, name: &str) {
        self.emit(Instruction::Goto(name.to_owned()));
    }

    pub fn emit_if_goto(&mut self, name: &str) {
        self.emit(Instruction::IfGoto(name.to_owned()));
    }

    pub fn emit_command(&mut self, command: Command) {
        self.emit(Instruction::Arithmetic(command));
    }

    pub fn emit_return(&mut self) {
        self.emit(Instruction::Return);
    }

    /// Emit the lowering of a binary operator symbol.
    ///
    /// `*` and `/` have no VM mnemonic and lower to OS calls. Returns false
    /// when the symbol is not a binary operator; nothing is emitted then.
    pub fn emit_binary_op(&mut self, symbol: &str) -> bool {
        let instruction = match symbol {
            "+" => Instruction::Arithmetic(Command::Add),
            "-" => Instruction::Arithmetic(Command::Sub),
            "&" => Instruction::Arithmetic(Command::And),
            "|" => Instruction::Arithmetic(Command::Or),
            "<" => Instruction::Arithmetic(Command::Lt),
            ">" => Instruction::Arithmetic(Command::Gt),
            "=" => Instruction::Arithmetic(Command::Eq),
            "*" => Instruction::Call {
                name: "Math.multiply".into(),
                args: 2,
            },
            "/" => Instruction::Call {
                name: "Math.divide".into(),
                args: 2,
            },
            _ => return false,
        };
        self.emit(instruction);
        true
    }

    // ==========================================================================
    // Labels
    // ==========================================================================

    /// Fresh label pair for a `while` construct: (begin, end).
    pub fn next_while_labels(&mut self) -> (String, String) {
        let index = self.while_counter;
        self.while_counter += 1;
        (format!("WHILE_EXP{index}"), format!("WHILE_END{index}"))
    }

    /// Fresh label pair for an `if` construct: (else, end).
    pub fn next_if_labels(&mut self) -> (String, String) {
        let index = self.if_counter;
        self.if_counter += 1;
        (format!("IF_FALSE{index}"), format!("IF_END{index}"))
    }

    /// Reset the label counters. Called at the start of every subroutine,
    /// together with the subroutine symbol scope.
    pub fn reset_labels(&mut self) {
        self.while_counter = 0;
        self.if_counter = 0;
    }

    // ==========================================================================
    // Placement
    // ==========================================================================

    /// Current position in the output, for later [`insert_at`](Self::insert_at).
    pub fn mark(&self) -> usize {
        self.instructions.len()
    }

    /// Insert instructions at a previously taken mark.
    ///
    /// Used to place a subroutine's `function` header (whose local count is
    /// only known after its body compiles) ahead of the already-emitted body.
    /// Emitted instructions are never modified, only positioned.
    pub fn insert_at(&mut self, mark: usize, instructions: Vec<Instruction>) {
        self.instructions.splice(mark..mark, instructions);
    }

    /// Whether the last emitted instruction is a `return`.
    pub fn last_is_return(&self) -> bool {
        matches!(self.instructions.last(), Some(Instruction::Return))
    }

    /// Consume the emitter, yielding the final instruction sequence.
    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

//! The virtual machine's instruction vocabulary.
//!
//! [`Instruction`] models every line the compiler may emit; its `Display`
//! impl renders the exact textual form the downstream VM translator consumes.

use std::fmt;

/// A named VM memory region addressed by push/pop instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Constant,
    Argument,
    Local,
    Static,
    This,
    That,
    Pointer,
    Temp,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Constant => "constant",
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
        };
        f.write_str(name)
    }
}

/// One of the VM's fixed arithmetic/logic mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Add => "add",
            Command::Sub => "sub",
            Command::Neg => "neg",
            Command::Eq => "eq",
            Command::Gt => "gt",
            Command::Lt => "lt",
            Command::And => "and",
            Command::Or => "or",
            Command::Not => "not",
        };
        f.write_str(name)
    }
}

/// A single VM instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `function <name> <locals>` - a subroutine entry point declaring how
    /// many local slots to zero.
    Function { name: String, locals: u16 },
    /// `call <name> <args>` - invoke a subroutine with `args` values already
    /// pushed.
    Call { name: String, args: u16 },
    /// `push <segment> <index>`
    Push { segment: Segment, index: u16 },
    /// `pop <segment> <index>`
    Pop { segment: Segment, index: u16 },
    /// `label <name>`
    Label(String),
    /// `goto <name>`
    Goto(String),
    /// `if-goto <name>` - jump when the popped value is non-zero.
    IfGoto(String),
    /// An arithmetic/logic command operating on the stack top.
    Arithmetic(Command),
    /// `return`
    Return,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Function { name, locals } => write!(f, "function {name} {locals}"),
            Instruction::Call { name, args } => write!(f, "call {name} {args}"),
            Instruction::Push { segment, index } => write!(f, "push {segment} {index}"),
            Instruction::Pop { segment, index } => write!(f, "pop {segment} {index}"),
            Instruction::Label(name) => write!(f, "label {name}"),
            Instruction::Goto(name) => write!(f, "goto {name}"),
            Instruction::IfGoto(name) => write!(f, "if-goto {name}"),
            Instruction::Arithmetic(command) => write!(f, "{command}"),
            Instruction::Return => f.write_str("return"),
        }
    }
}

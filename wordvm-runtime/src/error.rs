//! Runtime fault types
//!
//! Every fault halts the machine and is reported to whoever invoked `run`;
//! nothing is silently swallowed, including unknown opcodes.

use thiserror::Error;
use wordvm_spec::Word;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown opcode {opcode} at PC {pc}")]
    UnknownOpcode { opcode: u32, pc: Word },

    #[error("undecodable instruction word {word:#010x} at PC {pc}")]
    InvalidInstruction { word: u32, pc: Word },

    #[error("division by zero at PC {pc}")]
    DivisionByZero { pc: Word },

    #[error("memory access out of bounds: address {address}")]
    OutOfBounds { address: Word },

    #[error("program of {words} words does not fit in memory")]
    ProgramTooLarge { words: usize },

    #[error("input exhausted at PC {pc}")]
    InputExhausted { pc: Word },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

//! Assembler errors

use thiserror::Error;
use wordvm_spec::SpecError;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("line {line}: unrecognized token: {text}")]
    InvalidToken { line: usize, text: String },

    #[error("line {line}: unknown mnemonic: {mnemonic}")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: {mnemonic} takes {expected} operand(s), found {found}")]
    WrongOperandCount {
        line: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected a register, found {found}")]
    ExpectedRegister { line: usize, found: String },

    #[error("line {line}: expected a decimal literal, found {found}")]
    ExpectedLiteral { line: usize, found: String },

    #[error("line {line}: register index {index} out of range (valid range: 0-31)")]
    RegisterOutOfRange { line: usize, index: u32 },

    #[error("line {line}: {source}")]
    Encode { line: usize, source: SpecError },
}

pub type Result<T> = std::result::Result<T, AssembleError>;

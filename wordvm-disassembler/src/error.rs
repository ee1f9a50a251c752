//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("unknown opcode: {0} (assigned range: 1-18)")]
    UnknownOpcode(u32),

    #[error("invalid instruction encoding: {0:#010x}")]
    InvalidEncoding(u32),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;

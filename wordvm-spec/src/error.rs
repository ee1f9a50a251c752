//! # Error Types for the wordvm Specification

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid opcode: {0} (assigned range: 1-18)")]
    InvalidOpcode(u32),

    #[error("invalid register index: {0} (valid range: 0-31)")]
    InvalidRegister(u32),

    #[error("immediate value {value} does not fit in 22 bits")]
    ImmediateOutOfRange { value: u32 },

    #[error("shift amount {value} exceeds 31")]
    ShiftOutOfRange { value: u32 },
}

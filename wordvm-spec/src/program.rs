//! # Program Representation
//!
//! A program is an ordered sequence of 32-bit instruction words, one per
//! source instruction, loaded into memory starting at address 0.

use serde::{Deserialize, Serialize};

/// An assembled wordvm program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instruction words in source order; index 0 runs at PC 0
    pub code: Vec<u32>,
}

impl Program {
    pub fn new(code: Vec<u32>) -> Self {
        Program { code }
    }

    /// Number of instruction words
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn words(&self) -> &[u32] {
        &self.code
    }
}

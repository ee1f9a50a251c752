//! Instruction execution
//!
//! Exhaustive dispatch over the instruction set. Numeric policy: add, sub,
//! and mul wrap in two's complement; div and mod fault on a zero divisor and
//! otherwise wrap (so `i32::MIN / -1` is defined); shift amounts are masked
//! to the low 5 bits.

use crate::error::{Result, RuntimeError};
use crate::io::{InputPort, OutputPort};
use crate::memory::Memory;
use crate::state::CpuState;
use wordvm_spec::{Instruction, Word};

/// Execute a single instruction, updating registers, memory, and the PC.
pub fn execute<I: InputPort, O: OutputPort>(
    instr: &Instruction,
    state: &mut CpuState,
    memory: &mut Memory,
    input: &mut I,
    output: &mut O,
) -> Result<()> {
    match *instr {
        // ========== Arithmetic ==========
        Instruction::Add { x, y, z } => {
            let value = state.read_reg(y).wrapping_add(state.read_reg(z));
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Sub { x, y, z } => {
            let value = state.read_reg(y).wrapping_sub(state.read_reg(z));
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Mul { x, y, z } => {
            let value = state.read_reg(y).wrapping_mul(state.read_reg(z));
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Div { x, y, z } => {
            let divisor = state.read_reg(z);
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero { pc: state.pc });
            }
            let value = state.read_reg(y).wrapping_div(divisor);
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Mod { x, y, z } => {
            let divisor = state.read_reg(z);
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero { pc: state.pc });
            }
            let value = state.read_reg(y).wrapping_rem(divisor);
            state.write_reg(x, value);
            state.pc += 1;
        }

        // ========== Bitwise and logical ==========
        Instruction::And { x, y, z } => {
            let value = state.read_reg(y) & state.read_reg(z);
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Or { x, y, z } => {
            let value = state.read_reg(y) | state.read_reg(z);
            state.write_reg(x, value);
            state.pc += 1;
        }

        // Logical negation, 0 or 1; this machine's `not` is not a bitwise
        // complement.
        Instruction::Not { x, y } => {
            let value = if state.read_reg(y) == 0 { 1 } else { 0 };
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Sll { x, y, shamt } => {
            let value = state.read_reg(y).wrapping_shl(shamt as u32 & 0x1F);
            state.write_reg(x, value);
            state.pc += 1;
        }

        // ========== Constants ==========
        Instruction::Const { x, imm } => {
            state.write_reg(x, imm as Word);
            state.pc += 1;
        }

        // ========== Memory (register indirect) ==========
        Instruction::Load { x, y } => {
            let value = memory.read(state.read_reg(y))?;
            state.write_reg(x, value);
            state.pc += 1;
        }

        Instruction::Store { x, y } => {
            memory.write(state.read_reg(y), state.read_reg(x))?;
            state.pc += 1;
        }

        // ========== Control flow ==========
        Instruction::Goto { x } => {
            state.pc = state.read_reg(x);
        }

        Instruction::Ifeq { x, y, z } => {
            state.pc = if state.read_reg(y) == state.read_reg(z) {
                state.read_reg(x)
            } else {
                state.pc + 1
            };
        }

        Instruction::Iflt { x, y, z } => {
            state.pc = if state.read_reg(y) < state.read_reg(z) {
                state.read_reg(x)
            } else {
                state.pc + 1
            };
        }

        Instruction::Halt => {
            state.halt();
        }

        // ========== I/O ==========
        Instruction::In { x } => match input.read_value()? {
            Some(value) => {
                state.write_reg(x, value);
                state.pc += 1;
            }
            None => return Err(RuntimeError::InputExhausted { pc: state.pc }),
        },

        Instruction::Out { x } => {
            output.write_byte((state.read_reg(x) & 0xFF) as u8)?;
            state.pc += 1;
        }
    }

    Ok(())
}

//! The wordvm virtual machine
//!
//! Owns the register file, memory, and program counter for its whole
//! lifetime, and drives the fetch-decode-dispatch loop until the PC goes
//! negative or a fault is raised.

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::{InputPort, OutputPort, StdInput, StdOutput};
use crate::memory::Memory;
use crate::state::CpuState;
use wordvm_spec::{Instruction, Program, UWord, Word};

/// VM configuration
#[derive(Debug, Clone)]
pub struct VmConfig {
    /// Maximum number of instructions to execute before giving up
    pub max_cycles: u64,

    /// Emit a debug event per executed instruction
    pub trace: bool,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_cycles: 1_000_000,
            trace: false,
        }
    }
}

/// Why the machine stopped without a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The PC went negative: a `halt` instruction or a jump below zero
    Halt,
    /// The configured cycle budget ran out
    CycleLimit,
}

/// Outcome of a completed (non-faulting) run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub cycles: u64,

    /// Reason for stopping
    pub halt_reason: HaltReason,
}

/// The wordvm execution engine
pub struct Vm<I = StdInput, O = StdOutput> {
    state: CpuState,
    memory: Memory,
    input: I,
    output: O,
    config: VmConfig,
}

impl Vm {
    /// Create a VM wired to stdin/stdout with the program loaded at address 0.
    pub fn new(program: &Program, config: VmConfig) -> Result<Self> {
        Self::with_io(program, config, StdInput::new(), StdOutput::new())
    }
}

impl<I: InputPort, O: OutputPort> Vm<I, O> {
    /// Create a VM with injected I/O ports.
    pub fn with_io(program: &Program, config: VmConfig, input: I, output: O) -> Result<Self> {
        let mut memory = Memory::new();
        memory.load_program(program)?;
        Ok(Vm {
            state: CpuState::new(),
            memory,
            input,
            output,
            config,
        })
    }

    /// Run until the machine halts, the cycle budget runs out, or a fault
    /// is raised. A fault forces the halted state before it propagates.
    pub fn run(&mut self) -> Result<ExecutionResult> {
        while !self.state.is_halted() {
            if self.state.cycles >= self.config.max_cycles {
                tracing::debug!(cycles = self.state.cycles, "cycle limit reached");
                return Ok(ExecutionResult {
                    cycles: self.state.cycles,
                    halt_reason: HaltReason::CycleLimit,
                });
            }

            if let Err(fault) = self.step() {
                self.state.halt();
                tracing::debug!(%fault, "execution fault");
                return Err(fault);
            }

            self.state.cycles += 1;
        }

        tracing::debug!(cycles = self.state.cycles, "halted");
        Ok(ExecutionResult {
            cycles: self.state.cycles,
            halt_reason: HaltReason::Halt,
        })
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.state.pc;
        let (instr, _word) = self.fetch_and_decode(pc)?;

        if self.config.trace {
            tracing::debug!(cycle = self.state.cycles, pc, ?instr, "executing");
        }

        execute(
            &instr,
            &mut self.state,
            &mut self.memory,
            &mut self.input,
            &mut self.output,
        )
    }

    /// Fetch the word at `pc` and decode it.
    /// Returns (instruction, encoded word).
    fn fetch_and_decode(&self, pc: Word) -> Result<(Instruction, UWord)> {
        let word = self.memory.read(pc)? as UWord;

        let instr = wordvm_disassembler::decode(word).map_err(|err| match err {
            wordvm_disassembler::DisassemblerError::UnknownOpcode(opcode) => {
                RuntimeError::UnknownOpcode { opcode, pc }
            }
            wordvm_disassembler::DisassemblerError::InvalidEncoding(_) => {
                RuntimeError::InvalidInstruction { word, pc }
            }
        })?;

        Ok((instr, word))
    }

    /// Current CPU state (for inspection)
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Memory contents (for inspection)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The output port, e.g. to read back captured bytes in tests
    pub fn output(&self) -> &O {
        &self.output
    }
}

//! # wordvm Runtime
//!
//! Execute wordvm programs: a 32-register file, a flat word-addressed memory
//! of 65536 cells, and a program counter driving a fetch-decode-dispatch
//! loop. The machine stops when the PC goes negative; faults (unknown
//! opcode, division by zero, out-of-bounds access, exhausted input) halt it
//! and surface as errors.
//!
//! ## Example
//!
//! ```rust
//! use wordvm_runtime::{BufferedInput, CapturedOutput, Vm, VmConfig};
//! use wordvm_assembler::assemble;
//!
//! let program = assemble("const R1 65\nout R1\nhalt").unwrap();
//! let mut vm = Vm::with_io(
//!     &program,
//!     VmConfig::default(),
//!     BufferedInput::default(),
//!     CapturedOutput::new(),
//! )
//! .unwrap();
//! vm.run().unwrap();
//! assert_eq!(vm.output().bytes(), b"A");
//! ```

pub mod error;
pub mod execute;
pub mod io;
pub mod memory;
pub mod state;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use io::{BufferedInput, CapturedOutput, InputPort, OutputPort, StdInput, StdOutput};
pub use memory::Memory;
pub use state::{CpuState, HALT_PC};
pub use vm::{ExecutionResult, HaltReason, Vm, VmConfig};

//! wordvm command-line runner
//!
//! Assembles a source file, loads it at address 0, and executes it with
//! stdin/stdout wired to the `in`/`out` instructions.
//!
//! Exit codes: 0 on a normal halt, 2 when the file cannot be read or
//! assembled, 1 on a runtime fault or an exhausted cycle budget.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordvm_assembler::assemble;
use wordvm_runtime::{HaltReason, Vm, VmConfig};
use wordvm_spec::Program;

#[derive(Parser)]
#[command(name = "wordvm", version, about = "Assemble and run a wordvm program")]
struct Cli {
    /// Assembly source file to execute
    #[arg(default_value = "sum10.asm")]
    source: PathBuf,

    /// Stop after this many instructions (0 = run until halt)
    #[arg(long, default_value_t = 0)]
    max_cycles: u64,

    /// Log every executed instruction (at debug level)
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let program = match load(&cli.source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("wordvm: {err:#}");
            return ExitCode::from(2);
        }
    };

    let config = VmConfig {
        max_cycles: if cli.max_cycles == 0 {
            u64::MAX
        } else {
            cli.max_cycles
        },
        trace: cli.trace,
    };

    let mut vm = match Vm::new(&program, config) {
        Ok(vm) => vm,
        Err(err) => {
            eprintln!("wordvm: {err}");
            return ExitCode::from(2);
        }
    };

    match vm.run() {
        Ok(result) => match result.halt_reason {
            HaltReason::Halt => ExitCode::SUCCESS,
            HaltReason::CycleLimit => {
                eprintln!(
                    "wordvm: stopped after {} instruction(s) without halting",
                    result.cycles
                );
                ExitCode::FAILURE
            }
        },
        Err(fault) => {
            eprintln!("wordvm: fault: {fault}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> anyhow::Result<Program> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let program = assemble(&source)?;
    tracing::debug!(
        words = program.len(),
        source = %path.display(),
        "program assembled"
    );
    Ok(program)
}

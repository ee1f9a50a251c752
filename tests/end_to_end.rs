//! End-to-end tests for the wordvm toolchain
//!
//! Each test assembles mnemonic source, runs it in the VM, and checks the
//! observable machine state: registers, memory, output bytes, and the PC.

use wordvm_assembler::assemble;
use wordvm_runtime::{
    BufferedInput, CapturedOutput, HaltReason, RuntimeError, Vm, VmConfig,
};
use wordvm_spec::{Register, Word};

fn run(source: &str, inputs: Vec<Word>) -> (Vm<BufferedInput, CapturedOutput>, HaltReason) {
    let program = assemble(source).expect("assembly failed");
    let mut vm = Vm::with_io(
        &program,
        VmConfig::default(),
        BufferedInput::new(inputs),
        CapturedOutput::new(),
    )
    .expect("load failed");
    let result = vm.run().expect("execution faulted");
    (vm, result.halt_reason)
}

// ============================================================================
// Assemble -> Execute
// ============================================================================

#[test]
fn test_const_add_halt() {
    let (vm, reason) = run("const R1 5\nconst R2 3\nadd R3 R1 R2\nhalt", vec![]);
    assert_eq!(reason, HaltReason::Halt);
    assert_eq!(vm.state().read_reg(Register::R3), 8);
    assert_eq!(vm.state().pc, -1);
}

#[test]
fn test_comments_and_separators() {
    let source = r#"
        // accumulate with mixed separators
        const R1, 20
        const R2 22
        add R3,R1 R2    // trailing comment
        out R3
        halt
    "#;
    let (vm, _) = run(source, vec![]);
    assert_eq!(vm.output().bytes(), &[42]);
}

#[test]
fn test_sum_loop_program() {
    // The CLI's default program: sum 1..=10 and emit the byte 55
    let source = r#"
        const R1 0      // running sum
        const R2 1      // loop counter
        const R3 11     // stop value
        const R4 1      // increment
        const R5 10     // address past the loop
        const R7 6      // loop head

        ifeq R5 R2 R3
        add R1 R1 R2
        add R2 R2 R4
        goto R7

        out R1
        halt
    "#;
    let (vm, reason) = run(source, vec![]);
    assert_eq!(reason, HaltReason::Halt);
    assert_eq!(vm.state().read_reg(Register::R1), 55);
    assert_eq!(vm.output().bytes(), &[55]);
}

#[test]
fn test_in_out_echo() {
    let (vm, _) = run("in R1\nout R1\nin R2\nout R2\nhalt", vec![72, 105]);
    assert_eq!(vm.output().bytes(), b"Hi");
}

#[test]
fn test_branch_both_ways() {
    // iflt not taken: 9 < 3 is false, the marker write runs
    let source = r#"
        const R1 9
        const R2 3
        const R3 5
        iflt R3 R1 R2
        const R4 1
        halt
    "#;
    let (vm, _) = run(source, vec![]);
    assert_eq!(vm.state().read_reg(Register::R4), 1);

    // iflt taken: 3 < 9, the marker write is skipped
    let source = r#"
        const R1 3
        const R2 9
        const R3 5
        iflt R3 R1 R2
        const R4 1
        halt
    "#;
    let (vm, _) = run(source, vec![]);
    assert_eq!(vm.state().read_reg(Register::R4), 0);
}

#[test]
fn test_von_neumann_store_then_execute() {
    // Write a halt word past the program, then jump onto it
    let source = r#"
        const R1 16
        sll R1 R1 27    // halt word
        const R2 40
        store R1 R2
        goto R2
    "#;
    let (vm, reason) = run(source, vec![]);
    assert_eq!(reason, HaltReason::Halt);
    assert_eq!(vm.memory().words()[40] as u32, 16u32 << 27);
}

// ============================================================================
// Faults surface to the caller
// ============================================================================

#[test]
fn test_division_by_zero_fault() {
    let program = assemble("const R1 1\nconst R2 0\ndiv R3 R1 R2\nhalt").unwrap();
    let mut vm = Vm::with_io(
        &program,
        VmConfig::default(),
        BufferedInput::default(),
        CapturedOutput::new(),
    )
    .unwrap();

    let err = vm.run().unwrap_err();
    assert!(matches!(err, RuntimeError::DivisionByZero { pc: 2 }));
    assert!(vm.state().is_halted());
}

#[test]
fn test_unknown_opcode_fault_is_reported() {
    // Hand-built word with the unassigned opcode 31
    let program = wordvm_spec::Program::new(vec![31 << 27]);
    let mut vm = Vm::with_io(
        &program,
        VmConfig::default(),
        BufferedInput::default(),
        CapturedOutput::new(),
    )
    .unwrap();

    let err = vm.run().unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::UnknownOpcode { opcode: 31, pc: 0 }
    ));
}

#[test]
fn test_wild_load_address_fault() {
    let program = assemble("const R1 65535\nadd R1 R1 R1\nload R2 R1\nhalt").unwrap();
    let mut vm = Vm::with_io(
        &program,
        VmConfig::default(),
        BufferedInput::default(),
        CapturedOutput::new(),
    )
    .unwrap();

    let err = vm.run().unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::OutOfBounds { address: 131070 }
    ));
}

// ============================================================================
// Assembly failures abort before execution
// ============================================================================

#[test]
fn test_unknown_mnemonic_aborts_assembly() {
    assert!(assemble("const R1 1\njump R1\nhalt").is_err());
}

#[test]
fn test_malformed_register_aborts_assembly() {
    assert!(assemble("goto R").is_err());
    assert!(assemble("goto R32").is_err());
}

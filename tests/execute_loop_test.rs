//! Tests for the fetch-execute loop: `step`, `run` and `run_for_cycles`.
//!
//! Covers stop conditions, budgets, fault reporting and the guarantee that a
//! failed instruction leaves no trace.

use mos6502::{
    CpuConfig, ExecutionError, FlatMemory, MemoryBus, Mnemonic, RunLimit, RunSummary,
    StopReason, CPU,
};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x0600,
            ..CpuConfig::default()
        },
    )
}

/// JSR $0609 / JSR $060C / JSR $0612 / BRK with three small subroutines.
const SUBROUTINES: [u8; 19] = [
    0x20, 0x09, 0x06, 0x20, 0x0C, 0x06, 0x20, 0x12, 0x06, 0xA2, 0x00, 0x60, 0xE8, 0xE0, 0x05,
    0xD0, 0xFB, 0x60, 0x00,
];

// ========== Stop Conditions ==========

#[test]
fn test_run_stops_after_brk() {
    let mut cpu = setup_cpu();

    // LDA #$01; ADC #$02; BRK
    cpu.memory_mut()
        .load(0x0600, &[0xA9, 0x01, 0x69, 0x02, 0x00])
        .unwrap();

    let summary = cpu.run(RunLimit::Unbounded).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            instructions: 3,
            cycles: 2 + 2 + 7,
            stop: StopReason::Break,
        }
    );
    assert_eq!(cpu.a(), 0x03);
    assert_eq!(cpu.pc(), 0x0605);
}

#[test]
fn test_subroutine_program() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0600, &SUBROUTINES).unwrap();

    let summary = cpu.run(RunLimit::Unbounded).unwrap();

    assert_eq!(summary.stop, StopReason::Break);
    assert_eq!(cpu.x(), 0x05);
    // The last JSR lands on BRK and never returns
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x0613);
    assert!(cpu.status().zero());
    assert!(cpu.status().carry());
}

#[test]
fn test_instruction_budget() {
    let mut cpu = setup_cpu();

    // BNE to itself: loops forever with Z clear
    cpu.memory_mut().load(0x0600, &[0xD0, 0xFE]).unwrap();

    let summary = cpu.run(RunLimit::Instructions(10)).unwrap();

    assert_eq!(summary.instructions, 10);
    assert_eq!(summary.cycles, 30);
    assert_eq!(summary.stop, StopReason::LimitReached);
    assert_eq!(cpu.pc(), 0x0600);
}

#[test]
fn test_zero_budget_executes_nothing() {
    let mut cpu = setup_cpu();

    let summary = cpu.run(RunLimit::Instructions(0)).unwrap();

    assert_eq!(summary.instructions, 0);
    assert_eq!(summary.stop, StopReason::LimitReached);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_cycle_budget_finishes_current_instruction() {
    let mut cpu = setup_cpu();

    // NOPs cost 2 each; a budget of 5 runs three of them
    cpu.memory_mut().load(0x0600, &[0xEA; 8]).unwrap();

    let consumed = cpu.run_for_cycles(5).unwrap();

    assert_eq!(consumed, 6);
    assert_eq!(cpu.pc(), 0x0603);
}

#[test]
fn test_cycle_budget_is_relative_to_start() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0600, &[0xEA; 8]).unwrap();

    cpu.run_for_cycles(4).unwrap();
    let summary = cpu.run(RunLimit::Cycles(4)).unwrap();

    assert_eq!(summary.instructions, 2);
    assert_eq!(summary.cycles, 4);
    assert_eq!(cpu.cycles(), 8);
}

// ========== Faults ==========

#[test]
fn test_illegal_opcode_changes_nothing() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0600, 0x02).unwrap();
    let before = cpu.registers();

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::IllegalOpcode {
            opcode: 0x02,
            address: 0x0600
        })
    );
    assert_eq!(cpu.registers(), before);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_run_reports_fault_after_progress() {
    let mut cpu = setup_cpu();

    // LDA #$07; .byte $FF
    cpu.memory_mut().load(0x0600, &[0xA9, 0x07, 0xFF]).unwrap();

    let err = cpu.run(RunLimit::Unbounded).unwrap_err();

    assert_eq!(
        err,
        ExecutionError::IllegalOpcode {
            opcode: 0xFF,
            address: 0x0602
        }
    );
    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.pc(), 0x0602);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_fetch_past_end_of_memory() {
    let mut cpu = CPU::with_config(
        FlatMemory::with_size(0x100),
        CpuConfig {
            pc: 0x0100,
            ..CpuConfig::default()
        },
    );

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::OutOfBoundsAccess {
            address: 0x0100,
            size: 0x100
        })
    );
}

#[test]
fn test_stack_outside_small_memory() {
    // 256 bytes of memory has no stack page
    let mut memory = FlatMemory::with_size(0x100);
    memory.write(0x0000, 0x48).unwrap();
    let mut cpu = CPU::new(memory);

    assert!(matches!(
        cpu.step(),
        Err(ExecutionError::OutOfBoundsAccess { address: 0x01FF, .. })
    ));
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_step_returns_mnemonic() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0600, &[0xE8, 0xEA]).unwrap();

    assert_eq!(cpu.step(), Ok(Mnemonic::INX));
    assert_eq!(cpu.step(), Ok(Mnemonic::NOP));
    assert_eq!(cpu.step(), Ok(Mnemonic::BRK));
}

#[test]
fn test_peek_instruction_has_no_side_effects() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0600, &[0xAD, 0x00, 0x20]).unwrap();

    let instruction = cpu.peek_instruction().unwrap();

    assert_eq!(instruction.mnemonic, Mnemonic::LDA);
    assert_eq!(instruction.address, 0x0600);
    assert_eq!(cpu.pc(), 0x0600);
    assert_eq!(cpu.cycles(), 0);
}

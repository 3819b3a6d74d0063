//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one instruction to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for testing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Memory size selector; small sizes exercise the bounds checks
    small_memory: bool,
}

fuzz_target!(|input: FuzzInput| {
    let size = if input.small_memory { 0x0800 } else { 0x10000 };
    let mut memory = FlatMemory::with_size(size);

    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x0400, &input.memory.main_memory);
    let _ = memory.load(0x0600, &input.memory.instruction_bytes);

    let state = &input.cpu_state;
    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            pc: 0x0600,
            status: state.status,
            a: state.a,
            x: state.x,
            y: state.y,
            sp: state.sp,
            verbose: false,
        },
    );
    let before = cpu.registers();
    let memory_before = cpu.memory().clone();

    match cpu.step() {
        Ok(_) => {
            // Every legal instruction costs at least two cycles
            assert!(cpu.cycles() >= 2);
        }
        Err(_) => {
            // A failed step commits nothing
            assert_eq!(cpu.registers(), before);
            assert_eq!(cpu.cycles(), 0);
            assert_eq!(cpu.memory(), &memory_before);
        }
    }

    // The unused status bit survives every instruction
    assert!(cpu.status().bits() & 0x20 != 0);
});

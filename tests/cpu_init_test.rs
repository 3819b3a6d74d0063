//! CPU construction, configuration and reset tests.

use mos6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, Registers, Status, CPU};

#[test]
fn test_default_state() {
    let cpu = CPU::new(FlatMemory::new());

    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.status(), Status::power_on());
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.registers(), Registers::default());
}

#[test]
fn test_with_config() {
    let config = CpuConfig {
        pc: 0xC000,
        status: 0x81,
        a: 1,
        x: 2,
        y: 3,
        sp: 0xFD,
        verbose: false,
    };
    let cpu = CPU::with_config(FlatMemory::new(), config);

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.status().bits(), 0xA1);
    assert_eq!((cpu.a(), cpu.x(), cpu.y(), cpu.sp()), (1, 2, 3, 0xFD));
}

#[test]
fn test_config_snapshot_round_trips() {
    let mut cpu = CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x0600,
            ..CpuConfig::default()
        },
    );
    cpu.memory_mut().load(0x0600, &[0xA2, 0x09]).unwrap();
    cpu.step().unwrap();

    let config = cpu.config();
    assert_eq!(config.pc, 0x0602);
    assert_eq!(config.x, 0x09);

    let other = CPU::with_config(FlatMemory::new(), config);
    assert_eq!(other.registers(), cpu.registers());
}

#[test]
fn test_configure_keeps_memory_and_clock() {
    let mut cpu = CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x0600,
            ..CpuConfig::default()
        },
    );
    cpu.memory_mut().load(0x0600, &[0xA9, 0x05, 0x85, 0x10]).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();

    cpu.configure(CpuConfig::default());

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.cycles(), 5);
    assert_eq!(cpu.memory().read(0x0010), Ok(0x05));
}

#[test]
fn test_reset_reads_vector() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x34, 0x12]).unwrap();
    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            a: 0x55,
            ..CpuConfig::default()
        },
    );

    cpu.reset().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_reset_without_vector_memory() {
    let mut cpu = CPU::new(FlatMemory::with_size(0x800));

    assert_eq!(
        cpu.reset(),
        Err(ExecutionError::OutOfBoundsAccess {
            address: 0xFFFC,
            size: 0x800
        })
    );
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_into_memory() {
    let mut cpu = CPU::with_config(
        FlatMemory::with_size(0x800),
        CpuConfig {
            pc: 0x0600,
            a: 0x2A,
            ..CpuConfig::default()
        },
    );
    cpu.memory_mut().load(0x0600, &[0x8D, 0x00, 0x02]).unwrap();
    cpu.step().unwrap();

    let memory = cpu.into_memory();
    assert_eq!(memory.read(0x0200), Ok(0x2A));
}

#[test]
fn test_trace_line() {
    let cpu = CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x0600,
            a: 0xAB,
            ..CpuConfig::default()
        },
    );

    assert_eq!(
        cpu.trace_line(),
        "A:ab X:00 Y:00 PC:0600 SP:ff SV-BDIZC:00100000 Clk:0"
    );
}

//! Tests for LDA/LDX/LDY and STA/STX/STY across their addressing modes.

use mos6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x8000,
            ..CpuConfig::default()
        },
    )
}

// ========== Loads ==========

#[test]
fn test_lda_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.status().zero());
    assert!(!cpu.status().sign());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xA9, 0x00, 0xA9, 0x80]).unwrap();

    cpu.step().unwrap();
    assert!(cpu.status().zero());
    assert!(!cpu.status().sign());

    cpu.step().unwrap();
    assert!(!cpu.status().zero());
    assert!(cpu.status().sign());
}

#[test]
fn test_lda_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xBD, 0x00, 0x20]).unwrap();
    cpu.memory_mut().write(0x2010, 0x77).unwrap();
    cpu.set_x(0x10);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_index_wraps_address_space() {
    let mut cpu = setup_cpu();

    // $FFFF + Y(2) = $0001
    cpu.memory_mut().load(0x8000, &[0xB9, 0xFF, 0xFF]).unwrap();
    cpu.memory_mut().write(0x0001, 0x5A).unwrap();
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xB6, 0xFF]).unwrap();
    cpu.memory_mut().write(0x0001, 0x33).unwrap();
    cpu.set_y(0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x33);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_immediate() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0xA0, 0xF0]).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0xF0);
    assert!(cpu.status().sign());
}

// ========== Stores ==========

#[test]
fn test_sta_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x8D, 0x00, 0x02]).unwrap();
    cpu.set_a(0x99);
    let status = cpu.status();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0200), Ok(0x99));
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x91, 0x10]).unwrap();
    cpu.memory_mut().load(0x0010, &[0xF0, 0x20]).unwrap();
    cpu.set_y(0x20);
    cpu.set_a(0xAB);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2110), Ok(0xAB));
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x96, 0x10]).unwrap();
    cpu.set_x(0x44);
    cpu.set_y(0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0015), Ok(0x44));
}

#[test]
fn test_sty_zero_page_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x94, 0x80]).unwrap();
    cpu.set_y(0x12);
    cpu.set_x(0x90);

    cpu.step().unwrap();

    // $80 + $90 wraps to $10 in page zero
    assert_eq!(cpu.memory().read(0x0010), Ok(0x12));
    assert_eq!(cpu.memory().read(0x0110), Ok(0x00));
}

#[test]
fn test_store_outside_small_memory_fails_cleanly() {
    let mut memory = FlatMemory::with_size(0x800);
    memory.load(0x0600, &[0x8D, 0x00, 0x09]).unwrap();
    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            pc: 0x0600,
            a: 0x01,
            ..CpuConfig::default()
        },
    );

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::OutOfBoundsAccess {
            address: 0x0900,
            size: 0x800
        })
    );
    assert_eq!(cpu.pc(), 0x0600);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_load_outside_small_memory_fails_cleanly() {
    let mut memory = FlatMemory::with_size(0x800);
    memory.load(0x0600, &[0xAD, 0x00, 0x10]).unwrap();
    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            pc: 0x0600,
            ..CpuConfig::default()
        },
    );

    assert!(matches!(
        cpu.step(),
        Err(ExecutionError::OutOfBoundsAccess { address: 0x1000, .. })
    ));
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.pc(), 0x0600);
}

//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x8000,
            ..CpuConfig::default()
        },
    )
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x0A).unwrap();
    cpu.set_a(0x81);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.status().carry());
    assert!(!cpu.status().zero());
    assert!(!cpu.status().sign());
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x06, 0x10]).unwrap();
    cpu.memory_mut().write(0x0010, 0x40).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0010), Ok(0x80));
    assert!(cpu.status().sign());
    assert!(!cpu.status().carry());
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_asl_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x1E, 0x00, 0x20]).unwrap();
    cpu.memory_mut().write(0x2003, 0x80).unwrap();
    cpu.set_x(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2003), Ok(0x00));
    assert!(cpu.status().carry());
    assert!(cpu.status().zero());
    assert_eq!(cpu.cycles(), 7);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x4A).unwrap();
    cpu.set_a(0x03);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.status().carry());
    assert!(!cpu.status().sign());
}

#[test]
fn test_lsr_to_zero() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x4E, 0x00, 0x30]).unwrap();
    cpu.memory_mut().write(0x3000, 0x01).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x3000), Ok(0x00));
    assert!(cpu.status().carry());
    assert!(cpu.status().zero());
    assert_eq!(cpu.cycles(), 6);
}

// ========== ROL ==========

#[test]
fn test_rol_accumulator_with_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x2A).unwrap();
    cpu.set_a(0x80);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.status().carry());
    assert!(!cpu.status().zero());
}

#[test]
fn test_rol_zero_page_x() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x36, 0x10]).unwrap();
    cpu.memory_mut().write(0x0011, 0x40).unwrap();
    cpu.set_x(0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0011), Ok(0x80));
    assert!(!cpu.status().carry());
    assert!(cpu.status().sign());
    assert_eq!(cpu.cycles(), 6);
}

// ========== ROR ==========

#[test]
fn test_ror_accumulator_with_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0x6A).unwrap();
    cpu.set_a(0x01);
    cpu.status_mut().set_carry(true);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.status().carry());
    assert!(cpu.status().sign());
}

#[test]
fn test_ror_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x66, 0x20]).unwrap();
    cpu.memory_mut().write(0x0020, 0x02).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0020), Ok(0x01));
    assert!(!cpu.status().carry());
    assert!(!cpu.status().zero());
    assert_eq!(cpu.cycles(), 5);
}

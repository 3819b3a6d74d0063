//! Property-based tests for addressing mode calculations.
//!
//! These tests verify that effective addresses wrap the way the hardware
//! does: zero-page indexing stays in page zero, absolute indexing wraps the
//! 16-bit space, and zero-page pointers wrap their high byte fetch.

use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::with_config(
        FlatMemory::new(),
        CpuConfig {
            pc: 0x8000,
            ..CpuConfig::default()
        },
    )
}

// ========== Zero Page Addressing Tests ==========

proptest! {
    /// Property: Zero page addressing reads from address 0x00XX
    #[test]
    fn prop_zero_page_address_calculation(zp_addr in 0u8..=255u8, value in 0u8..=255u8) {
        let mut cpu = setup_cpu();

        cpu.memory_mut().write(zp_addr as u16, value).unwrap();
        cpu.memory_mut().load(0x8000, &[0xA5, zp_addr]).unwrap();

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.a(),
            value,
            "LDA ${:02X} should load value 0x{:02X}",
            zp_addr,
            value
        );
    }

    /// Property: Zero page,X addressing wraps within zero page (stays in 0x00-0xFF)
    #[test]
    fn prop_zero_page_x_wraps_in_zero_page(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        value in 1u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let effective = base.wrapping_add(x) as u16;

        cpu.memory_mut().write(effective, value).unwrap();
        cpu.memory_mut().load(0x8000, &[0xB5, base]).unwrap();
        cpu.set_x(x);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: STX $zp,Y never writes outside page zero
    #[test]
    fn prop_zero_page_y_store_stays_in_page_zero(
        base in 0u8..=255u8,
        y in 0u8..=255u8,
        value in 1u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x96, base]).unwrap();
        cpu.set_y(y);
        cpu.set_x(value);

        cpu.step().unwrap();

        let effective = base.wrapping_add(y) as u16;
        prop_assert_eq!(cpu.memory().read(effective), Ok(value));
        prop_assert_eq!(cpu.memory().read(0x0100 + effective), Ok(0x00));
    }
}

// ========== Absolute Indexed Tests ==========

proptest! {
    /// Property: absolute,X wraps around the 16-bit address space
    #[test]
    fn prop_absolute_x_wraps_address_space(
        base in 0x9000u16..=0xFFFFu16,
        x in 0u8..=255u8,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let effective = base.wrapping_add(x as u16);

        cpu.memory_mut().write(effective, value).unwrap();
        let [lo, hi] = base.to_le_bytes();
        cpu.memory_mut().load(0x8000, &[0xBD, lo, hi]).unwrap();
        cpu.set_x(x);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.cycles(), 4);
    }
}

// ========== Indirect Tests ==========

proptest! {
    /// Property: (zp,X) forms its pointer from page zero, wrapping at $FF
    #[test]
    fn prop_indirect_x_pointer_wraps(
        base in 0u8..=255u8,
        x in 0u8..=255u8,
        target in 0x0200u16..0x7000u16,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let pointer = base.wrapping_add(x);
        let [lo, hi] = target.to_le_bytes();

        cpu.memory_mut().write(pointer as u16, lo).unwrap();
        cpu.memory_mut().write(pointer.wrapping_add(1) as u16, hi).unwrap();
        cpu.memory_mut().write(target, value).unwrap();
        cpu.memory_mut().load(0x8000, &[0xA1, base]).unwrap();
        cpu.set_x(x);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
    }

    /// Property: (zp),Y adds Y to the 16-bit pointer after the fetch
    #[test]
    fn prop_indirect_y_adds_after_fetch(
        zp in 0u8..=255u8,
        y in 0u8..=255u8,
        pointer in 0x0200u16..0x7000u16,
        value in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let [lo, hi] = pointer.to_le_bytes();

        cpu.memory_mut().write(zp as u16, lo).unwrap();
        cpu.memory_mut().write(zp.wrapping_add(1) as u16, hi).unwrap();
        let effective = pointer.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, value).unwrap();
        cpu.memory_mut().load(0x8000, &[0xB1, zp]).unwrap();
        cpu.set_y(y);

        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.cycles(), 5);
    }

    /// Property: JMP ($xxFF) takes its high byte from $xx00
    #[test]
    fn prop_jmp_indirect_page_quirk(page in 0x10u8..=0x7Fu8, lo in 0u8..=255u8, hi in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        let pointer = u16::from_le_bytes([0xFF, page]);

        cpu.memory_mut().write(pointer, lo).unwrap();
        cpu.memory_mut().write(u16::from_le_bytes([0x00, page]), hi).unwrap();
        cpu.memory_mut().write(pointer.wrapping_add(1), hi.wrapping_add(1)).unwrap();
        cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, page]).unwrap();

        cpu.step().unwrap();

        prop_assert_eq!(cpu.pc(), u16::from_le_bytes([lo, hi]));
    }
}

// ========== Relative Tests ==========

proptest! {
    /// Property: a taken branch lands at PC + 2 + signed offset
    #[test]
    fn prop_relative_target(offset in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xD0, offset]).unwrap();

        cpu.step().unwrap();

        let expected = 0x8002u16.wrapping_add(offset as i8 as u16);
        prop_assert_eq!(cpu.pc(), expected);
        prop_assert_eq!(cpu.cycles(), 3);
    }
}

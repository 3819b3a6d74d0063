//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Addressing Mode: Implied
/// Opcode: 0x18
/// Bytes: 1
/// Cycles: 2
///
/// Flags affected:
/// - C: Set to 0
/// - All other flags: Unchanged
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0x18).unwrap(); // CLC
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, status: 0x21, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert!(!cpu.status().carry());
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.cycles(), 2);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_carry(false);
    Ok(())
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_carry(true);
    Ok(())
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_interrupt_disable(false);
    Ok(())
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_interrupt_disable(true);
    Ok(())
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_decimal(false);
    Ok(())
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Only the flag is stored; ADC and SBC stay binary.
pub(crate) fn execute_sed<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_decimal(true);
    Ok(())
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_overflow(false);
    Ok(())
}

//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and comparison operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - ORA: Logical Inclusive OR
//! - EOR: Exclusive OR
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Compare a register with memory
//!
//! Arithmetic is binary only; the decimal flag is stored but ignored.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags affected:
/// - C: Set if the 9-bit sum exceeds 0xFF
/// - Z: Set if the low 8 bits are zero
/// - S: Bit 7 of the result
/// - V: Set if both inputs share a sign the result does not
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0x69, 0x01]).unwrap(); // ADC #$01
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, a: 0x7F, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.status().overflow());
/// assert!(cpu.status().sign());
/// assert!(!cpu.status().carry());
/// ```
pub(crate) fn execute_adc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    add_with_carry(exec, value);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C), which is A + !M + C. Carry ends up set when
/// no borrow occurred. Flags follow ADC with the inverted operand.
pub(crate) fn execute_sbc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    add_with_carry(exec, !value);
    Ok(())
}

fn add_with_carry<M: MemoryBus>(exec: &mut Execution<'_, M>, value: u8) {
    let a = exec.regs.a;
    let carry_in = exec.regs.status.carry() as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    let status = &mut exec.regs.status;
    status.set_carry(sum > 0xFF);
    status.set_overflow((a ^ result) & (value ^ result) & 0x80 != 0);
    status.update_zero_sign(result);

    exec.regs.a = result;
}

/// Executes the AND (Logical AND) instruction.
///
/// A = A & M. Updates Z and S.
pub(crate) fn execute_and<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let result = exec.regs.a & value;
    exec.regs.status.update_zero_sign(result);
    exec.regs.a = result;
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let result = exec.regs.a | value;
    exec.regs.status.update_zero_sign(result);
    exec.regs.a = result;
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let result = exec.regs.a ^ value;
    exec.regs.status.update_zero_sign(result);
    exec.regs.a = result;
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests bits in memory against the accumulator without changing it.
///
/// Flags affected:
/// - Z: Set if A & M is zero
/// - S: Bit 7 of M
/// - V: Bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let a = exec.regs.a;
    let status = &mut exec.regs.status;
    status.set_zero(a & value == 0);
    status.set_sign(value & 0x80 != 0);
    status.set_overflow(value & 0x40 != 0);
    Ok(())
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let register = exec.regs.a;
    compare(exec, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let register = exec.regs.x;
    compare(exec, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let register = exec.regs.y;
    compare(exec, register, value);
    Ok(())
}

/// C = register >= M, Z = register == M, S = bit 7 of the difference.
fn compare<M: MemoryBus>(exec: &mut Execution<'_, M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    let status = &mut exec.regs.status;
    status.set_carry(register >= value);
    status.update_zero_sign(result);
}

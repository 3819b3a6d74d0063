//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on the accumulator (Accumulator mode) or on memory
//! (read-modify-write), and writes the result back where it came from.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Flags affected:
/// - C: Old bit 7
/// - Z: Set if the result is 0
/// - S: Bit 7 of the result
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0x0A).unwrap(); // ASL A
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, a: 0x81, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x02);
/// assert!(cpu.status().carry());
/// assert!(!cpu.status().sign());
/// assert!(!cpu.status().zero());
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let result = value << 1;
    finish_shift(exec, operand, result, value & 0x80 != 0)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to carry and bit 7 of the result is always 0.
pub(crate) fn execute_lsr<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let result = value >> 1;
    finish_shift(exec, operand, result, value & 0x01 != 0)
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let carry_in = exec.regs.status.carry() as u8;
    let result = (value << 1) | carry_in;
    finish_shift(exec, operand, result, value & 0x80 != 0)
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    let carry_in = exec.regs.status.carry() as u8;
    let result = (value >> 1) | (carry_in << 7);
    finish_shift(exec, operand, result, value & 0x01 != 0)
}

fn finish_shift<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
    result: u8,
    carry_out: bool,
) -> Result<(), ExecutionError> {
    exec.regs.status.set_carry(carry_out);
    exec.regs.status.update_zero_sign(result);
    exec.write_back(operand, result)
}

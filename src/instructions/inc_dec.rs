//! # Increment and Decrement Instructions
//!
//! - INC / DEC: Increment or decrement a memory location (read-modify-write)
//! - INX / INY: Increment X or Y
//! - DEX / DEY: Decrement X or Y
//!
//! All six wrap at the byte boundary and update Z and S from the result.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the INC (Increment Memory) instruction.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xE6, 0x10]).unwrap(); // INC $10
/// memory.write(0x0010, 0xFF).unwrap();
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x0010), Ok(0x00));
/// assert!(cpu.status().zero());
/// assert_eq!(cpu.cycles(), 5);
/// ```
pub(crate) fn execute_inc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let result = exec.operand_value(operand)?.wrapping_add(1);
    exec.regs.status.update_zero_sign(result);
    exec.write_back(operand, result)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let result = exec.operand_value(operand)?.wrapping_sub(1);
    exec.regs.status.update_zero_sign(result);
    exec.write_back(operand, result)
}

pub(crate) fn execute_inx<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.x = exec.regs.x.wrapping_add(1);
    exec.regs.status.update_zero_sign(exec.regs.x);
    Ok(())
}

pub(crate) fn execute_iny<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.y = exec.regs.y.wrapping_add(1);
    exec.regs.status.update_zero_sign(exec.regs.y);
    Ok(())
}

pub(crate) fn execute_dex<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.x = exec.regs.x.wrapping_sub(1);
    exec.regs.status.update_zero_sign(exec.regs.x);
    Ok(())
}

pub(crate) fn execute_dey<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.y = exec.regs.y.wrapping_sub(1);
    exec.regs.status.update_zero_sign(exec.regs.y);
    Ok(())
}

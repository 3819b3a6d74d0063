//! # Register Transfer Instructions
//!
//! - TAX, TAY: Transfer Accumulator to X / Y
//! - TXA, TYA: Transfer X / Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer updates Z and S from the copied value, except TXS.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0xAA).unwrap(); // TAX
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, a: 0x00, x: 0x55, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.x(), 0x00);
/// assert!(cpu.status().zero());
/// ```
pub(crate) fn execute_tax<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.x = exec.regs.a;
    exec.regs.status.update_zero_sign(exec.regs.x);
    Ok(())
}

pub(crate) fn execute_tay<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.y = exec.regs.a;
    exec.regs.status.update_zero_sign(exec.regs.y);
    Ok(())
}

pub(crate) fn execute_txa<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.a = exec.regs.x;
    exec.regs.status.update_zero_sign(exec.regs.a);
    Ok(())
}

pub(crate) fn execute_tya<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.a = exec.regs.y;
    exec.regs.status.update_zero_sign(exec.regs.a);
    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.x = exec.regs.sp;
    exec.regs.status.update_zero_sign(exec.regs.x);
    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    exec.regs.sp = exec.regs.x;
    Ok(())
}

//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP, and SP wraps
//! silently in both directions.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus, Status};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Stack operation:
/// 1. Write accumulator value to 0x0100 | SP
/// 2. Decrement SP (wraps from 0x00 to 0xFF)
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0x48).unwrap(); // PHA
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, a: 0x42, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x01FF), Ok(0x42));
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.regs.a;
    exec.push(value)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B and U set; the live register is unchanged.
pub(crate) fn execute_php<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.regs.status.to_pushed();
    exec.push(value)
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and S.
pub(crate) fn execute_pla<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.pull()?;
    exec.regs.a = value;
    exec.regs.status.update_zero_sign(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B is cleared and U forced on, whatever the pulled byte holds.
pub(crate) fn execute_plp<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.pull()?;
    exec.regs.status = Status::from_pulled(value);
    Ok(())
}

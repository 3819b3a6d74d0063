//! # Load and Store Instructions
//!
//! This module implements register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory (updates Z and S)
//! - STA, STX, STY: Store a register to memory (no flags)
//!
//! Stores are `Write` access: the resolver never reads the target first.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected:
/// - Z: Set if the loaded value is 0
/// - S: Bit 7 of the loaded value
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x80]).unwrap(); // LDA #$80
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.status().sign());
/// assert!(!cpu.status().zero());
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    exec.regs.a = value;
    exec.regs.status.update_zero_sign(value);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    exec.regs.x = value;
    exec.regs.status.update_zero_sign(value);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.operand_value(operand)?;
    exec.regs.y = value;
    exec.regs.status.update_zero_sign(value);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0x8D, 0x00, 0x02]).unwrap(); // STA $0200
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, a: 0x42, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0x0200), Ok(0x42));
/// assert_eq!(cpu.cycles(), 4);
/// ```
pub(crate) fn execute_sta<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.regs.a;
    exec.write_back(operand, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.regs.x;
    exec.write_back(operand, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let value = exec.regs.y;
    exec.write_back(operand, value)
}

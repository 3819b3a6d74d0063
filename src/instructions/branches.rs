//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch if Carry Clear / Set
//! - BEQ / BNE: Branch if Equal (Z set) / Not Equal
//! - BMI / BPL: Branch if Minus (S set) / Plus
//! - BVC / BVS: Branch if Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! The resolver has already computed the target from the PC after the
//! instruction. A taken branch costs one cycle more than the base 2; page
//! crossings are not penalized.

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus};

/// Jumps to the resolved target if `condition` holds.
///
/// No flags are affected.
fn branch<M: MemoryBus>(exec: &mut Execution<'_, M>, operand: &Operand, condition: bool) {
    if let (true, Some(target)) = (condition, operand.address) {
        exec.regs.pc = target;
        exec.tick(1);
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0600, &[0x90, 0xFE]).unwrap(); // BCC to itself
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x0600, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_bcc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = !exec.regs.status.carry();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = exec.regs.status.carry();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = exec.regs.status.zero();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = !exec.regs.status.zero();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = exec.regs.status.sign();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = !exec.regs.status.sign();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = !exec.regs.status.overflow();
    branch(exec, operand, condition);
    Ok(())
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let condition = exec.regs.status.overflow();
    branch(exec, operand, condition);
    Ok(())
}

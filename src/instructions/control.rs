//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Halt execution
//! - JMP: Jump (absolute or indirect)
//! - JSR / RTS: Call and return from subroutine
//! - RTI: Return from interrupt
//! - NOP: No operation

use crate::cpu::resolve::Operand;
use crate::cpu::Execution;
use crate::{ExecutionError, MemoryBus, Status};

/// Executes the BRK (Force Break) instruction.
///
/// BRK is treated as a clean halt rather than a software interrupt: nothing
/// is pushed, no flag changes, and PC is left just past the BRK byte. The
/// instruction still costs its full 7 cycles. [`crate::CPU::run`] stops after
/// executing it.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, Mnemonic, CPU};
///
/// let mut cpu = CPU::with_config(FlatMemory::new(), CpuConfig { pc: 0x0600, ..CpuConfig::default() });
///
/// assert_eq!(cpu.step().unwrap(), Mnemonic::BRK);
/// assert_eq!(cpu.pc(), 0x0601);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.cycles(), 7);
/// ```
pub(crate) fn execute_brk<M: MemoryBus>(
    _exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    Ok(())
}

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the resolved address. For the indirect form the resolver has
/// already applied the page-wrap quirk of the pointer fetch.
pub(crate) fn execute_jmp<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    if let Some(target) = operand.address {
        exec.regs.pc = target;
    }
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (PC - 1),
/// high byte first, then jumps.
///
/// Stack operation:
/// 1. Write PCH to 0x0100 | SP, decrement SP
/// 2. Write PCL to 0x0100 | SP, decrement SP
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0x20, 0x00, 0x90]).unwrap(); // JSR $9000
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, ..CpuConfig::default() });
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x9000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.memory().read(0x01FF), Ok(0x80));
/// assert_eq!(cpu.memory().read(0x01FE), Ok(0x02));
/// assert_eq!(cpu.cycles(), 6);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    operand: &Operand,
) -> Result<(), ExecutionError> {
    let return_address = exec.regs.pc.wrapping_sub(1);
    exec.push_word(return_address)?;
    if let Some(target) = operand.address {
        exec.regs.pc = target;
    }
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the low then high byte of the return address and resumes one past it.
pub(crate) fn execute_rts<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let return_address = exec.pull_word()?;
    exec.regs.pc = return_address.wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B cleared, U forced on, as PLP) and then the
/// program counter. Unlike RTS the pulled address is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(
    exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    let status = exec.pull()?;
    exec.regs.status = Status::from_pulled(status);
    exec.regs.pc = exec.pull_word()?;
    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    _exec: &mut Execution<'_, M>,
    _operand: &Operand,
) -> Result<(), ExecutionError> {
    Ok(())
}

//! Per-instruction execution context.
//!
//! `step()` runs every instruction against an `Execution`: a copy of the
//! register file, a local tick count and a buffer of pending writes, all
//! borrowed from the CPU read-only. The CPU commits the result only when the
//! instruction finished without error, so a fault never leaves a half-applied
//! instruction behind.

use super::resolve::Operand;
use super::{Registers, STACK_PAGE};
use crate::addressing::{word, AddressingMode};
use crate::{ExecutionError, MemoryBus};

pub(crate) struct Execution<'a, M: MemoryBus> {
    memory: &'a M,
    pub(crate) regs: Registers,
    ticks: u64,
    writes: Vec<(u16, u8)>,
    trace: bool,
}

/// The outcome of a finished instruction, ready to be applied.
pub(crate) struct Committed {
    pub(crate) regs: Registers,
    pub(crate) ticks: u64,
    pub(crate) writes: Vec<(u16, u8)>,
}

impl<'a, M: MemoryBus> Execution<'a, M> {
    pub(crate) fn new(memory: &'a M, regs: Registers, trace: bool) -> Self {
        Self {
            memory,
            regs,
            ticks: 0,
            writes: Vec::new(),
            trace,
        }
    }

    /// Reads one byte, ticking the clock once.
    ///
    /// Pending writes from this instruction shadow memory.
    pub(crate) fn read(&mut self, addr: u16) -> Result<u8, ExecutionError> {
        let value = match self.writes.iter().rev().find(|(a, _)| *a == addr) {
            Some(&(_, value)) => value,
            None => self.memory.read(addr)?,
        };
        self.ticks += 1;

        if self.trace {
            log::trace!(target: "mos6502::bus", "${:02x} <- ${:04x}", value, addr);
        }

        Ok(value)
    }

    /// Queues one byte for writing, ticking the clock once.
    ///
    /// The address is bounds-checked now so the commit cannot fail halfway.
    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        self.memory.check(addr)?;
        self.writes.push((addr, value));
        self.ticks += 1;

        if self.trace {
            log::trace!(target: "mos6502::bus", "${:02x} -> ${:04x}", value, addr);
        }

        Ok(())
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> Result<u8, ExecutionError> {
        let value = self.read(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.fetch()?;
        let hi = self.fetch()?;
        Ok(word(lo, hi))
    }

    /// Reads a 16-bit pointer from the zero page; the high byte wraps to $00.
    pub(crate) fn read_zero_page_word(&mut self, ptr: u8) -> Result<u16, ExecutionError> {
        let lo = self.read(ptr as u16)?;
        let hi = self.read(ptr.wrapping_add(1) as u16)?;
        Ok(word(lo, hi))
    }

    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.write(STACK_PAGE | self.regs.sp as u16, value)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        Ok(())
    }

    pub(crate) fn pull(&mut self) -> Result<u8, ExecutionError> {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.read(STACK_PAGE | self.regs.sp as u16)
    }

    /// Pushes high byte first, so the low byte ends up at the lower address.
    pub(crate) fn push_word(&mut self, value: u16) -> Result<(), ExecutionError> {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi)?;
        self.push(lo)
    }

    pub(crate) fn pull_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.pull()?;
        let hi = self.pull()?;
        Ok(word(lo, hi))
    }

    /// Adds cycles that do not correspond to a memory access.
    pub(crate) fn tick(&mut self, ticks: u64) {
        self.ticks += ticks;
    }

    /// Tops the tick count up to the opcode's base cost.
    ///
    /// Every documented opcode performs at most `base_cycles` accesses, so after
    /// settling an instruction costs exactly its base cycles plus any extra ticks.
    pub(crate) fn settle(&mut self, base_cycles: u8) {
        self.ticks = self.ticks.max(base_cycles as u64);
    }

    /// The operand's data byte.
    ///
    /// Read and read-modify-write instructions arrive with the value already
    /// resolved; Accumulator mode resolves to A.
    pub(crate) fn operand_value(&mut self, operand: &Operand) -> Result<u8, ExecutionError> {
        match (operand.value, operand.address) {
            (Some(value), _) => Ok(value),
            (None, Some(address)) => self.read(address),
            (None, None) => Ok(self.regs.a),
        }
    }

    /// Stores a result where the operand came from: A for Accumulator mode,
    /// the effective address otherwise.
    pub(crate) fn write_back(&mut self, operand: &Operand, value: u8) -> Result<(), ExecutionError> {
        if operand.mode == AddressingMode::Accumulator {
            self.regs.a = value;
            return Ok(());
        }

        match operand.address {
            Some(address) => self.write(address, value),
            None => Ok(()),
        }
    }

    pub(crate) fn finish(self) -> Committed {
        Committed {
            regs: self.regs,
            ticks: self.ticks,
            writes: self.writes,
        }
    }
}

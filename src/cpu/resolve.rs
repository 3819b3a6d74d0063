//! Addressing-mode resolution against live machine state.
//!
//! The pure address arithmetic lives in [`crate::addressing`] and is shared
//! with the disassembler; this module adds the memory reads and register
//! indexing that only make sense while executing.

use super::Execution;
use crate::addressing::{
    absolute_indexed, indirect_high_byte_address, relative_target, word, zero_page_indexed,
    AddressingMode,
};
use crate::{Access, ExecutionError, MemoryBus};

/// A resolved operand: the data byte, the effective address, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operand {
    pub(crate) mode: AddressingMode,
    pub(crate) value: Option<u8>,
    pub(crate) address: Option<u16>,
}

impl Operand {
    fn value(mode: AddressingMode, value: u8) -> Self {
        Self {
            mode,
            value: Some(value),
            address: None,
        }
    }

    fn address(mode: AddressingMode, address: u16) -> Self {
        Self {
            mode,
            value: None,
            address: Some(address),
        }
    }
}

impl<M: MemoryBus> Execution<'_, M> {
    /// Consumes the operand bytes after the opcode and resolves them.
    ///
    /// PC must point just past the opcode. The target byte is read only for
    /// `Read` and `ReadModifyWrite` access, so stores and jumps never touch it.
    pub(crate) fn resolve(
        &mut self,
        mode: AddressingMode,
        access: Access,
    ) -> Result<Operand, ExecutionError> {
        use AddressingMode::*;

        let address = match mode {
            Implicit => {
                return Ok(Operand {
                    mode,
                    value: None,
                    address: None,
                })
            }
            Accumulator => return Ok(Operand::value(mode, self.regs.a)),
            Immediate => {
                let value = self.fetch()?;
                return Ok(Operand::value(mode, value));
            }
            Relative => {
                let offset = self.fetch()?;
                return Ok(Operand::address(mode, relative_target(self.regs.pc, offset)));
            }
            ZeroPage => self.fetch()? as u16,
            ZeroPageX => {
                let base = self.fetch()?;
                zero_page_indexed(base, self.regs.x)
            }
            ZeroPageY => {
                let base = self.fetch()?;
                zero_page_indexed(base, self.regs.y)
            }
            Absolute => self.fetch_word()?,
            AbsoluteX => {
                let base = self.fetch_word()?;
                absolute_indexed(base, self.regs.x)
            }
            AbsoluteY => {
                let base = self.fetch_word()?;
                absolute_indexed(base, self.regs.y)
            }
            Indirect => {
                let ptr = self.fetch_word()?;
                let lo = self.read(ptr)?;
                let hi = self.read(indirect_high_byte_address(ptr))?;
                word(lo, hi)
            }
            IndirectX => {
                let base = self.fetch()?;
                self.read_zero_page_word(base.wrapping_add(self.regs.x))?
            }
            IndirectY => {
                let base = self.fetch()?;
                let ptr = self.read_zero_page_word(base)?;
                absolute_indexed(ptr, self.regs.y)
            }
        };

        let value = match access {
            Access::Read | Access::ReadModifyWrite => Some(self.read(address)?),
            Access::Write | Access::None => None,
        };

        Ok(Operand {
            mode,
            value,
            address: Some(address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::Registers;
    use crate::FlatMemory;

    fn memory_with(bytes: &[(u16, u8)]) -> FlatMemory {
        let mut memory = FlatMemory::new();
        for &(addr, value) in bytes {
            memory.write(addr, value).unwrap();
        }
        memory
    }

    fn regs_at(pc: u16) -> Registers {
        Registers {
            pc,
            ..Registers::default()
        }
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let memory = memory_with(&[(0x0200, 0xF0), (0x0010, 0x42)]);
        let mut regs = regs_at(0x0200);
        regs.x = 0x20;
        let mut exec = Execution::new(&memory, regs, false);

        let operand = exec.resolve(AddressingMode::ZeroPageX, Access::Read).unwrap();
        assert_eq!(operand.address, Some(0x0010));
        assert_eq!(operand.value, Some(0x42));
        assert_eq!(exec.regs.pc, 0x0201);
    }

    #[test]
    fn test_write_access_skips_target_read() {
        let memory = memory_with(&[(0x0200, 0x00), (0x0201, 0x30)]);
        let mut exec = Execution::new(&memory, regs_at(0x0200), false);

        let operand = exec.resolve(AddressingMode::Absolute, Access::Write).unwrap();
        assert_eq!(operand.address, Some(0x3000));
        assert_eq!(operand.value, None);
        // two operand fetches only
        assert_eq!(exec.finish().ticks, 2);
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let memory = memory_with(&[(0x0200, 0xFE), (0x00FF, 0x34), (0x0000, 0x12), (0x1234, 0x99)]);
        let mut regs = regs_at(0x0200);
        regs.x = 0x01;
        let mut exec = Execution::new(&memory, regs, false);

        let operand = exec.resolve(AddressingMode::IndirectX, Access::Read).unwrap();
        assert_eq!(operand.address, Some(0x1234));
        assert_eq!(operand.value, Some(0x99));
    }

    #[test]
    fn test_indirect_y_adds_after_dereference() {
        let memory = memory_with(&[(0x0200, 0xFF), (0x00FF, 0xF0), (0x0000, 0x12)]);
        let mut regs = regs_at(0x0200);
        regs.y = 0x20;
        let mut exec = Execution::new(&memory, regs, false);

        let operand = exec.resolve(AddressingMode::IndirectY, Access::None).unwrap();
        assert_eq!(operand.address, Some(0x1310));
    }

    #[test]
    fn test_jmp_indirect_page_quirk() {
        let memory = memory_with(&[
            (0x0200, 0xFF),
            (0x0201, 0x30),
            (0x30FF, 0x80),
            (0x3000, 0x40),
            (0x3100, 0x50),
        ]);
        let mut exec = Execution::new(&memory, regs_at(0x0200), false);

        let operand = exec.resolve(AddressingMode::Indirect, Access::None).unwrap();
        assert_eq!(operand.address, Some(0x4080));
    }

    #[test]
    fn test_relative_is_computed_from_next_pc() {
        let memory = memory_with(&[(0x0601, 0xFE)]);
        let mut exec = Execution::new(&memory, regs_at(0x0601), false);

        let operand = exec.resolve(AddressingMode::Relative, Access::None).unwrap();
        assert_eq!(operand.address, Some(0x0600));
        assert_eq!(operand.value, None);
    }

    #[test]
    fn test_accumulator_carries_a() {
        let memory = FlatMemory::new();
        let mut regs = regs_at(0x0200);
        regs.a = 0x81;
        let mut exec = Execution::new(&memory, regs, false);

        let operand = exec
            .resolve(AddressingMode::Accumulator, Access::ReadModifyWrite)
            .unwrap();
        assert_eq!(operand.value, Some(0x81));
        assert_eq!(operand.address, None);
        assert_eq!(exec.regs.pc, 0x0200);
    }
}

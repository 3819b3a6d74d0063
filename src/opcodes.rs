//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - No mnemonic; executing one is a fault
//!
//! Each opcode entry includes:
//! - Mnemonic (closed enumeration of the 56 documented operations)
//! - Addressing mode
//! - Instruction size in bytes, derived from the addressing mode
//! - Base cycle cost (excluding page-crossing penalties)

use crate::addressing::AddressingMode;
use std::fmt;

/// The 56 documented 6502 operations.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

/// How an instruction touches the memory operand selected by its addressing mode.
///
/// The resolver reads the target byte only for `Read` and `ReadModifyWrite`;
/// stores never read before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No data operand: implied operations, branches, jumps, stack and transfers.
    None,
    /// Reads the operand and leaves memory untouched.
    Read,
    /// Writes the operand without reading it first.
    Write,
    /// Reads the operand and writes the result back to the same place.
    ReadModifyWrite,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            ADC => "ADC",
            AND => "AND",
            ASL => "ASL",
            BCC => "BCC",
            BCS => "BCS",
            BEQ => "BEQ",
            BIT => "BIT",
            BMI => "BMI",
            BNE => "BNE",
            BPL => "BPL",
            BRK => "BRK",
            BVC => "BVC",
            BVS => "BVS",
            CLC => "CLC",
            CLD => "CLD",
            CLI => "CLI",
            CLV => "CLV",
            CMP => "CMP",
            CPX => "CPX",
            CPY => "CPY",
            DEC => "DEC",
            DEX => "DEX",
            DEY => "DEY",
            EOR => "EOR",
            INC => "INC",
            INX => "INX",
            INY => "INY",
            JMP => "JMP",
            JSR => "JSR",
            LDA => "LDA",
            LDX => "LDX",
            LDY => "LDY",
            LSR => "LSR",
            NOP => "NOP",
            ORA => "ORA",
            PHA => "PHA",
            PHP => "PHP",
            PLA => "PLA",
            PLP => "PLP",
            ROL => "ROL",
            ROR => "ROR",
            RTI => "RTI",
            RTS => "RTS",
            SBC => "SBC",
            SEC => "SEC",
            SED => "SED",
            SEI => "SEI",
            STA => "STA",
            STX => "STX",
            STY => "STY",
            TAX => "TAX",
            TAY => "TAY",
            TSX => "TSX",
            TXA => "TXA",
            TXS => "TXS",
            TYA => "TYA",
        }
    }

    /// One-line description from the programming manual.
    pub fn description(self) -> &'static str {
        use Mnemonic::*;
        match self {
            ADC => "Add Memory to Accumulator with Carry",
            AND => "AND Memory with Accumulator",
            ASL => "Shift Left One Bit (Memory or Accumulator)",
            BCC => "Branch on Carry Clear",
            BCS => "Branch on Carry Set",
            BEQ => "Branch on Result Zero",
            BIT => "Test Bits in Memory with Accumulator",
            BMI => "Branch on Result Minus",
            BNE => "Branch on Result not Zero",
            BPL => "Branch on Result Plus",
            BRK => "Force Break",
            BVC => "Branch on Overflow Clear",
            BVS => "Branch on Overflow Set",
            CLC => "Clear Carry Flag",
            CLD => "Clear Decimal Mode",
            CLI => "Clear Interrupt Disable Bit",
            CLV => "Clear Overflow Flag",
            CMP => "Compare Memory and Accumulator",
            CPX => "Compare Memory and Index X",
            CPY => "Compare Memory and Index Y",
            DEC => "Decrement Memory by One",
            DEX => "Decrement Index X by One",
            DEY => "Decrement Index Y by One",
            EOR => "Exclusive-OR Memory with Accumulator",
            INC => "Increment Memory by One",
            INX => "Increment Index X by One",
            INY => "Increment Index Y by One",
            JMP => "Jump to New Location",
            JSR => "Jump to New Location Saving Return Address",
            LDA => "Load Accumulator with Memory",
            LDX => "Load Index X with Memory",
            LDY => "Load Index Y with Memory",
            LSR => "Shift Right One Bit (Memory or Accumulator)",
            NOP => "No Operation",
            ORA => "OR Memory with Accumulator",
            PHA => "Push Accumulator on Stack",
            PHP => "Push Processor Status on Stack",
            PLA => "Pull Accumulator from Stack",
            PLP => "Pull Processor Status from Stack",
            ROL => "Rotate One Bit Left (Memory or Accumulator)",
            ROR => "Rotate One Bit Right (Memory or Accumulator)",
            RTI => "Return from Interrupt",
            RTS => "Return from Subroutine",
            SBC => "Subtract Memory from Accumulator with Borrow",
            SEC => "Set Carry Flag",
            SED => "Set Decimal Mode",
            SEI => "Set Interrupt Disable Status",
            STA => "Store Accumulator in Memory",
            STX => "Store Index X in Memory",
            STY => "Store Index Y in Memory",
            TAX => "Transfer Accumulator to Index X",
            TAY => "Transfer Accumulator to Index Y",
            TSX => "Transfer Stack Pointer to Index X",
            TXA => "Transfer Index X to Accumulator",
            TXS => "Transfer Index X to Stack Pointer",
            TYA => "Transfer Index Y to Accumulator",
        }
    }

    /// Read/write classification of the instruction's data operand.
    pub fn access(self) -> Access {
        use Mnemonic::*;
        match self {
            ADC | AND | BIT | CMP | CPX | CPY | EOR | LDA | LDX | LDY | ORA | SBC => Access::Read,
            STA | STX | STY => Access::Write,
            ASL | LSR | ROL | ROR | INC | DEC => Access::ReadModifyWrite,
            _ => Access::None,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed for
/// decoding, execution and disassembly.
///
/// # Examples
///
/// ```
/// use mos6502::{lookup, AddressingMode, Mnemonic};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = lookup(0xA9);
/// assert_eq!(lda_imm.mnemonic, Some(Mnemonic::LDA));
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, Some(2));
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The opcode byte this entry describes.
    pub opcode: u8,

    /// Instruction mnemonic, `None` for illegal opcodes.
    pub mnemonic: Option<Mnemonic>,

    /// Addressing mode for this instruction (`Implicit` for illegal opcodes).
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands), always `size_for(addressing_mode)`.
    pub size_bytes: u8,

    /// Base cycle cost before any penalty, `None` for illegal opcodes.
    pub base_cycles: Option<u8>,
}

impl OpcodeMetadata {
    /// True when no documented instruction is defined for this byte.
    pub const fn is_illegal(&self) -> bool {
        self.mnemonic.is_none()
    }
}

/// Instruction size in bytes implied by an addressing mode.
///
/// ```
/// use mos6502::{size_for, AddressingMode};
///
/// assert_eq!(size_for(AddressingMode::Implicit), 1);
/// assert_eq!(size_for(AddressingMode::IndirectY), 2);
/// assert_eq!(size_for(AddressingMode::Indirect), 3);
/// ```
pub const fn size_for(mode: AddressingMode) -> u8 {
    1 + mode.operand_len()
}

const fn op(opcode: u8, mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic: Some(mnemonic),
        addressing_mode: mode,
        size_bytes: size_for(mode),
        base_cycles: Some(cycles),
    }
}

const fn illegal(opcode: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        opcode,
        mnemonic: None,
        addressing_mode: AddressingMode::Implicit,
        size_bytes: size_for(AddressingMode::Implicit),
        base_cycles: None,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use mos6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.base_cycles, Some(7));
///
/// // 0x02 has no documented instruction
/// assert!(OPCODE_TABLE[0x02].is_illegal());
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    [
        // 0x00
        op(0x00, BRK, Implicit, 7),
        op(0x01, ORA, IndirectX, 6),
        illegal(0x02),
        illegal(0x03),
        illegal(0x04),
        op(0x05, ORA, ZeroPage, 3),
        op(0x06, ASL, ZeroPage, 5),
        illegal(0x07),
        op(0x08, PHP, Implicit, 3),
        op(0x09, ORA, Immediate, 2),
        op(0x0A, ASL, Accumulator, 2),
        illegal(0x0B),
        illegal(0x0C),
        op(0x0D, ORA, Absolute, 4),
        op(0x0E, ASL, Absolute, 6),
        illegal(0x0F),
        // 0x10
        op(0x10, BPL, Relative, 2),
        op(0x11, ORA, IndirectY, 5),
        illegal(0x12),
        illegal(0x13),
        illegal(0x14),
        op(0x15, ORA, ZeroPageX, 4),
        op(0x16, ASL, ZeroPageX, 6),
        illegal(0x17),
        op(0x18, CLC, Implicit, 2),
        op(0x19, ORA, AbsoluteY, 4),
        illegal(0x1A),
        illegal(0x1B),
        illegal(0x1C),
        op(0x1D, ORA, AbsoluteX, 4),
        op(0x1E, ASL, AbsoluteX, 7),
        illegal(0x1F),
        // 0x20
        op(0x20, JSR, Absolute, 6),
        op(0x21, AND, IndirectX, 6),
        illegal(0x22),
        illegal(0x23),
        op(0x24, BIT, ZeroPage, 3),
        op(0x25, AND, ZeroPage, 3),
        op(0x26, ROL, ZeroPage, 5),
        illegal(0x27),
        op(0x28, PLP, Implicit, 4),
        op(0x29, AND, Immediate, 2),
        op(0x2A, ROL, Accumulator, 2),
        illegal(0x2B),
        op(0x2C, BIT, Absolute, 4),
        op(0x2D, AND, Absolute, 4),
        op(0x2E, ROL, Absolute, 6),
        illegal(0x2F),
        // 0x30
        op(0x30, BMI, Relative, 2),
        op(0x31, AND, IndirectY, 5),
        illegal(0x32),
        illegal(0x33),
        illegal(0x34),
        op(0x35, AND, ZeroPageX, 4),
        op(0x36, ROL, ZeroPageX, 6),
        illegal(0x37),
        op(0x38, SEC, Implicit, 2),
        op(0x39, AND, AbsoluteY, 4),
        illegal(0x3A),
        illegal(0x3B),
        illegal(0x3C),
        op(0x3D, AND, AbsoluteX, 4),
        op(0x3E, ROL, AbsoluteX, 7),
        illegal(0x3F),
        // 0x40
        op(0x40, RTI, Implicit, 6),
        op(0x41, EOR, IndirectX, 6),
        illegal(0x42),
        illegal(0x43),
        illegal(0x44),
        op(0x45, EOR, ZeroPage, 3),
        op(0x46, LSR, ZeroPage, 5),
        illegal(0x47),
        op(0x48, PHA, Implicit, 3),
        op(0x49, EOR, Immediate, 2),
        op(0x4A, LSR, Accumulator, 2),
        illegal(0x4B),
        op(0x4C, JMP, Absolute, 3),
        op(0x4D, EOR, Absolute, 4),
        op(0x4E, LSR, Absolute, 6),
        illegal(0x4F),
        // 0x50
        op(0x50, BVC, Relative, 2),
        op(0x51, EOR, IndirectY, 5),
        illegal(0x52),
        illegal(0x53),
        illegal(0x54),
        op(0x55, EOR, ZeroPageX, 4),
        op(0x56, LSR, ZeroPageX, 6),
        illegal(0x57),
        op(0x58, CLI, Implicit, 2),
        op(0x59, EOR, AbsoluteY, 4),
        illegal(0x5A),
        illegal(0x5B),
        illegal(0x5C),
        op(0x5D, EOR, AbsoluteX, 4),
        op(0x5E, LSR, AbsoluteX, 7),
        illegal(0x5F),
        // 0x60
        op(0x60, RTS, Implicit, 6),
        op(0x61, ADC, IndirectX, 6),
        illegal(0x62),
        illegal(0x63),
        illegal(0x64),
        op(0x65, ADC, ZeroPage, 3),
        op(0x66, ROR, ZeroPage, 5),
        illegal(0x67),
        op(0x68, PLA, Implicit, 4),
        op(0x69, ADC, Immediate, 2),
        op(0x6A, ROR, Accumulator, 2),
        illegal(0x6B),
        op(0x6C, JMP, Indirect, 5),
        op(0x6D, ADC, Absolute, 4),
        op(0x6E, ROR, Absolute, 6),
        illegal(0x6F),
        // 0x70
        op(0x70, BVS, Relative, 2),
        op(0x71, ADC, IndirectY, 5),
        illegal(0x72),
        illegal(0x73),
        illegal(0x74),
        op(0x75, ADC, ZeroPageX, 4),
        op(0x76, ROR, ZeroPageX, 6),
        illegal(0x77),
        op(0x78, SEI, Implicit, 2),
        op(0x79, ADC, AbsoluteY, 4),
        illegal(0x7A),
        illegal(0x7B),
        illegal(0x7C),
        op(0x7D, ADC, AbsoluteX, 4),
        op(0x7E, ROR, AbsoluteX, 7),
        illegal(0x7F),
        // 0x80
        illegal(0x80),
        op(0x81, STA, IndirectX, 6),
        illegal(0x82),
        illegal(0x83),
        op(0x84, STY, ZeroPage, 3),
        op(0x85, STA, ZeroPage, 3),
        op(0x86, STX, ZeroPage, 3),
        illegal(0x87),
        op(0x88, DEY, Implicit, 2),
        illegal(0x89),
        op(0x8A, TXA, Implicit, 2),
        illegal(0x8B),
        op(0x8C, STY, Absolute, 4),
        op(0x8D, STA, Absolute, 4),
        op(0x8E, STX, Absolute, 4),
        illegal(0x8F),
        // 0x90
        op(0x90, BCC, Relative, 2),
        op(0x91, STA, IndirectY, 6),
        illegal(0x92),
        illegal(0x93),
        op(0x94, STY, ZeroPageX, 4),
        op(0x95, STA, ZeroPageX, 4),
        op(0x96, STX, ZeroPageY, 4),
        illegal(0x97),
        op(0x98, TYA, Implicit, 2),
        op(0x99, STA, AbsoluteY, 5),
        op(0x9A, TXS, Implicit, 2),
        illegal(0x9B),
        illegal(0x9C),
        op(0x9D, STA, AbsoluteX, 5),
        illegal(0x9E),
        illegal(0x9F),
        // 0xA0
        op(0xA0, LDY, Immediate, 2),
        op(0xA1, LDA, IndirectX, 6),
        op(0xA2, LDX, Immediate, 2),
        illegal(0xA3),
        op(0xA4, LDY, ZeroPage, 3),
        op(0xA5, LDA, ZeroPage, 3),
        op(0xA6, LDX, ZeroPage, 3),
        illegal(0xA7),
        op(0xA8, TAY, Implicit, 2),
        op(0xA9, LDA, Immediate, 2),
        op(0xAA, TAX, Implicit, 2),
        illegal(0xAB),
        op(0xAC, LDY, Absolute, 4),
        op(0xAD, LDA, Absolute, 4),
        op(0xAE, LDX, Absolute, 4),
        illegal(0xAF),
        // 0xB0
        op(0xB0, BCS, Relative, 2),
        op(0xB1, LDA, IndirectY, 5),
        illegal(0xB2),
        illegal(0xB3),
        op(0xB4, LDY, ZeroPageX, 4),
        op(0xB5, LDA, ZeroPageX, 4),
        op(0xB6, LDX, ZeroPageY, 4),
        illegal(0xB7),
        op(0xB8, CLV, Implicit, 2),
        op(0xB9, LDA, AbsoluteY, 4),
        op(0xBA, TSX, Implicit, 2),
        illegal(0xBB),
        op(0xBC, LDY, AbsoluteX, 4),
        op(0xBD, LDA, AbsoluteX, 4),
        op(0xBE, LDX, AbsoluteY, 4),
        illegal(0xBF),
        // 0xC0
        op(0xC0, CPY, Immediate, 2),
        op(0xC1, CMP, IndirectX, 6),
        illegal(0xC2),
        illegal(0xC3),
        op(0xC4, CPY, ZeroPage, 3),
        op(0xC5, CMP, ZeroPage, 3),
        op(0xC6, DEC, ZeroPage, 5),
        illegal(0xC7),
        op(0xC8, INY, Implicit, 2),
        op(0xC9, CMP, Immediate, 2),
        op(0xCA, DEX, Implicit, 2),
        illegal(0xCB),
        op(0xCC, CPY, Absolute, 4),
        op(0xCD, CMP, Absolute, 4),
        op(0xCE, DEC, Absolute, 6),
        illegal(0xCF),
        // 0xD0
        op(0xD0, BNE, Relative, 2),
        op(0xD1, CMP, IndirectY, 5),
        illegal(0xD2),
        illegal(0xD3),
        illegal(0xD4),
        op(0xD5, CMP, ZeroPageX, 4),
        op(0xD6, DEC, ZeroPageX, 6),
        illegal(0xD7),
        op(0xD8, CLD, Implicit, 2),
        op(0xD9, CMP, AbsoluteY, 4),
        illegal(0xDA),
        illegal(0xDB),
        illegal(0xDC),
        op(0xDD, CMP, AbsoluteX, 4),
        op(0xDE, DEC, AbsoluteX, 7),
        illegal(0xDF),
        // 0xE0
        op(0xE0, CPX, Immediate, 2),
        op(0xE1, SBC, IndirectX, 6),
        illegal(0xE2),
        illegal(0xE3),
        op(0xE4, CPX, ZeroPage, 3),
        op(0xE5, SBC, ZeroPage, 3),
        op(0xE6, INC, ZeroPage, 5),
        illegal(0xE7),
        op(0xE8, INX, Implicit, 2),
        op(0xE9, SBC, Immediate, 2),
        op(0xEA, NOP, Implicit, 2),
        illegal(0xEB),
        op(0xEC, CPX, Absolute, 4),
        op(0xED, SBC, Absolute, 4),
        op(0xEE, INC, Absolute, 6),
        illegal(0xEF),
        // 0xF0
        op(0xF0, BEQ, Relative, 2),
        op(0xF1, SBC, IndirectY, 5),
        illegal(0xF2),
        illegal(0xF3),
        illegal(0xF4),
        op(0xF5, SBC, ZeroPageX, 4),
        op(0xF6, INC, ZeroPageX, 6),
        illegal(0xF7),
        op(0xF8, SED, Implicit, 2),
        op(0xF9, SBC, AbsoluteY, 4),
        illegal(0xFA),
        illegal(0xFB),
        illegal(0xFC),
        op(0xFD, SBC, AbsoluteX, 4),
        op(0xFE, INC, AbsoluteX, 7),
        illegal(0xFF),
    ]
};

/// Returns the metadata for an opcode byte. Total over 0x00-0xFF.
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Iterates over the 151 documented opcodes in byte order.
pub fn legal_opcodes() -> impl Iterator<Item = &'static OpcodeMetadata> {
    OPCODE_TABLE.iter().filter(|m| !m.is_illegal())
}

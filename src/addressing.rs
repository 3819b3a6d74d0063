//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor,
//! together with the pure address arithmetic shared by the execution engine's
//! resolver and the disassembler.
//!
//! Nothing here touches memory: the functions below take operand bytes and
//! register values and return addresses.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (offset is relative to the address after the branch)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40 within zero page, read the 16-bit
    /// address stored there, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode (0, 1 or 2).
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Human-readable name, as printed in opcode listings.
    pub fn name(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "Implied",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::Relative => "Relative",
            AddressingMode::ZeroPage => "Zero Page",
            AddressingMode::ZeroPageX => "Zero Page,X",
            AddressingMode::ZeroPageY => "Zero Page,Y",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "Absolute,X",
            AddressingMode::AbsoluteY => "Absolute,Y",
            AddressingMode::Indirect => "(Indirect)",
            AddressingMode::IndirectX => "(Indirect,X)",
            AddressingMode::IndirectY => "(Indirect),Y",
        }
    }
}

/// Assembles a little-endian 16-bit word from its low and high bytes.
pub const fn word(lo: u8, hi: u8) -> u16 {
    u16::from_le_bytes([lo, hi])
}

/// Zero page indexed address: `(base + index) & 0xFF`.
///
/// The sum never carries into page one.
///
/// ```
/// use mos6502::addressing::zero_page_indexed;
///
/// assert_eq!(zero_page_indexed(0x80, 0x05), 0x0085);
/// assert_eq!(zero_page_indexed(0xFF, 0x02), 0x0001);
/// ```
pub const fn zero_page_indexed(base: u8, index: u8) -> u16 {
    base.wrapping_add(index) as u16
}

/// Branch target for a relative operand.
///
/// `pc_after` is the address of the byte following the branch instruction;
/// `offset` is reinterpreted as a signed two's-complement byte.
///
/// ```
/// use mos6502::addressing::relative_target;
///
/// assert_eq!(relative_target(0x0602, 0xFE), 0x0600);
/// assert_eq!(relative_target(0x0602, 0x10), 0x0612);
/// ```
pub const fn relative_target(pc_after: u16, offset: u8) -> u16 {
    pc_after.wrapping_add_signed(offset as i8 as i16)
}

/// Absolute indexed address with 16-bit wraparound.
pub const fn absolute_indexed(base: u16, index: u8) -> u16 {
    base.wrapping_add(index as u16)
}

/// Address of the high byte of a 16-bit pointer stored at `ptr` for `JMP ($xxxx)`.
///
/// The NMOS part never carries into the pointer's high byte: a pointer at
/// `$10FF` takes its high byte from `$1000`.
pub const fn indirect_high_byte_address(ptr: u16) -> u16 {
    (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)
}

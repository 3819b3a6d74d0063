//! 6502 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//!
//! Decoding shares the opcode table and address arithmetic with the CPU but
//! never executes anything: no clock ticks, no register access, and no reads
//! beyond the instruction's own bytes.

pub mod decoder;
pub mod formatter;

pub use decoder::{decode_at, decode_instruction};

use crate::addressing::AddressingMode;
use crate::{ExecutionError, MemoryBus, Mnemonic};

/// A single decoded instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Opcode followed by its operand bytes, `size_bytes` long
    pub raw_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// The bytes after the opcode.
    pub fn operand_bytes(&self) -> &[u8] {
        self.raw_bytes.get(1..).unwrap_or(&[])
    }
}

/// One line of a listing.
///
/// Faults become lines of their own so a listing can carry on past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Decoded(Instruction),

    /// A byte with no documented instruction, rendered as `.byte $XX`.
    Illegal { address: u16, opcode: u8 },

    /// A legal opcode whose operand runs past the end of the input.
    /// `bytes` holds whatever was available, opcode first.
    Truncated { address: u16, bytes: Vec<u8> },
}

impl Line {
    pub fn address(&self) -> u16 {
        match self {
            Line::Decoded(instruction) => instruction.address,
            Line::Illegal { address, .. } | Line::Truncated { address, .. } => *address,
        }
    }

    /// The bytes this line covers.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Line::Decoded(instruction) => &instruction.raw_bytes,
            Line::Illegal { opcode, .. } => std::slice::from_ref(opcode),
            Line::Truncated { bytes, .. } => bytes,
        }
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,

    /// Prefix each line with its address and raw bytes, under a column header
    pub hex_dump: bool,
}

/// Iterator decoding a byte slice one instruction at a time.
///
/// After an illegal opcode it advances by one byte. After a truncated
/// instruction it advances by the declared size, clamped to the end of the
/// input, so the iterator always terminates.
///
/// # Examples
///
/// ```
/// use mos6502::{Disassembler, Mnemonic};
///
/// let bytes = [0xA9, 0x05, 0x02, 0x8D, 0x00];
/// let results: Vec<_> = Disassembler::new(&bytes, 0x0600).collect();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].as_ref().unwrap().mnemonic, Mnemonic::LDA);
/// assert!(results[1].is_err()); // illegal 0x02
/// assert!(results[2].is_err()); // STA missing its high byte
/// ```
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    bytes: &'a [u8],
    offset: usize,
    address: u16,
}

impl<'a> Disassembler<'a> {
    pub fn new(bytes: &'a [u8], start_address: u16) -> Self {
        Self {
            bytes,
            offset: 0,
            address: start_address,
        }
    }

    /// Offset of the next byte to decode.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Address of the next byte to decode.
    pub fn address(&self) -> u16 {
        self.address
    }

    fn advance(&mut self, len: usize) {
        let len = len.min(self.bytes.len() - self.offset);
        self.offset += len;
        self.address = self.address.wrapping_add(len as u16);
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<Instruction, ExecutionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.bytes.get(self.offset..).filter(|r| !r.is_empty())?;
        let opcode = remaining[0];

        let result = decoder::decode_instruction(remaining, self.address);
        let step = match &result {
            Ok(instruction) => instruction.size_bytes as usize,
            Err(ExecutionError::MalformedOperand { expected, .. }) => *expected as usize,
            Err(_) => 1,
        };
        log::trace!(
            target: "mos6502::disassembler",
            "decoded ${:02X} at ${:04X} ({} bytes)",
            opcode,
            self.address,
            step
        );

        self.advance(step);
        Some(result)
    }
}

/// Disassemble a byte slice into listing lines
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `options` - Disassembly options; only `start_address` matters here
///
/// # Returns
///
/// One `Line` per decoded instruction, illegal byte or truncated tail
///
/// # Examples
///
/// ```
/// use mos6502::{disassemble, DisassemblyOptions, Line, Mnemonic};
///
/// let lines = disassemble(&[0xA9, 0x05], DisassemblyOptions::default());
///
/// assert_eq!(lines.len(), 1);
/// match &lines[0] {
///     Line::Decoded(instruction) => {
///         assert_eq!(instruction.mnemonic, Mnemonic::LDA);
///         assert_eq!(instruction.size_bytes, 2);
///     }
///     other => panic!("unexpected line {:?}", other),
/// }
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Line> {
    let mut decoder = Disassembler::new(bytes, options.start_address);
    let mut lines = Vec::new();

    loop {
        let (offset, address) = (decoder.offset(), decoder.address());
        let Some(result) = decoder.next() else {
            break;
        };

        let line = match result {
            Ok(instruction) => Line::Decoded(instruction),
            Err(ExecutionError::IllegalOpcode { opcode, .. }) => Line::Illegal { address, opcode },
            Err(_) => Line::Truncated {
                address,
                bytes: bytes[offset..].to_vec(),
            },
        };
        lines.push(line);
    }

    lines
}

/// Disassembles `len` bytes of memory starting at `start`.
///
/// Memory is read through the bus without side effects. `options.start_address`
/// is replaced by `start`.
///
/// # Errors
///
/// `OutOfBoundsAccess` if the range extends past the end of memory.
pub fn disassemble_memory<M: MemoryBus>(
    memory: &M,
    start: u16,
    len: usize,
    options: DisassemblyOptions,
) -> Result<Vec<Line>, ExecutionError> {
    let bytes = (0..len)
        .map(|i| memory.read(start.wrapping_add(i as u16)))
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(disassemble(
        &bytes,
        DisassemblyOptions {
            start_address: start,
            ..options
        },
    ))
}

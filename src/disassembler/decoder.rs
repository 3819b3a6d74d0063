//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::{lookup, ExecutionError, MemoryBus, OpcodeMetadata};

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Errors
///
/// - `IllegalOpcode` if the first byte has no documented instruction
/// - `MalformedOperand` if the slice is shorter than the instruction
///   (an empty slice reports `expected: 1`)
///
/// # Examples
///
/// ```
/// use mos6502::disassembler::decode_instruction;
/// use mos6502::{AddressingMode, Mnemonic};
///
/// let instruction = decode_instruction(&[0xA9, 0x05], 0x0000).unwrap();
/// assert_eq!(instruction.mnemonic, Mnemonic::LDA);
/// assert_eq!(instruction.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(instruction.operand_bytes(), &[0x05]);
/// ```
pub fn decode_instruction(bytes: &[u8], address: u16) -> Result<Instruction, ExecutionError> {
    let Some(&opcode) = bytes.first() else {
        return Err(ExecutionError::MalformedOperand {
            address,
            expected: 1,
            available: 0,
        });
    };

    let metadata = lookup(opcode);
    let size = metadata.size_bytes as usize;
    let raw_bytes = bytes
        .get(..size)
        .map(<[u8]>::to_vec)
        .ok_or(ExecutionError::MalformedOperand {
            address,
            expected: metadata.size_bytes,
            available: bytes.len(),
        });

    build(metadata, address, raw_bytes)
}

/// Decode the instruction at `address` from a memory bus.
///
/// Reads only the instruction's own bytes through `&M`; no clock, no
/// registers, no target memory.
///
/// # Errors
///
/// As [`decode_instruction`], with `MalformedOperand` when the instruction
/// runs past the end of memory and `OutOfBoundsAccess` when `address` itself
/// is outside it.
pub fn decode_at<M: MemoryBus>(memory: &M, address: u16) -> Result<Instruction, ExecutionError> {
    let opcode = memory.read(address)?;
    let metadata = lookup(opcode);

    let available = memory.size().saturating_sub(address as usize);
    let raw_bytes = if available < metadata.size_bytes as usize {
        Err(ExecutionError::MalformedOperand {
            address,
            expected: metadata.size_bytes,
            available,
        })
    } else {
        (0..metadata.size_bytes as u16)
            .map(|i| memory.read(address.wrapping_add(i)))
            .collect::<Result<Vec<u8>, _>>()
            .map_err(ExecutionError::from)
    };

    build(metadata, address, raw_bytes)
}

/// Illegal opcodes win over truncation.
fn build(
    metadata: &OpcodeMetadata,
    address: u16,
    raw_bytes: Result<Vec<u8>, ExecutionError>,
) -> Result<Instruction, ExecutionError> {
    let (Some(mnemonic), Some(base_cycles)) = (metadata.mnemonic, metadata.base_cycles) else {
        return Err(ExecutionError::IllegalOpcode {
            opcode: metadata.opcode,
            address,
        });
    };

    Ok(Instruction {
        address,
        opcode: metadata.opcode,
        mnemonic,
        addressing_mode: metadata.addressing_mode,
        raw_bytes: raw_bytes?,
        size_bytes: metadata.size_bytes,
        base_cycles,
    })
}

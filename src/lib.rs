//! # 6502 Decode/Execute Engine
//!
//! An NMOS 6502 emulator core: the opcode metadata table, addressing-mode
//! resolution, the fetch-decode-execute cycle with exact status-flag semantics,
//! and a disassembler that shares the same decode logic without touching
//! machine state.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{CpuConfig, FlatMemory, MemoryBus, Mnemonic, CPU};
//!
//! // 2KB of RAM with a tiny program at 0x0600: LDA #$10; ADC #$05; BRK
//! let mut memory = FlatMemory::with_size(0x800);
//! memory.load(0x0600, &[0xA9, 0x10, 0x69, 0x05, 0x00]).unwrap();
//!
//! let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x0600, ..CpuConfig::default() });
//!
//! assert_eq!(cpu.step().unwrap(), Mnemonic::LDA);
//! assert_eq!(cpu.step().unwrap(), Mnemonic::ADC);
//! assert_eq!(cpu.a(), 0x15);
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **All-or-nothing steps**: a faulting instruction leaves registers, clock and memory untouched
//! - **Table-Driven Design**: All opcode metadata in a single `const` table
//!
//! ## Modules
//!
//! - `cpu` - Register file, configuration and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait, flat RAM and hex helpers
//! - `opcodes` - Opcode metadata table and the `Mnemonic` enumeration
//! - `addressing` - Addressing modes and the address arithmetic they share
//! - `status` - Processor status flags
//! - `clock` - Cycle counter
//! - `disassembler` - Side-effect-free decoding and text rendering

pub mod addressing;
pub mod clock;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod status;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use clock::Clock;
pub use cpu::{CpuConfig, Registers, RunLimit, RunSummary, StopReason, CPU};
pub use disassembler::{
    disassemble, disassemble_memory, Disassembler, DisassemblyOptions, Instruction, Line,
};
pub use memory::{FlatMemory, HexError, MemoryBus, OutOfBounds};
pub use opcodes::{legal_opcodes, lookup, size_for, Access, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

/// Errors that can occur while decoding or executing an instruction.
///
/// Every variant is fatal to the current `step()` or decode call, and none of
/// them leaves a partially applied instruction behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `address` has no documented instruction.
    IllegalOpcode { opcode: u8, address: u16 },

    /// A read or write landed at or beyond the end of memory.
    OutOfBoundsAccess { address: usize, size: usize },

    /// The instruction at `address` needs `expected` bytes but only
    /// `available` remain in the byte stream or memory region.
    MalformedOperand {
        address: u16,
        expected: u8,
        available: usize,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, address } => {
                write!(f, "illegal opcode 0x{:02X} at ${:04X}", opcode, address)
            }
            ExecutionError::OutOfBoundsAccess { address, size } => {
                write!(
                    f,
                    "access to ${:04X} outside memory of {} bytes",
                    address, size
                )
            }
            ExecutionError::MalformedOperand {
                address,
                expected,
                available,
            } => write!(
                f,
                "instruction at ${:04X} needs {} bytes, only {} available",
                address, expected, available
            ),
        }
    }
}

impl std::error::Error for ExecutionError {}

impl From<OutOfBounds> for ExecutionError {
    fn from(err: OutOfBounds) -> Self {
        ExecutionError::OutOfBoundsAccess {
            address: err.address,
            size: err.size,
        }
    }
}

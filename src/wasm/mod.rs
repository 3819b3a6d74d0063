//! WebAssembly bindings for the 6502 emulator.
//!
//! This module provides JavaScript-callable interfaces to the CPU and the
//! disassembler, enabling browser-based execution of 6502 machine code.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{DisassemblyLine, Emulator6502};

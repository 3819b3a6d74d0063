//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection
//! and disassembly.

use crate::disassembler::formatter::{format_line, format_operand, line_text};
use crate::memory::ADDRESS_SPACE;
use crate::{
    disassemble_memory, CpuConfig, DisassemblyOptions, FlatMemory, Line, MemoryBus, RunLimit,
    CPU,
};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl<E: std::error::Error> From<E> for JsError {
    fn from(err: E) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
    text: String,
}

impl From<&Line> for DisassemblyLine {
    fn from(line: &Line) -> Self {
        let (mnemonic, operand) = match line {
            Line::Decoded(instr) => (instr.mnemonic.name().to_string(), format_operand(instr)),
            _ => {
                let text = line_text(line);
                match text.split_once(' ') {
                    Some((mnemonic, operand)) => (mnemonic.to_string(), operand.to_string()),
                    None => (text, String::new()),
                }
            }
        };

        DisassemblyLine {
            address: line.address(),
            bytes: line.bytes().to_vec(),
            mnemonic,
            operand,
            text: format_line(line, true),
        }
    }
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }

    /// The full hex-dump listing line.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// A CPU over flat RAM, driven from JavaScript.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u32,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Creates an emulator with `memory_size` bytes of RAM, clamped to 1..=65536.
    #[wasm_bindgen(constructor)]
    pub fn new(memory_size: u32) -> Self {
        let size = (memory_size as usize).clamp(1, ADDRESS_SPACE);

        Emulator6502 {
            cpu: CPU::new(FlatMemory::with_size(size)),
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Copies `program` into memory at `start_addr` and points PC at it.
    pub fn load_program(
        &mut self,
        program: &js_sys::Uint8Array,
        start_addr: u16,
    ) -> Result<(), JsError> {
        let bytes = program.to_vec();
        self.cpu.memory_mut().load(start_addr, &bytes)?;
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        self.program_end = program_end(start_addr, bytes.len());
        Ok(())
    }

    /// Executes one instruction and returns its mnemonic.
    pub fn step(&mut self) -> Result<String, JsError> {
        Ok(self.cpu.step()?.name().to_string())
    }

    /// Runs until BRK or `max_instructions`; returns the number executed.
    pub fn run(&mut self, max_instructions: u32) -> Result<u32, JsError> {
        let summary = self
            .cpu
            .run(RunLimit::Instructions(max_instructions as u64))?;
        Ok(summary.instructions as u32)
    }

    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        Ok(self.cpu.run_for_cycles(cycles as u64)? as u32)
    }

    /// Restores the default register state; memory and the clock are kept.
    pub fn reset(&mut self) {
        self.cpu.configure(CpuConfig {
            pc: self.program_start,
            ..CpuConfig::default()
        });
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.status().sign()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.status().overflow()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.status().decimal()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.status().interrupt_disable()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.status().zero()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.status().carry()
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    pub fn trace_line(&self) -> String {
        self.cpu.trace_line()
    }

    // Memory access methods

    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        Ok(self.cpu.memory().read(addr)?)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), JsError> {
        Ok(self.cpu.memory_mut().write(addr, value)?)
    }

    pub fn dump_memory(&self, offset: u16, len: u32) -> Result<String, JsError> {
        Ok(self.cpu.memory().dump(offset, len as usize)?)
    }

    /// Decodes `len` bytes of memory starting at `start_addr`.
    pub fn disassemble(&self, start_addr: u16, len: u32) -> Result<Vec<JsValue>, JsError> {
        let lines = disassemble_memory(
            self.cpu.memory(),
            start_addr,
            len as usize,
            DisassemblyOptions::default(),
        )?;

        Ok(lines
            .iter()
            .map(|line| JsValue::from(DisassemblyLine::from(line)))
            .collect())
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// One past the last loaded byte; `0x10000` when the program reaches the top of memory.
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u32 {
        self.program_end
    }
}

/// End address of a load, exclusive. A successful load never extends past
/// the 64KB address space.
fn program_end(start: u16, len: usize) -> u32 {
    (start as u32 + len as u32).min(ADDRESS_SPACE as u32)
}

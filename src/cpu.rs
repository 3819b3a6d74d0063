//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed `Status` bitflags
//! - **Clock**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until BRK or a `RunLimit` is reached
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! A step is all-or-nothing: it runs against an [`execution::Execution`]
//! context and is committed only once the instruction completed.

mod execution;
pub(crate) mod resolve;

pub(crate) use execution::Execution;

use crate::clock::Clock;
use crate::disassembler::{decoder, formatter, Instruction};
use crate::{instructions, lookup, ExecutionError, MemoryBus, Mnemonic, Status};

/// Base of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// The programmer-visible register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Registers::from(CpuConfig::default())
    }
}

impl From<CpuConfig> for Registers {
    fn from(config: CpuConfig) -> Self {
        Self {
            a: config.a,
            x: config.x,
            y: config.y,
            sp: config.sp,
            pc: config.pc,
            status: Status::from_byte(config.status),
        }
    }
}

/// Initial register values and tracing switch.
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, CPU};
///
/// let config = CpuConfig { pc: 0x0600, a: 0x10, ..CpuConfig::default() };
/// let cpu = CPU::with_config(FlatMemory::new(), config);
///
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.a(), 0x10);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status().bits(), 0x20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    pub pc: u16,
    /// Raw status byte; the unused bit is forced on when applied.
    pub status: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    /// Emit an execution trace through the `log` facade.
    pub verbose: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            pc: 0x0000,
            status: Status::power_on().bits(),
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFF,
            verbose: false,
        }
    }
}

/// Budget for [`CPU::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLimit {
    /// Run until BRK.
    Unbounded,
    /// Execute at most this many instructions.
    Instructions(u64),
    /// Stop once at least this many cycles have elapsed.
    Cycles(u64),
}

/// Why [`CPU::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Break,
    LimitReached,
}

/// Totals for one call to [`CPU::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions: u64,
    pub cycles: u64,
    pub stop: StopReason,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus; callers reach it through [`CPU::memory`],
/// [`CPU::memory_mut`] and [`CPU::into_memory`] between steps.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use mos6502::{CpuConfig, FlatMemory, MemoryBus, RunLimit, StopReason, CPU};
///
/// let mut memory = FlatMemory::new();
/// // LDX #$03; DEX; BNE -3; BRK
/// memory.load(0x8000, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x00]).unwrap();
///
/// let mut cpu = CPU::with_config(memory, CpuConfig { pc: 0x8000, ..CpuConfig::default() });
/// let summary = cpu.run(RunLimit::Unbounded).unwrap();
///
/// assert_eq!(summary.stop, StopReason::Break);
/// assert_eq!(cpu.x(), 0);
/// assert_eq!(cpu.pc(), 0x8006);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) regs: Registers,
    pub(crate) clock: Clock,
    pub(crate) memory: M,
    pub(crate) verbose: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the default configuration: PC at 0, SP at 0xFF,
    /// status 0x20 and all other registers zeroed.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            regs: Registers::from(config),
            clock: Clock::new(),
            memory,
            verbose: config.verbose,
        }
    }

    /// Snapshot of the current registers and tracing switch as a config.
    pub fn config(&self) -> CpuConfig {
        CpuConfig {
            pc: self.regs.pc,
            status: self.regs.status.bits(),
            a: self.regs.a,
            x: self.regs.x,
            y: self.regs.y,
            sp: self.regs.sp,
            verbose: self.verbose,
        }
    }

    /// Applies a configuration between steps. Memory and the clock are untouched.
    pub fn configure(&mut self, config: CpuConfig) {
        self.regs = Registers::from(config);
        self.verbose = config.verbose;
    }

    /// Loads PC from the reset vector at $FFFC/$FFFD.
    ///
    /// Other registers and the clock are left as they are.
    ///
    /// # Errors
    ///
    /// `OutOfBoundsAccess` if memory is too small to hold the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0xFFFC, &[0x00, 0x80]).unwrap();
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.reset().unwrap();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        let lo = self.memory.read(RESET_VECTOR)?;
        let hi = self.memory.read(RESET_VECTOR.wrapping_add(1))?;
        self.regs.pc = u16::from_le_bytes([lo, hi]);
        Ok(())
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Look up instruction metadata in opcode table
    /// 3. Check the whole instruction lies inside memory
    /// 4. Resolve the operand for the addressing mode
    /// 5. Run the mnemonic's handler
    /// 6. Bring the clock up to the opcode's base cycle count
    ///
    /// # Returns
    ///
    /// The executed mnemonic. On error nothing is committed: registers, clock
    /// and memory are exactly as before the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CpuConfig, ExecutionError, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0000, 0x02).unwrap(); // no instruction has this encoding
    ///
    /// let mut cpu = CPU::with_config(memory, CpuConfig::default());
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::IllegalOpcode { opcode: 0x02, address: 0x0000 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0000);
    /// assert_eq!(cpu.cycles(), 0);
    /// ```
    pub fn step(&mut self) -> Result<Mnemonic, ExecutionError> {
        if self.verbose {
            self.trace_next_instruction();
        }

        let mut exec = Execution::new(&self.memory, self.regs, self.verbose);
        let address = exec.regs.pc;

        let opcode = exec.fetch()?;
        let metadata = lookup(opcode);
        let mnemonic = metadata
            .mnemonic
            .ok_or(ExecutionError::IllegalOpcode { opcode, address })?;

        let available = self.memory.size().saturating_sub(address as usize);
        if available < metadata.size_bytes as usize {
            return Err(ExecutionError::MalformedOperand {
                address,
                expected: metadata.size_bytes,
                available,
            });
        }

        let operand = exec.resolve(metadata.addressing_mode, mnemonic.access())?;
        instructions::execute(&mut exec, mnemonic, &operand)?;
        if let Some(base_cycles) = metadata.base_cycles {
            exec.settle(base_cycles);
        }

        let committed = exec.finish();
        for (addr, value) in committed.writes {
            self.memory.write(addr, value)?;
        }
        self.regs = committed.regs;
        self.clock.tick(committed.ticks);

        if self.verbose {
            log::debug!(target: "mos6502::cpu", "{}", self.trace_line());
        }

        Ok(mnemonic)
    }

    /// Executes instructions until BRK or until `limit` is used up.
    ///
    /// BRK counts as an executed instruction. A `Cycles` budget is checked
    /// before each step, so the final instruction may overshoot it.
    pub fn run(&mut self, limit: RunLimit) -> Result<RunSummary, ExecutionError> {
        let start_cycles = self.clock.cycles();
        let mut instructions = 0u64;

        let stop = loop {
            let exhausted = match limit {
                RunLimit::Unbounded => false,
                RunLimit::Instructions(max) => instructions >= max,
                RunLimit::Cycles(max) => self.clock.cycles() - start_cycles >= max,
            };
            if exhausted {
                break StopReason::LimitReached;
            }

            let mnemonic = self.step()?;
            instructions += 1;
            if mnemonic == Mnemonic::BRK {
                break StopReason::Break;
            }
        };

        Ok(RunSummary {
            instructions,
            cycles: self.clock.cycles() - start_cycles,
            stop,
        })
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Returns the actual number of cycles consumed, which may be slightly more
    /// than the budget due to instruction granularity, or less if BRK was hit.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        Ok(self.run(RunLimit::Cycles(cycle_budget))?.cycles)
    }

    /// Decodes the instruction at PC without executing it.
    pub fn peek_instruction(&self) -> Result<Instruction, ExecutionError> {
        decoder::decode_at(&self.memory, self.regs.pc)
    }

    /// One-line register dump:
    /// `A:xx X:xx Y:xx PC:xxxx SP:xx SV-BDIZC:bbbbbbbb Clk:n`.
    pub fn trace_line(&self) -> String {
        format!(
            "A:{:02x} X:{:02x} Y:{:02x} PC:{:04x} SP:{:02x} SV-BDIZC:{:08b} Clk:{}",
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.pc,
            self.regs.sp,
            self.regs.status.bits(),
            self.clock.cycles()
        )
    }

    fn trace_next_instruction(&self) {
        match self.peek_instruction() {
            Ok(instruction) => log::debug!(
                target: "mos6502::cpu",
                "Execute: {}",
                formatter::format_instruction(&instruction)
            ),
            Err(err) => log::debug!(target: "mos6502::cpu", "Execute: {}", err),
        }
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    pub fn status(&self) -> Status {
        self.regs.status
    }

    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.clock.cycles()
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Mutable access to the status flags.
    ///
    /// The unused bit is re-forced after every executed instruction that
    /// restores status from the stack, but is not policed here.
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.regs.status
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn into_memory(self) -> M {
        self.memory
    }
}

//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus a flat RAM array and the helpers used to fill and
//! inspect it:
//!
//! - `FlatMemory` with an explicit size (up to the full 64KB address space)
//! - `parse_hex` / `parse_address` for hex text coming from a command line
//! - `FlatMemory::dump` for formatted hex dumps
//!
//! ## Design Principles
//!
//! A memory region has a declared size. Any read or write at or beyond that size
//! is an `OutOfBounds` error: accesses never clamp and never wrap around.

use std::fmt;

/// The full 6502 address space.
pub const ADDRESS_SPACE: usize = 0x10000;

/// An access at or beyond the end of a memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// First offending address.
    pub address: usize,
    /// Declared size of the region.
    pub size: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "address ${:04X} is outside memory of {} bytes",
            self.address, self.size
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Memory bus trait for the CPU to read and write bytes.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads (the disassembler
///   decodes from a `&M` snapshot)
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - Both fail with `OutOfBounds` past `size()`
///
/// # Examples
///
/// ```
/// use mos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::with_size(0x800);
///
/// mem.write(0x0123, 0x42).unwrap();
/// assert_eq!(mem.read(0x0123), Ok(0x42));
///
/// // Past the end of the 2KB region
/// assert!(mem.read(0x0800).is_err());
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use mos6502::{MemoryBus, OutOfBounds};
///
/// /// 1KB of RAM followed by 1KB of ROM.
/// struct RomRamMemory {
///     ram: [u8; 0x400],
///     rom: [u8; 0x400],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> Result<u8, OutOfBounds> {
///         match addr {
///             0x0000..=0x03FF => Ok(self.ram[addr as usize]),
///             0x0400..=0x07FF => Ok(self.rom[addr as usize - 0x400]),
///             _ => Err(OutOfBounds { address: addr as usize, size: self.size() }),
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) -> Result<(), OutOfBounds> {
///         match addr {
///             0x0000..=0x03FF => {
///                 self.ram[addr as usize] = value;
///                 Ok(())
///             }
///             // Writes to ROM are ignored
///             0x0400..=0x07FF => Ok(()),
///             _ => Err(OutOfBounds { address: addr as usize, size: self.size() }),
///         }
///     }
///
///     fn size(&self) -> usize {
///         0x800
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> Result<u8, OutOfBounds>;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), OutOfBounds>;

    /// Number of addressable bytes, starting at address 0.
    fn size(&self) -> usize;

    /// Returns an error if a `write` to `addr` would fail.
    ///
    /// The CPU checks every write of an instruction before committing any of
    /// them, so this must agree with `write`. The default accepts everything
    /// below `size()`; a bus that rejects writes inside its range (ROM, for
    /// example) has to override it, or a faulting instruction can be left
    /// half-applied.
    fn check(&self, addr: u16) -> Result<(), OutOfBounds> {
        if (addr as usize) < self.size() {
            Ok(())
        } else {
            Err(OutOfBounds {
                address: addr as usize,
                size: self.size(),
            })
        }
    }

    /// Copies `bytes` into memory starting at `offset`.
    ///
    /// The whole range is checked before the first byte is written, so a load
    /// that does not fit leaves memory untouched.
    fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<(), OutOfBounds> {
        let end = offset as usize + bytes.len();
        if end > self.size() {
            return Err(OutOfBounds {
                address: end - 1,
                size: self.size(),
            });
        }

        for (i, &byte) in bytes.iter().enumerate() {
            self.write(offset.wrapping_add(i as u16), byte)?;
        }

        Ok(())
    }
}

/// Flat RAM of a caller-chosen size.
///
/// All addresses below `size()` are readable and writable and start out zeroed.
///
/// # Examples
///
/// ```
/// use mos6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::with_size(2 * 1024);
/// mem.load(0x0600, &[0xA9, 0x05]).unwrap();
///
/// assert_eq!(mem.size(), 0x800);
/// assert_eq!(mem.read(0x0601), Ok(0x05));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FlatMemory {
    data: Vec<u8>,
}

impl FlatMemory {
    /// Creates a zeroed memory covering the full 64KB address space.
    pub fn new() -> Self {
        Self::with_size(ADDRESS_SPACE)
    }

    /// Creates a zeroed memory of `size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than the 64KB address space.
    pub fn with_size(size: usize) -> Self {
        assert!(
            size > 0 && size <= ADDRESS_SPACE,
            "memory size must be between 1 and {ADDRESS_SPACE} bytes, got {size}"
        );

        Self {
            data: vec![0; size],
        }
    }

    /// The raw contents of the region.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Formats `len` bytes starting at `offset` as a hex dump.
    ///
    /// The dump starts on a 16-byte row boundary and carries a column header:
    ///
    /// ```text
    ///       00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f
    /// 0600: a9 05 00
    /// ```
    pub fn dump(&self, offset: u16, len: usize) -> Result<String, OutOfBounds> {
        const ROW: usize = 16;

        let start = offset as usize;
        let end = start + len;
        if end > self.data.len() {
            return Err(OutOfBounds {
                address: end - 1,
                size: self.data.len(),
            });
        }

        let columns: Vec<String> = (0..ROW).map(|c| format!("{c:02x}")).collect();
        let mut out = format!("{:6}{}\n", "", columns.join(" "));

        let mut row = start - start % ROW;
        while row < end {
            let row_end = (row + ROW).min(end);
            let bytes: Vec<String> = self.data[row..row_end]
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect();
            out.push_str(&format!("{row:04x}: {}\n", bytes.join(" ")));
            row += ROW;
        }

        Ok(out)
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> Result<u8, OutOfBounds> {
        self.data.get(addr as usize).copied().ok_or(OutOfBounds {
            address: addr as usize,
            size: self.data.len(),
        })
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), OutOfBounds> {
        let size = self.data.len();
        match self.data.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OutOfBounds {
                address: addr as usize,
                size,
            }),
        }
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

/// Malformed hex text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The digits (whitespace removed) do not pair up into whole bytes.
    OddLength(usize),
    /// A character that is not a hex digit.
    InvalidDigit { position: usize, found: char },
    /// An address that does not fit in 16 bits.
    AddressOverflow(String),
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HexError::OddLength(len) => write!(f, "odd number of hex digits ({len})"),
            HexError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {found:?} at position {position}")
            }
            HexError::AddressOverflow(text) => write!(f, "address {text:?} exceeds $FFFF"),
        }
    }
}

impl std::error::Error for HexError {}

/// Parses a hex byte string such as `"a9 05 8d 00 02"` or `"a9058d0002"`.
///
/// Whitespace anywhere in the input is ignored.
///
/// ```
/// use mos6502::memory::parse_hex;
///
/// assert_eq!(parse_hex("20 09 06").unwrap(), vec![0x20, 0x09, 0x06]);
/// assert_eq!(parse_hex("A905").unwrap(), vec![0xA9, 0x05]);
/// assert!(parse_hex("A90").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let mut digits = Vec::with_capacity(input.len());
    for (position, c) in input.char_indices() {
        if c.is_whitespace() {
            continue;
        }
        let value = c
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { position, found: c })?;
        digits.push(value as u8);
    }

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    Ok(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Parses a hex address, with or without a `0x` or `$` prefix.
///
/// ```
/// use mos6502::memory::parse_address;
///
/// assert_eq!(parse_address("0x600").unwrap(), 0x0600);
/// assert_eq!(parse_address("$C000").unwrap(), 0xC000);
/// assert_eq!(parse_address("ff").unwrap(), 0x00FF);
/// ```
pub fn parse_address(input: &str) -> Result<u16, HexError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(HexError::OddLength(0));
    }

    let mut value: u32 = 0;
    for (position, c) in digits.char_indices() {
        let digit = c
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { position, found: c })?;
        value = value * 16 + digit;
        if value > 0xFFFF {
            return Err(HexError::AddressOverflow(trimmed.to_string()));
        }
    }

    Ok(value as u16)
}

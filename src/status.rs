//! # Processor Status Register
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//! | S | V | U | B | D | I | Z | C |
//!   |   |   |   |   |   |   |   +-- carry
//!   |   |   |   |   |   |   +------ zero result
//!   |   |   |   |   |   +---------- interrupt disable
//!   |   |   |   |   +-------------- decimal mode
//!   |   |   |   +------------------ break command
//!   |   |   +---------------------- unused, reads as 1
//!   |   +-------------------------- overflow
//!   +------------------------------ sign (negative result)
//! ```
//!
//! Every constructor that accepts a raw byte forces the unused bit on.

use bitflags::bitflags;

bitflags! {
    /// The packed processor status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const SIGN = 1 << 7;
    }
}

impl Status {
    /// Power-on status: only the unused bit set (`0x20`).
    pub const fn power_on() -> Self {
        Status::UNUSED
    }

    /// Builds a status from a raw byte, forcing the unused bit on.
    pub const fn from_byte(value: u8) -> Self {
        Status::from_bits_retain(value | Status::UNUSED.bits())
    }

    /// Status as restored by PLP and RTI: the break bit does not exist in the
    /// register itself, so it is dropped, and the unused bit reads as 1.
    pub const fn from_pulled(value: u8) -> Self {
        Status::from_bits_retain((value & !Status::BREAK.bits()) | Status::UNUSED.bits())
    }

    /// Byte pushed by PHP (and by an interrupt sequence raised by BRK):
    /// break and unused both set.
    pub const fn to_pushed(self) -> u8 {
        self.bits() | Status::BREAK.bits() | Status::UNUSED.bits()
    }

    pub fn carry(self) -> bool {
        self.contains(Status::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Status::CARRY, value);
    }

    pub fn zero(self) -> bool {
        self.contains(Status::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Status::ZERO, value);
    }

    pub fn interrupt_disable(self) -> bool {
        self.contains(Status::INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Status::INTERRUPT_DISABLE, value);
    }

    pub fn decimal(self) -> bool {
        self.contains(Status::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Status::DECIMAL, value);
    }

    pub fn break_command(self) -> bool {
        self.contains(Status::BREAK)
    }

    pub fn set_break_command(&mut self, value: bool) {
        self.set(Status::BREAK, value);
    }

    pub fn overflow(self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Status::OVERFLOW, value);
    }

    pub fn sign(self) -> bool {
        self.contains(Status::SIGN)
    }

    pub fn set_sign(&mut self, value: bool) {
        self.set(Status::SIGN, value);
    }

    /// Sets Zero and Sign from a result byte, as nearly every load and ALU op does.
    pub fn update_zero_sign(&mut self, result: u8) {
        self.set_zero(result == 0);
        self.set_sign(result & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::power_on()
    }
}

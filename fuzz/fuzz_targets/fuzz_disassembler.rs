//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::disassembler::formatter::format_line;
use mos6502::{disassemble, DisassemblyOptions};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    hex_dump: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
        hex_dump: input.hex_dump,
    };

    let lines = disassemble(&input.bytes, options);

    // Lines tile the input exactly, in address order
    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for line in &lines {
        assert_eq!(line.address(), expected_address);

        let size = line.bytes().len();
        assert!((1..=3).contains(&size));
        assert!(!format_line(line, input.hex_dump).is_empty());

        total_size += size;
        expected_address = expected_address.wrapping_add(size as u16);
    }

    assert_eq!(total_size, input.bytes.len());

    // Decoding has no hidden state
    assert_eq!(lines, disassemble(&input.bytes, options));
});

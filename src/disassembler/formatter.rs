//! Formatting functions for disassembled instructions

use crate::addressing::{relative_target, word, AddressingMode};
use crate::disassembler::{disassemble, DisassemblyOptions, Instruction, Line};
use crate::lookup;

const HEADER_COLUMNS: (&str, &str, &str) = ("Address", "Hexdump", "Disassembly");

/// Format a single instruction as assembly text
///
/// # Examples
///
/// ```
/// use mos6502::disassembler::{decode_instruction, formatter::format_instruction};
///
/// let instruction = decode_instruction(&[0xB1, 0x20], 0x0000).unwrap();
/// assert_eq!(format_instruction(&instruction), "LDA ($20),Y");
/// ```
pub fn format_instruction(instr: &Instruction) -> String {
    with_operand(instr.mnemonic.name(), &format_operand(instr))
}

/// Format the operand based on addressing mode
///
/// Relative operands show the branch target rather than the raw offset.
pub fn format_operand(instr: &Instruction) -> String {
    operand_text(instr.addressing_mode, instr.operand_bytes(), instr.address)
}

/// Operand text for `mode`, with `?` placeholders for missing bytes.
fn operand_text(mode: AddressingMode, operand: &[u8], address: u16) -> String {
    use AddressingMode::*;

    let byte = operand.first().map(|b| format!("{:02X}", b));
    let byte = byte.as_deref().unwrap_or("??");
    let addr = match operand {
        [lo, hi, ..] => format!("{:04X}", word(*lo, *hi)),
        [lo] => format!("??{:02X}", lo),
        [] => "????".to_string(),
    };

    match mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${}", byte),
        ZeroPage => format!("${}", byte),
        ZeroPageX => format!("${},X", byte),
        ZeroPageY => format!("${},Y", byte),
        Relative => match operand.first() {
            Some(&offset) => format!("${:04X}", relative_target(address.wrapping_add(2), offset)),
            None => "$????".to_string(),
        },
        Absolute => format!("${}", addr),
        AbsoluteX => format!("${},X", addr),
        AbsoluteY => format!("${},Y", addr),
        Indirect => format!("(${})", addr),
        IndirectX => format!("(${},X)", byte),
        IndirectY => format!("(${}),Y", byte),
    }
}

fn with_operand(mnemonic: &str, operand: &str) -> String {
    if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, operand)
    }
}

/// Assembly text of a listing line, without address or hex columns.
pub fn line_text(line: &Line) -> String {
    match line {
        Line::Decoded(instr) => format_instruction(instr),
        Line::Illegal { opcode, .. } => format!(".byte ${:02X}", opcode),
        Line::Truncated { address, bytes } => {
            let Some(&opcode) = bytes.first() else {
                return String::new();
            };
            let metadata = lookup(opcode);
            let mnemonic = metadata.mnemonic.map_or(".byte", |m| m.name());
            let operand = operand_text(metadata.addressing_mode, &bytes[1..], *address);
            with_operand(mnemonic, &operand)
        }
    }
}

/// Format a listing line.
///
/// With `hex_dump` the line is `$xxxx    <raw hex>  MNE operand`, aligned to
/// the columns of [`header`]; otherwise it is the bare instruction text.
///
/// # Examples
///
/// ```
/// use mos6502::disassembler::formatter::format_line;
/// use mos6502::{disassemble, DisassemblyOptions};
///
/// let lines = disassemble(&[0x8D, 0x00, 0x02], DisassemblyOptions { start_address: 0x0600, hex_dump: true });
/// assert_eq!(format_line(&lines[0], false), "STA $0200");
/// assert_eq!(format_line(&lines[0], true), "$0600    8D 00 02   STA $0200");
/// ```
pub fn format_line(line: &Line, hex_dump: bool) -> String {
    let text = line_text(line);
    if !hex_dump {
        return text;
    }

    let address = format!("${:04X}", line.address());
    let hex = line
        .bytes()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{:<8} {:<10} {}", address, hex, text)
}

/// Two-line column header for hex-dump listings.
pub fn header() -> String {
    let (address, hex, text) = HEADER_COLUMNS;
    let title = format!("{:<8} {:<10} {}", address, hex, text);
    let rule = "-".repeat(title.len());
    format!("{}\n{}", title, rule)
}

/// Disassembles `bytes` into a complete listing, one line per instruction.
///
/// Each line ends in a newline. The header is included when
/// `options.hex_dump` is set.
pub fn render(bytes: &[u8], options: DisassemblyOptions) -> String {
    let mut out = String::new();
    if options.hex_dump {
        out.push_str(&header());
        out.push('\n');
    }

    for line in disassemble(bytes, options) {
        out.push_str(&format_line(&line, options.hex_dump));
        out.push('\n');
    }

    out
}

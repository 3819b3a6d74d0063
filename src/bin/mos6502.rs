use std::{env, error::Error};

use log::{Level, LevelFilter, Log, Metadata, Record};
use mos6502::disassembler::formatter::{format_line, header};
use mos6502::memory::{parse_address, parse_hex};
use mos6502::{
    disassemble, legal_opcodes, CpuConfig, DisassemblyOptions, FlatMemory, Line, MemoryBus,
    RunLimit, StopReason, CPU,
};

/// Prints trace records verbatim to stdout, interleaved with the listing.
struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace && metadata.target().starts_with("mos6502")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Disasm {
        start: u16,
        bytes: Vec<u8>,
        verbose: bool,
    },
    Run {
        start: u16,
        bytes: Vec<u8>,
        verbose: bool,
        max_instructions: Option<u64>,
    },
    Opcodes,
    Usage,
}

/// Parses the arguments after the program name.
///
/// Flags may appear anywhere. Missing or unknown commands give `Usage`;
/// malformed numbers, addresses or hex bytes are errors.
fn parse<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut verbose = false;
    let mut max_instructions: Option<u64> = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--max-instructions" => {
                let value = args
                    .next()
                    .ok_or("--max-instructions requires a number")?;
                let limit = value
                    .parse::<u64>()
                    .map_err(|err| format!("invalid --max-instructions {:?}: {}", value, err))?;
                max_instructions = Some(limit);
            }
            "--help" | "-h" => return Ok(Command::Usage),
            _ => positional.push(arg),
        }
    }

    let command = match positional.as_slice() {
        [command, start, hex] if command == "disasm" => Command::Disasm {
            start: parse_address(start)?,
            bytes: parse_hex(hex)?,
            verbose,
        },
        [command, start, hex] if command == "run" => Command::Run {
            start: parse_address(start)?,
            bytes: parse_hex(hex)?,
            verbose,
            max_instructions,
        },
        [command] if command == "opcodes" => Command::Opcodes,
        _ => Command::Usage,
    };

    Ok(command)
}

fn main() -> Result<(), Box<dyn Error>> {
    match parse(env::args().skip(1))? {
        Command::Disasm {
            start,
            bytes,
            verbose,
        } => disasm(start, &bytes, verbose),
        Command::Run {
            start,
            bytes,
            verbose,
            max_instructions,
        } => run(start, &bytes, verbose, max_instructions)?,
        Command::Opcodes => list_opcodes(),
        Command::Usage => print_usage(),
    }

    Ok(())
}

fn disasm(start: u16, bytes: &[u8], verbose: bool) {
    let (lines, faults) = listing(start, bytes, verbose);
    for fault in faults {
        eprintln!("{}", fault);
    }
    for line in lines {
        println!("{}", line);
    }
}

/// Listing lines for stdout and fault messages for stderr.
///
/// Faults do not stop the listing: an illegal byte is shown as `.byte` and
/// decoding resumes at the next byte.
fn listing(start: u16, bytes: &[u8], verbose: bool) -> (Vec<String>, Vec<String>) {
    let mut lines = Vec::new();
    let mut faults = Vec::new();

    if verbose {
        lines.extend(header().lines().map(str::to_string));
    }

    let options = DisassemblyOptions {
        start_address: start,
        hex_dump: verbose,
    };
    for line in disassemble(bytes, options) {
        match &line {
            Line::Decoded(_) => {}
            Line::Illegal { address, opcode } => {
                faults.push(format!("illegal opcode 0x{:02X} at ${:04X}", opcode, address))
            }
            Line::Truncated { address, .. } => {
                faults.push(format!("truncated instruction at ${:04X}", address))
            }
        }
        lines.push(format_line(&line, verbose));
    }

    (lines, faults)
}

fn run(
    start: u16,
    bytes: &[u8],
    verbose: bool,
    max_instructions: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    if verbose {
        log::set_logger(&LOGGER).map_err(|err| err.to_string())?;
        log::set_max_level(LevelFilter::Trace);
    }

    let mut memory = FlatMemory::new();
    memory.load(start, bytes)?;

    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            pc: start,
            verbose,
            ..CpuConfig::default()
        },
    );

    let limit = max_instructions.map_or(RunLimit::Unbounded, RunLimit::Instructions);
    match cpu.run(limit) {
        Ok(summary) => {
            let reason = match summary.stop {
                StopReason::Break => "BRK",
                StopReason::LimitReached => "instruction limit",
            };
            println!(
                "Stopped on {} after {} instructions, {} cycles",
                reason, summary.instructions, summary.cycles
            );
        }
        Err(err) => eprintln!("{}", err),
    }

    println!("{}", cpu.trace_line());
    let len = bytes.len().max(1).min(0x10000 - start as usize);
    println!("{}", cpu.memory().dump(start, len)?);

    Ok(())
}

fn list_opcodes() {
    for metadata in legal_opcodes() {
        let Some(mnemonic) = metadata.mnemonic else {
            continue;
        };
        println!(
            "{:02X}  {}  {:<12} {} bytes  {} cycles  {}",
            metadata.opcode,
            mnemonic,
            metadata.addressing_mode.name(),
            metadata.size_bytes,
            metadata.base_cycles.unwrap_or_default(),
            mnemonic.description()
        );
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  mos6502 disasm [-v] <start-hex-addr> \"<hex bytes>\"");
    println!("  mos6502 run [-v] [--max-instructions N] <start-hex-addr> \"<hex bytes>\"");
    println!("  mos6502 opcodes");
    println!();
    println!("Example:");
    println!("  mos6502 disasm 0x600 \"20 09 06 20 0c 06 20 12 06 a2 00 60 e8 e0 05 d0 fb 60 00\"");
}

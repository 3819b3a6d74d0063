//! Tests for the verbose execution trace.
//!
//! The trace goes through the `log` facade. A capturing logger records the
//! lines emitted on the current thread, so tests running in parallel do not
//! see each other's output.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use mos6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

struct CaptureLogger;

thread_local! {
    static LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace && metadata.target().starts_with("mos6502")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Installs the logger once and clears this thread's captured lines.
fn start_capture() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LINES.with(|lines| lines.borrow_mut().clear());
}

fn captured() -> Vec<String> {
    LINES.with(|lines| lines.borrow().clone())
}

/// LDA $10; INC $10 with $7F at $0010
fn setup_cpu(verbose: bool) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, &[0xA5, 0x10, 0xE6, 0x10]).unwrap();
    memory.write(0x0010, 0x7F).unwrap();

    CPU::with_config(
        memory,
        CpuConfig {
            pc: 0x0600,
            verbose,
            ..CpuConfig::default()
        },
    )
}

#[test]
fn test_verbose_trace_lines() {
    let mut cpu = setup_cpu(true);
    start_capture();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(
        captured(),
        vec![
            "Execute: LDA $10",
            "$a5 <- $0600",
            "$10 <- $0601",
            "$7f <- $0010",
            "A:7f X:00 Y:00 PC:0602 SP:ff SV-BDIZC:00100000 Clk:3",
            "Execute: INC $10",
            "$e6 <- $0602",
            "$10 <- $0603",
            "$7f <- $0010",
            "$80 -> $0010",
            "A:7f X:00 Y:00 PC:0604 SP:ff SV-BDIZC:10100000 Clk:8",
        ]
    );
}

#[test]
fn test_quiet_cpu_emits_nothing() {
    let mut cpu = setup_cpu(false);
    start_capture();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert!(captured().is_empty());
    assert_eq!(cpu.memory().read(0x0010), Ok(0x80));
}

#[test]
fn test_trace_reports_faulting_instruction() {
    let mut memory = FlatMemory::new();
    memory.write(0x0600, 0x02).unwrap();
    let mut cpu = CPU::with_config(
        memory,
        CpuConfig {
            pc: 0x0600,
            verbose: true,
            ..CpuConfig::default()
        },
    );
    start_capture();

    assert!(cpu.step().is_err());

    assert_eq!(
        captured(),
        vec!["Execute: illegal opcode 0x02 at $0600", "$02 <- $0600"]
    );
}

#[test]
fn test_configure_switches_trace() {
    let mut cpu = setup_cpu(false);
    start_capture();

    cpu.step().unwrap();
    cpu.configure(CpuConfig {
        verbose: true,
        ..cpu.config()
    });
    cpu.step().unwrap();

    let lines = captured();
    assert_eq!(lines.first().map(String::as_str), Some("Execute: INC $10"));
    assert_eq!(lines.len(), 6);
}

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use emu6502::config::{parse_address, parse_count, parse_frequency, parse_hex_bytes};
use emu6502::dump::MemoryDump;
use emu6502::{EmulatorConfig, FlatMemory, HaltReason, CPU};
use log::info;

#[derive(Parser)]
#[command(name = "emu6502", version, about = "Run 6502 machine code")]
struct Args {
    /// Raw machine-code image to load
    file: Option<PathBuf>,

    /// Inline machine code as hex digits, e.g. "A9 05 AA" (not raw characters); takes precedence over FILE
    #[arg(short = 'o', long = "code")]
    code: Option<String>,

    /// Load origin
    #[arg(long, default_value = "0", value_parser = parse_address)]
    origin: u16,

    /// Start address (defaults to the reset vector at 0xFFFC)
    #[arg(long, value_parser = parse_address)]
    pc: Option<u16>,

    /// Memory dump rows
    #[arg(long, default_value = "8", value_parser = parse_count)]
    rows: usize,

    /// Bytes per memory dump row
    #[arg(long = "row-len", default_value = "16", value_parser = parse_count)]
    row_len: usize,

    /// First address of the memory dump
    #[arg(long = "dump-start", default_value = "0", value_parser = parse_address)]
    dump_start: u16,

    /// Skip the memory dump after the run
    #[arg(long = "no-memory", default_value_t = false)]
    no_memory: bool,

    /// Skip the per-instruction trace
    #[arg(long = "no-trace", default_value_t = false)]
    no_trace: bool,

    /// Echo bytes stored to this address as characters
    #[arg(long = "print-port", value_parser = parse_address)]
    print_port: Option<u16>,

    /// Vector through 0xFFFE on BRK instead of stopping
    #[arg(long = "continue-after-brk", default_value_t = false)]
    continue_after_brk: bool,

    /// Throttle execution to this many instructions per second
    #[arg(long, value_parser = parse_frequency)]
    hz: Option<f64>,
}

fn load_program(args: &Args) -> Result<Vec<u8>> {
    if let Some(code) = args.code.as_deref() {
        return Ok(parse_hex_bytes(code)?);
    }
    match args.file.as_ref() {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => bail!("no program given: pass a FILE or --code"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let program = load_program(&args)?;
    let trace = !args.no_trace;
    let dump_memory = !args.no_memory;

    let config = EmulatorConfig {
        print_port: args.print_port,
        continue_after_brk: args.continue_after_brk,
        target_hz: args.hz,
        buffer_output: trace || dump_memory,
    };

    let mut cpu = CPU::with_config(FlatMemory::new(), config);
    cpu.start(&program, args.origin, args.pc)?;

    let halt = cpu.halt_handle();
    ctrlc::set_handler(move || halt.request()).context("failed to install Ctrl-C handler")?;

    let summary = cpu.run_with(|report| {
        if trace {
            println!("{}", report);
        }
    })?;

    if summary.reason == HaltReason::Cancelled {
        info!("interrupted at 0x{:04X}", cpu.pc());
    }

    if dump_memory {
        let dump = MemoryDump::new(args.dump_start, args.rows, args.row_len);
        print!("{}", dump.render(cpu.memory()));
    }

    Ok(())
}

//! r6502 CLI - load a raw program, reset the CPU and step through it.

use clap::Parser;
use r6502::debug::{StatePanel, dump_page};
use r6502::{Bus, Cpu, Vector};
use std::fs;
use std::path::PathBuf;

/// Multiply 10 by 3 through repeated addition; leaves 30 at $0002.
const DEMO_PROGRAM: &[u8] = &[
    0xA2, 0x0A, // LDX #$0A
    0x8E, 0x00, 0x00, // STX $0000
    0xA2, 0x03, // LDX #$03
    0x8E, 0x01, 0x00, // STX $0001
    0xAC, 0x00, 0x00, // LDY $0000
    0xA9, 0x00, // LDA #$00
    0x18, // CLC
    0x6D, 0x01, 0x00, // loop: ADC $0001
    0x88, // DEY
    0xD0, 0xFA, // BNE loop
    0x8D, 0x02, 0x00, // STA $0002
    0xEA, 0xEA, 0xEA, // NOP NOP NOP
];

/// 6502 emulator CLI
#[derive(Parser, Debug)]
#[command(name = "r6502")]
#[command(about = "Cycle-stepped 6502 emulator", long_about = None)]
struct Args {
    /// Raw binary to load (defaults to a built-in multiply demo)
    program: Option<PathBuf>,

    /// Load address, also written to the reset vector
    #[arg(short, long, default_value = "8000", value_parser = parse_u16_hex)]
    origin: u16,

    /// Number of instructions to execute after reset
    #[arg(short = 'n', long, default_value = "40")]
    instructions: usize,

    /// Print the register panel after every instruction
    #[arg(short, long)]
    trace: bool,

    /// Memory page to dump at the end (repeatable)
    #[arg(short, long = "page", value_parser = parse_u8_hex)]
    pages: Vec<u8>,
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s)
}

fn parse_u16_hex(s: &str) -> Result<u16, String> {
    u16::from_str_radix(strip_hex_prefix(s), 16)
        .map_err(|e| format!("invalid address '{}': {}", s, e))
}

fn parse_u8_hex(s: &str) -> Result<u8, String> {
    u8::from_str_radix(strip_hex_prefix(s), 16)
        .map_err(|e| format!("invalid page '{}': {}", s, e))
}

fn load_program(args: &Args) -> Result<Vec<u8>, String> {
    match &args.program {
        Some(path) => {
            fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
        }
        None => Ok(DEMO_PROGRAM.to_vec()),
    }
}

fn run(args: &Args) -> Result<(), String> {
    let program = load_program(args)?;

    let mut bus = Bus::new();
    bus.load(args.origin, &program)?;
    bus.set_vector(Vector::Reset, args.origin);

    let mut cpu = Cpu::with_bus(bus);
    cpu.reset();
    while !cpu.complete() {
        cpu.clock();
    }

    println!(
        "Loaded {} bytes at ${:04X}; running {} instructions",
        program.len(),
        args.origin,
        args.instructions
    );

    for _ in 0..args.instructions {
        cpu.step_instruction();
        if args.trace {
            println!("{}\n", StatePanel::new(&cpu));
        }
    }

    println!("\nCPU State:");
    println!("{}", StatePanel::new(&cpu));

    let pages = if args.pages.is_empty() {
        vec![0x00, (args.origin >> 8) as u8]
    } else {
        args.pages.clone()
    };
    for page in pages {
        println!("\nPage ${:02X}:", page);
        print!("{}", dump_page(cpu.bus(), page));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_arguments_accept_prefixes() {
        assert_eq!(parse_u16_hex("8000"), Ok(0x8000));
        assert_eq!(parse_u16_hex("0xC000"), Ok(0xC000));
        assert_eq!(parse_u16_hex("$0600"), Ok(0x0600));
        assert_eq!(parse_u8_hex("$ff"), Ok(0xFF));
        assert!(parse_u16_hex("10000").is_err());
        assert!(parse_u8_hex("zz").is_err());
    }

    #[test]
    fn demo_program_multiplies() {
        let args = Args::parse_from(["r6502"]);
        let program = load_program(&args).unwrap();
        let mut bus = Bus::new();
        bus.load(args.origin, &program).unwrap();
        bus.set_vector(Vector::Reset, args.origin);
        let mut cpu = Cpu::with_bus(bus);
        cpu.reset();
        for _ in 0..args.instructions + 1 {
            cpu.step_instruction();
        }
        assert_eq!(cpu.bus().peek(0x0002), 30);
    }

    #[test]
    fn missing_program_file_is_reported() {
        let args = Args::parse_from(["r6502", "/nonexistent/prog.bin"]);
        let err = load_program(&args).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn page_flag_repeats() {
        let args = Args::parse_from([
            "r6502", "--page", "00", "-p", "$80", "--origin", "0x0600",
        ]);
        assert_eq!(args.pages, vec![0x00, 0x80]);
        assert_eq!(args.origin, 0x0600);
        assert_eq!(args.instructions, 40);
        assert!(!args.trace);
    }
}

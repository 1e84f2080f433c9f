//! Shared test utilities for wiring a CPU to a program image.
//!
//! Every helper loads the bytes verbatim, points the reset vector at them,
//! resets the CPU and drains the 8 reset cycles, so the first
//! `step_instruction` call executes the first opcode of the program.

use crate::bus::{Bus, Vector};
use crate::cpu::Cpu;

/// Default load address for test programs.
pub const ORIGIN: u16 = 0x8000;

/// Program at $8000, CPU idle and ready to fetch its first opcode.
pub fn setup(prg: &[u8]) -> Cpu {
    setup_at(ORIGIN, prg)
}

/// Program at `origin`, CPU idle and ready to fetch its first opcode.
pub fn setup_at(origin: u16, prg: &[u8]) -> Cpu {
    let bus = bus_with_program(origin, prg);
    let mut cpu = Cpu::new();
    cpu.connect(bus);
    cpu.reset();
    while !cpu.complete() {
        cpu.clock();
    }
    cpu
}

/// Fresh bus holding `prg` at `origin` with the reset vector pointing at it.
pub fn bus_with_program(origin: u16, prg: &[u8]) -> Bus {
    let mut bus = Bus::new();
    bus.load(origin, prg).expect("test program fits");
    bus.set_vector(Vector::Reset, origin);
    bus
}


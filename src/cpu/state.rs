/*!
state.rs - Canonical 6502 CPU state (registers, flags, in-flight transient
fields) and inline-friendly helpers.

Overview
========
`CpuState` is the single owner of everything the addressing and operation
phases of a clock pulse share. Both phases receive it by exclusive reference
together with the `Bus`; nothing lives in globals.

It intentionally excludes:
  - Memory (owned by the `Bus`)
  - Decode tables (see `table.rs`)
  - Pulse orchestration (see `dispatch`)

Transient fields
================
  fetched     ALU input operand for the current instruction
  opcode      opcode byte of the in-flight instruction
  addr_abs    effective address resolved by the addressing mode
  addr_rel    sign-extended branch displacement
  temp        16-bit scratch holding pre-truncation results
  cycles      pulses remaining for the in-flight instruction
  clock_count lifetime pulse counter (informational)

6502 Status Register Bit Layout
===============================
```text
Bit: 7 6 5 4 3 2 1 0
     N V U B D I Z C
```
  N = NEGATIVE
  V = OVERFLOW
  U = UNUSED (forced to 1 around every instruction)
  B = BREAK (set only in bytes pushed by BRK/PHP)
  D = DECIMAL (stored; arithmetic is always binary)
  I = INTERRUPT_DISABLE
  Z = ZERO
  C = CARRY
*/

use bitflags::bitflags;

use crate::bus::Bus;

/// Base of the fixed stack page ($0100-$01FF).
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const SP_RESET: u8 = 0xFD;

bitflags! {
    /// Processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

/// Architectural registers plus the per-instruction scratch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Flags,

    pub fetched: u8,
    pub opcode: u8,
    pub addr_abs: u16,
    pub addr_rel: u16,
    pub temp: u16,
    pub cycles: u8,
    pub clock_count: u64,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: SP_RESET,
            pc: 0x0000,
            status: Flags::UNUSED,
            fetched: 0,
            opcode: 0,
            addr_abs: 0,
            addr_rel: 0,
            temp: 0,
            cycles: 0,
            clock_count: 0,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Return true if every bit of `flag` is set.
    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.status.contains(flag)
    }

    /// Assign a flag based on boolean `value`.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.status.set(flag, value);
    }

    /// Carry as an arithmetic 0/1.
    #[inline]
    pub fn carry_bit(&self) -> u8 {
        self.flag(Flags::CARRY) as u8
    }

    /// Update ZERO + NEGATIVE from the low byte of `result`.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::NEGATIVE, (result & 0x80) != 0);
    }

    /// Raw status byte.
    #[inline]
    pub fn status_bits(&self) -> u8 {
        self.status.bits()
    }

    /// Replace the status register from a raw byte (all 8 bits kept).
    #[inline]
    pub fn set_status_bits(&mut self, v: u8) {
        self.status = Flags::from_bits_retain(v);
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Read the byte at PC, then advance PC by 1 (wrapping).
    #[inline]
    pub fn fetch_u8(&mut self, bus: &mut Bus) -> u8 {
        let b = bus.read(self.pc, false);
        self.pc = self.pc.wrapping_add(1);
        b
    }

    /// Read a little-endian word at PC (low then high), advancing PC by 2.
    #[inline]
    pub fn fetch_u16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.fetch_u8(bus) as u16;
        let hi = self.fetch_u8(bus) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------
    //
    //   Push: write at 0x0100 + SP, then SP = SP - 1
    //   Pull: SP = SP + 1, then read at 0x0100 + SP

    #[inline]
    pub fn push(&mut self, bus: &mut Bus, value: u8) {
        bus.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub fn pull(&mut self, bus: &mut Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE + self.sp as u16, false)
    }

    /// Push a return address: high byte first, so the low byte sits lower on the stack.
    #[inline]
    pub fn push_word(&mut self, bus: &mut Bus, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, (value & 0x00FF) as u8);
    }

    /// Pull a word pushed by `push_word` (low then high).
    #[inline]
    pub fn pull_word(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.pull(bus) as u16;
        let hi = self.pull(bus) as u16;
        (hi << 8) | lo
    }
}

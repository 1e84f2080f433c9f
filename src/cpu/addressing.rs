/*!
addressing.rs - 6502 addressing modes and effective-address resolution

Overview
========
Each of the twelve modes consumes zero or more operand bytes at PC (advancing
PC), leaves its result in `CpuState::addr_abs` (or `addr_rel` for branches),
and reports whether the mode *may* cost one extra cycle. The dispatcher only
grants that cycle when the operation also asks for it.

Page-cross signalling
=====================
Only ABX, ABY and IZY signal, and only when adding the index register changes
the high byte of the base address. Zero-page modes wrap inside page zero and
never signal.

Hardware quirk
==============
IND reproduces the JMP ($xxFF) bug: the high byte of the target is read from
the start of the pointer's page rather than the next page.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

/// The twelve 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    /// IMP - no operand bytes; the operand (if any) is the accumulator.
    Implied,
    /// IMM - operand is the byte following the opcode.
    Immediate,
    /// ZP0 - one-byte address in page zero.
    ZeroPage,
    /// ZPX - zero page offset by X, wrapping in page zero.
    ZeroPageX,
    /// ZPY - zero page offset by Y, wrapping in page zero.
    ZeroPageY,
    /// REL - signed one-byte branch displacement.
    Relative,
    /// ABS - full 16-bit address.
    Absolute,
    /// ABX - absolute offset by X.
    AbsoluteX,
    /// ABY - absolute offset by Y.
    AbsoluteY,
    /// IND - 16-bit pointer to the target (JMP only).
    Indirect,
    /// IZX - (zp,X): zero-page pointer pre-indexed by X.
    IndexedIndirect,
    /// IZY - (zp),Y: zero-page pointer post-indexed by Y.
    IndirectIndexed,
}

impl AddrMode {
    /// Three-letter tag used in traces.
    pub const fn tag(self) -> &'static str {
        match self {
            AddrMode::Implied => "IMP",
            AddrMode::Immediate => "IMM",
            AddrMode::ZeroPage => "ZP0",
            AddrMode::ZeroPageX => "ZPX",
            AddrMode::ZeroPageY => "ZPY",
            AddrMode::Relative => "REL",
            AddrMode::Absolute => "ABS",
            AddrMode::AbsoluteX => "ABX",
            AddrMode::AbsoluteY => "ABY",
            AddrMode::Indirect => "IND",
            AddrMode::IndexedIndirect => "IZX",
            AddrMode::IndirectIndexed => "IZY",
        }
    }

    /// Resolve the operand location for the in-flight instruction.
    /// Returns true when this mode may need one extra cycle.
    pub fn resolve(self, cpu: &mut CpuState, bus: &mut Bus) -> bool {
        match self {
            AddrMode::Implied => imp(cpu),
            AddrMode::Immediate => imm(cpu),
            AddrMode::ZeroPage => zp_indexed(cpu, bus, 0),
            AddrMode::ZeroPageX => {
                let x = cpu.x;
                zp_indexed(cpu, bus, x)
            }
            AddrMode::ZeroPageY => {
                let y = cpu.y;
                zp_indexed(cpu, bus, y)
            }
            AddrMode::Relative => rel(cpu, bus),
            AddrMode::Absolute => abs_indexed(cpu, bus, 0),
            AddrMode::AbsoluteX => {
                let x = cpu.x;
                abs_indexed(cpu, bus, x)
            }
            AddrMode::AbsoluteY => {
                let y = cpu.y;
                abs_indexed(cpu, bus, y)
            }
            AddrMode::Indirect => ind(cpu, bus),
            AddrMode::IndexedIndirect => izx(cpu, bus),
            AddrMode::IndirectIndexed => izy(cpu, bus),
        }
    }
}

#[inline]
fn page_crossed(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

fn imp(cpu: &mut CpuState) -> bool {
    cpu.fetched = cpu.a;
    false
}

fn imm(cpu: &mut CpuState) -> bool {
    cpu.addr_abs = cpu.pc;
    cpu.pc = cpu.pc.wrapping_add(1);
    false
}

fn zp_indexed(cpu: &mut CpuState, bus: &mut Bus, index: u8) -> bool {
    let base = cpu.fetch_u8(bus);
    cpu.addr_abs = base.wrapping_add(index) as u16;
    false
}

fn rel(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let offset = cpu.fetch_u8(bus) as u16;
    cpu.addr_rel = if offset & 0x80 != 0 { offset | 0xFF00 } else { offset };
    false
}

fn abs_indexed(cpu: &mut CpuState, bus: &mut Bus, index: u8) -> bool {
    let base = cpu.fetch_u16(bus);
    cpu.addr_abs = base.wrapping_add(index as u16);
    page_crossed(base, cpu.addr_abs)
}

fn ind(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let ptr = cpu.fetch_u16(bus);
    let lo = bus.read(ptr, false) as u16;
    let hi_addr = if ptr & 0x00FF == 0x00FF {
        ptr & 0xFF00
    } else {
        ptr.wrapping_add(1)
    };
    let hi = bus.read(hi_addr, false) as u16;
    cpu.addr_abs = (hi << 8) | lo;
    false
}

fn izx(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let zp = cpu.fetch_u8(bus).wrapping_add(cpu.x);
    cpu.addr_abs = read_word_zp(bus, zp);
    false
}

fn izy(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let zp = cpu.fetch_u8(bus);
    let base = read_word_zp(bus, zp);
    cpu.addr_abs = base.wrapping_add(cpu.y as u16);
    page_crossed(base, cpu.addr_abs)
}

/// Read a 16-bit pointer from page zero; the high byte wraps within the page.
#[inline]
fn read_word_zp(bus: &mut Bus, base: u8) -> u16 {
    let lo = bus.read(base as u16, false) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16, false) as u16;
    (hi << 8) | lo
}

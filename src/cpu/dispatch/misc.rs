/*!
misc.rs - Transfers / Stack / Flag handlers plus NOP and the unknown opcode

Transfers:
  TAX TAY TXA TYA TSX set N, Z from the destination. TXS touches no flags.

Stack:
  PHA  push A
  PLA  pull A, set N, Z
  PHP  push status with B and U set in the pushed byte (live flags untouched)
  PLP  pull status, force U

Flags:
  CLC SEC CLI SEI CLD SED CLV

NOP is two cycles for $EA; the unofficial slots reuse it with their own table
timing. A small set of those (abs,X-shaped on real silicon) report that they
could take the page-cross cycle, but they decode as Implied here so the bonus
never materializes. XXX (`???`) does nothing beyond its table cycles.
*/

use crate::bus::Bus;
use crate::cpu::state::{CpuState, Flags};

// Transfers

pub(super) fn tax(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    false
}

pub(super) fn tay(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    false
}

pub(super) fn txa(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    false
}

pub(super) fn tya(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    false
}

pub(super) fn tsx(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    false
}

pub(super) fn txs(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.sp = cpu.x;
    false
}

// Stack

pub(super) fn pha(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let a = cpu.a;
    cpu.push(bus, a);
    false
}

pub(super) fn pla(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.a = cpu.pull(bus);
    cpu.update_zn(cpu.a);
    false
}

pub(super) fn php(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let pushed = (cpu.status | Flags::BREAK | Flags::UNUSED).bits();
    cpu.push(bus, pushed);
    false
}

pub(super) fn plp(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let v = cpu.pull(bus);
    cpu.set_status_bits(v);
    cpu.set_flag(Flags::UNUSED, true);
    false
}

// Flags

pub(super) fn clc(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::CARRY, false);
    false
}

pub(super) fn sec(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::CARRY, true);
    false
}

pub(super) fn cli(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::INTERRUPT_DISABLE, false);
    false
}

pub(super) fn sei(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::INTERRUPT_DISABLE, true);
    false
}

pub(super) fn cld(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::DECIMAL, false);
    false
}

pub(super) fn sed(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::DECIMAL, true);
    false
}

pub(super) fn clv(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.set_flag(Flags::OVERFLOW, false);
    false
}

// NOP / unknown

/// Opcodes whose NOP form reports it could use the page-cross cycle.
const NOP_BONUS_OPCODES: [u8; 6] = [0x1C, 0x3C, 0x5C, 0x7C, 0xDC, 0xFC];

pub(super) fn nop(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    NOP_BONUS_OPCODES.contains(&cpu.opcode)
}

pub(super) fn xxx(_cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    false
}

/*!
logical.rs - AND / ORA / EOR / BIT operation handlers

AND, ORA, EOR combine A with the operand and set N, Z from the result. They
can use the page-cross cycle.

BIT tests A & M: Z from the AND, N and V copied from bits 7 and 6 of M. A is
unchanged. It never asks for the extra cycle.
*/

use crate::bus::Bus;
use crate::cpu::execute::fetch;
use crate::cpu::state::{CpuState, Flags};

pub(super) fn and(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.a &= m;
    cpu.update_zn(cpu.a);
    true
}

pub(super) fn ora(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.a |= m;
    cpu.update_zn(cpu.a);
    true
}

pub(super) fn eor(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.a ^= m;
    cpu.update_zn(cpu.a);
    true
}

pub(super) fn bit(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = (cpu.a & m) as u16;
    cpu.set_flag(Flags::ZERO, cpu.temp & 0x00FF == 0);
    cpu.set_flag(Flags::NEGATIVE, m & 0x80 != 0);
    cpu.set_flag(Flags::OVERFLOW, m & 0x40 != 0);
    false
}

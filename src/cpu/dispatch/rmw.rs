/*!
rmw.rs - Shift / rotate and increment / decrement handlers

Covers ASL, LSR, ROL, ROR (accumulator or memory), INC/DEC on memory and
INX/INY/DEX/DEY on the index registers.

Notes
=====
- The accumulator form of a shift is the Implied table entry; `write_back`
  picks the destination from the addressing mode.
- None of these take the page-cross bonus. The abs,X memory forms carry the
  fixed 7-cycle timing from the table.
*/

use crate::bus::Bus;
use crate::cpu::execute::{fetch, write_back};
use crate::cpu::state::{CpuState, Flags};

pub(super) fn asl(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = (m as u16) << 1;
    cpu.set_flag(Flags::CARRY, (cpu.temp & 0xFF00) != 0);
    cpu.update_zn((cpu.temp & 0x00FF) as u8);
    let r = cpu.temp;
    write_back(cpu, bus, r);
    false
}

pub(super) fn lsr(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.set_flag(Flags::CARRY, (m & 0x01) != 0);
    cpu.temp = (m >> 1) as u16;
    cpu.update_zn((cpu.temp & 0x00FF) as u8);
    let r = cpu.temp;
    write_back(cpu, bus, r);
    false
}

pub(super) fn rol(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = ((m as u16) << 1) | cpu.carry_bit() as u16;
    cpu.set_flag(Flags::CARRY, (cpu.temp & 0xFF00) != 0);
    cpu.update_zn((cpu.temp & 0x00FF) as u8);
    let r = cpu.temp;
    write_back(cpu, bus, r);
    false
}

pub(super) fn ror(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = ((cpu.carry_bit() as u16) << 7) | (m >> 1) as u16;
    cpu.set_flag(Flags::CARRY, (m & 0x01) != 0);
    cpu.update_zn((cpu.temp & 0x00FF) as u8);
    let r = cpu.temp;
    write_back(cpu, bus, r);
    false
}

pub(super) fn inc(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = (m as u16) + 1;
    let v = (cpu.temp & 0x00FF) as u8;
    bus.write(cpu.addr_abs, v);
    cpu.update_zn(v);
    false
}

pub(super) fn dec(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    cpu.temp = (m as u16).wrapping_sub(1);
    let v = (cpu.temp & 0x00FF) as u8;
    bus.write(cpu.addr_abs, v);
    cpu.update_zn(v);
    false
}

pub(super) fn inx(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    false
}

pub(super) fn iny(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    false
}

pub(super) fn dex(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    false
}

pub(super) fn dey(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    false
}

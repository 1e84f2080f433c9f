/*!
compare.rs - CMP / CPX / CPY operation handlers

register - M is computed in the 16-bit scratch:
  C = register >= M
  Z, N from the low byte of the difference

Only CMP can use the page-cross cycle; CPX and CPY have no indexed modes.
*/

use crate::bus::Bus;
use crate::cpu::execute::{compare, fetch};
use crate::cpu::state::CpuState;

pub(super) fn cmp(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    let a = cpu.a;
    compare(cpu, a, m);
    true
}

pub(super) fn cpx(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    let x = cpu.x;
    compare(cpu, x, m);
    false
}

pub(super) fn cpy(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    let y = cpu.y;
    compare(cpu, y, m);
    false
}

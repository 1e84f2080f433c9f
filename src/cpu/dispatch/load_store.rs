/*!
load_store.rs - LDA / LDX / LDY / STA / STX / STY operation handlers

Loads set N, Z and can use the page-cross cycle. Stores touch no flags and
never take the bonus; their indexed forms already carry the fixed extra cycle
in the table (e.g. STA abs,X = 5).
*/

use crate::bus::Bus;
use crate::cpu::execute::fetch;
use crate::cpu::state::CpuState;

pub(super) fn lda(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.a = fetch(cpu, bus);
    cpu.update_zn(cpu.a);
    true
}

pub(super) fn ldx(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.x = fetch(cpu, bus);
    cpu.update_zn(cpu.x);
    true
}

pub(super) fn ldy(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.y = fetch(cpu, bus);
    cpu.update_zn(cpu.y);
    true
}

pub(super) fn sta(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    bus.write(cpu.addr_abs, cpu.a);
    false
}

pub(super) fn stx(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    bus.write(cpu.addr_abs, cpu.x);
    false
}

pub(super) fn sty(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    bus.write(cpu.addr_abs, cpu.y);
    false
}

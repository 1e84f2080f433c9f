/*!
execute.rs - Shared instruction semantic helpers (operand fetch, ALU core,
write-back, branch)

Purpose
=======
The opcode-family handlers in `dispatch/` are thin; the pieces several
families share live here so the flag rules exist exactly once:

```text
fetch           operand fetch honouring the Implied (accumulator) mode
write_back      store a shift/rotate result to A or memory
add_with_carry  ADC core (SBC reuses it with the operand inverted)
compare         CMP/CPX/CPY flag derivation
branch_if       conditional relative branch with taken / page-cross cycles
```

All arithmetic is done in the 16-bit `temp` scratch before truncation.
*/

use crate::bus::Bus;
use crate::cpu::addressing::AddrMode;
use crate::cpu::state::{CpuState, Flags};
use crate::cpu::table::lookup;

/// True when the in-flight instruction addresses the accumulator.
#[inline]
pub(crate) fn is_implied(cpu: &CpuState) -> bool {
    lookup(cpu.opcode).mode == AddrMode::Implied
}

/// Load the ALU operand into `fetched` and return it.
///
/// For Implied mode the addressing phase already latched A into `fetched`,
/// so memory is not touched.
#[inline]
pub(crate) fn fetch(cpu: &mut CpuState, bus: &mut Bus) -> u8 {
    if !is_implied(cpu) {
        cpu.fetched = bus.read(cpu.addr_abs, false);
    }
    cpu.fetched
}

/// Store the low byte of a shift/rotate result in A (Implied) or at `addr_abs`.
#[inline]
pub(crate) fn write_back(cpu: &mut CpuState, bus: &mut Bus, value: u16) {
    let v = (value & 0x00FF) as u8;
    if is_implied(cpu) {
        cpu.a = v;
    } else {
        bus.write(cpu.addr_abs, v);
    }
}

/// A = A + operand + C, with C, V, N, Z.
///
/// Overflow: `~(A ^ M) & (A ^ R)` tested on bit 7.
pub(crate) fn add_with_carry(cpu: &mut CpuState, operand: u8) {
    let a = cpu.a as u16;
    let m = operand as u16;
    cpu.temp = a + m + cpu.carry_bit() as u16;
    let r = cpu.temp;

    cpu.set_flag(Flags::CARRY, r > 0x00FF);
    cpu.set_flag(Flags::OVERFLOW, (!(a ^ m) & (a ^ r) & 0x0080) != 0);
    cpu.update_zn((r & 0x00FF) as u8);
    cpu.a = (r & 0x00FF) as u8;
}

/// register - operand in `temp`; C when register >= operand, Z/N from the low byte.
pub(crate) fn compare(cpu: &mut CpuState, register: u8, operand: u8) {
    cpu.temp = (register as u16).wrapping_sub(operand as u16);
    cpu.set_flag(Flags::CARRY, register >= operand);
    cpu.update_zn((cpu.temp & 0x00FF) as u8);
}

/// Take the branch when `condition` holds: +1 cycle, +1 more if the target
/// is on a different page than the instruction following the branch.
pub(crate) fn branch_if(cpu: &mut CpuState, condition: bool) {
    if !condition {
        return;
    }
    cpu.cycles += 1;
    cpu.addr_abs = cpu.pc.wrapping_add(cpu.addr_rel);
    if (cpu.addr_abs & 0xFF00) != (cpu.pc & 0xFF00) {
        cpu.cycles += 1;
    }
    cpu.pc = cpu.addr_abs;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/*!
branches.rs - Relative branch handlers (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (from the table).
Taken: +1 cycle.
Taken and the target is on another page than the next instruction: +1 more.

The branch adds these cycles itself; it never asks for the addressing-mode
bonus (REL never signals one anyway).
*/

use crate::bus::Bus;
use crate::cpu::execute::branch_if;
use crate::cpu::state::{CpuState, Flags};

pub(super) fn bcc(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = !cpu.flag(Flags::CARRY);
    branch_if(cpu, taken);
    false
}

pub(super) fn bcs(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = cpu.flag(Flags::CARRY);
    branch_if(cpu, taken);
    false
}

pub(super) fn beq(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = cpu.flag(Flags::ZERO);
    branch_if(cpu, taken);
    false
}

pub(super) fn bne(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = !cpu.flag(Flags::ZERO);
    branch_if(cpu, taken);
    false
}

pub(super) fn bmi(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = cpu.flag(Flags::NEGATIVE);
    branch_if(cpu, taken);
    false
}

pub(super) fn bpl(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = !cpu.flag(Flags::NEGATIVE);
    branch_if(cpu, taken);
    false
}

pub(super) fn bvc(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = !cpu.flag(Flags::OVERFLOW);
    branch_if(cpu, taken);
    false
}

pub(super) fn bvs(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    let taken = cpu.flag(Flags::OVERFLOW);
    branch_if(cpu, taken);
    false
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{setup, setup_at};

    #[test]
    fn branch_not_taken_base_cycles() {
        // BCS +2 with carry clear after reset
        let mut cpu = setup(&[0xB0, 0x02, 0xEA]);
        assert_eq!(cpu.step_instruction(), 2);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn branch_taken_no_page_cross() {
        // BCC +2; NOP; NOP; LDA #$01
        let mut cpu = setup(&[0x90, 0x02, 0xEA, 0xEA, 0xA9, 0x01]);
        assert_eq!(cpu.step_instruction(), 3);
        assert_eq!(cpu.pc(), 0x8004);
    }

    #[test]
    fn branch_taken_page_cross() {
        // BNE +1 at $80FD: next instruction $80FF, target $8100
        let mut cpu = setup_at(0x80FD, &[0xD0, 0x01]);
        assert_eq!(cpu.step_instruction(), 4);
        assert_eq!(cpu.pc(), 0x8100);
    }

    #[test]
    fn branch_backwards_across_page() {
        // BPL -4 at $8100: next $8102, target $80FE
        let mut cpu = setup_at(0x8100, &[0x10, 0xFC]);
        assert_eq!(cpu.step_instruction(), 4);
        assert_eq!(cpu.pc(), 0x80FE);
    }

    #[test]
    fn each_branch_follows_its_flag() {
        // SEC; BCS +0 (taken, 3 cycles); CLV; BVS +0 (not taken, 2 cycles)
        let mut cpu = setup(&[0x38, 0xB0, 0x00, 0xB8, 0x70, 0x00]);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 3);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 2);
    }

    #[test]
    fn beq_and_bmi_after_load() {
        // LDA #$00; BEQ +0 (taken); LDA #$80; BMI +0 (taken); BPL +0 (not taken)
        let mut cpu = setup(&[0xA9, 0x00, 0xF0, 0x00, 0xA9, 0x80, 0x30, 0x00, 0x10, 0x00]);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 3);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 3);
        assert_eq!(cpu.step_instruction(), 2);
        assert_eq!(cpu.pc(), 0x800A);
    }
}

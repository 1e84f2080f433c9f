/*!
arithmetic.rs - ADC / SBC operation handlers

ADC: A = A + M + C
SBC: A = A - M - (1 - C), computed as ADC with M inverted, so borrow is the
     complement of carry and the flag derivation is shared.

Flags out: C, V, N, Z. Decimal mode is ignored.

Both operations signal that they can use the addressing-mode page-cross cycle.
*/

use crate::bus::Bus;
use crate::cpu::execute::{add_with_carry, fetch};
use crate::cpu::state::CpuState;

pub(super) fn adc(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    add_with_carry(cpu, m);
    true
}

pub(super) fn sbc(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let m = fetch(cpu, bus);
    add_with_carry(cpu, m ^ 0xFF);
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::Flags;
    use crate::test_utils::setup;

    #[test]
    fn adc_overflow_scenario() {
        // CLC; LDA #$50; ADC #$50
        let mut cpu = setup(&[0x18, 0xA9, 0x50, 0x69, 0x50]);
        cpu.step_instruction();
        cpu.step_instruction();
        cpu.step_instruction();
        assert_eq!(cpu.a(), 0xA0);
        assert!(!cpu.flag(Flags::CARRY));
        assert!(cpu.flag(Flags::OVERFLOW));
        assert!(cpu.flag(Flags::NEGATIVE));
        assert!(!cpu.flag(Flags::ZERO));
    }

    #[test]
    fn adc_abs_x_page_cross_penalty() {
        // LDX #$01; ADC $12FF,X
        let mut cpu = setup(&[0xA2, 0x01, 0x7D, 0xFF, 0x12]);
        assert_eq!(cpu.step_instruction(), 2);
        assert_eq!(cpu.step_instruction(), 5);
    }

    #[test]
    fn adc_abs_x_same_page_base_cycles() {
        // LDX #$01; ADC $1200,X
        let mut cpu = setup(&[0xA2, 0x01, 0x7D, 0x00, 0x12]);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 4);
    }

    #[test]
    fn sbc_indirect_y_page_cross_penalty() {
        // LDY #$01; SBC ($10),Y   (pointer $12FF, so adding Y crosses)
        let mut cpu = setup(&[0xA0, 0x01, 0xF1, 0x10]);
        cpu.bus_mut().write(0x0010, 0xFF);
        cpu.bus_mut().write(0x0011, 0x12);
        assert_eq!(cpu.step_instruction(), 2);
        assert_eq!(cpu.step_instruction(), 6);
    }

    #[test]
    fn sbc_with_carry_set_is_plain_subtraction() {
        // LDA #$05; SEC; SBC #$02
        let mut cpu = setup(&[0xA9, 0x05, 0x38, 0xE9, 0x02]);
        for _ in 0..3 {
            cpu.step_instruction();
        }
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.flag(Flags::CARRY));
        assert!(!cpu.flag(Flags::OVERFLOW));
    }

    #[test]
    fn sbc_borrow_clears_carry() {
        // LDA #$00; SEC; SBC #$01
        let mut cpu = setup(&[0xA9, 0x00, 0x38, 0xE9, 0x01]);
        for _ in 0..3 {
            cpu.step_instruction();
        }
        assert_eq!(cpu.a(), 0xFF);
        assert!(!cpu.flag(Flags::CARRY));
        assert!(cpu.flag(Flags::NEGATIVE));
    }

    #[test]
    fn sbc_signed_overflow() {
        // LDA #$80; SEC; SBC #$01  (-128 - 1 overflows to +127)
        let mut cpu = setup(&[0xA9, 0x80, 0x38, 0xE9, 0x01]);
        for _ in 0..3 {
            cpu.step_instruction();
        }
        assert_eq!(cpu.a(), 0x7F);
        assert!(cpu.flag(Flags::OVERFLOW));
        assert!(cpu.flag(Flags::CARRY));
    }

    #[test]
    fn decimal_flag_does_not_change_arithmetic() {
        // SED; CLC; LDA #$09; ADC #$01
        let mut cpu = setup(&[0xF8, 0x18, 0xA9, 0x09, 0x69, 0x01]);
        for _ in 0..4 {
            cpu.step_instruction();
        }
        assert_eq!(cpu.a(), 0x0A);
        assert!(cpu.flag(Flags::DECIMAL));
    }
}

/*!
control_flow.rs - JMP / JSR / RTS / BRK / RTI operation handlers

Overview
========
Instructions that redirect the program counter through the stack or a
vector:

  JMP abs / (ind)  PC = resolved address (the indirect page-wrap quirk is
                   handled by the addressing mode)
  JSR abs          push PC - 1 (high, then low), PC = target
  RTS              pull low, then high, PC = pulled + 1
  BRK              software interrupt through $FFFE/$FFFF
  RTI              pull status, then PC

Stack Frames
============
BRK leaves the same three-byte frame an interrupt does:

```text
$0100+SP+3  PC high
$0100+SP+2  PC low
$0100+SP+1  status (B set in the pushed copy only)
```

The PC pushed by BRK is the opcode address + 2; the byte after BRK is a
padding byte skipped on return.

None of these instructions take the page-cross bonus.
*/

use crate::bus::{Bus, Vector};
use crate::cpu::state::{CpuState, Flags};

pub(super) fn jmp(cpu: &mut CpuState, _bus: &mut Bus) -> bool {
    cpu.pc = cpu.addr_abs;
    false
}

pub(super) fn jsr(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let ret = cpu.pc.wrapping_sub(1);
    cpu.push_word(bus, ret);
    cpu.pc = cpu.addr_abs;
    false
}

pub(super) fn rts(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.pc = cpu.pull_word(bus).wrapping_add(1);
    false
}

pub(super) fn brk(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.set_flag(Flags::INTERRUPT_DISABLE, true);
    let ret = cpu.pc;
    cpu.push_word(bus, ret);

    cpu.set_flag(Flags::BREAK, true);
    let status = cpu.status_bits();
    cpu.push(bus, status);
    cpu.set_flag(Flags::BREAK, false);

    cpu.pc = bus.read_word(Vector::Irq.addr());
    false
}

pub(super) fn rti(cpu: &mut CpuState, bus: &mut Bus) -> bool {
    let status = cpu.pull(bus);
    cpu.set_status_bits(status);
    cpu.set_flag(Flags::BREAK, false);
    cpu.set_flag(Flags::UNUSED, false);

    cpu.pc = cpu.pull_word(bus);
    false
}

#[cfg(test)]
mod tests {
    use crate::bus::Vector;
    use crate::cpu::state::Flags;
    use crate::test_utils::setup;

    #[test]
    fn jmp_absolute() {
        let mut cpu = setup(&[0x4C, 0x34, 0x12]);
        assert_eq!(cpu.step_instruction(), 3);
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn jmp_indirect_page_wrap_quirk() {
        // JMP ($02FF): low from $02FF, high from $0200
        let mut cpu = setup(&[0x6C, 0xFF, 0x02]);
        cpu.bus_mut().write(0x02FF, 0x34);
        cpu.bus_mut().write(0x0200, 0x12);
        cpu.bus_mut().write(0x0300, 0x99);
        assert_eq!(cpu.step_instruction(), 5);
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn jsr_pushes_last_operand_byte_address() {
        // $8000: JSR $9000
        let mut cpu = setup(&[0x20, 0x00, 0x90]);
        assert_eq!(cpu.step_instruction(), 6);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFB);
        assert_eq!(cpu.bus().peek(0x01FD), 0x80);
        assert_eq!(cpu.bus().peek(0x01FC), 0x02);
    }

    #[test]
    fn jsr_rts_round_trip() {
        // $8000: JSR $8010 ; $8003: NOP ; $8010: RTS
        let mut prg = vec![0xEA; 0x11];
        prg[0..3].copy_from_slice(&[0x20, 0x10, 0x80]);
        prg[0x10] = 0x60;
        let mut cpu = setup(&prg);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 6);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn brk_frame_and_vector() {
        let mut cpu = setup(&[0x00, 0xEA]);
        cpu.bus_mut().set_vector(Vector::Irq, 0x9000);
        assert_eq!(cpu.step_instruction(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(cpu.bus().peek(0x01FD), 0x80);
        assert_eq!(cpu.bus().peek(0x01FC), 0x02);
        let pushed = cpu.bus().peek(0x01FB);
        assert_ne!(pushed & Flags::BREAK.bits(), 0);
        assert_ne!(pushed & Flags::INTERRUPT_DISABLE.bits(), 0);
        assert!(!cpu.flag(Flags::BREAK));
        assert!(cpu.flag(Flags::INTERRUPT_DISABLE));
    }

    #[test]
    fn brk_then_rti_resumes_after_padding_byte() {
        // $8000: BRK ; $8001: pad ; $8002: NOP ; $9000: RTI
        let mut cpu = setup(&[0x00, 0xFF, 0xEA]);
        cpu.bus_mut().set_vector(Vector::Irq, 0x9000);
        cpu.bus_mut().write(0x9000, 0x40);
        cpu.step_instruction();
        assert_eq!(cpu.step_instruction(), 6);
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.sp(), 0xFD);
        // I was set in the pushed copy; B is cleared on the way back.
        assert!(cpu.flag(Flags::INTERRUPT_DISABLE));
        assert!(!cpu.flag(Flags::BREAK));
    }

    #[test]
    fn rti_restores_pushed_status() {
        // Hand-built frame: status $C3, PC $1234
        let mut cpu = setup(&[0x40]);
        cpu.bus_mut().write(0x01FB, 0xC3 | 0x30);
        cpu.bus_mut().write(0x01FC, 0x34);
        cpu.bus_mut().write(0x01FD, 0x12);
        cpu.state_mut().sp = 0xFA;
        cpu.step_instruction();
        assert_eq!(cpu.pc(), 0x1234);
        assert!(cpu.flag(Flags::NEGATIVE));
        assert!(cpu.flag(Flags::OVERFLOW));
        assert!(cpu.flag(Flags::CARRY));
        assert!(cpu.flag(Flags::ZERO));
        assert!(!cpu.flag(Flags::BREAK));
    }
}

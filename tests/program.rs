//! End-to-end programs driven through the public API only.

use r6502::cpu::Flags;
use r6502::{Bus, Cpu, Vector};

const MULTIPLY: &[u8] = &[
    0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xA2, 0x03, 0x8E, 0x01, 0x00, 0xAC, 0x00, 0x00, 0xA9,
    0x00, 0x18, 0x6D, 0x01, 0x00, 0x88, 0xD0, 0xFA, 0x8D, 0x02, 0x00, 0xEA, 0xEA, 0xEA,
];

fn boot(origin: u16, program: &[u8]) -> Cpu {
    let mut bus = Bus::new();
    bus.load(origin, program).unwrap();
    bus.set_vector(Vector::Reset, origin);
    let mut cpu = Cpu::new();
    cpu.connect(bus);
    cpu.reset();
    cpu
}

/// Clock pulse by pulse until PC sits on `target` between instructions.
fn clock_until_pc(cpu: &mut Cpu, target: u16, max_pulses: u64) -> u64 {
    let mut pulses = 0;
    while !(cpu.complete() && cpu.pc() == target) {
        assert!(pulses < max_pulses, "PC never reached ${:04X}", target);
        cpu.clock();
        pulses += 1;
    }
    pulses
}

#[test]
fn multiply_by_repeated_addition() {
    let mut cpu = boot(0x8000, MULTIPLY);
    // Past STA $0002 and three NOPs.
    clock_until_pc(&mut cpu, 0x8019, 10_000);
    for _ in 0..3 {
        cpu.step_instruction();
    }
    assert_eq!(cpu.pc(), 0x801C);
    assert_eq!(cpu.bus().peek(0x0002), 30);
    assert!(cpu.flag(Flags::ZERO));
    assert_eq!(cpu.a(), 30);
    assert_eq!(cpu.y(), 0);
}

#[test]
fn multiply_total_cycle_count() {
    let mut cpu = boot(0x8000, MULTIPLY);
    let pulses = clock_until_pc(&mut cpu, 0x8019, 10_000);
    // reset 8
    // LDX #, STX abs, LDX #, STX abs, LDY abs, LDA #, CLC: 2+4+2+4+4+2+2 = 20
    // 10 x (ADC abs 4 + DEY 2) = 60
    // BNE: 9 taken on the same page (3) + 1 not taken (2) = 29
    // STA abs 4
    assert_eq!(pulses, 8 + 20 + 60 + 29 + 4);
    assert_eq!(cpu.clock_count(), pulses);
}

#[test]
fn complete_after_exactly_eight_reset_pulses() {
    let mut cpu = boot(0x8000, &[0xEA]);
    assert!(!cpu.complete());
    for n in 1..=8 {
        cpu.clock();
        assert_eq!(cpu.complete(), n == 8, "after {} pulses", n);
    }
}

#[test]
fn reset_twice_is_identical() {
    let mut cpu = boot(0x8000, MULTIPLY);
    cpu.reset();
    let first = *cpu.state();
    cpu.reset();
    assert_eq!(*cpu.state(), first);
    assert_eq!(first.pc, 0x8000);
}

#[test]
fn subroutine_call_and_stack_round_trip() {
    // $0600: LDA #$99 ; JSR $0610 ; STA $00 ; NOP
    // $0610: PHA ; LDA #$01 ; PLA ; RTS
    let mut prg = vec![0xEA; 0x16];
    prg[..8].copy_from_slice(&[0xA9, 0x99, 0x20, 0x10, 0x06, 0x85, 0x00, 0xEA]);
    prg[0x10..0x16].copy_from_slice(&[0x48, 0xA9, 0x01, 0x68, 0x60, 0xEA]);
    let mut cpu = boot(0x0600, &prg);
    clock_until_pc(&mut cpu, 0x0607, 1_000);
    assert_eq!(cpu.bus().peek(0x0000), 0x99);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag(Flags::NEGATIVE));
}

#[test]
fn countdown_with_cmp_and_branch_back() {
    // LDX #$00 ; loop: INX ; STX $10 ; CPX #$05 ; BNE loop ; NOP
    let mut cpu = boot(
        0xC000,
        &[0xA2, 0x00, 0xE8, 0x86, 0x10, 0xE0, 0x05, 0xD0, 0xF9, 0xEA],
    );
    clock_until_pc(&mut cpu, 0xC009, 1_000);
    assert_eq!(cpu.x(), 5);
    assert_eq!(cpu.bus().peek(0x0010), 5);
    assert!(cpu.flag(Flags::ZERO));
    assert!(cpu.flag(Flags::CARRY));
}

#[test]
fn nmi_handler_runs_and_returns() {
    // main at $8000: NOP NOP ; handler at $9000: INC $20 ; RTI
    let mut bus = Bus::new();
    bus.load(0x8000, &[0xEA, 0xEA, 0xEA]).unwrap();
    bus.load(0x9000, &[0xE6, 0x20, 0x40]).unwrap();
    bus.set_vector(Vector::Reset, 0x8000);
    bus.set_vector(Vector::Nmi, 0x9000);
    let mut cpu = Cpu::with_bus(bus);
    cpu.reset();
    cpu.step_instruction();
    cpu.step_instruction();
    assert_eq!(cpu.pc(), 0x8001);

    cpu.nmi();
    assert_eq!(cpu.step_instruction(), 8);
    cpu.step_instruction();
    cpu.step_instruction();
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.bus().peek(0x0020), 1);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn undocumented_opcodes_only_burn_cycles() {
    // $02 (??? 2), $03 (??? 8), $FF (??? 7), then LDA #$01
    let mut cpu = boot(0x8000, &[0x02, 0x03, 0xFF, 0xA9, 0x01]);
    cpu.step_instruction();
    let before = *cpu.state();
    assert_eq!(cpu.step_instruction(), 2);
    assert_eq!(cpu.step_instruction(), 8);
    assert_eq!(cpu.step_instruction(), 7);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(
        (cpu.a(), cpu.x(), cpu.y(), cpu.sp()),
        (before.a, before.x, before.y, before.sp)
    );
    assert_eq!(cpu.status(), before.status.bits());
    cpu.step_instruction();
    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.current_instruction().name, "LDA");
}

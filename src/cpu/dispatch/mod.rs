/*!
dispatch - Clock pulse orchestration, operation routing and interrupt entry

Overview
========
One call to `clock` is one pulse. When the previous instruction has drained
its cycles the pulse does all of the work for the next one at once:

1. Read the opcode at PC, advance PC, force U.
2. Seed `cycles` from the table entry.
3. Resolve the addressing mode (may signal a page cross).
4. Run the operation (may signal that it can use the extra cycle).
5. Add one cycle only when both signals are set, then force U again.

Every pulse, busy or not, bumps `clock_count` and consumes one cycle. The
remaining pulses of an instruction are idle countdown.

Families
========
Operation handlers are grouped by family in the submodules; each has the
signature `fn(&mut CpuState, &mut Bus) -> bool` where the return value is
the operation's half of the extra-cycle signal.

Interrupts
==========
`irq` (maskable, vector $FFFE, 7 cycles) and `nmi` (vector $FFFA, 8 cycles)
share `service_interrupt`. Both overwrite `cycles` with the entry cost, so
callers raise them on instruction boundaries.
*/

use crate::bus::{Bus, Vector};
use crate::cpu::state::{CpuState, Flags};
use crate::cpu::table::{Operation, lookup};

mod arithmetic;
mod branches;
mod compare;
mod control_flow;
mod load_store;
mod logical;
mod misc;
mod rmw;

impl Operation {
    /// Run this operation against already-resolved operands.
    ///
    /// Returns true when the operation can take the page-cross cycle.
    pub(crate) fn execute(self, cpu: &mut CpuState, bus: &mut Bus) -> bool {
        use Operation::*;
        match self {
            Adc => arithmetic::adc(cpu, bus),
            Sbc => arithmetic::sbc(cpu, bus),

            And => logical::and(cpu, bus),
            Ora => logical::ora(cpu, bus),
            Eor => logical::eor(cpu, bus),
            Bit => logical::bit(cpu, bus),

            Cmp => compare::cmp(cpu, bus),
            Cpx => compare::cpx(cpu, bus),
            Cpy => compare::cpy(cpu, bus),

            Bcc => branches::bcc(cpu, bus),
            Bcs => branches::bcs(cpu, bus),
            Beq => branches::beq(cpu, bus),
            Bne => branches::bne(cpu, bus),
            Bmi => branches::bmi(cpu, bus),
            Bpl => branches::bpl(cpu, bus),
            Bvc => branches::bvc(cpu, bus),
            Bvs => branches::bvs(cpu, bus),

            Lda => load_store::lda(cpu, bus),
            Ldx => load_store::ldx(cpu, bus),
            Ldy => load_store::ldy(cpu, bus),
            Sta => load_store::sta(cpu, bus),
            Stx => load_store::stx(cpu, bus),
            Sty => load_store::sty(cpu, bus),

            Asl => rmw::asl(cpu, bus),
            Lsr => rmw::lsr(cpu, bus),
            Rol => rmw::rol(cpu, bus),
            Ror => rmw::ror(cpu, bus),
            Inc => rmw::inc(cpu, bus),
            Dec => rmw::dec(cpu, bus),
            Inx => rmw::inx(cpu, bus),
            Iny => rmw::iny(cpu, bus),
            Dex => rmw::dex(cpu, bus),
            Dey => rmw::dey(cpu, bus),

            Jmp => control_flow::jmp(cpu, bus),
            Jsr => control_flow::jsr(cpu, bus),
            Rts => control_flow::rts(cpu, bus),
            Brk => control_flow::brk(cpu, bus),
            Rti => control_flow::rti(cpu, bus),

            Tax => misc::tax(cpu, bus),
            Tay => misc::tay(cpu, bus),
            Txa => misc::txa(cpu, bus),
            Tya => misc::tya(cpu, bus),
            Tsx => misc::tsx(cpu, bus),
            Txs => misc::txs(cpu, bus),
            Pha => misc::pha(cpu, bus),
            Pla => misc::pla(cpu, bus),
            Php => misc::php(cpu, bus),
            Plp => misc::plp(cpu, bus),
            Clc => misc::clc(cpu, bus),
            Sec => misc::sec(cpu, bus),
            Cli => misc::cli(cpu, bus),
            Sei => misc::sei(cpu, bus),
            Cld => misc::cld(cpu, bus),
            Sed => misc::sed(cpu, bus),
            Clv => misc::clv(cpu, bus),
            Nop => misc::nop(cpu, bus),
            Xxx => misc::xxx(cpu, bus),
        }
    }
}

/// Advance the CPU by one clock pulse.
pub(crate) fn clock(cpu: &mut CpuState, bus: &mut Bus) {
    if cpu.cycles == 0 {
        let pc = cpu.pc;
        cpu.opcode = cpu.fetch_u8(bus);
        cpu.set_flag(Flags::UNUSED, true);

        let instr = lookup(cpu.opcode);
        cpu.cycles = instr.cycles;

        log::trace!(
            "{:04X}  {:02X}  {} {:<3} ({})  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            cpu.opcode,
            instr.name,
            instr.mode.tag(),
            instr.cycles,
            cpu.a,
            cpu.x,
            cpu.y,
            cpu.status_bits(),
            cpu.sp,
            cpu.clock_count
        );

        let mode_extra = instr.mode.resolve(cpu, bus);
        let op_extra = instr.op.execute(cpu, bus);
        cpu.cycles += (mode_extra & op_extra) as u8;

        cpu.set_flag(Flags::UNUSED, true);
    }

    cpu.clock_count = cpu.clock_count.wrapping_add(1);
    cpu.cycles = cpu.cycles.wrapping_sub(1);
}

/// Maskable interrupt request; ignored while I is set.
pub(crate) fn irq(cpu: &mut CpuState, bus: &mut Bus) {
    if cpu.flag(Flags::INTERRUPT_DISABLE) {
        return;
    }
    service_interrupt(cpu, bus, Vector::Irq, 7);
}

/// Non-maskable interrupt.
pub(crate) fn nmi(cpu: &mut CpuState, bus: &mut Bus) {
    service_interrupt(cpu, bus, Vector::Nmi, 8);
}

/// Push PC and status (B clear, U and I set), then jump through `vector`.
fn service_interrupt(cpu: &mut CpuState, bus: &mut Bus, vector: Vector, cycles: u8) {
    let pc = cpu.pc;
    cpu.push_word(bus, pc);

    cpu.set_flag(Flags::BREAK, false);
    cpu.set_flag(Flags::UNUSED, true);
    cpu.set_flag(Flags::INTERRUPT_DISABLE, true);
    let status = cpu.status_bits();
    cpu.push(bus, status);

    cpu.pc = bus.read_word(vector.addr());
    cpu.cycles = cycles;

    log::debug!(
        "{:?} taken: return ${:04X}, handler ${:04X}",
        vector,
        pc,
        cpu.pc
    );
}

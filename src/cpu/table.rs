/*!
table.rs - 256-entry opcode table (mnemonic, operation, addressing mode, base cycles)

Purpose
=======
Maps every opcode byte to an immutable `Instruction`. The clock pulse reads the
entry for the fetched opcode, resolves its addressing mode, runs its operation
and seeds the cycle counter from its base cycle count.

Layout
======
Entries are in opcode order, sixteen per row group. Base cycle counts encode
real hardware timing and are the nominal cost before the page-cross bonus and
branch-taken cycles.

Unofficial slots
================
Slots without a documented instruction are named `"???"`. Most point at
`Operation::Xxx` (no effect). Some point at `Operation::Nop`, and 0xEB behaves
as SBC with an accumulator operand, matching the emulator this table derives
from.
*/

use crate::cpu::addressing::AddrMode;

/// Every operation the executor knows. `Xxx` is the catch-all for
/// undocumented opcodes.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    Xxx,
}

impl Operation {
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Xxx => "???",
        }
    }
}

/// One opcode table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub name: &'static str,
    pub op: Operation,
    pub mode: AddrMode,
    pub cycles: u8,
}

/// Table entry for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &OPCODES[opcode as usize]
}

const IMP: AddrMode = AddrMode::Implied;
const IMM: AddrMode = AddrMode::Immediate;
const ZP0: AddrMode = AddrMode::ZeroPage;
const ZPX: AddrMode = AddrMode::ZeroPageX;
const ZPY: AddrMode = AddrMode::ZeroPageY;
const REL: AddrMode = AddrMode::Relative;
const ABS: AddrMode = AddrMode::Absolute;
const ABX: AddrMode = AddrMode::AbsoluteX;
const ABY: AddrMode = AddrMode::AbsoluteY;
const IND: AddrMode = AddrMode::Indirect;
const IZX: AddrMode = AddrMode::IndexedIndirect;
const IZY: AddrMode = AddrMode::IndirectIndexed;

// Documented entry: named after its operation.
macro_rules! e {
    ($op:ident, $mode:ident, $cycles:expr) => {
        Instruction {
            name: Operation::$op.mnemonic(),
            op: Operation::$op,
            mode: $mode,
            cycles: $cycles,
        }
    };
}

// Unofficial slot.
macro_rules! u {
    ($op:ident, $mode:ident, $cycles:expr) => {
        Instruction {
            name: "???",
            op: Operation::$op,
            mode: $mode,
            cycles: $cycles,
        }
    };
}

#[rustfmt::skip]
pub static OPCODES: [Instruction; 256] = [
    // 0x00
    // BRK is Implied on purpose and skips its padding byte itself, so the
    // pushed return address is opcode + 2. Decoding it as IMM would push + 3.
    e!(Brk, IMP, 7), e!(Ora, IZX, 6), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 3), e!(Ora, ZP0, 3), e!(Asl, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Php, IMP, 3), e!(Ora, IMM, 2), e!(Asl, IMP, 2), u!(Xxx, IMP, 2),
    u!(Nop, IMP, 4), e!(Ora, ABS, 4), e!(Asl, ABS, 6), u!(Xxx, IMP, 6),
    // 0x10
    e!(Bpl, REL, 2), e!(Ora, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(Ora, ZPX, 4), e!(Asl, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Clc, IMP, 2), e!(Ora, ABY, 4), u!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(Ora, ABX, 4), e!(Asl, ABX, 7), u!(Xxx, IMP, 7),
    // 0x20
    e!(Jsr, ABS, 6), e!(And, IZX, 6), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    e!(Bit, ZP0, 3), e!(And, ZP0, 3), e!(Rol, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Plp, IMP, 4), e!(And, IMM, 2), e!(Rol, IMP, 2), u!(Xxx, IMP, 2),
    e!(Bit, ABS, 4), e!(And, ABS, 4), e!(Rol, ABS, 6), u!(Xxx, IMP, 6),
    // 0x30
    e!(Bmi, REL, 2), e!(And, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(And, ZPX, 4), e!(Rol, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Sec, IMP, 2), e!(And, ABY, 4), u!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(And, ABX, 4), e!(Rol, ABX, 7), u!(Xxx, IMP, 7),
    // 0x40
    e!(Rti, IMP, 6), e!(Eor, IZX, 6), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 3), e!(Eor, ZP0, 3), e!(Lsr, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Pha, IMP, 3), e!(Eor, IMM, 2), e!(Lsr, IMP, 2), u!(Xxx, IMP, 2),
    e!(Jmp, ABS, 3), e!(Eor, ABS, 4), e!(Lsr, ABS, 6), u!(Xxx, IMP, 6),
    // 0x50
    e!(Bvc, REL, 2), e!(Eor, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(Eor, ZPX, 4), e!(Lsr, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Cli, IMP, 2), e!(Eor, ABY, 4), u!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(Eor, ABX, 4), e!(Lsr, ABX, 7), u!(Xxx, IMP, 7),
    // 0x60
    e!(Rts, IMP, 6), e!(Adc, IZX, 6), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 3), e!(Adc, ZP0, 3), e!(Ror, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Pla, IMP, 4), e!(Adc, IMM, 2), e!(Ror, IMP, 2), u!(Xxx, IMP, 2),
    e!(Jmp, IND, 5), e!(Adc, ABS, 4), e!(Ror, ABS, 6), u!(Xxx, IMP, 6),
    // 0x70
    e!(Bvs, REL, 2), e!(Adc, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(Adc, ZPX, 4), e!(Ror, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Sei, IMP, 2), e!(Adc, ABY, 4), u!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(Adc, ABX, 4), e!(Ror, ABX, 7), u!(Xxx, IMP, 7),
    // 0x80
    u!(Nop, IMP, 2), e!(Sta, IZX, 6), u!(Nop, IMP, 2), u!(Xxx, IMP, 6),
    e!(Sty, ZP0, 3), e!(Sta, ZP0, 3), e!(Stx, ZP0, 3), u!(Xxx, IMP, 3),
    e!(Dey, IMP, 2), u!(Nop, IMP, 2), e!(Txa, IMP, 2), u!(Xxx, IMP, 2),
    e!(Sty, ABS, 4), e!(Sta, ABS, 4), e!(Stx, ABS, 4), u!(Xxx, IMP, 4),
    // 0x90
    e!(Bcc, REL, 2), e!(Sta, IZY, 6), u!(Xxx, IMP, 2), u!(Xxx, IMP, 6),
    e!(Sty, ZPX, 4), e!(Sta, ZPX, 4), e!(Stx, ZPY, 4), u!(Xxx, IMP, 4),
    e!(Tya, IMP, 2), e!(Sta, ABY, 5), e!(Txs, IMP, 2), u!(Xxx, IMP, 5),
    u!(Nop, IMP, 5), e!(Sta, ABX, 5), u!(Xxx, IMP, 5), u!(Xxx, IMP, 5),
    // 0xA0
    e!(Ldy, IMM, 2), e!(Lda, IZX, 6), e!(Ldx, IMM, 2), u!(Xxx, IMP, 6),
    e!(Ldy, ZP0, 3), e!(Lda, ZP0, 3), e!(Ldx, ZP0, 3), u!(Xxx, IMP, 3),
    e!(Tay, IMP, 2), e!(Lda, IMM, 2), e!(Tax, IMP, 2), u!(Xxx, IMP, 2),
    e!(Ldy, ABS, 4), e!(Lda, ABS, 4), e!(Ldx, ABS, 4), u!(Xxx, IMP, 4),
    // 0xB0
    e!(Bcs, REL, 2), e!(Lda, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 5),
    e!(Ldy, ZPX, 4), e!(Lda, ZPX, 4), e!(Ldx, ZPY, 4), u!(Xxx, IMP, 4),
    e!(Clv, IMP, 2), e!(Lda, ABY, 4), e!(Tsx, IMP, 2), u!(Xxx, IMP, 4),
    e!(Ldy, ABX, 4), e!(Lda, ABX, 4), e!(Ldx, ABY, 4), u!(Xxx, IMP, 4),
    // 0xC0
    e!(Cpy, IMM, 2), e!(Cmp, IZX, 6), u!(Nop, IMP, 2), u!(Xxx, IMP, 8),
    e!(Cpy, ZP0, 3), e!(Cmp, ZP0, 3), e!(Dec, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Iny, IMP, 2), e!(Cmp, IMM, 2), e!(Dex, IMP, 2), u!(Xxx, IMP, 2),
    e!(Cpy, ABS, 4), e!(Cmp, ABS, 4), e!(Dec, ABS, 6), u!(Xxx, IMP, 6),
    // 0xD0
    e!(Bne, REL, 2), e!(Cmp, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(Cmp, ZPX, 4), e!(Dec, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Cld, IMP, 2), e!(Cmp, ABY, 4), e!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(Cmp, ABX, 4), e!(Dec, ABX, 7), u!(Xxx, IMP, 7),
    // 0xE0
    e!(Cpx, IMM, 2), e!(Sbc, IZX, 6), u!(Nop, IMP, 2), u!(Xxx, IMP, 8),
    e!(Cpx, ZP0, 3), e!(Sbc, ZP0, 3), e!(Inc, ZP0, 5), u!(Xxx, IMP, 5),
    e!(Inx, IMP, 2), e!(Sbc, IMM, 2), e!(Nop, IMP, 2), u!(Sbc, IMP, 2),
    e!(Cpx, ABS, 4), e!(Sbc, ABS, 4), e!(Inc, ABS, 6), u!(Xxx, IMP, 6),
    // 0xF0
    e!(Beq, REL, 2), e!(Sbc, IZY, 5), u!(Xxx, IMP, 2), u!(Xxx, IMP, 8),
    u!(Nop, IMP, 4), e!(Sbc, ZPX, 4), e!(Inc, ZPX, 6), u!(Xxx, IMP, 6),
    e!(Sed, IMP, 2), e!(Sbc, ABY, 4), e!(Nop, IMP, 2), u!(Xxx, IMP, 7),
    u!(Nop, IMP, 4), e!(Sbc, ABX, 4), e!(Inc, ABX, 7), u!(Xxx, IMP, 7),
];

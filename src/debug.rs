/*!
debug.rs - Textual views of CPU state and memory for front ends.

`StatePanel` renders the register/flag panel a host shows next to a running
program; `dump_page` renders one 256-byte memory page. Both only read: the
panel borrows the CPU immutably and page dumps go through `Bus::peek`.

Panel layout:

```text
STATUS: N V U B D I Z C       (letter when set, '-' when clear)
PC: $8000  A: $00  X: $00  Y: $00  SP: $FD
FETCHED: $00  OPCODE: $A9 (LDA IMM)  CYCLES: 0
TEMP: $0000  ADDR_ABS: $8001  ADDR_REL: $0000  CLOCK: 10
```
*/

use std::fmt;

use crate::bus::Bus;
use crate::cpu::{Cpu, Flags};

/// Flag letters in status-register order, bit 7 first.
const FLAG_LETTERS: [(Flags, char); 8] = [
    (Flags::NEGATIVE, 'N'),
    (Flags::OVERFLOW, 'V'),
    (Flags::UNUSED, 'U'),
    (Flags::BREAK, 'B'),
    (Flags::DECIMAL, 'D'),
    (Flags::INTERRUPT_DISABLE, 'I'),
    (Flags::ZERO, 'Z'),
    (Flags::CARRY, 'C'),
];

/// Compact `NVUBDIZC` string; clear bits shown as `-`.
pub fn flag_string(flags: Flags) -> String {
    FLAG_LETTERS
        .iter()
        .map(|&(f, c)| if flags.contains(f) { c } else { '-' })
        .collect()
}

/// Register panel for one CPU.
pub struct StatePanel<'a> {
    cpu: &'a Cpu,
}

impl<'a> StatePanel<'a> {
    pub fn new(cpu: &'a Cpu) -> Self {
        Self { cpu }
    }
}

impl fmt::Display for StatePanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.cpu;
        let instr = cpu.current_instruction();

        write!(f, "STATUS:")?;
        for c in flag_string(cpu.flags()).chars() {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "PC: ${:04X}  A: ${:02X}  X: ${:02X}  Y: ${:02X}  SP: ${:02X}",
            cpu.pc(),
            cpu.a(),
            cpu.x(),
            cpu.y(),
            cpu.sp()
        )?;
        writeln!(
            f,
            "FETCHED: ${:02X}  OPCODE: ${:02X} ({} {})  CYCLES: {}",
            cpu.fetched(),
            cpu.opcode(),
            instr.name,
            instr.mode.tag(),
            cpu.cycles()
        )?;
        write!(
            f,
            "TEMP: ${:04X}  ADDR_ABS: ${:04X}  ADDR_REL: ${:04X}  CLOCK: {}",
            cpu.temp(),
            cpu.addr_abs(),
            cpu.addr_rel(),
            cpu.clock_count()
        )
    }
}

/// Hex dump of memory page `page` ($pp00-$ppFF), 16 bytes per row.
pub fn dump_page(bus: &Bus, page: u8) -> String {
    let base = (page as u16) << 8;
    let mut out = String::with_capacity(16 * 56);
    for row in 0..16u16 {
        let addr = base | (row << 4);
        out.push_str(&format!("${:04X}:", addr));
        for col in 0..16u16 {
            out.push_str(&format!(" {:02X}", bus.peek(addr | col)));
        }
        out.push('\n');
    }
    out
}

/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs        - Registers, status flags, transient fields, stack helpers.
addressing.rs   - The twelve addressing modes and operand resolution.
execute.rs      - Semantic helpers shared by several families (ALU, branch).
table.rs        - 256-entry opcode table.
dispatch/       - Clock pulse, per-family operation handlers, interrupt entry.
core/           - `Cpu`, which owns the state and the bus it is wired to.
```

Usage:
```rust
use r6502::bus::{Bus, Vector};
use r6502::cpu::Cpu;

let mut bus = Bus::new();
bus.load(0x8000, &[0xA9, 0x01]).unwrap();
bus.set_vector(Vector::Reset, 0x8000);

let mut cpu = Cpu::with_bus(bus);
cpu.reset();
while !cpu.complete() {
    cpu.clock();
}
cpu.step_instruction();
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::AddrMode;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::state::{CpuState, Flags};
pub use crate::cpu::table::{Instruction, OPCODES, Operation, lookup};

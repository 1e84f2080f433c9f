/*!
core::Cpu - 6502 CPU façade owning `CpuState` and the bus it is wired to.

Design
======
- `Cpu` stores the register/transient state and the `Bus`. `connect` swaps
  in a different bus and hands the previous one back, so a host can prepare
  memory first and then bind it.
- `clock` is the only way time advances. `step_instruction` is a
  convenience loop around it for hosts and tests that think in
  instructions.
- `irq` / `nmi` take effect immediately and reload the cycle counter; raise
  them when `complete()` is true.

Accessors mirror every state field so that debuggers never need to reach
into `CpuState` directly.
*/

use crate::bus::{Bus, Vector};
use crate::cpu::dispatch;
use crate::cpu::state::{CpuState, Flags, SP_RESET};
use crate::cpu::table::{Instruction, lookup};

/// Cycles the reset sequence occupies.
pub const RESET_CYCLES: u8 = 8;

pub struct Cpu {
    state: CpuState,
    bus: Bus,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-up CPU wired to an empty bus. Call `reset` before clocking.
    pub fn new() -> Self {
        Self::with_bus(Bus::new())
    }

    pub fn with_bus(bus: Bus) -> Self {
        Self {
            state: CpuState::new(),
            bus,
        }
    }

    /// Bind `bus`, returning the previously connected one.
    pub fn connect(&mut self, bus: Bus) -> Bus {
        std::mem::replace(&mut self.bus, bus)
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    // ---------------------------------------------------------------------
    // Control lines
    // ---------------------------------------------------------------------

    /// Load PC from the reset vector and put every register in its known
    /// state. Memory is left alone. The sequence occupies 8 cycles.
    pub fn reset(&mut self) {
        let s = &mut self.state;
        s.pc = self.bus.read_word(Vector::Reset.addr());
        s.a = 0;
        s.x = 0;
        s.y = 0;
        s.sp = SP_RESET;
        s.status = Flags::UNUSED;
        s.addr_rel = 0;
        s.addr_abs = 0;
        s.fetched = 0;
        s.cycles = RESET_CYCLES;
        s.clock_count = 0;
        log::debug!("reset: pc=${:04X}", s.pc);
    }

    /// One clock pulse.
    pub fn clock(&mut self) {
        dispatch::clock(&mut self.state, &mut self.bus);
    }

    /// Maskable interrupt request.
    pub fn irq(&mut self) {
        dispatch::irq(&mut self.state, &mut self.bus);
    }

    /// Non-maskable interrupt request.
    pub fn nmi(&mut self) {
        dispatch::nmi(&mut self.state, &mut self.bus);
    }

    /// True when no instruction is in flight.
    pub fn complete(&self) -> bool {
        self.state.cycles == 0
    }

    /// Clock until the in-flight instruction (or, when idle, the next one)
    /// finishes. Returns the number of pulses taken.
    pub fn step_instruction(&mut self) -> u32 {
        let mut pulses = 0;
        loop {
            self.clock();
            pulses += 1;
            if self.complete() {
                return pulses;
            }
        }
    }

    /// Table entry for the most recently fetched opcode.
    pub fn current_instruction(&self) -> &'static Instruction {
        lookup(self.state.opcode)
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    /// Raw status byte.
    pub fn status(&self) -> u8 {
        self.state.status_bits()
    }
    pub fn flags(&self) -> Flags {
        self.state.status
    }
    pub fn flag(&self, flag: Flags) -> bool {
        self.state.flag(flag)
    }

    // Transient fields
    pub fn fetched(&self) -> u8 {
        self.state.fetched
    }
    pub fn opcode(&self) -> u8 {
        self.state.opcode
    }
    pub fn cycles(&self) -> u8 {
        self.state.cycles
    }
    pub fn temp(&self) -> u16 {
        self.state.temp
    }
    pub fn addr_abs(&self) -> u16 {
        self.state.addr_abs
    }
    pub fn addr_rel(&self) -> u16 {
        self.state.addr_rel
    }
    pub fn clock_count(&self) -> u64 {
        self.state.clock_count
    }

    // ---------------------------------------------------------------------
    // Register mutators
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_flag(&mut self, flag: Flags, on: bool) {
        self.state.set_flag(flag, on);
    }
}

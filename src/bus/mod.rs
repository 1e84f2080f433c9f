#![doc = r#"
Bus module: flat memory bus the CPU is wired to.

Overview
- `Bus` owns the 64 KiB `Ram` store and is the only path through which the CPU
  touches memory. Everything is byte-addressed by a 16-bit address.
- `read` carries a `read_only` flag so debuggers can inspect memory without
  disturbing devices. Plain RAM ignores it; it matters once mapped peripherals
  with read side effects sit on the bus.
- A write that lands outside the backed range is logged and dropped. With the
  full-size store this cannot happen, but the contract holds for narrower maps.

Vectors
- $FFFA/$FFFB: NMI
- $FFFC/$FFFD: RESET
- $FFFE/$FFFF: IRQ / BRK
These are ordinary RAM cells; `set_vector` is a convenience for program loaders.
"#]

pub mod ram;

pub use ram::{RAM_SIZE, Ram};

/// Interrupt / reset vector locations (little-endian word at `addr()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector {
    Nmi,
    Reset,
    Irq,
}

impl Vector {
    /// Address of the low byte of the vector.
    #[inline]
    pub const fn addr(self) -> u16 {
        match self {
            Vector::Nmi => 0xFFFA,
            Vector::Reset => 0xFFFC,
            Vector::Irq => 0xFFFE,
        }
    }
}

pub struct Bus {
    ram: Ram,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        Self { ram: Ram::new() }
    }

    /// Zero all memory. The CPU never calls this; `Cpu::reset` keeps memory intact.
    pub fn reset(&mut self) {
        self.ram.reset();
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    /// Read a byte. `read_only` suppresses device side effects (none for RAM).
    #[inline]
    pub fn read(&mut self, addr: u16, read_only: bool) -> u8 {
        let _ = read_only;
        self.peek(addr)
    }

    /// Side-effect free read for inspection.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.ram.get(addr).unwrap_or(0x00)
    }

    /// Read a little-endian word; the high byte comes from `addr + 1` (wrapping).
    #[inline]
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr, false) as u16;
        let hi = self.read(addr.wrapping_add(1), false) as u16;
        (hi << 8) | lo
    }

    /// Write a byte. Unbacked addresses are reported and ignored.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        match self.ram.cell_mut(addr) {
            Some(cell) => *cell = value,
            None => log::warn!(
                "invalid bus write to ${:04X} (value ${:02X}) dropped",
                addr,
                value
            ),
        }
    }

    // -----------------------------
    // Loader helpers
    // -----------------------------

    /// Copy a program image verbatim into memory starting at `offset`.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> Result<(), String> {
        if self.ram.copy_in(offset as usize, bytes) {
            Ok(())
        } else {
            Err(format!(
                "program of {} bytes does not fit at ${:04X} (limit ${:04X})",
                bytes.len(),
                offset,
                self.ram.len() - 1
            ))
        }
    }

    /// Point one of the vectors at `target`.
    pub fn set_vector(&mut self, vector: Vector, target: u16) {
        let addr = vector.addr();
        self.write(addr, (target & 0x00FF) as u8);
        self.write(addr.wrapping_add(1), (target >> 8) as u8);
    }

    /// Read-only view of the whole address space.
    pub fn memory(&self) -> &[u8] {
        self.ram.as_slice()
    }
}

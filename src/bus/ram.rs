/*!
RAM module: the flat 64 KiB store behind the Bus.

CPU address map:
- $0000-$FFFF: RAM (no mirroring, no bank switching)

The three vector locations ($FFFA-$FFFF) are ordinary cells here; only the CPU
gives them meaning. The store is sized to the full 16-bit address space, so the
fallible accessors below only report a miss if the Bus is later narrowed or
fronted by mapped devices.
*/

/// Size of the backing store (in bytes).
pub const RAM_SIZE: usize = 0x1_0000;

/// Flat CPU-visible RAM.
pub struct Ram {
    data: Vec<u8>,
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: vec![0; RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte, or `None` when the address is not backed.
    #[inline]
    pub fn get(&self, addr: u16) -> Option<u8> {
        self.data.get(addr as usize).copied()
    }

    /// Mutable handle to a cell, or `None` when the address is not backed.
    #[inline]
    pub fn cell_mut(&mut self, addr: u16) -> Option<&mut u8> {
        self.data.get_mut(addr as usize)
    }

    /// Number of backed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy `bytes` verbatim starting at physical index `start`.
    /// Returns false (and writes nothing) when the run does not fit.
    pub fn copy_in(&mut self, start: usize, bytes: &[u8]) -> bool {
        let Some(end) = start.checked_add(bytes.len()) else {
            return false;
        };
        match self.data.get_mut(start..end) {
            Some(dst) => {
                dst.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }

    /// Expose the internal slice (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

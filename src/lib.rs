#![doc = r#"
r6502 library crate.

A cycle-stepped MOS 6502 core wired to a flat 64 KiB memory bus.

Modules:
- bus: flat RAM bus, vector locations and program loading
- cpu: 6502 CPU core (facade + state + addressing + table + dispatch)
- debug: register panel and memory page dumps for front ends

In tests, program loading helpers are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;
pub mod debug;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, Vector};
pub use cpu::{Cpu, Flags};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

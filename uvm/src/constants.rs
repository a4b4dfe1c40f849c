//! Central configuration and constants for the UVM

// Number of memory cells in a freshly created VM
pub const DEFAULT_MEMORY_SIZE: usize = 10_000;

// Initial stack reservation; the stack grows past this as needed
pub const STACK_RESERVE: usize = 64;

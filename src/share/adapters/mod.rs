//! Adapter implementations for share ports.
//!
//! - [`memory`]: in-memory doubles for tests and local wiring
//! - [`fs`]: capability-based filesystem access

pub mod fs;
pub mod memory;

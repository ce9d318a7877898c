//! Services around the pipeline: disassembler backends and batch scanning.

pub mod backends;
pub mod disassembler;
pub mod scan;

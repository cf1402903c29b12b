//! Command implementations for the axiomctl CLI

pub mod fleet;

pub use fleet::{run_operation, Operation, OutputOptions};

//! Command implementations
//!
//! Commands are implemented on `Session`, reading their inputs through its
//! workspace and printing through its writer.
//!
//! - `diff`: Compare two files and print the differences

pub mod diff;

//! Diff data structures and algorithms
//!
//! - `core`: Shared output utilities (pager wrapper)
//! - `diff`: The diff engine (Myers' diff, change sets, hunks, unified format)

pub mod core;
pub mod diff;

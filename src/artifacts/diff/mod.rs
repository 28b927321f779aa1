//! Line-oriented diff engine
//!
//! A diff run is a pure function of two sequences, computed in four steps:
//!
//! - `source`: the two sides being compared (`SourcePair`)
//! - `edit_graph`: Myers' shortest edit path search over the pair
//! - `change_set`: the path turned into ordered `Insert`/`Delete`/`Change` regions
//! - `hunk_gatherer` and `unified`: context windows and unified diff rendering
//!
//! ## Debug Logging
//!
//! Building with the `debug_diff` feature (`cargo build --features debug_diff`)
//! logs the edit distance found by the search, the number of changes and every
//! hunk window to stderr.

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Reached diagonal {}", k);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod change_set;
pub mod edit_graph;
pub mod hunk_gatherer;
pub mod source;
pub mod unified;

//! Line-oriented diffing with Myers' algorithm
//!
//! ```
//! use linediff::{ChangeSet, ListSource, SourcePair};
//!
//! let change_set = ChangeSet::run(SourcePair::new(
//!     ListSource::new(vec!["a", "b", "c"], "org.txt"),
//!     ListSource::new(vec!["a", "x", "c"], "rev.txt"),
//! ));
//!
//! assert_eq!(
//!     change_set.unified_form_text(3).unwrap(),
//!     vec!["--- org.txt", "+++ rev.txt", "@@ -1,3 +1,3 @@", " a", "-b", "+x", " c"]
//! );
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::change_set::{Change, ChangeSet, ChangeType, Line};
pub use artifacts::diff::hunk_gatherer::{GatherHunks, Gathered, HunkGatherer};
pub use artifacts::diff::source::{ListSource, Source, SourcePair};
pub use artifacts::diff::unified::{Edit, Hunk, UnifiedDiff};

//! Collaborators around the diff engine
//!
//! - `workspace`: Loads the compared files into sequences of lines
//! - `session`: Owns the output writer commands print to

pub mod session;
pub mod workspace;

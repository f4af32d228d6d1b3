//! Value enums accepted on the command line.

pub mod filters;

pub use filters::LeaderboardKind;

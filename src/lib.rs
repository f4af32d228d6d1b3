//! Premier Pulse Library
//!
//! Statistics engine for a Premier League player dataset: filtering,
//! leaderboards, side-by-side comparisons and league insights over a
//! collection of player records fetched from a player statistics API.
//!
//! ## Features
//!
//! - **Stat Access**: Named statistics with consistent rounding and "absent reads as 0" semantics
//! - **Filtering**: Search by name plus exact team, position and nation filters
//! - **Leaderboards**: Top scorers, top assisters and team goal aggregates
//! - **Comparison**: Up to four players against a chosen set of statistics
//! - **Insights**: Hot streak, most efficient scorer, top team and league totals
//! - **Snapshots**: Local copy of the last API response
//!
//! ## Quick Start
//!
//! ```rust
//! use premier_pulse::{leaderboard::top_scorers, parse_collection_str};
//!
//! # fn example() -> premier_pulse::Result<()> {
//! let players = parse_collection_str(
//!     r#"[{"name": "A", "team": "X", "gls": 5}, {"name": "B", "team": "Y", "gls": 3}]"#,
//! )?;
//! let leaders = top_scorers(&players, 5);
//! assert_eq!(leaders[0].name(), "A");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your player API instead of passing `--api-url` each time:
//! ```bash
//! export PREMIER_PULSE_API_URL=http://localhost:8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod error;
pub mod filters;
pub mod insights;
pub mod leaderboard;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use comparison::{ComparisonMatrix, ComparisonSelection};
pub use error::{PulseError, Result};
pub use filters::{Facet, FilterCriteria};
pub use insights::Insights;
pub use model::{
    parse_collection, parse_collection_str, PlayerCollection, PlayerField, PlayerRecord,
};
pub use stats::{StatName, StatValue};

pub const API_URL_ENV_VAR: &str = "PREMIER_PULSE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::comparison::DEFAULT_CANDIDATE_LIMIT;
use crate::filters::FilterCriteria;
use crate::leaderboard::DEFAULT_LEADERBOARD_SIZE;
use crate::stats::StatName;
use types::LeaderboardKind;

/// Where player data comes from and how results are printed.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Player API base URL (or set `PREMIER_PULSE_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Read players from a local JSON array instead of the API.
    #[clap(long, short, conflicts_with = "api_url")]
    pub file: Option<PathBuf>,

    /// Fetch from the API even if a cached snapshot exists.
    #[clap(long)]
    pub refresh: bool,

    /// Output results as JSON instead of text tables.
    #[clap(long)]
    pub json: bool,
}

/// Player list constraints; all given constraints must hold.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring of the player name.
    #[clap(long, short = 'q')]
    pub search: Option<String>,

    /// Exact team name, e.g. "Arsenal".
    #[clap(long, short)]
    pub team: Option<String>,

    /// Exact position code, e.g. "FW" or "MF,FW".
    #[clap(long, short)]
    pub position: Option<String>,

    /// Exact nation code, e.g. "eng ENG".
    #[clap(long, short)]
    pub nation: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.clone(),
            team: self.team.clone(),
            position: self.position.clone(),
            nation: self.nation.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List players, optionally filtered, or the available filter values.
    Players {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        filters: FilterArgs,

        /// Print the distinct teams, positions and nations instead of players.
        #[clap(long)]
        facets: bool,
    },

    /// Show a ranked leaderboard (scorers, assisters or teams).
    Leaders {
        #[clap(flatten)]
        source: SourceArgs,

        /// Which ranking to show.
        #[clap(long, short, value_enum, default_value_t = LeaderboardKind::Goals)]
        kind: LeaderboardKind,

        /// Number of entries.
        #[clap(long, short, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
        limit: usize,
    },

    /// Compare up to four players side by side.
    Compare {
        #[clap(flatten)]
        source: SourceArgs,

        /// Exact player names, in column order.
        #[clap(required = true, num_args = 1..)]
        names: Vec<String>,

        /// Statistic column (repeatable): `--stat Goals --stat "Expected Goals"`.
        #[clap(long = "stat", short = 's')]
        stats: Vec<StatName>,
    },

    /// Find comparison candidates by name.
    Search {
        #[clap(flatten)]
        source: SourceArgs,

        /// Name substring to look for.
        term: String,

        /// Already-selected players to leave out (repeatable).
        #[clap(long, short = 'x')]
        exclude: Vec<String>,

        /// Maximum number of candidates.
        #[clap(long, short, default_value_t = DEFAULT_CANDIDATE_LIMIT)]
        limit: usize,
    },

    /// League highlights: top scorer, most efficient scorer, top team, totals.
    Insights {
        #[clap(flatten)]
        source: SourceArgs,
    },

    /// Full statistics for one player.
    Player {
        #[clap(flatten)]
        source: SourceArgs,

        /// Exact player name.
        name: String,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "premier-pulse",
    about = "Premier League player statistics explorer",
    after_help = "Comparisons hold at most 4 players."
)]
pub struct PremierPulse {
    /// Increase log output (-v info, -vv debug). `RUST_LOG` overrides.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        PremierPulse::command().debug_assert();
    }

    #[test]
    fn test_parse_players_with_filters() {
        let app = PremierPulse::parse_from([
            "premier-pulse",
            "players",
            "--team",
            "Arsenal",
            "-q",
            "sak",
            "--json",
        ]);
        match app.command {
            Commands::Players {
                source,
                filters,
                facets,
            } => {
                assert!(source.json);
                assert!(!facets);
                let criteria = filters.to_criteria();
                assert_eq!(criteria.team.as_deref(), Some("Arsenal"));
                assert_eq!(criteria.search_term.as_deref(), Some("sak"));
                assert!(criteria.nation.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_compare_with_stats() {
        let app = PremierPulse::parse_from([
            "premier-pulse",
            "compare",
            "Mohamed Salah",
            "Cole Palmer",
            "--stat",
            "Expected Goals",
            "-s",
            "ast",
        ]);
        match app.command {
            Commands::Compare { names, stats, .. } => {
                assert_eq!(names, vec!["Mohamed Salah", "Cole Palmer"]);
                assert_eq!(stats, vec![StatName::ExpectedGoals, StatName::Assists]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_stat_is_rejected() {
        let result =
            PremierPulse::try_parse_from(["premier-pulse", "compare", "A", "--stat", "Tackles"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_leaders_defaults() {
        let app = PremierPulse::parse_from(["premier-pulse", "leaders"]);
        match app.command {
            Commands::Leaders { kind, limit, .. } => {
                assert_eq!(kind, LeaderboardKind::Goals);
                assert_eq!(limit, DEFAULT_LEADERBOARD_SIZE);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let app = PremierPulse::parse_from(["premier-pulse", "insights", "-vv"]);
        assert_eq!(app.verbose, 2);
    }

    #[test]
    fn test_file_conflicts_with_api_url() {
        let result = PremierPulse::try_parse_from([
            "premier-pulse",
            "insights",
            "--file",
            "players.json",
            "--api-url",
            "http://localhost:8080",
        ]);
        assert!(result.is_err());
    }
}

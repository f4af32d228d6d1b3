//! Leaderboard selection for the `leaders` command.

use std::fmt;

/// Which ranking the `leaders` command prints.
///
/// Player rankings exclude anyone with zero of the ranked statistic; the
/// team ranking sums goals over each squad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LeaderboardKind {
    /// Top goal scorers
    #[default]
    Goals,
    /// Top assist providers
    Assists,
    /// Teams by total goals
    Teams,
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaderboardKind::Goals => "Top Scorers",
            LeaderboardKind::Assists => "Top Assisters",
            LeaderboardKind::Teams => "Top Teams",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_display() {
        assert_eq!(LeaderboardKind::Goals.to_string(), "Top Scorers");
        assert_eq!(LeaderboardKind::Assists.to_string(), "Top Assisters");
        assert_eq!(LeaderboardKind::Teams.to_string(), "Top Teams");
    }

    #[test]
    fn test_value_enum_parsing() {
        assert_eq!(
            LeaderboardKind::from_str("assists", true).unwrap(),
            LeaderboardKind::Assists
        );
        assert!(LeaderboardKind::from_str("tackles", true).is_err());
        assert_eq!(LeaderboardKind::default(), LeaderboardKind::Goals);
    }
}

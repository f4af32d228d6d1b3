//! Single-value highlights derived from the whole league.
//!
//! Every highlight is optional: an empty league, a league without scorers or
//! without minutes-qualified players yields `None` rather than a NaN or a
//! panic.

use serde::Serialize;

use crate::leaderboard::{team_aggregates, top_scorers, top_teams, DEFAULT_LEADERBOARD_SIZE};
use crate::model::{PlayerField, PlayerRecord};
use crate::stats::{per_90, round_to};

#[cfg(test)]
mod tests;

/// Players need more than this many minutes to rank as most efficient.
pub const EFFICIENCY_MIN_MINUTES: f64 = 450.0;

/// League-wide totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeagueOverview {
    pub total_players: usize,
    pub total_goals: f64,
    /// `None` when the league has no players.
    pub avg_goals_per_player: Option<f64>,
}

impl LeagueOverview {
    pub fn from_players(players: &[PlayerRecord]) -> Self {
        let total_players = players.len();
        let total_goals: f64 = players.iter().map(PlayerRecord::goals).sum();
        let avg_goals_per_player = if total_players == 0 {
            None
        } else {
            Some(round_to(total_goals / total_players as f64, 1))
        };

        Self {
            total_players,
            total_goals,
            avg_goals_per_player,
        }
    }
}

/// The best-scoring team with its aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopTeam {
    pub name: String,
    pub goals: f64,
    pub players: usize,
    pub avg_per_player: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights<'a> {
    pub hot_streak: Option<&'a PlayerRecord>,
    pub most_efficient: Option<&'a PlayerRecord>,
    pub top_team: Option<TopTeam>,
    pub overview: LeagueOverview,
}

impl<'a> Insights<'a> {
    pub fn from_players(players: &'a [PlayerRecord]) -> Self {
        Self {
            hot_streak: hot_streak(players),
            most_efficient: most_efficient(players),
            top_team: top_team(players),
            overview: LeagueOverview::from_players(players),
        }
    }
}

/// The league's top scorer.
pub fn hot_streak(players: &[PlayerRecord]) -> Option<&PlayerRecord> {
    top_scorers(players, 1).into_iter().next()
}

/// Among the top scorers with more than 450 minutes, the one with the best
/// goals-per-90 rate (the stored `gls_1`, or goals * 90 / minutes when that
/// is absent; ties keep leaderboard order).
pub fn most_efficient(players: &[PlayerRecord]) -> Option<&PlayerRecord> {
    let mut candidates: Vec<&PlayerRecord> = top_scorers(players, DEFAULT_LEADERBOARD_SIZE)
        .into_iter()
        .filter(|p| p.minutes() > EFFICIENCY_MIN_MINUTES)
        .collect();
    candidates.sort_by(|a, b| goals_per_90(b).total_cmp(&goals_per_90(a)));
    candidates.into_iter().next()
}

/// The highest-scoring team.
pub fn top_team(players: &[PlayerRecord]) -> Option<TopTeam> {
    let aggregates = team_aggregates(players);
    top_teams(&aggregates, 1)
        .into_iter()
        .next()
        .map(|(name, agg)| TopTeam {
            name: name.to_string(),
            goals: agg.goals,
            players: agg.players,
            avg_per_player: agg.average_per_player(),
        })
}

/// Stored goals-per-90 rate, else computed from goals and minutes.
pub fn goals_per_90(player: &PlayerRecord) -> f64 {
    player
        .get(PlayerField::GlsPer90)
        .or_else(|| per_90(player.goals(), player.get(PlayerField::Min)))
        .unwrap_or(0.0)
}

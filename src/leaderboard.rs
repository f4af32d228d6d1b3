//! Ranked leaderboards and per-team aggregates.
//!
//! All rankings sort with a stable sort, so players (or teams) with equal
//! values keep the order in which they appear in the source collection.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

use crate::model::{PlayerField, PlayerRecord};
use crate::stats::round_to;


/// Default leaderboard length.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

/// Players with a strictly positive `field`, highest first, at most `n`.
pub fn top_by(players: &[PlayerRecord], field: PlayerField, n: usize) -> Vec<&PlayerRecord> {
    let mut ranked: Vec<&PlayerRecord> = players
        .iter()
        .filter(|p| p.get(field).is_some_and(|v| v > 0.0))
        .collect();
    ranked.sort_by(|a, b| b.value_or_zero(field).total_cmp(&a.value_or_zero(field)));
    ranked.truncate(n);
    ranked
}

/// Top `n` goal scorers; players without goals are excluded.
pub fn top_scorers(players: &[PlayerRecord], n: usize) -> Vec<&PlayerRecord> {
    top_by(players, PlayerField::Gls, n)
}

/// Top `n` assist providers; players without assists are excluded.
pub fn top_assisters(players: &[PlayerRecord], n: usize) -> Vec<&PlayerRecord> {
    top_by(players, PlayerField::Ast, n)
}

/// Goals and squad size for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub goals: f64,
    pub players: usize,
}

impl TeamAggregate {
    /// Goals per player rounded to one decimal; `None` for an empty roster.
    pub fn average_per_player(&self) -> Option<f64> {
        if self.players == 0 {
            return None;
        }
        Some(round_to(self.goals / self.players as f64, 1))
    }
}

/// Team aggregates keyed by team name, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamAggregates {
    entries: Vec<(String, TeamAggregate)>,
    index: HashMap<String, usize>,
}

impl Serialize for TeamAggregates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (team, agg) in &self.entries {
            map.serialize_entry(team, agg)?;
        }
        map.end()
    }
}

impl TeamAggregates {
    pub fn get(&self, team: &str) -> Option<&TeamAggregate> {
        self.index.get(team).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamAggregate)> {
        self.entries.iter().map(|(team, agg)| (team.as_str(), agg))
    }

    /// Sum of goals over every team.
    pub fn total_goals(&self) -> f64 {
        self.entries.iter().map(|(_, agg)| agg.goals).sum()
    }

    fn entry(&mut self, team: &str) -> &mut TeamAggregate {
        let i = match self.index.get(team) {
            Some(&i) => i,
            None => {
                self.entries.push((team.to_string(), TeamAggregate::default()));
                self.index.insert(team.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }
}

/// Aggregate goals and player counts per team, skipping players without a team.
pub fn team_aggregates(players: &[PlayerRecord]) -> TeamAggregates {
    let mut aggregates = TeamAggregates::default();
    for player in players {
        let Some(team) = player.team.as_deref() else {
            continue;
        };
        let agg = aggregates.entry(team);
        agg.goals += player.goals();
        agg.players += 1;
    }
    log::debug!(
        "aggregated {} players into {} teams",
        players.len(),
        aggregates.len()
    );
    aggregates
}

/// Highest-scoring `n` teams; ties keep first-seen team order.
pub fn top_teams(aggregates: &TeamAggregates, n: usize) -> Vec<(&str, TeamAggregate)> {
    let mut ranked: Vec<(&str, TeamAggregate)> =
        aggregates.iter().map(|(team, agg)| (team, *agg)).collect();
    ranked.sort_by(|a, b| b.1.goals.total_cmp(&a.1.goals));
    ranked.truncate(n);
    ranked
}

/// One bar or slice of a chart: a label and its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Chart series for a player leaderboard on `field`.
pub fn player_series(players: &[&PlayerRecord], field: PlayerField) -> Vec<SeriesPoint> {
    players
        .iter()
        .map(|p| SeriesPoint {
            label: p.name().to_string(),
            value: p.value_or_zero(field),
        })
        .collect()
}

/// Chart series of team goals.
pub fn team_series(teams: &[(&str, TeamAggregate)]) -> Vec<SeriesPoint> {
    teams
        .iter()
        .map(|(team, agg)| SeriesPoint {
            label: team.to_string(),
            value: agg.goals,
        })
        .collect()
}

/// First `n` players in source order, for the featured list.
pub fn featured(players: &[PlayerRecord], n: usize) -> &[PlayerRecord] {
    &players[..n.min(players.len())]
}

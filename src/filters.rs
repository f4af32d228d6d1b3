//! Player list filtering and facet extraction.
//!
//! Filtering is a pure function of `(collection, criteria)`: every active
//! criterion is ANDed, and the surviving players keep their source order.
//! Facet values are always computed from the full collection so narrowing by
//! one facet never hides the options of another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::model::PlayerRecord;


/// Optional constraints on a player list. `None` or an empty string means
/// "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the player name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
}

impl FilterCriteria {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn nation(mut self, nation: impl Into<String>) -> Self {
        self.nation = Some(nation.into());
        self
    }

    /// True when no criterion constrains the list.
    pub fn is_empty(&self) -> bool {
        active(&self.search_term).is_none()
            && active(&self.team).is_none()
            && active(&self.position).is_none()
            && active(&self.nation).is_none()
    }

    /// Check one player against every active criterion.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        if let Some(term) = active(&self.search_term) {
            if !name_contains(player, term) {
                return false;
            }
        }

        exact(&self.team, &player.team)
            && exact(&self.position, &player.pos)
            && exact(&self.nation, &player.nation)
    }
}

/// Categorical fields that populate filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Team,
    Position,
    Nation,
}

impl Facet {
    pub fn value<'a>(&self, player: &'a PlayerRecord) -> Option<&'a str> {
        match self {
            Facet::Team => player.team.as_deref(),
            Facet::Position => player.pos.as_deref(),
            Facet::Nation => player.nation.as_deref(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Facet::Team => "Team",
            Facet::Position => "Position",
            Facet::Nation => "Nation",
        };
        write!(f, "{}", s)
    }
}

/// Apply `criteria` to `players`, preserving relative order.
///
/// # Examples
///
/// ```rust
/// use premier_pulse::filters::{filter, FilterCriteria};
/// use premier_pulse::PlayerRecord;
///
/// let players = vec![
///     PlayerRecord { team: Some("Arsenal".into()), ..PlayerRecord::named("Bukayo Saka") },
///     PlayerRecord { team: Some("Chelsea".into()), ..PlayerRecord::named("Cole Palmer") },
/// ];
/// let hits = filter(&players, &FilterCriteria::default().search("saka"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "Bukayo Saka");
/// ```
pub fn filter<'a>(
    players: &'a [PlayerRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PlayerRecord> {
    let filtered: Vec<&PlayerRecord> = players.iter().filter(|p| criteria.matches(p)).collect();
    log::debug!(
        "filter {:?} kept {} of {} players",
        criteria,
        filtered.len(),
        players.len()
    );
    filtered
}

/// Distinct, non-empty values of `facet` across the whole collection.
pub fn facet_values(players: &[PlayerRecord], facet: Facet) -> BTreeSet<String> {
    players
        .iter()
        .filter_map(|p| facet.value(p))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test on the player name. A player without a
/// name only matches the empty term.
pub fn name_contains(player: &PlayerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    match &player.name {
        Some(name) => name.to_lowercase().contains(&term.to_lowercase()),
        None => false,
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.is_empty())
}

fn exact(criterion: &Option<String>, value: &Option<String>) -> bool {
    match active(criterion) {
        Some(wanted) => value.as_deref() == Some(wanted),
        None => true,
    }
}

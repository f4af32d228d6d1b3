//! Side-by-side player comparison.
//!
//! A [`ComparisonSelection`] is a caller-owned value: every operation takes
//! the selection by value and hands back the next state, so a UI (or the
//! CLI) threads it explicitly instead of mutating shared state.

use serde::Serialize;

use crate::filters::name_contains;
use crate::model::PlayerRecord;
use crate::stats::{stat_value, StatName, StatValue};


/// Most players a comparison can hold.
pub const MAX_COMPARISON_PLAYERS: usize = 4;

/// Default number of search candidates offered.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Players (unique by name, at most four) and statistic columns being compared.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSelection {
    players: Vec<PlayerRecord>,
    stats: Vec<StatName>,
    /// Slot of the most recently removed stat, so toggling it back restores
    /// the previous column order.
    #[serde(skip)]
    last_removed: Option<(StatName, usize)>,
}

impl Default for ComparisonSelection {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            stats: StatName::DEFAULT_COMPARISON.to_vec(),
            last_removed: None,
        }
    }
}

impl PartialEq for ComparisonSelection {
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players && self.stats == other.stats
    }
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stat columns. Duplicates are dropped; an empty list keeps
    /// the default columns.
    pub fn with_stats(mut self, stats: impl IntoIterator<Item = StatName>) -> Self {
        let mut chosen: Vec<StatName> = Vec::new();
        for stat in stats {
            if !chosen.contains(&stat) {
                chosen.push(stat);
            }
        }
        if !chosen.is_empty() {
            self.stats = chosen;
            self.last_removed = None;
        }
        self
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn stats(&self) -> &[StatName] {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_COMPARISON_PLAYERS
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name() == name)
    }

    /// Append `player` unless the selection is full or already holds that name.
    pub fn add_player(mut self, player: PlayerRecord) -> Self {
        if self.is_full() {
            log::debug!("comparison full, ignoring {}", player.name());
        } else if self.contains(player.name()) {
            log::debug!("{} already selected", player.name());
        } else {
            self.players.push(player);
        }
        self
    }

    /// Drop the player called `name`, if selected.
    pub fn remove_player(mut self, name: &str) -> Self {
        self.players.retain(|p| p.name() != name);
        self
    }

    /// Remove `stat` if shown, otherwise show it.
    ///
    /// The last remaining column cannot be removed. Re-adding the column that
    /// was just removed puts it back in its old position.
    pub fn toggle_stat(mut self, stat: StatName) -> Self {
        match self.stats.iter().position(|s| *s == stat) {
            Some(_) if self.stats.len() == 1 => {
                log::debug!("keeping {} as the only comparison column", stat);
            }
            Some(i) => {
                self.stats.remove(i);
                self.last_removed = Some((stat, i));
            }
            None => {
                match self.last_removed.take() {
                    Some((removed, i)) if removed == stat => {
                        let at = i.min(self.stats.len());
                        self.stats.insert(at, stat);
                    }
                    _ => self.stats.push(stat),
                }
            }
        }
        self
    }

    /// Row-per-player, column-per-stat table in selection order.
    pub fn build_matrix(&self) -> ComparisonMatrix {
        let rows = self
            .players
            .iter()
            .map(|player| ComparisonRow {
                name: player.name().to_string(),
                team: player.team.clone(),
                cells: self.stats.iter().map(|s| stat_value(player, *s)).collect(),
            })
            .collect();

        ComparisonMatrix {
            columns: self.stats.clone(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub team: Option<String>,
    pub cells: Vec<StatValue>,
}

/// Comparison table; also the source of per-player chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    pub columns: Vec<StatName>,
    pub rows: Vec<ComparisonRow>,
}

/// One player's values across the matrix columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl ComparisonMatrix {
    /// A comparison is worth showing once two players are selected.
    pub fn is_renderable(&self) -> bool {
        self.rows.len() >= 2
    }

    pub fn series(&self) -> Vec<PlayerSeries> {
        self.rows
            .iter()
            .map(|row| PlayerSeries {
                label: row.name.clone(),
                values: row.cells.iter().map(|c| c.value).collect(),
            })
            .collect()
    }
}

/// Players whose name contains `term` and who are not yet selected, in
/// collection order, at most `limit`.
pub fn search_candidates<'a>(
    players: &'a [PlayerRecord],
    term: &str,
    selection: &ComparisonSelection,
    limit: usize,
) -> Vec<&'a PlayerRecord> {
    players
        .iter()
        .filter(|p| name_contains(p, term) && !selection.contains(p.name()))
        .take(limit)
        .collect()
}

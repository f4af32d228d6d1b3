//! `players`: filtered player list and facet values.

use serde::Serialize;
use std::collections::BTreeSet;

use super::output::{cell, or_unknown, print_json};
use super::{load_players, DataSource};
use crate::{
    cli::{FilterArgs, SourceArgs},
    filters::{facet_values, filter, Facet, FilterCriteria},
    model::PlayerRecord,
    Result,
};

/// Distinct filter choices across the full collection.
#[derive(Debug, Serialize)]
pub struct FacetListing {
    pub teams: BTreeSet<String>,
    pub positions: BTreeSet<String>,
    pub nations: BTreeSet<String>,
}

impl FacetListing {
    pub fn from_players(players: &[PlayerRecord]) -> Self {
        Self {
            teams: facet_values(players, Facet::Team),
            positions: facet_values(players, Facet::Position),
            nations: facet_values(players, Facet::Nation),
        }
    }
}

pub async fn handle_players(source: SourceArgs, filters: FilterArgs, facets: bool) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let players = load_players(&data_source, source.refresh).await?;

    if facets {
        let listing = FacetListing::from_players(&players);
        if source.json {
            return print_json(&listing);
        }
        print!("{}", render_facets(&listing));
        return Ok(());
    }

    let criteria = filters.to_criteria();
    let filtered = filter(&players, &criteria);
    if source.json {
        return print_json(&filtered);
    }
    print!("{}", render_players(&filtered, players.len(), &criteria));
    Ok(())
}

pub fn render_players(
    players: &[&PlayerRecord],
    total: usize,
    criteria: &FilterCriteria,
) -> String {
    let mut out = String::new();
    if criteria.is_empty() {
        out.push_str(&format!("All players ({})\n", total));
    } else {
        out.push_str(&format!("Showing {} of {} players\n", players.len(), total));
    }

    if players.is_empty() {
        out.push_str("No players found\n");
        return out;
    }

    out.push_str(&format!(
        "{} {} {} {}\n",
        cell("Name", 28),
        cell("Position", 18),
        cell("Team", 20),
        "Nation"
    ));
    for (i, p) in players.iter().enumerate() {
        let name = match p.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("Player {}", i + 1),
        };
        out.push_str(&format!(
            "{} {} {} {}\n",
            cell(&name, 28),
            cell(&or_unknown(p.pos.as_deref(), "Position"), 18),
            cell(&or_unknown(p.team.as_deref(), "Team"), 20),
            or_unknown(p.nation.as_deref(), "Nation")
        ));
    }
    out
}

pub fn render_facets(listing: &FacetListing) -> String {
    let mut out = String::new();
    for (title, values) in [
        ("Teams", &listing.teams),
        ("Positions", &listing.positions),
        ("Nations", &listing.nations),
    ] {
        out.push_str(&format!("{} ({}):\n", title, values.len()));
        for v in values {
            out.push_str(&format!("  {}\n", v));
        }
    }
    out
}

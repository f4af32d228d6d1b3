//! `leaders`: top scorers, top assisters and team rankings.

use serde::Serialize;

use super::output::{cell, format_average, format_count, or_unknown, print_json};
use super::{load_players, DataSource};
use crate::{
    cli::{types::LeaderboardKind, SourceArgs},
    leaderboard::{team_aggregates, top_assisters, top_scorers, top_teams, TeamAggregate},
    model::{PlayerField, PlayerRecord},
    Result,
};

/// JSON row of the team ranking.
#[derive(Debug, Serialize)]
pub struct TeamRow<'a> {
    pub rank: usize,
    pub team: &'a str,
    pub goals: f64,
    pub players: usize,
    pub avg_per_player: Option<f64>,
}

pub async fn handle_leaders(source: SourceArgs, kind: LeaderboardKind, limit: usize) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let players = load_players(&data_source, source.refresh).await?;

    match kind {
        LeaderboardKind::Goals | LeaderboardKind::Assists => {
            let (ranked, field) = if kind == LeaderboardKind::Goals {
                (top_scorers(&players, limit), PlayerField::Gls)
            } else {
                (top_assisters(&players, limit), PlayerField::Ast)
            };
            if source.json {
                return print_json(&ranked);
            }
            print!("{}", render_player_board(kind, &ranked, field));
        }
        LeaderboardKind::Teams => {
            let aggregates = team_aggregates(&players);
            let ranked = top_teams(&aggregates, limit);
            if source.json {
                return print_json(&team_rows(&ranked));
            }
            print!("{}", render_team_board(&ranked));
        }
    }
    Ok(())
}

pub fn team_rows<'a>(ranked: &[(&'a str, TeamAggregate)]) -> Vec<TeamRow<'a>> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, &(team, agg))| TeamRow {
            rank: i + 1,
            team,
            goals: agg.goals,
            players: agg.players,
            avg_per_player: agg.average_per_player(),
        })
        .collect()
}

pub fn render_player_board(
    kind: LeaderboardKind,
    ranked: &[&PlayerRecord],
    field: PlayerField,
) -> String {
    let mut out = format!("{}\n", kind);
    if ranked.is_empty() {
        out.push_str("No players found\n");
        return out;
    }
    for (i, p) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {} {:>3}   ({} ast, {} mp)\n",
            i + 1,
            cell(p.name(), 26),
            cell(&or_unknown(p.team.as_deref(), "Team"), 18),
            format_count(p.value_or_zero(field)),
            format_count(p.assists()),
            format_count(p.value_or_zero(PlayerField::Mp)),
        ));
    }
    out
}

pub fn render_team_board(ranked: &[(&str, TeamAggregate)]) -> String {
    let mut out = format!("{}\n", LeaderboardKind::Teams);
    if ranked.is_empty() {
        out.push_str("No teams found\n");
        return out;
    }
    for (i, (team, agg)) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {:>3} goals  {:>2} players  {} per player\n",
            i + 1,
            cell(team, 24),
            format_count(agg.goals),
            agg.players,
            format_average(agg.average_per_player()),
        ));
    }
    out
}

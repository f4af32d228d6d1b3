//! `compare` and `search`: the comparison tool.

use super::output::{cell, or_unknown, print_json};
use super::{load_players, DataSource};
use crate::{
    api::find_exact,
    cli::SourceArgs,
    comparison::{
        search_candidates, ComparisonMatrix, ComparisonSelection, MAX_COMPARISON_PLAYERS,
    },
    model::PlayerRecord,
    stats::StatName,
    Result,
};

/// Build a selection from exact names and stat columns.
///
/// Unknown names are an error until the selection is full; once four
/// players are selected the remaining names are dropped unresolved, the same
/// way the selection drops them.
pub fn build_selection(
    players: &[PlayerRecord],
    names: &[String],
    stats: &[StatName],
) -> Result<ComparisonSelection> {
    let mut selection = ComparisonSelection::new().with_stats(stats.iter().copied());
    let mut ignored: Vec<&str> = Vec::new();
    for name in names {
        if selection.contains(name) {
            continue;
        }
        if selection.is_full() {
            ignored.push(name);
            continue;
        }
        let player = find_exact(players, name)?;
        selection = selection.add_player(player.clone());
    }

    if !ignored.is_empty() {
        log::warn!(
            "only {} players can be compared; ignoring {}",
            MAX_COMPARISON_PLAYERS,
            ignored.join(", ")
        );
    }
    Ok(selection)
}

pub async fn handle_compare(
    source: SourceArgs,
    names: Vec<String>,
    stats: Vec<StatName>,
) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let players = load_players(&data_source, source.refresh).await?;

    let selection = build_selection(&players, &names, &stats)?;
    let matrix = selection.build_matrix();
    if source.json {
        return print_json(&matrix);
    }
    print!("{}", render_matrix(&matrix));
    Ok(())
}

pub async fn handle_search(
    source: SourceArgs,
    term: String,
    exclude: Vec<String>,
    limit: usize,
) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let players = load_players(&data_source, source.refresh).await?;

    // Excluded names act as the current selection; unknown ones are skipped.
    let selection = exclude
        .iter()
        .filter_map(|name| find_exact(&players, name).ok())
        .fold(ComparisonSelection::new(), |sel, p| sel.add_player(p.clone()));

    let candidates = search_candidates(&players, &term, &selection, limit);
    if source.json {
        return print_json(&candidates);
    }
    print!("{}", render_candidates(&candidates));
    Ok(())
}

pub fn render_matrix(matrix: &ComparisonMatrix) -> String {
    let mut out = format!(
        "Selected Players ({}/{})\n",
        matrix.rows.len(),
        MAX_COMPARISON_PLAYERS
    );
    if !matrix.is_renderable() {
        out.push_str("Select at least two players to compare\n");
        return out;
    }

    out.push_str(&cell("Player", 24));
    out.push(' ');
    out.push_str(&cell("Team", 18));
    for stat in &matrix.columns {
        out.push_str(&format!(" {:>16}", stat.display_name()));
    }
    out.push('\n');

    for row in &matrix.rows {
        out.push_str(&cell(&row.name, 24));
        out.push(' ');
        out.push_str(&cell(&or_unknown(row.team.as_deref(), "Team"), 18));
        for value in &row.cells {
            out.push_str(&format!(" {:>16}", value.display));
        }
        out.push('\n');
    }
    out
}

pub fn render_candidates(candidates: &[&PlayerRecord]) -> String {
    if candidates.is_empty() {
        return "No players found\n".to_string();
    }
    candidates
        .iter()
        .map(|p| {
            format!(
                "{} {}\n",
                cell(p.name(), 28),
                or_unknown(p.team.as_deref(), "Team")
            )
        })
        .collect()
}

//! `player`: sectioned detail view of one player.

use super::output::{or_unknown, print_json};
use super::{load_player, DataSource};
use crate::{cli::SourceArgs, stats::PlayerProfile, Result};

pub async fn handle_player(source: SourceArgs, name: String) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let player = load_player(&data_source, &name, source.refresh).await?;

    let profile = PlayerProfile::from_record(&player);
    if source.json {
        return print_json(&profile);
    }
    print!("{}", render_profile(&profile));
    Ok(())
}

pub fn render_profile(profile: &PlayerProfile) -> String {
    let age = profile
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "Unknown Age".to_string());
    let mut out = format!(
        "{}\n{} | {} | {} | {}\n",
        profile.name,
        or_unknown(profile.position.as_deref(), "Position"),
        or_unknown(profile.team.as_deref(), "Team"),
        or_unknown(profile.nation.as_deref(), "Nation"),
        age
    );

    for section in &profile.sections {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');
        for item in &section.items {
            let marker = if item.highlight { '*' } else { ' ' };
            out.push_str(&format!("{} {:<28} {:>8}\n", marker, item.label, item.display));
        }
    }
    out
}

//! `insights`: league highlights.

use super::output::{format_average, format_count, or_unknown, print_json};
use super::{load_players, DataSource};
use crate::{
    cli::SourceArgs,
    insights::{goals_per_90, Insights},
    model::PlayerRecord,
    Result,
};

pub async fn handle_insights(source: SourceArgs) -> Result<()> {
    let data_source = DataSource::from_args(&source)?;
    let players = load_players(&data_source, source.refresh).await?;

    let insights = Insights::from_players(&players);
    if source.json {
        return print_json(&insights);
    }
    print!("{}", render_insights(&insights));
    Ok(())
}

pub fn render_insights(insights: &Insights<'_>) -> String {
    let mut out = String::from("League Insights\n");

    out.push_str("Hot Streak:      ");
    out.push_str(&match insights.hot_streak {
        Some(p) => format!("{} ({} goals)\n", describe(p), format_count(p.goals())),
        None => "n/a\n".to_string(),
    });

    out.push_str("Most Efficient:  ");
    out.push_str(&match insights.most_efficient {
        Some(p) => format!(
            "{} ({:.2} goals per 90)\n",
            describe(p),
            goals_per_90(p)
        ),
        None => "n/a\n".to_string(),
    });

    out.push_str("Top Team:        ");
    out.push_str(&match &insights.top_team {
        Some(t) => format!(
            "{} ({} goals, {} players, {} per player)\n",
            t.name,
            format_count(t.goals),
            t.players,
            format_average(t.avg_per_player)
        ),
        None => "n/a\n".to_string(),
    });

    let overview = &insights.overview;
    out.push_str(&format!(
        "League Overview: {} players, {} goals, {} goals per player\n",
        overview.total_players,
        format_count(overview.total_goals),
        format_average(overview.avg_goals_per_player)
    ));
    out
}

fn describe(player: &PlayerRecord) -> String {
    format!("{}, {}", player.name(), or_unknown(player.team.as_deref(), "Team"))
}

//! Unit tests for league highlights

use super::*;

fn player(name: &str, team: &str, gls: f64, min: f64, gls_1: Option<f64>) -> PlayerRecord {
    PlayerRecord {
        team: Some(team.to_string()),
        gls: Some(gls),
        min: Some(min),
        gls_1,
        ..PlayerRecord::named(name)
    }
}

fn league() -> Vec<PlayerRecord> {
    vec![
        player("Salah", "Liverpool", 29.0, 3371.0, Some(0.77)),
        player("Isak", "Newcastle Utd", 23.0, 2421.0, Some(0.85)),
        player("Haaland", "Manchester City", 22.0, 2746.0, Some(0.72)),
        player("Super Sub", "Brentford", 3.0, 120.0, Some(2.25)),
        player("Gakpo", "Liverpool", 10.0, 1824.0, Some(0.49)),
        PlayerRecord::named("Unattached"),
    ]
}

#[test]
fn test_hot_streak_is_top_scorer() {
    let players = league();
    assert_eq!(hot_streak(&players).map(|p| p.name()), Some("Salah"));
}

#[test]
fn test_most_efficient_requires_minutes() {
    let players = league();
    // Super Sub has the best rate but too few minutes.
    assert_eq!(most_efficient(&players).map(|p| p.name()), Some("Isak"));
}

#[test]
fn test_most_efficient_absent_rate_falls_back_to_minutes() {
    let players = vec![
        player("No Rate", "X", 10.0, 900.0, None),
        player("Rated", "Y", 9.0, 8100.0, Some(0.1)),
    ];
    // 10 goals in 900 minutes is 1.0 per 90
    assert_eq!(most_efficient(&players).map(|p| p.name()), Some("No Rate"));

    let players = vec![
        player("No Rate", "X", 9.0, 900.0, None),
        player("Rated", "Y", 5.0, 900.0, Some(1.5)),
    ];
    assert_eq!(most_efficient(&players).map(|p| p.name()), Some("Rated"));
}

#[test]
fn test_most_efficient_none_without_qualified_players() {
    let players = vec![player("Cameo", "X", 1.0, 450.0, Some(0.2))];
    assert!(most_efficient(&players).is_none());
}

#[test]
fn test_top_team() {
    let players = league();
    let team = top_team(&players).unwrap();
    assert_eq!(team.name, "Liverpool");
    assert_eq!(team.goals, 39.0);
    assert_eq!(team.players, 2);
    assert_eq!(team.avg_per_player, Some(19.5));
}

#[test]
fn test_overview_totals() {
    let players = league();
    let overview = LeagueOverview::from_players(&players);
    assert_eq!(overview.total_players, 6);
    assert_eq!(overview.total_goals, 87.0);
    assert_eq!(overview.avg_goals_per_player, Some(14.5));
}

#[test]
fn test_empty_league_is_undefined_not_nan() {
    let players: Vec<PlayerRecord> = Vec::new();
    let insights = Insights::from_players(&players);

    assert!(insights.hot_streak.is_none());
    assert!(insights.most_efficient.is_none());
    assert!(insights.top_team.is_none());
    assert_eq!(insights.overview.total_players, 0);
    assert_eq!(insights.overview.total_goals, 0.0);
    assert_eq!(insights.overview.avg_goals_per_player, None);
}

#[test]
fn test_league_without_goals() {
    let players = vec![PlayerRecord::named("A"), PlayerRecord::named("B")];
    let insights = Insights::from_players(&players);

    assert!(insights.hot_streak.is_none());
    assert!(insights.top_team.is_none());
    assert_eq!(insights.overview.avg_goals_per_player, Some(0.0));
}

#[test]
fn test_insights_serialize_undefined_as_null() {
    let players: Vec<PlayerRecord> = Vec::new();
    let json = serde_json::to_value(Insights::from_players(&players)).unwrap();
    assert!(json["overview"]["avg_goals_per_player"].is_null());
    assert!(json["hot_streak"].is_null());
}

#[test]
fn test_goals_per_90_prefers_stored_rate() {
    assert_eq!(goals_per_90(&player("Rated", "X", 10.0, 900.0, Some(0.8))), 0.8);
    assert_eq!(goals_per_90(&player("Computed", "X", 10.0, 900.0, None)), 1.0);
    assert_eq!(goals_per_90(&PlayerRecord::named("Unused")), 0.0);
}

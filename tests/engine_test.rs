//! Integration tests for the statistics engine

use premier_pulse::{
    comparison::MAX_COMPARISON_PLAYERS,
    filters::filter,
    insights::{LeagueOverview, Insights},
    leaderboard::{team_aggregates, top_assisters, top_scorers},
    parse_collection, parse_collection_str, ComparisonSelection, FilterCriteria, PlayerRecord,
    PulseError, StatName,
};
use serde_json::json;

fn league() -> Vec<PlayerRecord> {
    parse_collection(json!([
        {"name": "A", "team": "X", "pos": "FW", "nation": "ENG", "gls": 5, "ast": 1},
        {"name": "B", "team": "X", "pos": "MF", "nation": "FRA", "gls": 3, "ast": 4},
        {"name": "C", "team": "Y", "pos": "FW", "nation": "ENG", "gls": 5},
        {"name": "D", "pos": "DF", "gls": 2, "ast": 2},
        {"name": "E", "team": "Y", "pos": "GK"}
    ]))
    .unwrap()
}

fn names(players: &[&PlayerRecord]) -> Vec<String> {
    players.iter().map(|p| p.name().to_string()).collect()
}

#[test]
fn test_top_scorers_scenario() {
    let players = parse_collection_str(concat!(
        r#"[{"name":"A","team":"X","gls":5},"#,
        r#"{"name":"B","team":"X","gls":3},"#,
        r#"{"name":"C","team":"Y","gls":5}]"#,
    ))
    .unwrap();
    assert_eq!(names(&top_scorers(&players, 5)), vec!["A", "C", "B"]);

    let aggregates = team_aggregates(&players);
    let x = aggregates.get("X").unwrap();
    assert_eq!((x.goals, x.players), (8.0, 2));
    let y = aggregates.get("Y").unwrap();
    assert_eq!((y.goals, y.players), (5.0, 1));
    assert_eq!(aggregates.len(), 2);
}

#[test]
fn test_top_scorers_properties() {
    let players = league();
    for n in 0..7 {
        let ranked = top_scorers(&players, n);
        assert!(ranked.len() <= n);
        assert!(ranked.iter().all(|p| p.goals() > 0.0));
        assert!(ranked.windows(2).all(|w| w[0].goals() >= w[1].goals()));
    }
    assert_eq!(names(&top_assisters(&players, 5)), vec!["B", "D", "A"]);
}

#[test]
fn test_team_aggregates_sum_matches_team_players() {
    let players = league();
    let aggregates = team_aggregates(&players);
    let expected: f64 = players
        .iter()
        .filter(|p| p.team.is_some())
        .map(PlayerRecord::goals)
        .sum();
    assert_eq!(aggregates.total_goals(), expected);
    assert!(aggregates.get("Unknown Team").is_none());
}

#[test]
fn test_filter_is_ordered_subset() {
    let players = league();
    assert_eq!(filter(&players, &FilterCriteria::default()).len(), players.len());

    let criteria = FilterCriteria::default().position("FW").nation("ENG");
    let filtered = filter(&players, &criteria);
    assert_eq!(names(&filtered), vec!["A", "C"]);

    let by_name = filter(&players, &FilterCriteria::default().search("b"));
    assert_eq!(names(&by_name), vec!["B"]);
}

#[test]
fn test_empty_league_overview_is_undefined() {
    let overview = LeagueOverview::from_players(&[]);
    assert_eq!(overview.total_players, 0);
    assert_eq!(overview.avg_goals_per_player, None);

    let insights = Insights::from_players(&[]);
    assert!(insights.hot_streak.is_none());
    assert!(insights.most_efficient.is_none());
    assert!(insights.top_team.is_none());
}

#[test]
fn test_full_selection_ignores_fifth_player() {
    let players = league();
    let full = players[..4]
        .iter()
        .fold(ComparisonSelection::new(), |sel, p| sel.add_player(p.clone()));
    assert_eq!(full.len(), MAX_COMPARISON_PLAYERS);

    let after = full.clone().add_player(players[4].clone());
    assert_eq!(after, full);
    assert!(!after.contains("E"));

    // Duplicates are ignored too
    let one = ComparisonSelection::new()
        .add_player(players[0].clone())
        .add_player(players[0].clone());
    assert_eq!(one.len(), 1);
}

#[test]
fn test_toggle_stat_round_trip_and_matrix_shape() {
    let players = league();
    let selection = ComparisonSelection::new()
        .add_player(players[0].clone())
        .add_player(players[1].clone());
    let original = selection.stats().to_vec();

    let restored = selection
        .clone()
        .toggle_stat(StatName::Goals)
        .toggle_stat(StatName::Goals);
    assert_eq!(restored.stats(), original.as_slice());

    let matrix = restored.build_matrix();
    assert_eq!(matrix.rows.len(), restored.players().len());
    assert_eq!(matrix.columns.len(), restored.stats().len());
    assert!(matrix.rows.iter().all(|r| r.cells.len() == matrix.columns.len()));
}

#[test]
fn test_non_collection_input_is_rejected() {
    assert!(matches!(
        parse_collection(json!({"name": "A"})),
        Err(PulseError::InvalidInput { .. })
    ));
    assert!(matches!(
        parse_collection(json!([{"name": "A"}, 3])),
        Err(PulseError::InvalidInput { .. })
    ));
}

//! Game state validation tests
//!
//! Money, the partial-update merge and the failure conditions.

use studio_sim::simulation::{
    Achievement, DevStats, GameState, Genre, HistoryEntry, SimConfig, Stage, StateUpdate, Theme,
    BANKRUPTCY_REASON, DEFAULT_PRICE, MORALE_BASELINE, MORALE_MAX, RESIGNATION_REASON,
    STARTING_MONEY,
};

fn fresh() -> GameState {
    GameState::new(&SimConfig::default(), Theme::Wuxia)
}

#[test]
fn test_game_state_initialization() {
    let state = fresh();
    assert_eq!(state.money, STARTING_MONEY);
    assert_eq!(state.stage, Stage::Hiring);
    assert_eq!(state.morale, MORALE_BASELINE);
    assert_eq!(state.stats, DevStats::default());
    assert_eq!(state.stats.quality, 10.0);
    assert_eq!(state.stats.hype, 10.0);
    assert_eq!(state.stats.bugs, 0.0);
    assert_eq!(state.price, DEFAULT_PRICE);
    assert_eq!(state.current_trend, Theme::Wuxia);
    assert_eq!(state.hiring.refresh.cost(), 2_000);
    assert!(state.history.is_empty());
    assert!(state.failure_reason.is_none());
}

#[test]
fn test_config_overrides_starting_money() {
    let config = SimConfig {
        starting_money: 42,
        ..SimConfig::default()
    };
    let state = GameState::new(&config, Theme::Horror);
    assert_eq!(state.money, 42);
}

#[test]
fn test_game_state_spending_checks() {
    let mut state = fresh();
    assert!(state.can_afford(STARTING_MONEY));
    assert!(!state.can_afford(STARTING_MONEY + 1));

    state.earn(500);
    assert_eq!(state.money, STARTING_MONEY + 500);
}

#[test]
fn test_merge_replaces_only_given_fields() {
    let state = fresh();
    let next = state.merged(StateUpdate {
        money: Some(123),
        append_logs: vec!["hello".to_string()],
        ..StateUpdate::default()
    });

    assert_eq!(next.money, 123);
    assert_eq!(next.morale, state.morale);
    assert_eq!(next.stats, state.stats);
    assert_eq!(next.logs.last().map(String::as_str), Some("hello"));
    // The source snapshot is untouched
    assert_eq!(state.money, STARTING_MONEY);
}

#[test]
fn test_merge_clamps_bounded_values() {
    let next = fresh().merged(StateUpdate {
        morale: Some(500.0),
        progress: Some(140.0),
        stats: Some(DevStats {
            quality: 150.0,
            hype: -20.0,
            bugs: -3.0,
        }),
        ..StateUpdate::default()
    });

    assert_eq!(next.morale, MORALE_MAX);
    assert_eq!(next.progress, 100.0);
    assert_eq!(next.stats.quality, 100.0);
    assert_eq!(next.stats.hype, 0.0);
    assert_eq!(next.stats.bugs, 0.0);

    let low = fresh().merged(StateUpdate {
        morale: Some(-10.0),
        progress: Some(-5.0),
        ..StateUpdate::default()
    });
    assert_eq!(low.morale, 0.0);
    assert_eq!(low.progress, 0.0);
}

#[test]
fn test_failure_only_during_development() {
    let mut state = fresh();
    state.money = -1;
    state.morale = 0.0;
    assert_eq!(state.failure_condition(), None);

    state.stage = Stage::Development;
    assert_eq!(state.failure_condition(), Some(BANKRUPTCY_REASON));
}

#[test]
fn test_bankruptcy_checked_before_resignation() {
    let mut state = fresh();
    state.stage = Stage::Development;

    state.morale = 0.0;
    assert_eq!(state.failure_condition(), Some(RESIGNATION_REASON));

    state.money = -10;
    assert_eq!(state.failure_condition(), Some(BANKRUPTCY_REASON));

    state.money = 0;
    state.morale = 0.5;
    assert_eq!(state.failure_condition(), None);
}

#[test]
fn test_next_playthrough_keeps_career() {
    let mut state = fresh();
    state.money = 2_500_000;
    state.total_games_released = 2;
    state.stage = Stage::Results;
    state.progress = 100.0;

    let next = state.next_playthrough(&SimConfig::default(), Theme::Mecha);
    assert_eq!(next.money, 2_500_000);
    assert_eq!(next.total_games_released, 2);
    assert_eq!(next.stage, Stage::Hiring);
    assert_eq!(next.progress, 0.0);
    assert_eq!(next.current_trend, Theme::Mecha);
}

#[test]
fn test_summary_mentions_money_and_stage() {
    let summary = fresh().summary();
    assert!(summary.contains("Money: $1000000"), "summary: {}", summary);
    assert!(summary.contains("Hiring"), "summary: {}", summary);
}

fn shipped(profit: i64) -> HistoryEntry {
    HistoryEntry {
        title: "Shipped".to_string(),
        themes: vec![Theme::Wuxia],
        genre: Genre::Rpg,
        profit,
        score: 70,
        achievement: Achievement::FirstSteps,
    }
}

#[test]
fn test_lifetime_profit_and_earnings_saturate() {
    let mut state = fresh();
    assert_eq!(state.lifetime_profit(), 0);

    state.history.push(shipped(120_000));
    state.history.push(shipped(30_500));
    assert_eq!(state.lifetime_profit(), 150_500);

    state.history.push(shipped(i64::MAX));
    assert_eq!(state.lifetime_profit(), i64::MAX);

    state.earn(i64::MAX);
    assert_eq!(state.money, i64::MAX);
}

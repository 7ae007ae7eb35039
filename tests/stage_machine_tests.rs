//! Stage machine tests
//!
//! Drives a `Session` through hiring, setup, engineering, development,
//! release and results, checking the stage guards and the state they leave
//! behind.

mod common;

use common::*;
use studio_sim::simulation::{
    marketing_option, ActionError, AiAssistance, ContentError, ContentField, ContentResponse,
    Engine, EngineeringConfig, LaunchPlan, MarketingChannel, ProjectConfig, Role, SchedulerState, Session,
    SimConfig, Stage, StateUpdate, Theme, BANKRUPTCY_REASON, FALLBACK_TITLE, RESIGNATION_REASON,
    STARTING_MONEY,
};

fn offline_in_release() -> Session {
    let mut session = offline_session();
    into_development(&mut session);
    run_to_completion(&mut session);
    assert!(assets_ready(&session));
    session.on_dev_complete().expect("build should be releasable");
    session
}

// ---- HIRING ----

#[test]
fn test_session_starts_hiring_designers() {
    let session = offline_session();
    let state = session.state();

    assert_eq!(state.stage, Stage::Hiring);
    assert_eq!(state.money, STARTING_MONEY);
    assert_eq!(state.hiring.current_role(), Some(Role::Designer));
    assert_eq!(session.offers().len(), 3);
    assert!(session.offers().iter().all(|o| o.member.role == Role::Designer));
    assert!(state.market_event.is_none());
    assert_eq!(session.seed(), SEED);
}

#[test]
fn test_same_seed_same_offers() {
    let a = offline_session();
    let b = offline_session();
    let names = |s: &Session| -> Vec<String> {
        s.offers().iter().map(|o| o.member.name.clone()).collect()
    };
    assert_eq!(names(&a), names(&b));
    assert_eq!(a.state().current_trend, b.state().current_trend);
}

#[test]
fn test_hiring_fills_seats_in_order() {
    let mut session = offline_session();

    session.hire(0).unwrap();
    assert_eq!(session.state().hiring.current_role(), Some(Role::Programmer));
    assert!(session.offers().iter().all(|o| o.member.role == Role::Programmer));

    session.hire(1).unwrap();
    assert_eq!(session.state().hiring.current_role(), Some(Role::Artist));

    session.hire(2).unwrap();
    let state = session.state();
    assert_eq!(state.stage, Stage::Setup);
    assert!(state.team.is_complete());
    assert_eq!(state.monthly_burn_rate, state.team.monthly_burn_rate());
    // Hiring does not charge anything up front
    assert_eq!(state.money, STARTING_MONEY);
}

#[test]
fn test_hire_rejects_bad_index() {
    let mut session = offline_session();
    let before = session.snapshot();
    assert_eq!(session.hire(3), Err(ActionError::NoSuchCandidate(3)));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_refresh_costs_escalate() {
    let mut session = offline_session();
    for _ in 0..3 {
        session.refresh_candidates().unwrap();
    }
    let state = session.state();
    assert_eq!(state.money, 990_500);
    assert_eq!(state.hiring.refresh.cost(), 6_750);
    assert_eq!(state.hiring.refresh.refreshes(), 3);
    assert_eq!(session.offers().len(), 3);
}

#[test]
fn test_broke_studio_cannot_hire_or_refresh() {
    let config = SimConfig {
        starting_money: 0,
        ..SimConfig::deterministic(SEED)
    };
    let mut session = Session::new(config);
    let before = session.snapshot();

    assert!(matches!(
        session.hire(0),
        Err(ActionError::InsufficientFunds { available: 0, .. })
    ));
    assert_eq!(
        session.refresh_candidates(),
        Err(ActionError::InsufficientFunds {
            needed: 2_000,
            available: 0
        })
    );
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_incomplete_team_rejected() {
    let mut session = offline_session();
    let mut team = solid_team();
    team.artist = None;
    assert_eq!(session.on_hiring_complete(team), Err(ActionError::IncompleteTeam));
    assert_eq!(session.state().stage, Stage::Hiring);
}

// ---- SETUP / ENGINEERING ----

#[test]
fn test_wrong_stage_is_rejected() {
    let mut session = offline_session();
    session.on_hiring_complete(solid_team()).unwrap();

    assert_eq!(
        session.hire(0),
        Err(ActionError::WrongStage {
            expected: Stage::Hiring,
            actual: Stage::Setup
        })
    );
    assert!(matches!(
        session.toggle_crunch(),
        Err(ActionError::WrongStage { .. })
    ));
    assert!(matches!(
        session.on_launch(LaunchPlan::default()),
        Err(ActionError::WrongStage { .. })
    ));
}

#[test]
fn test_project_validation() {
    let mut session = offline_session();
    session.on_hiring_complete(solid_team()).unwrap();

    let no_themes = ProjectConfig {
        themes: vec![],
        ..project()
    };
    let too_many = ProjectConfig {
        themes: vec![Theme::Anime, Theme::Mecha, Theme::Horror, Theme::Zombie],
        ..project()
    };
    let duplicated = ProjectConfig {
        themes: vec![Theme::Anime, Theme::Anime],
        ..project()
    };
    let no_platform = ProjectConfig {
        platforms: vec![],
        ..project()
    };

    for bad in [no_themes, too_many, duplicated, no_platform] {
        assert_eq!(
            session.on_setup_complete(bad),
            Err(ActionError::InvalidProjectConfig)
        );
    }
    assert_eq!(session.state().stage, Stage::Setup);

    session.on_setup_complete(project()).unwrap();
    assert_eq!(session.state().stage, Stage::Engineering);
    assert_eq!(session.state().project.title, "Neon Noodle Shop");
}

#[test]
fn test_blank_title_uses_suggestion_or_fallback() {
    let blank = ProjectConfig {
        title: "   ".to_string(),
        ..project()
    };

    let mut online = online_session();
    online.on_hiring_complete(solid_team()).unwrap();
    online.on_setup_complete(blank.clone()).unwrap();
    assert_eq!(online.state().project.title, FALLBACK_TITLE);

    let mut answered = online_session();
    answered.on_hiring_complete(solid_team()).unwrap();
    answered.suggest_title(&blank).unwrap();
    let request = answered.take_content_requests().remove(0);
    assert!(answered.deliver_content(
        request.ticket,
        Ok(ContentResponse::Text(r#"{"title": "Soup Dynasty"}"#.to_string()))
    ));
    answered.on_setup_complete(blank).unwrap();
    assert_eq!(answered.state().project.title, "Soup Dynasty");
}

#[test]
fn test_back_navigation() {
    let mut session = offline_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.on_setup_complete(project()).unwrap();

    session.back_to_setup().unwrap();
    assert_eq!(session.state().stage, Stage::Setup);

    session.back_to_hiring().unwrap();
    let state = session.state();
    assert_eq!(state.stage, Stage::Hiring);
    assert!(!state.team.is_complete());
    assert_eq!(state.monthly_burn_rate, 0);
    assert_eq!(state.hiring.current_role(), Some(Role::Designer));
    assert_eq!(session.offers().len(), 3);
}

#[test]
fn test_required_budget_for_default_stack() {
    let mut session = offline_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.on_setup_complete(project()).unwrap();

    let eng = EngineeringConfig::default();
    assert_eq!(eng.upfront_cost(), 90_000);
    assert_eq!(session.effective_burn_rate(), 30_000);
    assert_eq!(session.estimated_months(&eng), 23);
    assert_eq!(session.required_budget(&eng), 780_000);

    session.on_engineering_complete(eng).unwrap();
    let state = session.state();
    assert_eq!(state.stage, Stage::Development);
    assert_eq!(state.money, STARTING_MONEY - 90_000);
    assert_eq!(session.scheduler_state(), SchedulerState::Running);
}

#[test]
fn test_unaffordable_stack_leaves_state_untouched() {
    let mut session = offline_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.on_setup_complete(project()).unwrap();
    let before = session.snapshot();

    let lavish = EngineeringConfig {
        engine: Engine::Custom,
        ai_assistance: AiAssistance::Full,
        ..EngineeringConfig::default()
    };
    let needed = session.required_budget(&lavish);
    assert!(needed > STARTING_MONEY);
    assert_eq!(
        session.on_engineering_complete(lavish),
        Err(ActionError::InsufficientFunds {
            needed,
            available: STARTING_MONEY
        })
    );
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.scheduler_state(), SchedulerState::Stopped);
}

// ---- DEVELOPMENT ----

#[test]
fn test_months_fire_on_the_interval() {
    let mut session = offline_session();
    into_development(&mut session);

    session.tick(0.5);
    assert_eq!(session.state().current_month, 0);
    session.tick(0.5);
    assert_eq!(session.state().current_month, 1);

    let state = session.state();
    assert!((state.progress - 7.6116).abs() < 0.01, "progress {}", state.progress);
    assert_eq!(state.money, STARTING_MONEY - 90_000 - 30_000);
    assert_eq!(state.morale, 102.0);
    assert!((state.stats.quality - 10.8).abs() < 1e-9);
    assert_eq!(state.stats.bugs, 1.0);
    assert!(state
        .logs
        .iter()
        .any(|line| line == "[Report] Month 1: progress 7%"));
}

#[test]
fn test_milestone_suspends_the_clock() {
    let mut session = offline_session();
    into_development(&mut session);

    session.tick(10.0);
    assert_eq!(session.state().current_month, 4);
    assert!(session.pending_event().is_some());
    assert_eq!(session.scheduler_state(), SchedulerState::AwaitingDecision);

    // Nothing moves while the decision is open
    let frozen = session.snapshot();
    session.tick(5.0);
    assert_eq!(session.snapshot(), frozen);
    assert_eq!(session.on_dev_complete(), Err(ActionError::EventPending));
}

#[test]
fn test_event_option_cost_applied_once() {
    let mut session = offline_session();
    into_development(&mut session);
    session.tick(5.0);

    let event = session.pending_event().cloned().expect("milestone event");
    let (index, option) = event
        .options
        .iter()
        .enumerate()
        .max_by_key(|(_, o)| o.cost)
        .map(|(i, o)| (i, o.clone()))
        .unwrap();
    let before = session.snapshot();

    assert_eq!(
        session.select_event_option(9),
        Err(ActionError::InvalidOption(9))
    );
    session.select_event_option(index).unwrap();
    let after = session.snapshot();
    assert_eq!(after.money, before.money - option.cost);
    assert!(session.pending_event().is_none());
    assert_eq!(session.scheduler_state(), SchedulerState::Running);

    assert_eq!(
        session.select_event_option(index),
        Err(ActionError::NoPendingEvent)
    );

    session.tick(1.0);
    assert_eq!(session.state().money, after.money - 30_000);
}

#[test]
fn test_each_milestone_fires_once() {
    let mut session = offline_session();
    into_development(&mut session);

    let mut events = 0;
    for _ in 0..500 {
        if session.state().progress >= 100.0 || session.state().stage != Stage::Development {
            break;
        }
        if session.pending_event().is_some() {
            events += 1;
            let choice = cheapest_option(&session);
            session.select_event_option(choice).unwrap();
        } else {
            session.tick(1.0);
        }
    }
    assert_eq!(events, 3);
}

#[test]
fn test_pause_and_resume() {
    let mut session = offline_session();
    into_development(&mut session);

    assert_eq!(session.pause(), Ok(true));
    assert_eq!(session.pause(), Ok(false));
    assert_eq!(session.scheduler_state(), SchedulerState::Paused);
    session.tick(5.0);
    assert_eq!(session.state().current_month, 0);

    assert_eq!(session.resume(), Ok(true));
    assert_eq!(session.resume(), Ok(false));
    session.tick(1.0);
    assert_eq!(session.state().current_month, 1);
}

#[test]
fn test_pause_drops_partial_month() {
    let mut session = offline_session();
    into_development(&mut session);

    session.tick(0.75);
    session.pause().unwrap();
    session.resume().unwrap();
    session.tick(0.5);
    assert_eq!(session.state().current_month, 0);
    session.tick(0.5);
    assert_eq!(session.state().current_month, 1);
}

#[test]
fn test_crunch_doubles_progress_and_drains_morale() {
    let mut session = offline_session();
    into_development(&mut session);

    assert_eq!(session.toggle_crunch(), Ok(true));
    session.tick(1.0);
    let state = session.state();
    assert!((state.progress - 15.2232).abs() < 0.01, "progress {}", state.progress);
    assert_eq!(state.morale, 88.0);
    assert_eq!(state.stats.bugs, 6.0);
    assert_eq!(state.total_crunch_months, 1);

    assert_eq!(session.toggle_crunch(), Ok(false));
}

#[test]
fn test_bankruptcy_ends_development() {
    let mut session = offline_session();
    into_development(&mut session);
    session.apply_updates(StateUpdate {
        money: Some(10_000),
        ..StateUpdate::default()
    });
    assert_eq!(session.state().stage, Stage::Development);

    session.tick(1.0);
    let state = session.state();
    assert_eq!(state.stage, Stage::Failed);
    assert_eq!(state.failure_reason.as_deref(), Some(BANKRUPTCY_REASON));
    assert_eq!(session.scheduler_state(), SchedulerState::Stopped);

    // No further months once failed
    session.tick(10.0);
    assert_eq!(session.state().current_month, 1);
}

#[test]
fn test_morale_collapse_via_update() {
    let mut session = offline_session();
    into_development(&mut session);
    session.apply_updates(StateUpdate {
        morale: Some(-40.0),
        ..StateUpdate::default()
    });
    let state = session.state();
    assert_eq!(state.stage, Stage::Failed);
    assert_eq!(state.morale, 0.0);
    assert_eq!(state.failure_reason.as_deref(), Some(RESIGNATION_REASON));
}

#[test]
fn test_on_fail_records_reason() {
    let mut session = offline_session();
    assert!(matches!(
        session.on_fail("too early"),
        Err(ActionError::WrongStage { .. })
    ));

    into_development(&mut session);
    session.on_fail("Publisher pulled out").unwrap();
    let state = session.state();
    assert_eq!(state.stage, Stage::Failed);
    assert_eq!(state.failure_reason.as_deref(), Some("Publisher pulled out"));
    assert!(!state.is_crunching);
}

#[test]
fn test_dev_complete_needs_full_progress() {
    let mut session = offline_session();
    into_development(&mut session);
    session.tick(1.0);
    assert!(matches!(
        session.on_dev_complete(),
        Err(ActionError::DevelopmentIncomplete(_))
    ));
}

#[test]
fn test_crunch_locked_after_completion() {
    let mut session = offline_session();
    into_development(&mut session);
    session.toggle_crunch().unwrap();
    session.apply_updates(StateUpdate {
        progress: Some(100.0),
        ..StateUpdate::default()
    });
    assert!(!session.state().is_crunching);

    // The finished build no longer advances
    session.tick(1.0);
    let state = session.state();
    assert_eq!(state.current_month, 0);
    assert_eq!(state.progress, 100.0);
    assert_eq!(session.toggle_crunch(), Err(ActionError::DevelopmentFinished));
}

#[test]
fn test_progress_update_to_full_starts_final_assets() {
    let mut session = online_session();
    into_development(&mut session);
    session.apply_updates(StateUpdate {
        progress: Some(100.0),
        ..StateUpdate::default()
    });

    assert_eq!(session.scheduler_state(), SchedulerState::AwaitingAssets);
    assert!(session.is_content_pending(ContentField::StoreSummary));
    assert!(session.is_content_pending(ContentField::CoverArt));
    assert_eq!(session.on_dev_complete(), Err(ActionError::AssetsPending));
    assert_eq!(session.state().stage, Stage::Development);

    session.tick(10.0);
    assert!(assets_ready(&session));
    session.on_dev_complete().unwrap();
    assert_eq!(session.state().stage, Stage::Release);
    assert!(session.state().store_summary.is_some());
}

#[test]
fn test_progress_update_while_paused_starts_final_assets() {
    let mut session = online_session();
    into_development(&mut session);
    assert!(session.pause().unwrap());
    session.apply_updates(StateUpdate {
        progress: Some(120.0),
        ..StateUpdate::default()
    });

    assert_eq!(session.scheduler_state(), SchedulerState::AwaitingAssets);
    assert_eq!(session.on_dev_complete(), Err(ActionError::AssetsPending));
}

// ---- RELEASE / RESULTS ----

#[test]
fn test_offline_assets_resolve_immediately() {
    let mut session = offline_session();
    into_development(&mut session);
    run_to_completion(&mut session);

    assert_eq!(session.scheduler_state(), SchedulerState::Stopped);
    let state = session.state();
    assert!(state.store_summary.is_some());
    assert!(state.cover_art.is_none());
    assert!(state
        .logs
        .iter()
        .any(|line| line.contains("1.0.0-GOLD")));
}

#[test]
fn test_launch_validation() {
    let mut session = offline_in_release();
    assert_eq!(session.state().stage, Stage::Release);

    let before = session.snapshot();
    assert_eq!(
        session.on_launch(LaunchPlan {
            price: 0,
            marketing: vec![],
        }),
        Err(ActionError::InvalidPrice(0))
    );
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_launch_charges_each_channel_once() {
    let mut session = offline_in_release();
    let money = session.state().money;

    let result = session
        .on_launch(LaunchPlan {
            price: 45,
            marketing: vec![
                MarketingChannel::CommunityDiscord,
                MarketingChannel::CommunityDiscord,
            ],
        })
        .unwrap();

    let state = session.state();
    let cost = marketing_option(MarketingChannel::CommunityDiscord).cost;
    assert_eq!(state.stage, Stage::Results);
    assert_eq!(state.money, money - cost);
    assert_eq!(state.marketing, vec![MarketingChannel::CommunityDiscord]);
    assert_eq!(state.price, 45);
    assert_eq!(state.total_games_released, 1);
    assert!(state.unlocked_achievements.contains(&result.achievement));
    assert!((1..=100).contains(&result.score));
    // Offline comments land right away
    assert_eq!(state.comments.len(), 5);
}

#[test]
fn test_settlement_and_restart_carry_the_career() {
    let mut session = offline_in_release();
    let trend = session.state().current_trend;
    session.on_launch(LaunchPlan::default()).unwrap();

    assert_eq!(session.on_restart(), Err(ActionError::SettlementIncomplete));

    for month in 1..=12 {
        let sales = session.play_next_month().unwrap();
        assert_eq!(sales.month, month);
        assert!(sales.units >= 10);
    }
    assert!(session.settlement_finished());
    assert_eq!(
        session.play_next_month(),
        Err(ActionError::SettlementFinished)
    );

    let money = session.state().money;
    let total = session.settlement().unwrap().total_revenue;
    let profit = session.on_restart().unwrap();
    assert_eq!(profit, total);

    let state = session.state();
    assert_eq!(state.stage, Stage::Hiring);
    assert_eq!(state.money, money + profit);
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].title, "Neon Noodle Shop");
    assert_eq!(state.history[0].profit, profit);
    assert_eq!(state.total_games_released, 1);
    assert_eq!(state.current_trend, trend);
    assert_eq!(state.progress, 0.0);
    assert!(state.launch.is_none());
    assert_eq!(session.offers().len(), 3);
}

#[test]
fn test_huge_price_saturates_revenue() {
    let mut session = offline_in_release();
    session
        .on_launch(LaunchPlan {
            price: i64::MAX / 4,
            ..LaunchPlan::default()
        })
        .unwrap();

    for _ in 0..12 {
        let month = session.play_next_month().unwrap();
        assert!(month.units >= 10);
        assert_eq!(month.revenue, i64::MAX);
    }
    assert!(session.settlement_finished());

    let profit = session.on_restart().unwrap();
    assert_eq!(profit, i64::MAX);
    assert_eq!(session.state().money, i64::MAX);
    assert_eq!(session.state().history.len(), 1);
}

#[test]
fn test_auto_play_runs_the_settlement() {
    let mut session = offline_in_release();
    session.on_launch(LaunchPlan::default()).unwrap();

    session.set_auto_play(true).unwrap();
    assert!(session.auto_play());
    session.tick(0.25);
    assert_eq!(session.settlement().unwrap().month, 0);
    session.tick(0.25);
    assert_eq!(session.settlement().unwrap().month, 1);

    session.tick(100.0);
    assert!(session.settlement_finished());
    assert!(!session.auto_play());
    assert_eq!(session.settlement().unwrap().history.len(), 12);
    assert_eq!(
        session.set_auto_play(true),
        Err(ActionError::SettlementFinished)
    );
}

#[test]
fn test_restart_forfeits_everything() {
    let mut session = offline_in_release();
    session.on_launch(LaunchPlan::default()).unwrap();

    session.restart();
    let state = session.state();
    assert_eq!(state.stage, Stage::Hiring);
    assert_eq!(state.money, STARTING_MONEY);
    assert!(state.history.is_empty());
    assert!(state.unlocked_achievements.is_empty());
    assert_eq!(state.total_games_released, 0);
}

// ---- CONTENT ----

#[test]
fn test_latest_title_request_wins() {
    let mut session = online_session();
    session.on_hiring_complete(solid_team()).unwrap();

    session.suggest_title(&project()).unwrap();
    let first = session.take_content_requests();
    assert_eq!(first.len(), 1);
    session.suggest_title(&project()).unwrap();
    let second = session.take_content_requests();
    assert_eq!(second.len(), 1);

    assert!(!session.deliver_content(
        first[0].ticket,
        Ok(ContentResponse::Text("Old Idea".to_string()))
    ));
    assert!(session.state().suggested_title.is_none());

    assert!(session.deliver_content(
        second[0].ticket,
        Ok(ContentResponse::Text("```json\n{\"title\": \"Fresh Idea\"}\n```".to_string()))
    ));
    assert_eq!(session.state().suggested_title.as_deref(), Some("Fresh Idea"));
    assert!(!session.is_content_pending(ContentField::Title));
}

#[test]
fn test_content_after_restart_is_stale() {
    let mut session = online_session();
    session.request_commentary(0).unwrap();
    let request = session.take_content_requests().remove(0);

    session.restart();
    assert!(!session.deliver_content(
        request.ticket,
        Ok(ContentResponse::Text("A legend".to_string()))
    ));
    assert!(session.offers().iter().all(|o| o.commentary.is_none()));
}

#[test]
fn test_commentary_lands_on_the_offer() {
    let mut session = online_session();
    session.request_commentary(1).unwrap();
    let request = session.take_content_requests().remove(0);
    assert!(session.deliver_content(
        request.ticket,
        Ok(ContentResponse::Text(r#"{"text": "Hire immediately."}"#.to_string()))
    ));
    assert_eq!(
        session.offers()[1].commentary.as_deref(),
        Some("Hire immediately.")
    );
}

#[test]
fn test_failed_content_uses_fallback() {
    let mut session = online_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.suggest_title(&project()).unwrap();
    let request = session.take_content_requests().remove(0);

    assert!(session.deliver_content(request.ticket, Ok(ContentResponse::Image(None))));
    assert_eq!(session.state().suggested_title.as_deref(), Some(FALLBACK_TITLE));
}

#[test]
fn test_provider_error_uses_fallback() {
    let mut session = online_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.suggest_title(&project()).unwrap();
    let request = session.take_content_requests().remove(0);

    assert!(session.deliver_content(
        request.ticket,
        Err(ContentError::Provider("quota exhausted".to_string()))
    ));
    assert_eq!(session.state().suggested_title.as_deref(), Some(FALLBACK_TITLE));
    assert!(!session.is_content_pending(ContentField::Title));
}

#[test]
fn test_unanswered_content_times_out() {
    let mut session = online_session();
    session.on_hiring_complete(solid_team()).unwrap();
    session.suggest_title(&project()).unwrap();
    assert!(session.is_content_pending(ContentField::Title));

    session.tick(9.0);
    assert!(session.state().suggested_title.is_none());
    session.tick(1.0);
    assert_eq!(session.state().suggested_title.as_deref(), Some(FALLBACK_TITLE));
    assert!(!session.is_content_pending(ContentField::Title));
}

#[test]
fn test_final_assets_gate_the_release() {
    let mut session = online_session();
    into_development(&mut session);
    run_to_completion(&mut session);

    assert_eq!(session.scheduler_state(), SchedulerState::AwaitingAssets);
    assert_eq!(session.on_dev_complete(), Err(ActionError::AssetsPending));

    let requests = session.take_content_requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        let response = match request.ticket.field {
            ContentField::CoverArt => ContentResponse::Image(None),
            _ => ContentResponse::Text("Noodles, but neon.".to_string()),
        };
        assert!(session.deliver_content(request.ticket, Ok(response)));
    }

    assert!(assets_ready(&session));
    assert_eq!(
        session.state().store_summary.as_deref(),
        Some("Noodles, but neon.")
    );
    session.on_dev_complete().unwrap();
    assert_eq!(session.state().stage, Stage::Release);
}

#[test]
fn test_final_assets_time_out_to_fallbacks() {
    let mut session = online_session();
    into_development(&mut session);
    run_to_completion(&mut session);
    assert!(!assets_ready(&session));

    session.tick(10.0);
    assert!(assets_ready(&session));
    assert!(session.state().store_summary.is_some());
    session.on_dev_complete().unwrap();
}

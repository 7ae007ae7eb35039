//! Shared fixtures for the integration tests

#![allow(dead_code)]

use studio_sim::simulation::{
    ContentMode, EngineeringConfig, Genre, ProjectConfig, Rarity, Role, SchedulerState, Session,
    SimConfig, Skills, StaffId, StaffMember, Stage, Team, Theme,
};

pub const SEED: u64 = 7;

pub fn member(id: u32, role: Role, skill: u32, salary: i64) -> StaffMember {
    StaffMember {
        id: StaffId(10_000 + id),
        name: format!("{} {}", role.display_name(), id),
        role,
        special_skill: "Testing".to_string(),
        description: "Fixture".to_string(),
        skills: Skills::new(skill, skill, skill),
        salary,
        rarity: Rarity::Common,
    }
}

/// Three 80-skill members on 10k each
pub fn solid_team() -> Team {
    Team {
        designer: Some(member(1, Role::Designer, 80, 10_000)),
        programmer: Some(member(2, Role::Programmer, 80, 10_000)),
        artist: Some(member(3, Role::Artist, 80, 10_000)),
    }
}

pub fn project() -> ProjectConfig {
    ProjectConfig {
        title: "Neon Noodle Shop".to_string(),
        themes: vec![Theme::Cyberpunk],
        genre: Genre::Rpg,
        ..ProjectConfig::default()
    }
}

pub fn offline_session() -> Session {
    Session::with_content_mode(SimConfig::deterministic(SEED), ContentMode::Offline)
}

pub fn online_session() -> Session {
    Session::with_content_mode(SimConfig::deterministic(SEED), ContentMode::Online)
}

/// Drive a session from HIRING to DEVELOPMENT with the solid team
pub fn into_development(session: &mut Session) {
    session
        .on_hiring_complete(solid_team())
        .expect("team should be accepted");
    session
        .on_setup_complete(project())
        .expect("project should be accepted");
    session
        .on_engineering_complete(EngineeringConfig::default())
        .expect("default stack should be affordable");
    assert_eq!(session.state().stage, Stage::Development);
}

/// Cheapest option of the pending event
pub fn cheapest_option(session: &Session) -> usize {
    let event = session.pending_event().expect("an event should be pending");
    event
        .options
        .iter()
        .enumerate()
        .min_by_key(|(_, option)| option.cost)
        .map(|(index, _)| index)
        .expect("events have options")
}

/// Tick month by month, answering events, until development stops running
pub fn run_to_completion(session: &mut Session) {
    for _ in 0..500 {
        if session.state().stage != Stage::Development {
            return;
        }
        if session.pending_event().is_some() {
            let choice = cheapest_option(session);
            session
                .select_event_option(choice)
                .expect("cheapest option should be affordable");
            continue;
        }
        if session.state().progress >= 100.0 {
            return;
        }
        session.tick(1.0);
    }
    panic!("development did not finish: {}", session.state().summary());
}

pub fn assets_ready(session: &Session) -> bool {
    session.scheduler_state() != SchedulerState::AwaitingAssets
}

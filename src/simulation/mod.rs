//! Standalone studio simulation module
//!
//! This module contains the whole game engine: hiring, project setup, the
//! monthly development loop with its decision events, and the launch and
//! sales settlement. It runs without any presentation layer and can be
//! driven from tests or the headless CLI.

mod candidates;
mod config;
mod content;
mod error;
mod events;
mod game_state;
mod market;
mod progression;
mod scheduler;
mod session;
mod tables;
mod types;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use candidates::{
    generate_candidates, templates_for, RefreshPricing, StaffIdAllocator, StaffTemplate,
    CANDIDATES_PER_OFFER, INITIAL_REFRESH_COST, REFRESH_COST_GROWTH,
};
#[allow(unused_imports)]
pub use config::{SimConfig, STARTING_MONEY};
#[allow(unused_imports)]
pub use content::{
    fallback, parse_comments, parse_text, parse_title, resolve, ContentDesk, ContentField,
    ContentMode, ContentPrompt, ContentProvider, ContentRequest, ContentResponse, ContentTicket,
    CoverArt, NoProvider, ResolvedContent, FALLBACK_COMMENTARY, FALLBACK_SUMMARY, FALLBACK_TITLE,
};
#[allow(unused_imports)]
pub use error::{ActionError, ActionResult, ContentError};
#[allow(unused_imports)]
pub use events::{
    all_events, event_pool_size, generate_event, DevEvent, EventKind, EventOption,
    MilestoneTracker, MILESTONES,
};
#[allow(unused_imports)]
pub use game_state::{
    GameState, HiringBoard, HistoryEntry, LaunchRecord, Offer, StateUpdate, BANKRUPTCY_REASON,
    RESIGNATION_REASON,
};
#[allow(unused_imports)]
pub use market::{
    bug_impact, bug_penalty, local_comments, marketing_decay, raw_score, simulate_launch,
    trend_bonus, Achievement, FinalResult, LaunchInputs, PlayerComment, ReviewBand, SalesMonth,
    Sentiment, Settlement, COMMENT_COUNT, DEFAULT_PRICE, MIN_MONTHLY_SALES, SETTLEMENT_MONTHS,
    TREND_BONUS,
};
#[allow(unused_imports)]
pub use progression::{
    advance_month, calculate_monthly_progress, estimate_months, morale_multiplier, tech_synergy,
    DevelopmentMonth, MonthContext, ProgressInputs, MIN_MONTHLY_PROGRESS,
};
#[allow(unused_imports)]
pub use scheduler::{IntervalTimer, Scheduler, SchedulerState};
pub use session::{LaunchPlan, Session, MARKET_EVENT_CHANCE};
#[allow(unused_imports)]
pub use tables::{
    ai_modifier, dependency_modifier, engine_difficulty, engine_modifier, fidelity_modifier,
    genre_complexity, marketing_boost, marketing_cost, marketing_option, optimization_modifier,
    MarketEvent, MarketingOption, TierModifier, MARKET_EVENTS,
};
#[allow(unused_imports)]
pub use types::{
    clamp_morale, clamp_progress, AiAssistance, DependencyStrategy, DevStats, Engine,
    EngineeringConfig, Genre, GraphicsFidelity, MarketingChannel, Optimization, Platform,
    ProjectConfig, Rarity, Role, Skills, StaffId, StaffMember, Stage, StatImpact, Team, Theme,
    MORALE_BASELINE, MORALE_MAX, STAT_MAX,
};

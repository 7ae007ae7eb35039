//! Monthly development progression
//!
//! `calculate_monthly_progress` turns team, tech stack, crunch, genre and
//! morale into a percentage delta. `DevelopmentMonth` is the full set of
//! changes one development month applies to the project.

use super::tables::{genre_complexity, MarketEvent};
use super::types::{
    clamp_morale, DevStats, EngineeringConfig, Genre, Team, STAT_MAX,
};

/// Progress never creeps slower than this per month
pub const MIN_MONTHLY_PROGRESS: f64 = 0.1;
/// Team stat sum that yields the base 4% per month
pub const TEAM_STAT_REFERENCE: f64 = 150.0;
/// Base monthly progress at the reference stat sum
pub const BASE_MONTHLY_PROGRESS: f64 = 4.0;
/// Crunch doubles output
pub const CRUNCH_MULTIPLIER: f64 = 2.0;

/// Months a project would take at the reference pace
const BASE_DURATION_MONTHS: f64 = 24.0;

/// Inputs of the progression formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInputs {
    pub designer_creativity: u32,
    pub programmer_technology: u32,
    pub artist_artistry: u32,
    pub engine_difficulty: f64,
    pub speed_multiplier: f64,
    pub is_crunching: bool,
    pub genre: Genre,
    pub morale: f64,
}

impl ProgressInputs {
    pub fn from_project(
        team: &Team,
        engineering: &EngineeringConfig,
        genre: Genre,
        is_crunching: bool,
        morale: f64,
    ) -> Self {
        Self {
            designer_creativity: team.designer_creativity(),
            programmer_technology: team.programmer_technology(),
            artist_artistry: team.artist.as_ref().map_or(0, |m| m.skills.artistry),
            engine_difficulty: engineering.engine_difficulty(),
            speed_multiplier: engineering.speed_multiplier(),
            is_crunching,
            genre,
            morale,
        }
    }

    /// Fold the market's speed multiplier in ahead of the floor
    pub fn with_market(mut self, event: Option<&MarketEvent>) -> Self {
        if let Some(event) = event {
            self.speed_multiplier *= event.speed_multiplier;
        }
        self
    }
}

/// How well the programmer's technology matches the engine
///
/// Below the engine's difficulty the factor falls linearly to 0.5 at zero
/// skill; above it there is a small bonus of 0.2 per 100 points of excess.
pub fn tech_synergy(technology: f64, difficulty: f64) -> f64 {
    if technology < difficulty {
        0.5 + (technology / difficulty) * 0.5
    } else {
        1.0 + ((technology - difficulty) / 100.0) * 0.2
    }
}

pub fn morale_multiplier(morale: f64) -> f64 {
    if morale < 30.0 {
        0.3
    } else if morale < 70.0 {
        0.7
    } else {
        1.0
    }
}

/// Monthly progress delta in percent; always at least `MIN_MONTHLY_PROGRESS`
pub fn calculate_monthly_progress(inputs: &ProgressInputs) -> f64 {
    let synergy = tech_synergy(
        f64::from(inputs.programmer_technology),
        inputs.engine_difficulty,
    );
    let team_stats = f64::from(
        inputs.designer_creativity + inputs.programmer_technology + inputs.artist_artistry,
    );
    let crunch = if inputs.is_crunching { CRUNCH_MULTIPLIER } else { 1.0 };

    let progress = (team_stats / TEAM_STAT_REFERENCE)
        * BASE_MONTHLY_PROGRESS
        * inputs.speed_multiplier
        * crunch
        * synergy
        * genre_complexity(inputs.genre)
        * morale_multiplier(inputs.morale);

    // NaN from a degenerate difficulty still has to move forward
    if progress.is_nan() {
        return MIN_MONTHLY_PROGRESS;
    }
    progress.max(MIN_MONTHLY_PROGRESS)
}

/// Rough project length shown before the tech stack is confirmed
pub fn estimate_months(team: &Team, engineering: &EngineeringConfig) -> u32 {
    let tech = team
        .programmer
        .as_ref()
        .map_or(50.0, |m| f64::from(m.skills.technology))
        / 100.0;
    let design = team
        .designer
        .as_ref()
        .map_or(50.0, |m| f64::from(m.skills.creativity))
        / 100.0;
    let pace = engineering.speed_multiplier() * (tech * 0.7 + design * 0.3);
    if pace <= 0.0 {
        // Fall back to a long but finite horizon for a zero-skill team
        return (BASE_DURATION_MONTHS * 10.0) as u32;
    }
    (BASE_DURATION_MONTHS / pace).ceil() as u32
}

/// Everything one development month changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevelopmentMonth {
    pub progress: f64,
    pub money: i64,
    pub morale: f64,
    pub stats: DevStats,
}

/// Drift inputs besides the progress delta itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthContext {
    pub progress: f64,
    pub money: i64,
    pub morale: f64,
    pub stats: DevStats,
    pub burn_rate: i64,
    pub is_crunching: bool,
    /// Extra bug growth from the optimization tier
    pub bug_modifier: f64,
}

/// Apply one month of development to the given snapshot
///
/// Salaries are paid, morale drains 12 under crunch and otherwise drifts
/// up by 2 (down by 1 above 120), quality and hype creep up, bugs grow.
pub fn advance_month(context: &MonthContext, progress_delta: f64) -> DevelopmentMonth {
    let morale_drain = if context.is_crunching {
        12.0
    } else if context.morale > 120.0 {
        1.0
    } else {
        -2.0
    };

    let quality_gain = if context.is_crunching { 0.3 } else { 0.8 };
    let mut bug_growth = if context.is_crunching { 6.0 } else { 1.0 };
    if context.bug_modifier > 0.0 {
        bug_growth *= 1.0 + context.bug_modifier;
    }

    DevelopmentMonth {
        progress: (context.progress + progress_delta).min(100.0),
        money: context.money - context.burn_rate,
        morale: clamp_morale(context.morale - morale_drain),
        stats: DevStats {
            quality: (context.stats.quality + quality_gain).min(STAT_MAX),
            hype: (context.stats.hype + 0.1).min(STAT_MAX),
            bugs: context.stats.bugs + bug_growth,
        }
        .clamped(),
    }
}

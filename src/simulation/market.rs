//! Launch scoring and the 12-month sales settlement
//!
//! `simulate_launch` turns the finished project into a review score and a
//! sales potential. `Settlement` then plays that potential out month by
//! month while hype and marketing fade.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{ActionError, ActionResult};
use super::tables::MarketEvent;
use super::types::{DevStats, STAT_MAX};

/// Score multiplier when a project theme matches the session trend
pub const TREND_BONUS: f64 = 1.3;
/// Months in the post-launch settlement
pub const SETTLEMENT_MONTHS: u32 = 12;
/// Sales never fall below this many units in a month
pub const MIN_MONTHLY_SALES: i64 = 10;
/// Reference price the price-value ratio is measured against
pub const REFERENCE_PRICE: f64 = 60.0;
/// Price the release form starts with
pub const DEFAULT_PRICE: i64 = 60;

const SALES_DECAY: f64 = 0.7;
const MARKETING_DECAY: f64 = 0.4;
const HYPE_DECAY: f64 = 0.85;
const HYPE_FLOOR: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReviewBand {
    Masterpiece,
    Great,
    Mediocre,
    Disaster,
}

impl ReviewBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 85 => ReviewBand::Masterpiece,
            s if s > 70 => ReviewBand::Great,
            s if s > 50 => ReviewBand::Mediocre,
            _ => ReviewBand::Disaster,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewBand::Masterpiece => "Masterpiece",
            ReviewBand::Great => "Great",
            ReviewBand::Mediocre => "Mediocre",
            ReviewBand::Disaster => "Disaster",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Achievement {
    InstantClassic,
    EWasteRecycler,
    PatchLaterApprentice,
    FirstSteps,
}

impl Achievement {
    /// Highest priority band that matches: top score, bottom score, bug count, default
    pub fn select(score: u32, bugs: f64) -> Self {
        if score > 90 {
            Achievement::InstantClassic
        } else if score < 40 {
            Achievement::EWasteRecycler
        } else if bugs > 80.0 {
            Achievement::PatchLaterApprentice
        } else {
            Achievement::FirstSteps
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Achievement::InstantClassic => "Instant Classic",
            Achievement::EWasteRecycler => "E-Waste Recycler",
            Achievement::PatchLaterApprentice => "Patch Later Apprentice",
            Achievement::FirstSteps => "First Steps",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::InstantClassic => "Players cheer your name in the streets.",
            Achievement::EWasteRecycler => "Players feel personally insulted.",
            Achievement::PatchLaterApprentice => "Bugs are a feature, apparently.",
            Achievement::FirstSteps => "Your first game made it to the shelves.",
        }
    }
}

/// Everything the launch needs from the finished project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchInputs {
    pub stats: DevStats,
    pub quality_multiplier: f64,
    pub matches_trend: bool,
    pub price: i64,
    pub market_event: MarketEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalResult {
    /// Sales capacity fed into the settlement
    pub base_potential: f64,
    /// Review score in [1, 100]
    pub score: u32,
    pub review: ReviewBand,
    pub achievement: Achievement,
    /// Hype the settlement starts from
    pub launch_hype: f64,
}

/// (bugs / 20) ^ 1.2, unbounded
pub fn bug_penalty(bugs: f64) -> f64 {
    (bugs.max(0.0) / 20.0).powf(1.2)
}

pub fn trend_bonus(matches_trend: bool) -> f64 {
    if matches_trend {
        TREND_BONUS
    } else {
        1.0
    }
}

/// Score before noise and clamping
pub fn raw_score(quality: f64, quality_multiplier: f64, bugs: f64, trend: f64) -> f64 {
    (quality * quality_multiplier * 0.7 + (100.0 - bug_penalty(bugs)) * 0.3) * trend
}

/// Score a finished project and derive its sales potential
pub fn simulate_launch<R: Rng + ?Sized>(inputs: &LaunchInputs, rng: &mut R) -> FinalResult {
    let trend = trend_bonus(inputs.matches_trend);
    let noise: f64 = rng.random_range(-4.0..4.0);
    let raw = raw_score(
        inputs.stats.quality,
        inputs.quality_multiplier,
        inputs.stats.bugs,
        trend,
    ) + noise;
    let score = raw.floor().clamp(1.0, 100.0) as u32;

    let launch_hype = (inputs.stats.hype * inputs.market_event.hype_multiplier).clamp(0.0, STAT_MAX);
    let price = inputs.price.max(1) as f64;
    let price_value_ratio = (f64::from(score) / REFERENCE_PRICE) / (price / REFERENCE_PRICE);
    let base_potential = f64::from(score)
        * 5000.0
        * (launch_hype / 20.0)
        * price_value_ratio
        * trend
        * inputs.market_event.sales_multiplier;

    FinalResult {
        base_potential,
        score,
        review: ReviewBand::from_score(score),
        achievement: Achievement::select(score, inputs.stats.bugs),
        launch_hype,
    }
}

/// Marketing boost remaining in a settlement month
pub fn marketing_decay(month: u32, boost: f64) -> f64 {
    if month <= 1 {
        boost
    } else {
        1.0 + (boost - 1.0) * MARKETING_DECAY.powi(month as i32 - 1)
    }
}

pub fn bug_impact(bugs: f64) -> f64 {
    (1.0 - bugs / 150.0).max(0.2)
}

/// Outcome of one settlement month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesMonth {
    pub month: u32,
    pub units: i64,
    pub revenue: i64,
    /// Hype after this month's decay
    pub hype: f64,
}

/// Twelve months of decaying post-launch sales
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub base_potential: f64,
    pub price: i64,
    pub bugs: f64,
    pub marketing_boost: f64,
    /// Months played so far
    pub month: u32,
    pub hype: f64,
    pub total_revenue: i64,
    pub total_units: i64,
    pub history: Vec<SalesMonth>,
}

impl Settlement {
    pub fn new(result: &FinalResult, price: i64, bugs: f64, marketing_boost: f64) -> Self {
        Self {
            base_potential: result.base_potential,
            price,
            bugs,
            marketing_boost,
            month: 0,
            hype: result.launch_hype,
            total_revenue: 0,
            total_units: 0,
            history: Vec::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.month >= SETTLEMENT_MONTHS
    }

    /// Unit sales for the next month with a given jitter factor
    pub fn projected_units(&self, jitter: f64) -> i64 {
        let month = self.month + 1;
        let units = self.base_potential
            * SALES_DECAY.powi(month as i32 - 1)
            * (self.hype / 100.0)
            * marketing_decay(month, self.marketing_boost)
            * bug_impact(self.bugs)
            * jitter;
        if units.is_nan() {
            return MIN_MONTHLY_SALES;
        }
        (units.floor() as i64).max(MIN_MONTHLY_SALES)
    }

    /// Play one month with jitter drawn from [0.8, 1.2)
    pub fn play_month<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ActionResult<SalesMonth> {
        if self.is_finished() {
            return Err(ActionError::SettlementFinished);
        }
        let jitter: f64 = rng.random_range(0.8..1.2);
        let units = self.projected_units(jitter);
        let revenue = units.saturating_mul(self.price);

        self.month += 1;
        self.total_units = self.total_units.saturating_add(units);
        self.total_revenue = self.total_revenue.saturating_add(revenue);
        self.hype = (self.hype * HYPE_DECAY).max(HYPE_FLOOR);

        let entry = SalesMonth {
            month: self.month,
            units,
            revenue,
            hype: self.hype,
        };
        self.history.push(entry);
        Ok(entry)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "neu")]
    Neutral,
}

/// A player review shown on the results screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerComment {
    pub user: String,
    pub text: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentCategory {
    Masterpiece,
    Buggy,
    Expensive,
    Cheap,
}

/// Comments shown on the results screen
pub const COMMENT_COUNT: usize = 5;

static COMMENT_POOL: [(&str, &str, Sentiment, CommentCategory); 6] = [
    ("MarsGamer001", "The combat feel is unreal, my controller is literally smoking!", Sentiment::Positive, CommentCategory::Masterpiece),
    ("CybertronTemp", "Masterpiece. Haven't seen this much love in a game for years.", Sentiment::Positive, CommentCategory::Masterpiece),
    ("BugHunter", "I think I bought a bug simulator with some game content sprinkled in.", Sentiment::Negative, CommentCategory::Buggy),
    ("RefundKing", "Crashed 20 times in 2 hours. Writing my refund request now.", Sentiment::Negative, CommentCategory::Buggy),
    ("WalletVictim", "At this price the studio must have lost its mind.", Sentiment::Negative, CommentCategory::Expensive),
    ("FreebieLord", "This quality at this price? Buying ten copies!", Sentiment::Positive, CommentCategory::Cheap),
];

fn to_comment(entry: &(&str, &str, Sentiment, CommentCategory)) -> PlayerComment {
    PlayerComment {
        user: entry.0.to_string(),
        text: entry.1.to_string(),
        sentiment: entry.2,
    }
}

/// Curated comments used when the content provider has none
///
/// A score above 85 always includes the masterpiece comments and more than
/// 50 bugs always includes the buggy ones; the rest is a random fill.
pub fn local_comments<R: Rng + ?Sized>(score: u32, bugs: f64, rng: &mut R) -> Vec<PlayerComment> {
    let mut picked: Vec<usize> = Vec::new();
    for (i, entry) in COMMENT_POOL.iter().enumerate() {
        let forced = match entry.3 {
            CommentCategory::Masterpiece => score > 85,
            CommentCategory::Buggy => bugs > 50.0,
            CommentCategory::Expensive | CommentCategory::Cheap => false,
        };
        if forced {
            picked.push(i);
        }
    }

    let mut rest: Vec<usize> = (0..COMMENT_POOL.len())
        .filter(|i| !picked.contains(i))
        .collect();
    rest.shuffle(rng);
    let needed = COMMENT_COUNT.saturating_sub(picked.len());
    picked.extend(rest.into_iter().take(needed));

    picked.iter().map(|i| to_comment(&COMMENT_POOL[*i])).collect()
}

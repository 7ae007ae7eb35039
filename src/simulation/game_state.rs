//! Game state tracking for the studio management game
//!
//! `GameState` is the whole snapshot the presentation layer sees. It is
//! only ever replaced as a whole: partial changes are expressed as a
//! `StateUpdate` and merged with `merged`.

use serde::Serialize;

use super::candidates::RefreshPricing;
use super::config::SimConfig;
use super::content::CoverArt;
use super::market::{Achievement, FinalResult, PlayerComment, Settlement, DEFAULT_PRICE};
use super::tables::MarketEvent;
use super::types::{
    clamp_morale, clamp_progress, DevStats, EngineeringConfig, Genre, MarketingChannel,
    ProjectConfig, Role, Stage, StaffMember, Team, Theme, MORALE_BASELINE,
};

/// Shown when money goes negative during development
pub const BANKRUPTCY_REASON: &str =
    "The money ran out and the bank seized the studio's assets. The dream is over.";
/// Shown when morale hits zero during development
pub const RESIGNATION_REASON: &str =
    "The core team walked out together, crushed by endless pressure and collapsing morale.";

/// A finished game kept across playthroughs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub title: String,
    pub themes: Vec<Theme>,
    pub genre: Genre,
    pub profit: i64,
    pub score: u32,
    pub achievement: Achievement,
}

/// A candidate on the hiring board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub member: StaffMember,
    /// Recruiter commentary, once requested and resolved
    pub commentary: Option<String>,
}

/// Offers for the role currently being hired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringBoard {
    /// Index into `Role::ORDER`
    pub role_index: usize,
    pub offers: Vec<Offer>,
    pub refresh: RefreshPricing,
}

impl HiringBoard {
    pub fn new(refresh: RefreshPricing) -> Self {
        Self {
            role_index: 0,
            offers: Vec::new(),
            refresh,
        }
    }

    /// Role being hired, `None` once all seats are filled
    pub fn current_role(&self) -> Option<Role> {
        Role::ORDER.get(self.role_index).copied()
    }
}

/// Outcome of the launch and its settlement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub result: FinalResult,
    pub settlement: Settlement,
    pub marketing_cost: i64,
}

/// Full snapshot of one playthrough plus cross-playthrough meta state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub money: i64,
    pub stage: Stage,
    pub project: ProjectConfig,
    pub engineering: EngineeringConfig,
    pub team: Team,
    pub hiring: HiringBoard,
    pub current_month: u32,
    pub monthly_burn_rate: i64,
    pub morale: f64,
    pub progress: f64,
    pub is_crunching: bool,
    /// Theme the market is hungry for this playthrough
    pub current_trend: Theme,
    pub market_event: Option<MarketEvent>,
    pub stats: DevStats,
    pub price: i64,
    pub marketing: Vec<MarketingChannel>,
    pub logs: Vec<String>,
    pub cover_art: Option<CoverArt>,
    pub store_summary: Option<String>,
    pub suggested_title: Option<String>,
    pub failure_reason: Option<String>,
    pub launch: Option<LaunchRecord>,
    pub comments: Vec<PlayerComment>,
    pub history: Vec<HistoryEntry>,
    pub unlocked_achievements: Vec<Achievement>,
    pub total_games_released: u32,
    pub total_crunch_months: u32,
}

impl GameState {
    /// Fresh career at the HIRING stage
    pub fn new(config: &SimConfig, trend: Theme) -> Self {
        Self {
            money: config.starting_money,
            stage: Stage::Hiring,
            project: ProjectConfig::default(),
            engineering: EngineeringConfig::default(),
            team: Team::default(),
            hiring: HiringBoard::new(RefreshPricing::new(
                config.initial_refresh_cost,
                config.refresh_cost_growth,
            )),
            current_month: 0,
            monthly_burn_rate: 0,
            morale: MORALE_BASELINE,
            progress: 0.0,
            is_crunching: false,
            current_trend: trend,
            market_event: None,
            stats: DevStats::default(),
            price: DEFAULT_PRICE,
            marketing: Vec::new(),
            logs: Vec::new(),
            cover_art: None,
            store_summary: None,
            suggested_title: None,
            failure_reason: None,
            launch: None,
            comments: Vec::new(),
            history: Vec::new(),
            unlocked_achievements: Vec::new(),
            total_games_released: 0,
            total_crunch_months: 0,
        }
    }

    /// Next playthrough: keeps money, history and career counters
    pub fn next_playthrough(&self, config: &SimConfig, trend: Theme) -> Self {
        Self {
            money: self.money,
            history: self.history.clone(),
            unlocked_achievements: self.unlocked_achievements.clone(),
            total_games_released: self.total_games_released,
            total_crunch_months: self.total_crunch_months,
            ..Self::new(config, trend)
        }
    }

    /// Check if player can afford a purchase
    pub fn can_afford(&self, cost: i64) -> bool {
        self.money >= cost
    }

    pub fn earn(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount);
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push(line.into());
    }

    /// Bankruptcy is checked before mass resignation
    pub fn failure_condition(&self) -> Option<&'static str> {
        if self.stage != Stage::Development {
            return None;
        }
        if self.money < 0 {
            Some(BANKRUPTCY_REASON)
        } else if self.morale <= 0.0 {
            Some(RESIGNATION_REASON)
        } else {
            None
        }
    }

    /// New state with `update` merged in and every bounded value clamped
    pub fn merged(&self, update: StateUpdate) -> Self {
        let mut next = self.clone();
        if let Some(money) = update.money {
            next.money = money;
        }
        if let Some(morale) = update.morale {
            next.morale = morale;
        }
        if let Some(progress) = update.progress {
            next.progress = progress;
        }
        if let Some(stats) = update.stats {
            next.stats = stats;
        }
        if let Some(is_crunching) = update.is_crunching {
            next.is_crunching = is_crunching;
        }
        if let Some(month) = update.current_month {
            next.current_month = month;
        }
        if let Some(price) = update.price {
            next.price = price;
        }
        if let Some(marketing) = update.marketing {
            next.marketing = marketing;
        }
        if let Some(trend) = update.current_trend {
            next.current_trend = trend;
        }
        if let Some(cover) = update.cover_art {
            next.cover_art = cover;
        }
        if let Some(summary) = update.store_summary {
            next.store_summary = summary;
        }
        if let Some(title) = update.suggested_title {
            next.suggested_title = title;
        }
        if let Some(comments) = update.comments {
            next.comments = comments;
        }
        next.logs.extend(update.append_logs);

        next.morale = clamp_morale(next.morale);
        next.progress = clamp_progress(next.progress);
        next.stats = next.stats.clamped();
        next
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Stage: {:?} | Money: ${} | Month: {} | Progress: {:.1}% | Morale: {:.0} | Q/H/B: {:.1}/{:.1}/{:.0}",
            self.stage,
            self.money,
            self.current_month,
            self.progress,
            self.morale,
            self.stats.quality,
            self.stats.hype,
            self.stats.bugs
        )
    }

    /// Sum of profits across the career history
    pub fn lifetime_profit(&self) -> i64 {
        self.history
            .iter()
            .fold(0i64, |total, h| total.saturating_add(h.profit))
    }
}

/// Partial state; `None` fields are left untouched
///
/// Stage and team are not in here: they only change through the stage
/// callbacks on the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub money: Option<i64>,
    pub morale: Option<f64>,
    pub progress: Option<f64>,
    pub stats: Option<DevStats>,
    pub is_crunching: Option<bool>,
    pub current_month: Option<u32>,
    pub price: Option<i64>,
    pub marketing: Option<Vec<MarketingChannel>>,
    pub current_trend: Option<Theme>,
    pub cover_art: Option<Option<CoverArt>>,
    pub store_summary: Option<Option<String>>,
    pub suggested_title: Option<Option<String>>,
    pub comments: Option<Vec<PlayerComment>>,
    pub append_logs: Vec<String>,
}

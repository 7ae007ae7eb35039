//! Tunable session parameters
//!
//! Defaults match the balance the game ships with. A TOML file may override
//! any subset of them.

use serde::Deserialize;

use super::candidates::{INITIAL_REFRESH_COST, REFRESH_COST_GROWTH};

/// Money a fresh career starts with
pub const STARTING_MONEY: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Money at the start of a career (and after a failure reset)
    pub starting_money: i64,
    /// First candidate refresh price in each hiring round
    pub initial_refresh_cost: i64,
    /// Refresh price growth per paid refresh
    pub refresh_cost_growth: f64,
    /// Simulated seconds per development month
    pub month_interval_secs: f32,
    /// Simulated seconds per settlement month in auto-play
    pub settlement_interval_secs: f32,
    /// How long a content request may stay unanswered before its fallback is used
    pub content_timeout_secs: f32,
    /// Roll a market event at the start of each playthrough
    pub market_events: bool,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            initial_refresh_cost: INITIAL_REFRESH_COST,
            refresh_cost_growth: REFRESH_COST_GROWTH,
            month_interval_secs: 1.0,
            settlement_interval_secs: 0.5,
            content_timeout_secs: 10.0,
            market_events: true,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Seeded config with market events off, for reproducible runs
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            market_events: false,
            ..Self::default()
        }
    }
}

//! Static modifier tables
//!
//! Every calculation in the engine reads its constants from here: engine
//! difficulty, tech tier multipliers, genre complexity, marketing channels
//! and the market events that can shape a playthrough.

use serde::Serialize;

use super::types::{
    AiAssistance, DependencyStrategy, Engine, Genre, GraphicsFidelity, MarketingChannel,
    Optimization,
};

/// Speed/quality/cost contribution of one engineering choice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierModifier {
    pub name: &'static str,
    pub cost: i64,
    pub speed: f64,
    pub quality: f64,
}

/// How hard an engine is to master (compared against programmer technology)
pub fn engine_difficulty(engine: Engine) -> f64 {
    match engine {
        Engine::RpgMaker => 10.0,
        Engine::Godot => 30.0,
        Engine::Unity => 50.0,
        Engine::Unreal5 => 80.0,
        Engine::Custom => 100.0,
    }
}

pub fn engine_modifier(engine: Engine) -> TierModifier {
    match engine {
        Engine::RpgMaker => TierModifier { name: "RPG Maker", cost: 0, speed: 1.5, quality: 0.6 },
        Engine::Godot => TierModifier { name: "Godot", cost: 0, speed: 1.3, quality: 0.8 },
        Engine::Unity => TierModifier { name: "Unity", cost: 50_000, speed: 1.1, quality: 1.0 },
        Engine::Unreal5 => {
            TierModifier { name: "Unreal Engine 5", cost: 150_000, speed: 0.8, quality: 1.6 }
        }
        Engine::Custom => {
            TierModifier { name: "Custom Engine", cost: 400_000, speed: 0.5, quality: 2.2 }
        }
    }
}

pub fn ai_modifier(ai: AiAssistance) -> TierModifier {
    match ai {
        AiAssistance::None => TierModifier { name: "Handmade", cost: 0, speed: 1.0, quality: 1.1 },
        AiAssistance::Partial => {
            TierModifier { name: "AI Assisted", cost: 80_000, speed: 1.5, quality: 0.9 }
        }
        AiAssistance::Full => {
            TierModifier { name: "AI Generated", cost: 200_000, speed: 2.2, quality: 0.5 }
        }
    }
}

/// Fidelity has no licence cost, it only trades speed for quality
pub fn fidelity_modifier(fidelity: GraphicsFidelity) -> TierModifier {
    match fidelity {
        GraphicsFidelity::Pixel => TierModifier { name: "Pixel Art", cost: 0, speed: 1.4, quality: 0.7 },
        GraphicsFidelity::Stylized => {
            TierModifier { name: "Stylized", cost: 0, speed: 1.0, quality: 1.0 }
        }
        GraphicsFidelity::Realistic => {
            TierModifier { name: "Realistic AAA", cost: 0, speed: 0.6, quality: 1.8 }
        }
    }
}

/// Optimization tiers do not touch quality; they scale bug growth instead
pub fn optimization_modifier(level: Optimization) -> (TierModifier, f64) {
    match level {
        Optimization::Standard => (
            TierModifier { name: "Standard Build", cost: 0, speed: 1.0, quality: 1.0 },
            0.0,
        ),
        Optimization::Aggressive => (
            TierModifier { name: "Aggressive (O3)", cost: 20_000, speed: 1.1, quality: 1.0 },
            1.2,
        ),
        Optimization::Lto => (
            TierModifier { name: "Link-Time Optimized", cost: 50_000, speed: 1.2, quality: 1.0 },
            1.5,
        ),
    }
}

pub fn dependency_modifier(strategy: DependencyStrategy) -> TierModifier {
    match strategy {
        DependencyStrategy::Lean => {
            TierModifier { name: "Lean Dependencies", cost: 5_000, speed: 0.9, quality: 1.1 }
        }
        DependencyStrategy::RichMiddleware => {
            TierModifier { name: "Commercial Middleware", cost: 40_000, speed: 1.2, quality: 1.0 }
        }
        DependencyStrategy::Experimental => {
            TierModifier { name: "Experimental Stack", cost: 10_000, speed: 1.3, quality: 0.8 }
        }
    }
}

/// Genre complexity factor applied to monthly progress
pub fn genre_complexity(genre: Genre) -> f64 {
    match genre {
        Genre::Rpg => 0.85,
        Genre::Fps => 0.9,
        Genre::Action => 0.8,
        Genre::Adventure => 1.3,
        Genre::Strategy => 0.95,
        Genre::Moba => 0.75,
        Genre::VisualNovel => 1.4,
        Genre::Puzzle => 1.2,
        Genre::Mmorpg => 0.6,
        Genre::Simulation => 1.1,
    }
}

/// A launch marketing channel entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketingOption {
    pub channel: MarketingChannel,
    pub name: &'static str,
    pub cost: i64,
    /// Month-one sales multiplier
    pub boost: f64,
    pub description: &'static str,
}

pub fn marketing_option(channel: MarketingChannel) -> MarketingOption {
    match channel {
        MarketingChannel::StreamerPlaythrough => MarketingOption {
            channel,
            name: "Top Streamer Playthrough",
            cost: 50_000,
            boost: 1.5,
            description: "Puts the game in front of core players at home.",
        },
        MarketingChannel::GlobalVideoCampaign => MarketingOption {
            channel,
            name: "Global Video Campaign",
            cost: 120_000,
            boost: 2.0,
            description: "Opens international markets.",
        },
        MarketingChannel::LifestyleSocial => MarketingOption {
            channel,
            name: "Lifestyle Social Push",
            cost: 30_000,
            boost: 1.2,
            description: "Reaches casual players who buy on looks.",
        },
        MarketingChannel::CommunityDiscord => MarketingOption {
            channel,
            name: "Community Discord Rewards",
            cost: 15_000,
            boost: 1.1,
            description: "Keeps the community warm after launch.",
        },
        MarketingChannel::ShortVideoViral => MarketingOption {
            channel,
            name: "Viral Short Video",
            cost: 80_000,
            boost: 1.7,
            description: "Huge burst of attention, short lived.",
        },
        MarketingChannel::ExclusiveDemo => MarketingOption {
            channel,
            name: "Exclusive Gameplay Demo",
            cost: 100_000,
            boost: 1.8,
            description: "Press endorsement with worldwide reach.",
        },
    }
}

/// Total cost of a channel selection
pub fn marketing_cost(channels: &[MarketingChannel]) -> i64 {
    channels.iter().map(|c| marketing_option(*c).cost).sum()
}

/// Combined boost of a channel selection (product of boosts, 1.0 for none)
pub fn marketing_boost(channels: &[MarketingChannel]) -> f64 {
    channels.iter().map(|c| marketing_option(*c).boost).product()
}

/// Session-wide market condition rolled at the start of a playthrough
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketEvent {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Scales the monthly burn rate
    pub cost_multiplier: f64,
    /// Scales monthly progress
    pub speed_multiplier: f64,
    /// Scales base sales potential
    pub sales_multiplier: f64,
    /// Scales hype at launch
    pub hype_multiplier: f64,
}

impl MarketEvent {
    /// Multipliers of a quiet market
    pub const NEUTRAL: MarketEvent = MarketEvent {
        id: "quiet",
        name: "Quiet Market",
        description: "Nothing unusual is happening.",
        cost_multiplier: 1.0,
        speed_multiplier: 1.0,
        sales_multiplier: 1.0,
        hype_multiplier: 1.0,
    };
}

pub const MARKET_EVENTS: [MarketEvent; 5] = [
    MarketEvent {
        id: "console_boom",
        name: "Console Boom",
        description: "A new console generation has players buying everything.",
        cost_multiplier: 1.0,
        speed_multiplier: 1.0,
        sales_multiplier: 1.2,
        hype_multiplier: 1.1,
    },
    MarketEvent {
        id: "gpu_shortage",
        name: "GPU Shortage",
        description: "Dev kits are scarce and contractors charge a premium.",
        cost_multiplier: 1.2,
        speed_multiplier: 0.9,
        sales_multiplier: 1.0,
        hype_multiplier: 1.0,
    },
    MarketEvent {
        id: "indie_winter",
        name: "Indie Winter",
        description: "Players are tired of small studio releases.",
        cost_multiplier: 1.0,
        speed_multiplier: 1.0,
        sales_multiplier: 0.8,
        hype_multiplier: 0.9,
    },
    MarketEvent {
        id: "streamer_craze",
        name: "Streamer Craze",
        description: "Everything on stream goes viral this season.",
        cost_multiplier: 1.0,
        speed_multiplier: 1.0,
        sales_multiplier: 1.0,
        hype_multiplier: 1.3,
    },
    MarketEvent {
        id: "layoff_wave",
        name: "Industry Layoff Wave",
        description: "Talent is cheap, but so is consumer confidence.",
        cost_multiplier: 0.85,
        speed_multiplier: 1.05,
        sales_multiplier: 0.9,
        hype_multiplier: 1.0,
    },
];

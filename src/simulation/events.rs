//! Milestone decision events during development
//!
//! Crossing 25%, 50% and 75% progress for the first time pauses the month
//! timer and hands the player one event with two options.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use super::types::StatImpact;

/// Progress thresholds that raise a decision event
pub const MILESTONES: [u32; 3] = [25, 50, 75];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Conflict,
    Stress,
    Competitor,
    Technical,
    Other,
}

/// One choice of a decision event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventOption {
    pub text: String,
    pub effect_description: String,
    /// Money spent when chosen; 0 means free
    pub cost: i64,
    /// Percentage points added to progress, may be negative
    pub progress_impact: f64,
    pub stat_impact: StatImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevEvent {
    pub title: String,
    pub kind: EventKind,
    pub description: String,
    pub options: Vec<EventOption>,
}

impl DevEvent {
    pub fn option(&self, index: usize) -> Option<&EventOption> {
        self.options.get(index)
    }
}

/// Milestones already fired in the current project
///
/// Triggered thresholds stay triggered when an option pushes progress
/// back below them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MilestoneTracker {
    triggered: BTreeSet<u32>,
}

impl MilestoneTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark and return the lowest untriggered milestone at or below `progress`
    pub fn check(&mut self, progress: f64) -> Option<u32> {
        let hit = MILESTONES
            .iter()
            .copied()
            .find(|m| progress >= f64::from(*m) && !self.triggered.contains(m))?;
        self.triggered.insert(hit);
        Some(hit)
    }

    pub fn is_triggered(&self, milestone: u32) -> bool {
        self.triggered.contains(&milestone)
    }

    pub fn triggered_count(&self) -> usize {
        self.triggered.len()
    }

    pub fn reset(&mut self) {
        self.triggered.clear();
    }
}

struct OptionTemplate {
    text: &'static str,
    effect: &'static str,
    cost: i64,
    progress: f64,
    impact: StatImpact,
}

struct EventTemplate {
    title: &'static str,
    kind: EventKind,
    description: &'static str,
    options: [OptionTemplate; 2],
}

const fn impact(quality: f64, hype: f64, bugs: f64, morale: f64) -> StatImpact {
    StatImpact { quality, hype, bugs, morale }
}

static EVENT_POOL: [EventTemplate; 6] = [
    EventTemplate {
        title: "Server Hit by DDoS",
        kind: EventKind::Technical,
        description: "The build server is drowning in junk traffic and nobody can push a commit.",
        options: [
            OptionTemplate {
                text: "Upgrade the firewall",
                effect: "Spend money to harden the infrastructure",
                cost: 15_000,
                progress: -2.0,
                impact: impact(5.0, 0.0, -5.0, 5.0),
            },
            OptionTemplate {
                text: "Pull the network cable",
                effect: "The data survives but the schedule does not",
                cost: 0,
                progress: -10.0,
                impact: impact(-5.0, 0.0, 0.0, -20.0),
            },
        ],
    },
    EventTemplate {
        title: "Architecture Review",
        kind: EventKind::Technical,
        description: "The lead programmer says the core systems will not survive another feature.",
        options: [
            OptionTemplate {
                text: "Stop and refactor",
                effect: "Much better quality and fewer future bugs",
                cost: 0,
                progress: -15.0,
                impact: impact(20.0, 0.0, -30.0, 5.0),
            },
            OptionTemplate {
                text: "Patch it and push on",
                effect: "Keeps the schedule, buries a time bomb",
                cost: 0,
                progress: 5.0,
                impact: impact(-10.0, 0.0, 20.0, -5.0),
            },
        ],
    },
    EventTemplate {
        title: "Midnight Inspiration",
        kind: EventKind::Other,
        description: "The designer wakes everyone up with an idea that could change everything.",
        options: [
            OptionTemplate {
                text: "Build it whatever it costs",
                effect: "Big boost to hype and quality",
                cost: 25_000,
                progress: -8.0,
                impact: impact(15.0, 30.0, 0.0, 10.0),
            },
            OptionTemplate {
                text: "Too much trouble, cut it",
                effect: "The schedule stays intact",
                cost: 0,
                progress: 0.0,
                impact: impact(0.0, -5.0, 0.0, -10.0),
            },
        ],
    },
    EventTemplate {
        title: "Creative Differences",
        kind: EventKind::Conflict,
        description: "The artist and the programmer refuse to sit in the same meeting.",
        options: [
            OptionTemplate {
                text: "Team building retreat",
                effect: "Costly, but everyone comes back smiling",
                cost: 20_000,
                progress: -3.0,
                impact: impact(0.0, 0.0, 0.0, 25.0),
            },
            OptionTemplate {
                text: "Let them fight it out",
                effect: "Work continues in a frosty silence",
                cost: 0,
                progress: 0.0,
                impact: impact(-5.0, 0.0, 5.0, -15.0),
            },
        ],
    },
    EventTemplate {
        title: "Rival Announces a Clone",
        kind: EventKind::Competitor,
        description: "A bigger studio just revealed a suspiciously similar game.",
        options: [
            OptionTemplate {
                text: "Counter with a trailer",
                effect: "Win the news cycle back",
                cost: 30_000,
                progress: -2.0,
                impact: impact(0.0, 20.0, 0.0, 0.0),
            },
            OptionTemplate {
                text: "Rush the next build",
                effect: "Ship features faster, polish suffers",
                cost: 0,
                progress: 6.0,
                impact: impact(-5.0, 0.0, 15.0, -10.0),
            },
        ],
    },
    EventTemplate {
        title: "Burnout Warning",
        kind: EventKind::Stress,
        description: "Someone fell asleep on the keyboard and committed four thousand semicolons.",
        options: [
            OptionTemplate {
                text: "Mandatory week off",
                effect: "Rested team, slower schedule",
                cost: 0,
                progress: -5.0,
                impact: impact(0.0, 0.0, -5.0, 30.0),
            },
            OptionTemplate {
                text: "Order more energy drinks",
                effect: "Cheap fuel for tired minds",
                cost: 5_000,
                progress: 2.0,
                impact: impact(0.0, 0.0, 10.0, -15.0),
            },
        ],
    },
];

fn instantiate(template: &EventTemplate) -> DevEvent {
    DevEvent {
        title: template.title.to_string(),
        kind: template.kind,
        description: template.description.to_string(),
        options: template
            .options
            .iter()
            .map(|o| EventOption {
                text: o.text.to_string(),
                effect_description: o.effect.to_string(),
                cost: o.cost,
                progress_impact: o.progress,
                stat_impact: o.impact,
            })
            .collect(),
    }
}

/// Number of templates in the event pool
pub fn event_pool_size() -> usize {
    EVENT_POOL.len()
}

/// Every event the pool can produce
pub fn all_events() -> Vec<DevEvent> {
    EVENT_POOL.iter().map(instantiate).collect()
}

/// Pick one event uniformly from the pool
pub fn generate_event<R: Rng + ?Sized>(rng: &mut R) -> DevEvent {
    match EVENT_POOL.choose(rng) {
        Some(template) => instantiate(template),
        None => instantiate(&EVENT_POOL[0]),
    }
}

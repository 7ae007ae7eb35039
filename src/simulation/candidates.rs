//! Candidate generation for the HIRING stage
//!
//! Each role has a fixed pool of twelve templates spanning every rarity
//! tier. An offer is three templates drawn without replacement; offers
//! carry no memory of earlier ones.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::types::{Rarity, Role, Skills, StaffId, StaffMember};

/// Number of candidates in one offer
pub const CANDIDATES_PER_OFFER: usize = 3;
/// First refresh price of a hiring round
pub const INITIAL_REFRESH_COST: i64 = 2_000;
/// Each paid refresh multiplies the price by this factor
pub const REFRESH_COST_GROWTH: f64 = 1.5;

/// A row of the template pool
#[derive(Debug, Clone, Copy)]
pub struct StaffTemplate {
    pub name: &'static str,
    pub rarity: Rarity,
    pub skill: &'static str,
    pub description: &'static str,
    /// creativity, technology, artistry
    pub stats: [u32; 3],
    pub salary: i64,
}

const fn t(
    name: &'static str,
    rarity: Rarity,
    skill: &'static str,
    description: &'static str,
    stats: [u32; 3],
    salary: i64,
) -> StaffTemplate {
    StaffTemplate { name, rarity, skill, description, stats, salary }
}

static DESIGNERS: [StaffTemplate; 12] = [
    t("Shigeru Meowmoto", Rarity::Legendary, "Fountain of Joy", "Believes a game that is not fun has no reason to exist.", [99, 50, 85], 55_000),
    t("Hideo Kojimbo", Rarity::Legendary, "Strand Connector", "Shoots a movie, spends the budget, fans still cheer.", [98, 60, 90], 45_000),
    t("Hidetaka Miyazucky", Rarity::Legendary, "Pure Malice", "Players leave reviews written in tears.", [99, 40, 95], 50_000),
    t("Sid Meyer-ish", Rarity::Legendary, "One More Turn", "Keeps you playing until sunrise.", [95, 70, 60], 42_000),
    t("Todd Mansion", Rarity::Epic, "It Just Works", "Every detail is in there, as long as you trust the slides.", [88, 40, 70], 35_000),
    t("Gabe N.", Rarity::Epic, "Cannot Count to Three", "On holiday, still owns every player's wallet.", [85, 90, 40], 38_000),
    t("Shinji Mikamew", Rarity::Epic, "Survival Horror", "Threatens to quit every project, never does.", [88, 30, 70], 28_000),
    t("Garage Indie", Rarity::Rare, "Runs on Coffee", "Writes dialogue in a garage, dreams of a cult classic.", [80, 20, 85], 18_000),
    t("Spreadsheet Fiend", Rarity::Rare, "Excel Master", "Never plays the game, knows the win rate anyway.", [75, 80, 20], 22_000),
    t("Junior Li", Rarity::Common, "Diligent Worker", "Fixes typos and fills in tables all day.", [50, 40, 40], 8_000),
    t("Manager Wang", Rarity::Trash, "Roadmap Artist", "Writes documents, never shipped a game, flawless slide logic.", [10, 5, 5], 3_500),
    t("Ctrl+C Hero", Rarity::Trash, "Total Recall", "Renames the studio next door's design doc.", [5, 30, 10], 6_000),
];

static PROGRAMMERS: [StaffTemplate; 12] = [
    t("John Carmack-ish", Rarity::Legendary, "Graphics Deity", "Writes a ray tracer by hand on raw memory.", [40, 99, 40], 58_000),
    t("Linus T.", Rarity::Legendary, "Kernel Maniac", "Bad code gets flamed on the mailing list.", [20, 98, 20], 52_000),
    t("Mother of Apollo", Rarity::Legendary, "Orbital Math", "Her printouts are taller than she is, with zero bugs.", [60, 99, 50], 55_000),
    t("Jeff the Compiler", Rarity::Epic, "Compiler Whisperer", "Walks across the keyboard and a system appears.", [30, 95, 30], 45_000),
    t("Markus", Rarity::Epic, "Block Builder", "Built the best selling game alone, then bought a mansion.", [85, 85, 40], 40_000),
    t("Netcode Sage", Rarity::Epic, "Lag Compensation", "Keeps players on opposite sides of the planet in sync.", [20, 94, 20], 35_000),
    t("Assembly Veteran", Rarity::Rare, "Bare Metal", "Fits a 3D renderer in one kilobyte.", [30, 92, 20], 28_000),
    t("Debug Savant", Rarity::Rare, "One Look Fix", "Reads a log once and finds the missing semicolon.", [40, 88, 30], 25_000),
    t("Full Stack Grinder", Rarity::Rare, "Never Sleeps", "Frontend, backend, database and ops, all alone.", [60, 85, 50], 26_000),
    t("Script Kiddie", Rarity::Common, "API Glue", "Give him a library and features appear.", [30, 60, 20], 12_000),
    t("Balding Zhang", Rarity::Common, "Hair Sacrifice", "Traded the last strand of hair for code that runs.", [30, 85, 10], 15_000),
    t("Drop Table Prodigy", Rarity::Trash, "Force Reboot", "Cannot code but presses F5 with confidence.", [5, 1, 5], 3_000),
];

static ARTISTS: [StaffTemplate; 12] = [
    t("Master Amano", Rarity::Legendary, "Dream Aesthetics", "Brush strokes that reach the soul.", [95, 40, 99], 56_000),
    t("Hyung-tae K.", Rarity::Legendary, "Anatomy Expert", "Character rendering that players cannot stop talking about.", [40, 60, 98], 52_000),
    t("Shinkawa-san", Rarity::Legendary, "Hard Surface", "Sharp, cold lines that define a series.", [70, 70, 99], 50_000),
    t("Feng Z.", Rarity::Epic, "World Builder", "Sketches a whole planet in one stroke.", [85, 80, 92], 38_000),
    t("Kozaki-sensei", Rarity::Epic, "Clean Character", "Instantly recognizable character designs.", [70, 60, 90], 35_000),
    t("Cel Shader", Rarity::Epic, "Dimension Breaker", "Models that look better than hand drawn art.", [70, 85, 90], 28_000),
    t("Neon Punk", Rarity::Rare, "Neon Everything", "Adds LED strips to everything, calls it art.", [80, 50, 85], 22_000),
    t("Polygon Maniac", Rarity::Rare, "Infinite Faces", "Every button gets ten thousand polygons.", [20, 95, 80], 24_000),
    t("Ink Wash Poet", Rarity::Rare, "Negative Space", "Ink and emptiness, the savior of fantasy dramas.", [90, 40, 88], 21_000),
    t("Prompt Alchemist", Rarity::Common, "Incantations", "Needs no brush, only prompts.", [65, 50, 5], 7_000),
    t("Soul Painter", Rarity::Trash, "Stick Figures", "Minimalism so bold it hurts.", [50, 5, 2], 2_500),
    t("Icon Slicer", Rarity::Trash, "Asset Machine", "Slices five hundred icons a day, originality zero.", [5, 40, 10], 4_500),
];

/// The template pool for a role
pub fn templates_for(role: Role) -> &'static [StaffTemplate] {
    match role {
        Role::Designer => &DESIGNERS,
        Role::Programmer => &PROGRAMMERS,
        Role::Artist => &ARTISTS,
    }
}

/// Hands out staff ids for generated candidates
#[derive(Debug, Clone, Default)]
pub struct StaffIdAllocator {
    next_id: u32,
}

impl StaffIdAllocator {
    pub fn next(&mut self) -> StaffId {
        let id = StaffId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn instantiate(template: &StaffTemplate, role: Role, id: StaffId) -> StaffMember {
    StaffMember {
        id,
        name: template.name.to_string(),
        role,
        special_skill: template.skill.to_string(),
        description: template.description.to_string(),
        skills: Skills::new(template.stats[0], template.stats[1], template.stats[2]),
        salary: template.salary,
        rarity: template.rarity,
    }
}

/// Draw three candidates for a role, shuffled, without replacement
pub fn generate_candidates<R: Rng + ?Sized>(
    role: Role,
    ids: &mut StaffIdAllocator,
    rng: &mut R,
) -> Vec<StaffMember> {
    let mut pool: Vec<&StaffTemplate> = templates_for(role).iter().collect();
    pool.shuffle(rng);
    pool.into_iter()
        .take(CANDIDATES_PER_OFFER)
        .map(|template| instantiate(template, role, ids.next()))
        .collect()
}

/// Geometric refresh price for one hiring round
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RefreshPricing {
    initial: i64,
    growth: f64,
    current: i64,
    refreshes: u32,
}

impl RefreshPricing {
    pub fn new(initial: i64, growth: f64) -> Self {
        Self {
            initial,
            growth,
            current: initial,
            refreshes: 0,
        }
    }

    /// Price of the next refresh
    pub fn cost(&self) -> i64 {
        self.current
    }

    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }

    /// Record a paid refresh; the new price is floored at each step
    pub fn advance(&mut self) {
        self.current = (self.current as f64 * self.growth).floor() as i64;
        self.refreshes += 1;
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
        self.refreshes = 0;
    }
}

impl Default for RefreshPricing {
    fn default() -> Self {
        Self::new(INITIAL_REFRESH_COST, REFRESH_COST_GROWTH)
    }
}

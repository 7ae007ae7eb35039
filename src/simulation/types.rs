//! Core types for the studio simulation
//!
//! Closed enums for every category the game chooses between, plus the
//! small value types shared by the calculators. None of these depend on a
//! presentation layer.

use serde::Serialize;

use super::tables;

/// A unique identifier for a generated staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StaffId(pub u32);

/// The three seats on a studio team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Designer,
    Programmer,
    Artist,
}

impl Role {
    /// Hiring order used by the HIRING stage
    pub const ORDER: [Role; 3] = [Role::Designer, Role::Programmer, Role::Artist];

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Designer => "Designer",
            Role::Programmer => "Programmer",
            Role::Artist => "Artist",
        }
    }
}

/// Rarity tier of a candidate template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Common,
    Trash,
}

/// Skill scores of a staff member, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Skills {
    pub creativity: u32,
    pub technology: u32,
    pub artistry: u32,
}

impl Skills {
    pub fn new(creativity: u32, technology: u32, artistry: u32) -> Self {
        Self {
            creativity: creativity.min(100),
            technology: technology.min(100),
            artistry: artistry.min(100),
        }
    }
}

/// A hired or offered team member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: Role,
    pub special_skill: String,
    pub description: String,
    pub skills: Skills,
    /// Monthly salary
    pub salary: i64,
    pub rarity: Rarity,
}

/// One member per role, empty until hiring completes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Team {
    pub designer: Option<StaffMember>,
    pub programmer: Option<StaffMember>,
    pub artist: Option<StaffMember>,
}

impl Team {
    pub fn member(&self, role: Role) -> Option<&StaffMember> {
        match role {
            Role::Designer => self.designer.as_ref(),
            Role::Programmer => self.programmer.as_ref(),
            Role::Artist => self.artist.as_ref(),
        }
    }

    /// Put a member into the seat matching their role
    pub fn seat(&mut self, member: StaffMember) {
        match member.role {
            Role::Designer => self.designer = Some(member),
            Role::Programmer => self.programmer = Some(member),
            Role::Artist => self.artist = Some(member),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.designer.is_some() && self.programmer.is_some() && self.artist.is_some()
    }

    /// Sum of the three salaries (missing members cost nothing)
    pub fn monthly_burn_rate(&self) -> i64 {
        Role::ORDER
            .iter()
            .filter_map(|role| self.member(*role))
            .map(|m| m.salary)
            .sum()
    }

    /// designer.creativity + programmer.technology + artist.artistry
    pub fn stat_sum(&self) -> u32 {
        self.designer.as_ref().map_or(0, |m| m.skills.creativity)
            + self.programmer.as_ref().map_or(0, |m| m.skills.technology)
            + self.artist.as_ref().map_or(0, |m| m.skills.artistry)
    }

    pub fn programmer_technology(&self) -> u32 {
        self.programmer.as_ref().map_or(0, |m| m.skills.technology)
    }

    pub fn designer_creativity(&self) -> u32 {
        self.designer.as_ref().map_or(0, |m| m.skills.creativity)
    }
}

/// Theme tags a project can pick (1 to 3 of them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Theme {
    Cultivation,
    Cyberpunk,
    Cosmic,
    ThreeKingdoms,
    Wasteland,
    Anime,
    Wuxia,
    Horror,
    Romance,
    Mecha,
    Farming,
    OpenWorld,
    Zombie,
    PalaceIntrigue,
    Furry,
    Roguelike,
}

impl Theme {
    pub const ALL: [Theme; 16] = [
        Theme::Cultivation,
        Theme::Cyberpunk,
        Theme::Cosmic,
        Theme::ThreeKingdoms,
        Theme::Wasteland,
        Theme::Anime,
        Theme::Wuxia,
        Theme::Horror,
        Theme::Romance,
        Theme::Mecha,
        Theme::Farming,
        Theme::OpenWorld,
        Theme::Zombie,
        Theme::PalaceIntrigue,
        Theme::Furry,
        Theme::Roguelike,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Cultivation => "Cultivation",
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Cosmic => "Cosmic Horror",
            Theme::ThreeKingdoms => "Three Kingdoms",
            Theme::Wasteland => "Wasteland",
            Theme::Anime => "Anime",
            Theme::Wuxia => "Wuxia",
            Theme::Horror => "Horror",
            Theme::Romance => "Romance",
            Theme::Mecha => "Mecha",
            Theme::Farming => "Farming",
            Theme::OpenWorld => "Open World",
            Theme::Zombie => "Zombie",
            Theme::PalaceIntrigue => "Palace Intrigue",
            Theme::Furry => "Furry",
            Theme::Roguelike => "Roguelike",
        }
    }
}

/// Game genre; drives the complexity factor in progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Rpg,
    Fps,
    Action,
    Adventure,
    Strategy,
    Moba,
    VisualNovel,
    Puzzle,
    Mmorpg,
    Simulation,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Rpg,
        Genre::Fps,
        Genre::Action,
        Genre::Adventure,
        Genre::Strategy,
        Genre::Moba,
        Genre::VisualNovel,
        Genre::Puzzle,
        Genre::Mmorpg,
        Genre::Simulation,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::Rpg => "RPG",
            Genre::Fps => "FPS",
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Strategy => "Strategy",
            Genre::Moba => "MOBA",
            Genre::VisualNovel => "Visual Novel",
            Genre::Puzzle => "Puzzle",
            Genre::Mmorpg => "MMORPG",
            Genre::Simulation => "Simulation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    Steam,
    PlayStation,
    Xbox,
    Mobile,
}

/// Everything chosen in the SETUP stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub title: String,
    pub themes: Vec<Theme>,
    pub genre: Genre,
    pub platforms: Vec<Platform>,
    pub is_multiplayer: bool,
    pub has_mod_support: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            themes: Vec::new(),
            genre: Genre::Rpg,
            platforms: vec![Platform::Steam],
            is_multiplayer: false,
            has_mod_support: false,
        }
    }
}

impl ProjectConfig {
    /// 1-3 distinct themes and at least one platform
    pub fn is_valid(&self) -> bool {
        let mut themes = self.themes.clone();
        themes.sort_by_key(|t| *t as u8);
        themes.dedup();
        (1..=3).contains(&self.themes.len())
            && themes.len() == self.themes.len()
            && !self.platforms.is_empty()
    }

    pub fn theme_label(&self) -> String {
        self.themes
            .iter()
            .map(|t| t.display_name())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    pub fn matches_trend(&self, trend: Theme) -> bool {
        self.themes.contains(&trend)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Engine {
    RpgMaker,
    Godot,
    Unity,
    Unreal5,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AiAssistance {
    None,
    Partial,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GraphicsFidelity {
    Pixel,
    Stylized,
    Realistic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Optimization {
    Standard,
    Aggressive,
    Lto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DependencyStrategy {
    Lean,
    RichMiddleware,
    Experimental,
}

/// Tech stack chosen in the ENGINEERING stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineeringConfig {
    pub engine: Engine,
    pub ai_assistance: AiAssistance,
    pub graphics: GraphicsFidelity,
    pub optimization: Optimization,
    pub dependencies: DependencyStrategy,
}

impl Default for EngineeringConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Unity,
            ai_assistance: AiAssistance::None,
            graphics: GraphicsFidelity::Stylized,
            optimization: Optimization::Standard,
            dependencies: DependencyStrategy::RichMiddleware,
        }
    }
}

impl EngineeringConfig {
    /// Sum of every tier's fixed cost
    pub fn upfront_cost(&self) -> i64 {
        tables::engine_modifier(self.engine).cost
            + tables::ai_modifier(self.ai_assistance).cost
            + tables::fidelity_modifier(self.graphics).cost
            + tables::optimization_modifier(self.optimization).0.cost
            + tables::dependency_modifier(self.dependencies).cost
    }

    pub fn speed_multiplier(&self) -> f64 {
        tables::engine_modifier(self.engine).speed
            * tables::ai_modifier(self.ai_assistance).speed
            * tables::fidelity_modifier(self.graphics).speed
            * tables::optimization_modifier(self.optimization).0.speed
            * tables::dependency_modifier(self.dependencies).speed
    }

    pub fn quality_multiplier(&self) -> f64 {
        tables::engine_modifier(self.engine).quality
            * tables::ai_modifier(self.ai_assistance).quality
            * tables::fidelity_modifier(self.graphics).quality
            * tables::dependency_modifier(self.dependencies).quality
    }

    /// Extra bug growth from the optimization tier (0.0 = none)
    pub fn bug_modifier(&self) -> f64 {
        tables::optimization_modifier(self.optimization).1
    }

    pub fn engine_difficulty(&self) -> f64 {
        tables::engine_difficulty(self.engine)
    }
}

/// Paid launch marketing channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarketingChannel {
    StreamerPlaythrough,
    GlobalVideoCampaign,
    LifestyleSocial,
    CommunityDiscord,
    ShortVideoViral,
    ExclusiveDemo,
}

impl MarketingChannel {
    pub const ALL: [MarketingChannel; 6] = [
        MarketingChannel::StreamerPlaythrough,
        MarketingChannel::GlobalVideoCampaign,
        MarketingChannel::LifestyleSocial,
        MarketingChannel::CommunityDiscord,
        MarketingChannel::ShortVideoViral,
        MarketingChannel::ExclusiveDemo,
    ];
}

/// Ordered stages of one playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    Hiring,
    Setup,
    Engineering,
    Development,
    Release,
    Results,
    Failed,
}

/// Upper bound for quality and hype
pub const STAT_MAX: f64 = 100.0;
/// Upper bound for morale
pub const MORALE_MAX: f64 = 200.0;
/// Morale every playthrough starts with
pub const MORALE_BASELINE: f64 = 100.0;

/// Quality, hype and bug count of the project in development
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DevStats {
    pub quality: f64,
    pub hype: f64,
    pub bugs: f64,
}

impl Default for DevStats {
    fn default() -> Self {
        Self {
            quality: 10.0,
            hype: 10.0,
            bugs: 0.0,
        }
    }
}

impl DevStats {
    /// Quality and hype in [0, 100], bugs never negative
    pub fn clamped(self) -> Self {
        Self {
            quality: self.quality.clamp(0.0, STAT_MAX),
            hype: self.hype.clamp(0.0, STAT_MAX),
            bugs: self.bugs.max(0.0),
        }
    }

    /// Apply an impact and re-clamp
    pub fn with_impact(self, impact: &StatImpact) -> Self {
        Self {
            quality: self.quality + impact.quality,
            hype: self.hype + impact.hype,
            bugs: self.bugs + impact.bugs,
        }
        .clamped()
    }
}

/// Deltas an event option applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatImpact {
    pub quality: f64,
    pub hype: f64,
    pub bugs: f64,
    pub morale: f64,
}

pub fn clamp_morale(morale: f64) -> f64 {
    morale.clamp(0.0, MORALE_MAX)
}

pub fn clamp_progress(progress: f64) -> f64 {
    progress.clamp(0.0, 100.0)
}

mod stats;

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use ordered_float::OrderedFloat;

use studio_sim::simulation::{
    genre_complexity, marketing_option, AiAssistance, ContentMode, ContentProvider,
    DependencyStrategy, DevEvent, Engine, EngineeringConfig, EventOption, GameState, Genre,
    GraphicsFidelity, LaunchPlan, MarketingChannel, NoProvider, Optimization, ProjectConfig, Role,
    SchedulerState, Session, SimConfig, Stage, StaffMember, DEFAULT_PRICE,
};

use stats::CareerStats;

#[derive(Parser)]
#[command(name = "studio_sim")]
#[command(about = "Headless game studio management simulation")]
struct Cli {
    /// Number of playthroughs the autopilot plays
    #[arg(long, default_value = "3")]
    playthroughs: u32,

    /// Fixed RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with simulation tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds per tick
    #[arg(long, default_value = "0.25")]
    delta: f32,

    /// Resolve every content request with its local fallback immediately
    #[arg(long)]
    offline: bool,

    /// Let the autopilot crunch while morale allows it
    #[arg(long)]
    crunch: bool,

    /// Print the career history as JSON on stdout
    #[arg(long)]
    json: bool,
}

/// A stage that needs more ticks than this is treated as stuck
const MAX_TICKS_PER_STAGE: u32 = 200_000;

const ENGINES: [Engine; 5] = [
    Engine::RpgMaker,
    Engine::Godot,
    Engine::Unity,
    Engine::Unreal5,
    Engine::Custom,
];
const AI_TIERS: [AiAssistance; 3] = [AiAssistance::None, AiAssistance::Partial, AiAssistance::Full];
const FIDELITIES: [GraphicsFidelity; 3] = [
    GraphicsFidelity::Pixel,
    GraphicsFidelity::Stylized,
    GraphicsFidelity::Realistic,
];
const DEPENDENCIES: [DependencyStrategy; 3] = [
    DependencyStrategy::Lean,
    DependencyStrategy::RichMiddleware,
    DependencyStrategy::Experimental,
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,studio_sim=info"))
        .init();

    if cli.delta <= 0.0 {
        bail!("--delta must be positive, got {}", cli.delta);
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    run_headless(&cli, config)
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    SimConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Play the configured number of careers on autopilot
fn run_headless(cli: &Cli, config: SimConfig) -> Result<()> {
    let mode = if cli.offline {
        ContentMode::Offline
    } else {
        ContentMode::Online
    };
    info!(
        "Running studio simulation in headless mode ({} playthroughs, delta {}s, {:?} content)",
        cli.playthroughs, cli.delta, mode
    );

    let mut session = Session::with_content_mode(config, mode);
    let mut provider = NoProvider;
    let mut stats = CareerStats::default();

    for n in 1..=cli.playthroughs {
        info!("--- Playthrough {} ---", n);
        play_once(&mut session, &mut provider, cli, &mut stats)?;
        info!("{}", session.state().summary());
    }

    stats.log_summary(session.state());

    if cli.json {
        let history = serde_json::to_string_pretty(&session.state().history)
            .context("Failed to serialize career history")?;
        println!("{}", history);
    }
    Ok(())
}

fn play_once<P: ContentProvider>(
    session: &mut Session,
    provider: &mut P,
    cli: &Cli,
    stats: &mut CareerStats,
) -> Result<()> {
    hire_team(session, provider)?;
    set_up_project(session, provider)?;

    let Some(engineering) = choose_engineering(session) else {
        warn!(
            "No tech stack is affordable with ${}, starting over",
            session.state().money
        );
        stats.record_failure(0);
        session.restart();
        return Ok(());
    };
    session.on_engineering_complete(engineering)?;

    if !develop(session, provider, cli)? {
        let state = session.state();
        warn!(
            "Studio failed: {}",
            state.failure_reason.as_deref().unwrap_or("unknown")
        );
        stats.record_failure(state.current_month);
        session.restart();
        return Ok(());
    }

    let months = session.state().current_month;
    let result = session.on_launch(choose_launch_plan(session.state()))?;

    session.set_auto_play(true)?;
    let mut ticks = 0;
    while !session.settlement_finished() {
        session.tick(cli.delta);
        session.pump_content(provider);
        ticks += 1;
        if ticks > MAX_TICKS_PER_STAGE {
            bail!("settlement did not finish after {} ticks", ticks);
        }
    }
    let profit = session.on_restart()?;
    stats.record_release(&result, profit, months);
    stats.elapsed_time += ticks as f32 * cli.delta;
    Ok(())
}

fn primary_skill(member: &StaffMember) -> u32 {
    match member.role {
        Role::Designer => member.skills.creativity,
        Role::Programmer => member.skills.technology,
        Role::Artist => member.skills.artistry,
    }
}

/// Skill minus salary in thousands
fn candidate_value(member: &StaffMember) -> f64 {
    f64::from(primary_skill(member)) - member.salary as f64 / 1000.0
}

fn hire_team<P: ContentProvider>(session: &mut Session, provider: &mut P) -> Result<()> {
    let mut refreshes = 0;
    while session.state().stage == Stage::Hiring {
        let best = session
            .offers()
            .iter()
            .enumerate()
            .filter(|(_, offer)| session.state().can_afford(offer.member.salary))
            .map(|(index, offer)| (index, candidate_value(&offer.member)))
            .max_by_key(|(_, value)| OrderedFloat(*value));
        let Some((index, value)) = best else {
            bail!("no affordable candidate with ${}", session.state().money);
        };

        if value < 55.0 && refreshes < 2 && session.refresh_candidates().is_ok() {
            refreshes += 1;
            continue;
        }

        session.request_commentary(index)?;
        session.pump_content(provider);
        session.hire(index)?;
        refreshes = 0;
    }
    Ok(())
}

fn set_up_project<P: ContentProvider>(session: &mut Session, provider: &mut P) -> Result<()> {
    let genre = Genre::ALL
        .iter()
        .copied()
        .max_by_key(|genre| OrderedFloat(genre_complexity(*genre)))
        .unwrap_or(Genre::Rpg);
    let project = ProjectConfig {
        themes: vec![session.state().current_trend],
        genre,
        ..ProjectConfig::default()
    };

    session.suggest_title(&project)?;
    session.pump_content(provider);
    session.on_setup_complete(project)?;
    Ok(())
}

/// Best quality-times-speed stack the studio can pay for
fn choose_engineering(session: &Session) -> Option<EngineeringConfig> {
    let money = session.state().money;
    let mut options = Vec::new();
    for engine in ENGINES {
        for ai_assistance in AI_TIERS {
            for graphics in FIDELITIES {
                for dependencies in DEPENDENCIES {
                    options.push(EngineeringConfig {
                        engine,
                        ai_assistance,
                        graphics,
                        optimization: Optimization::Standard,
                        dependencies,
                    });
                }
            }
        }
    }
    options
        .into_iter()
        .filter(|eng| session.required_budget(eng) <= money)
        .max_by_key(|eng| OrderedFloat(eng.quality_multiplier() * eng.speed_multiplier()))
}

fn option_value(option: &EventOption) -> f64 {
    let impact = option.stat_impact;
    impact.quality + impact.hype * 0.5 - impact.bugs * 0.6 + impact.morale * 0.3
        + option.progress_impact
        - option.cost as f64 / 5000.0
}

fn choose_option(event: &DevEvent, state: &GameState) -> Option<usize> {
    event
        .options
        .iter()
        .enumerate()
        .filter(|(_, option)| state.can_afford(option.cost))
        .max_by_key(|(_, option)| OrderedFloat(option_value(option)))
        .map(|(index, _)| index)
}

/// Returns true once the build is ready for release, false if the studio failed
fn develop<P: ContentProvider>(session: &mut Session, provider: &mut P, cli: &Cli) -> Result<bool> {
    let mut ticks = 0;
    while session.state().stage == Stage::Development {
        if let Some(event) = session.pending_event() {
            let Some(choice) = choose_option(event, session.state()) else {
                bail!("no affordable option for event \"{}\"", event.title);
            };
            session.select_event_option(choice)?;
            continue;
        }

        let state = session.state();
        if state.progress >= 100.0 && session.scheduler_state() == SchedulerState::Stopped {
            session.on_dev_complete()?;
            return Ok(true);
        }

        if cli.crunch && state.progress < 100.0 {
            let wants_crunch = if state.is_crunching {
                state.morale >= 60.0
            } else {
                state.morale > 110.0
            };
            if wants_crunch != state.is_crunching {
                session.toggle_crunch()?;
            }
        }

        session.tick(cli.delta);
        session.pump_content(provider);
        ticks += 1;
        if ticks > MAX_TICKS_PER_STAGE {
            bail!("development stalled at {:.1}%", session.state().progress);
        }
    }
    Ok(false)
}

/// Cheapest boost per dollar first, spending at most a fifth of the bank
fn choose_launch_plan(state: &GameState) -> LaunchPlan {
    let mut channels = MarketingChannel::ALL.to_vec();
    channels.sort_by_key(|channel| {
        let option = marketing_option(*channel);
        Reverse(OrderedFloat((option.boost - 1.0) / option.cost as f64))
    });

    let budget = state.money / 5;
    let mut spent = 0;
    let mut marketing = Vec::new();
    for channel in channels {
        let cost = marketing_option(channel).cost;
        if spent + cost <= budget {
            spent += cost;
            marketing.push(channel);
        }
    }

    LaunchPlan {
        price: DEFAULT_PRICE,
        marketing,
    }
}

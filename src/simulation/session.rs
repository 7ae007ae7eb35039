//! Session controller that drives one studio career
//!
//! The session owns the `GameState`, the scheduler, the milestone tracker,
//! the content desk and the RNG. Every stage callback checks its
//! preconditions first and returns an `ActionError` without touching state
//! when they do not hold. Successful actions replace the state as a whole.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::candidates::{generate_candidates, RefreshPricing, StaffIdAllocator};
use super::config::SimConfig;
use super::content::{
    fallback, resolve, ContentDesk, ContentField, ContentMode, ContentPrompt, ContentProvider,
    ContentRequest, ContentResponse, ContentTicket, ResolvedContent, FALLBACK_TITLE,
};
use super::error::{ActionError, ActionResult, ContentError};
use super::events::{generate_event, DevEvent, MilestoneTracker};
use super::game_state::{GameState, HiringBoard, HistoryEntry, LaunchRecord, Offer, StateUpdate};
use super::market::{simulate_launch, FinalResult, LaunchInputs, SalesMonth, Settlement, DEFAULT_PRICE};
use super::progression::{
    advance_month, calculate_monthly_progress, estimate_months, MonthContext, ProgressInputs,
};
use super::scheduler::{Scheduler, SchedulerState};
use super::tables::{marketing_boost, marketing_cost, MarketEvent, MARKET_EVENTS};
use super::types::{
    clamp_morale, clamp_progress, EngineeringConfig, MarketingChannel, ProjectConfig, Role, Stage,
    Team, Theme,
};

/// Chance that a playthrough starts under a market event
pub const MARKET_EVENT_CHANCE: f64 = 0.5;

/// Price and marketing picked on the release screen
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    pub price: i64,
    pub marketing: Vec<MarketingChannel>,
}

impl Default for LaunchPlan {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE,
            marketing: Vec::new(),
        }
    }
}

fn roll_trend<R: Rng + ?Sized>(rng: &mut R) -> Theme {
    Theme::ALL.choose(rng).copied().unwrap_or(Theme::Cyberpunk)
}

/// One player's career: a chain of playthroughs sharing money and history
pub struct Session {
    config: SimConfig,
    state: GameState,
    scheduler: Scheduler,
    milestones: MilestoneTracker,
    pending_event: Option<DevEvent>,
    content: ContentDesk,
    staff_ids: StaffIdAllocator,
    rng: StdRng,
    seed: u64,
}

impl Session {
    /// Session that queues content requests for a host to answer
    pub fn new(config: SimConfig) -> Self {
        Self::with_content_mode(config, ContentMode::Online)
    }

    pub fn with_content_mode(config: SimConfig, mode: ContentMode) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!("Starting studio session (seed {})", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        let trend = roll_trend(&mut rng);
        let mut session = Self {
            state: GameState::new(&config, trend),
            scheduler: Scheduler::new(config.month_interval_secs, config.settlement_interval_secs),
            content: ContentDesk::new(mode, config.content_timeout_secs),
            config,
            milestones: MilestoneTracker::new(),
            pending_event: None,
            staff_ids: StaffIdAllocator::default(),
            rng,
            seed,
        };
        session.begin_playthrough();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn auto_play(&self) -> bool {
        self.scheduler.auto_play()
    }

    pub fn pending_event(&self) -> Option<&DevEvent> {
        self.pending_event.as_ref()
    }

    pub fn offers(&self) -> &[Offer] {
        &self.state.hiring.offers
    }

    pub fn content_mode(&self) -> ContentMode {
        self.content.mode()
    }

    pub fn is_content_pending(&self, field: ContentField) -> bool {
        self.content.is_pending(field)
    }

    fn expect_stage(&self, expected: Stage) -> ActionResult<()> {
        if self.state.stage == expected {
            Ok(())
        } else {
            Err(ActionError::WrongStage {
                expected,
                actual: self.state.stage,
            })
        }
    }

    fn reject_funds(&self, needed: i64) -> ActionError {
        warn!(
            "Rejected action: needs ${} but only ${} available",
            needed, self.state.money
        );
        ActionError::InsufficientFunds {
            needed,
            available: self.state.money,
        }
    }

    /// Replace the state and re-check the failure conditions
    fn commit(&mut self, next: GameState) {
        self.state = next;
        if let Some(reason) = self.state.failure_condition() {
            self.fail(reason.to_string());
        }
    }

    fn fail(&mut self, reason: String) {
        info!("Studio failed in month {}: {}", self.state.current_month, reason);
        let mut next = self.state.clone();
        next.stage = Stage::Failed;
        next.is_crunching = false;
        next.log(format!("[Failure] {}", reason));
        next.failure_reason = Some(reason);
        self.state = next;
        self.pending_event = None;
        self.scheduler.stop();
        self.content.cancel_all();
    }

    fn roll_market_event(&mut self) -> Option<MarketEvent> {
        if !self.config.market_events || !self.rng.random_bool(MARKET_EVENT_CHANCE) {
            return None;
        }
        MARKET_EVENTS.choose(&mut self.rng).copied()
    }

    fn begin_playthrough(&mut self) {
        let market_event = self.roll_market_event();
        let mut next = self.state.clone();
        if let Some(event) = &market_event {
            info!("Market condition this cycle: {}", event.name);
            next.log(format!("[Market] {}: {}", event.name, event.description));
        }
        next.log(format!(
            "[Market] Players are hungry for {} games",
            next.current_trend.display_name()
        ));
        next.market_event = market_event;
        self.state = next;
        self.enter_hiring();
    }

    fn roll_offers(&mut self, role: Role) -> Vec<Offer> {
        generate_candidates(role, &mut self.staff_ids, &mut self.rng)
            .into_iter()
            .map(|member| Offer {
                member,
                commentary: None,
            })
            .collect()
    }

    fn enter_hiring(&mut self) {
        let mut next = self.state.clone();
        next.stage = Stage::Hiring;
        next.team = Team::default();
        next.monthly_burn_rate = 0;
        next.hiring = HiringBoard::new(RefreshPricing::new(
            self.config.initial_refresh_cost,
            self.config.refresh_cost_growth,
        ));
        next.hiring.offers = self.roll_offers(Role::Designer);
        self.state = next;
        info!("Entered HIRING with ${}", self.state.money);
    }

    // ---- HIRING ----

    /// Hire the offer at `index` for the role currently being filled
    pub fn hire(&mut self, index: usize) -> ActionResult<()> {
        self.expect_stage(Stage::Hiring)?;
        let offer = self
            .state
            .hiring
            .offers
            .get(index)
            .ok_or(ActionError::NoSuchCandidate(index))?;
        if !self.state.can_afford(offer.member.salary) {
            return Err(self.reject_funds(offer.member.salary));
        }
        let member = offer.member.clone();

        let mut next = self.state.clone();
        next.log(format!(
            "[Hiring] {} joins as {}",
            member.name,
            member.role.display_name()
        ));
        next.team.seat(member);
        next.hiring.role_index += 1;

        match next.hiring.current_role() {
            Some(role) => {
                next.hiring.offers = self.roll_offers(role);
                self.state = next;
                Ok(())
            }
            None => {
                next.hiring.offers.clear();
                let team = next.team.clone();
                self.state = next;
                self.on_hiring_complete(team)
            }
        }
    }

    /// Pay for a fresh set of offers for the current role
    pub fn refresh_candidates(&mut self) -> ActionResult<()> {
        self.expect_stage(Stage::Hiring)?;
        let role = self
            .state
            .hiring
            .current_role()
            .ok_or(ActionError::IncompleteTeam)?;
        let cost = self.state.hiring.refresh.cost();
        if !self.state.can_afford(cost) {
            return Err(self.reject_funds(cost));
        }

        let mut next = self.state.clone();
        next.money -= cost;
        next.hiring.refresh.advance();
        next.hiring.offers = self.roll_offers(role);
        next.log(format!(
            "[Hiring] Paid ${} for new {} candidates",
            cost,
            role.display_name()
        ));
        self.state = next;
        Ok(())
    }

    /// Ask the content provider for recruiter commentary on an offer
    pub fn request_commentary(&mut self, index: usize) -> ActionResult<()> {
        self.expect_stage(Stage::Hiring)?;
        let candidate = self
            .state
            .hiring
            .offers
            .get(index)
            .ok_or(ActionError::NoSuchCandidate(index))?
            .member
            .clone();
        self.request_content(ContentPrompt::CandidateCommentary { candidate });
        Ok(())
    }

    pub fn on_hiring_complete(&mut self, team: Team) -> ActionResult<()> {
        self.expect_stage(Stage::Hiring)?;
        if !team.is_complete() {
            return Err(ActionError::IncompleteTeam);
        }

        let mut next = self.state.clone();
        next.monthly_burn_rate = team.monthly_burn_rate();
        next.team = team;
        next.hiring.offers.clear();
        next.hiring.role_index = Role::ORDER.len();
        next.stage = Stage::Setup;
        next.log(format!(
            "[Hiring] Team assembled, payroll ${}/month",
            next.monthly_burn_rate
        ));
        info!(
            "Team assembled (stat sum {}, payroll ${}/month)",
            next.team.stat_sum(),
            next.monthly_burn_rate
        );
        self.state = next;
        Ok(())
    }

    // ---- SETUP ----

    /// Ask the content provider for a title matching the project
    pub fn suggest_title(&mut self, project: &ProjectConfig) -> ActionResult<()> {
        self.expect_stage(Stage::Setup)?;
        self.request_content(ContentPrompt::Title {
            themes: project.theme_label(),
            genre: project.genre.display_name().to_string(),
        });
        Ok(())
    }

    pub fn on_setup_complete(&mut self, mut project: ProjectConfig) -> ActionResult<()> {
        self.expect_stage(Stage::Setup)?;
        if !project.is_valid() {
            return Err(ActionError::InvalidProjectConfig);
        }

        let title = project.title.trim().to_string();
        project.title = if title.is_empty() {
            self.state
                .suggested_title
                .clone()
                .unwrap_or_else(|| FALLBACK_TITLE.to_string())
        } else {
            title
        };

        let mut next = self.state.clone();
        next.log(format!(
            "[Setup] Project \"{}\" ({} / {})",
            project.title,
            project.theme_label(),
            project.genre.display_name()
        ));
        info!("Project confirmed: {}", project.title);
        next.project = project;
        next.stage = Stage::Engineering;
        self.content.cancel(ContentField::Title);
        self.state = next;
        Ok(())
    }

    /// Discard the team and start hiring again
    pub fn back_to_hiring(&mut self) -> ActionResult<()> {
        self.expect_stage(Stage::Setup)?;
        self.content.cancel(ContentField::Title);
        let mut next = self.state.clone();
        next.project = ProjectConfig::default();
        next.suggested_title = None;
        self.state = next;
        self.enter_hiring();
        Ok(())
    }

    // ---- ENGINEERING ----

    /// Monthly payroll after the market condition's cost multiplier
    pub fn effective_burn_rate(&self) -> i64 {
        let multiplier = self
            .state
            .market_event
            .map_or(1.0, |event| event.cost_multiplier);
        (self.state.monthly_burn_rate as f64 * multiplier).round() as i64
    }

    pub fn estimated_months(&self, engineering: &EngineeringConfig) -> u32 {
        estimate_months(&self.state.team, engineering)
    }

    /// Upfront cost plus payroll for the estimated duration
    pub fn required_budget(&self, engineering: &EngineeringConfig) -> i64 {
        engineering.upfront_cost()
            + i64::from(self.estimated_months(engineering)) * self.effective_burn_rate()
    }

    pub fn on_engineering_complete(&mut self, engineering: EngineeringConfig) -> ActionResult<()> {
        self.expect_stage(Stage::Engineering)?;
        let needed = self.required_budget(&engineering);
        if !self.state.can_afford(needed) {
            return Err(self.reject_funds(needed));
        }

        let upfront = engineering.upfront_cost();
        let mut next = self.state.clone();
        next.money -= upfront;
        next.engineering = engineering;
        next.stage = Stage::Development;
        next.progress = 0.0;
        next.current_month = 0;
        next.is_crunching = false;
        next.log(format!(
            "[Engineering] Tech stack locked in, ${} spent upfront",
            upfront
        ));
        info!(
            "Development started: speed x{:.2}, quality x{:.2}, ~{} months",
            engineering.speed_multiplier(),
            engineering.quality_multiplier(),
            self.estimated_months(&engineering)
        );

        self.milestones.reset();
        self.pending_event = None;
        self.state = next;
        self.scheduler.start();
        Ok(())
    }

    pub fn back_to_setup(&mut self) -> ActionResult<()> {
        self.expect_stage(Stage::Engineering)?;
        let mut next = self.state.clone();
        next.engineering = EngineeringConfig::default();
        next.stage = Stage::Setup;
        self.state = next;
        Ok(())
    }

    // ---- DEVELOPMENT ----

    /// Flip crunch mode; returns the new setting
    pub fn toggle_crunch(&mut self) -> ActionResult<bool> {
        self.expect_stage(Stage::Development)?;
        if self.state.progress >= 100.0 {
            return Err(ActionError::DevelopmentFinished);
        }
        let mut next = self.state.clone();
        next.is_crunching = !next.is_crunching;
        next.log(if next.is_crunching {
            "[Crunch] Overtime mandated"
        } else {
            "[Crunch] Back to normal hours"
        });
        let crunching = next.is_crunching;
        self.state = next;
        Ok(crunching)
    }

    /// Pause the month timer; false if it was not running
    pub fn pause(&mut self) -> ActionResult<bool> {
        self.expect_stage(Stage::Development)?;
        Ok(self.scheduler.pause())
    }

    pub fn resume(&mut self) -> ActionResult<bool> {
        self.expect_stage(Stage::Development)?;
        Ok(self.scheduler.resume())
    }

    /// Advance simulated time
    ///
    /// Ages content requests, fires due development months and plays due
    /// settlement months. Months stop firing as soon as the scheduler
    /// leaves `Running`.
    pub fn tick(&mut self, delta_secs: f32) {
        if delta_secs <= 0.0 {
            return;
        }

        let expired = self.content.advance(delta_secs);
        if !expired.is_empty() {
            for request in expired {
                self.resolve_with_fallback(
                    request.ticket.field,
                    &request.prompt,
                    ContentError::Timeout,
                );
            }
            self.check_assets_ready();
        }

        self.scheduler.accumulate(delta_secs);
        while self.scheduler.next_month_due() {
            self.run_development_month();
        }
        while self.scheduler.next_settlement_due() {
            if self.play_next_month().is_err() {
                self.scheduler.set_auto_play(false);
                break;
            }
        }
    }

    fn run_development_month(&mut self) {
        if self.state.stage != Stage::Development {
            self.scheduler.stop();
            return;
        }
        if self.state.progress >= 100.0 {
            self.begin_final_assets();
            return;
        }

        if let Some(milestone) = self.milestones.check(self.state.progress) {
            let event = generate_event(&mut self.rng);
            info!("Milestone {}% reached: {}", milestone, event.title);
            let mut next = self.state.clone();
            next.log(format!("[Event] {}", event.title));
            self.state = next;
            self.pending_event = Some(event);
            self.scheduler.await_decision();
            return;
        }

        let inputs = ProgressInputs::from_project(
            &self.state.team,
            &self.state.engineering,
            self.state.project.genre,
            self.state.is_crunching,
            self.state.morale,
        )
        .with_market(self.state.market_event.as_ref());
        let delta = calculate_monthly_progress(&inputs);
        let month = advance_month(
            &MonthContext {
                progress: self.state.progress,
                money: self.state.money,
                morale: self.state.morale,
                stats: self.state.stats,
                burn_rate: self.effective_burn_rate(),
                is_crunching: self.state.is_crunching,
                bug_modifier: self.state.engineering.bug_modifier(),
            },
            delta,
        );

        let mut next = self.state.clone();
        next.progress = month.progress;
        next.money = month.money;
        next.morale = month.morale;
        next.stats = month.stats;
        next.current_month += 1;
        if next.is_crunching {
            next.total_crunch_months += 1;
        }
        next.log(format!(
            "[Report] Month {}: progress {}%",
            next.current_month,
            next.progress.floor()
        ));
        debug!(
            "Month {}: +{:.2}% -> {:.1}%, money ${}, morale {:.0}",
            next.current_month, delta, next.progress, next.money, next.morale
        );
        self.commit(next);

        if self.state.stage == Stage::Development && self.state.progress >= 100.0 {
            self.begin_final_assets();
        }
    }

    fn begin_final_assets(&mut self) {
        let mut next = self.state.clone();
        next.is_crunching = false;
        next.log("[Build] Development complete, packaging release assets");
        self.state = next;
        self.scheduler.await_assets();

        if self.state.cover_art.is_none() {
            self.request_content(ContentPrompt::CoverArt {
                title: self.state.project.title.clone(),
                themes: self.state.project.theme_label(),
            });
        }
        if self.state.store_summary.is_none() {
            self.request_content(ContentPrompt::StoreSummary {
                title: self.state.project.title.clone(),
                themes: self.state.project.theme_label(),
                genre: self.state.project.genre.display_name().to_string(),
            });
        }
        self.check_assets_ready();
    }

    fn check_assets_ready(&mut self) {
        if self.scheduler.state() != SchedulerState::AwaitingAssets
            || self.content.is_pending(ContentField::CoverArt)
            || self.content.is_pending(ContentField::StoreSummary)
        {
            return;
        }
        self.scheduler.assets_resolved();
        let mut next = self.state.clone();
        next.log("[Build] Version 1.0.0-GOLD is ready for release");
        self.state = next;
        info!("Final assets ready for \"{}\"", self.state.project.title);
    }

    /// Answer the pending decision event
    pub fn select_event_option(&mut self, index: usize) -> ActionResult<()> {
        let event = self
            .pending_event
            .as_ref()
            .ok_or(ActionError::NoPendingEvent)?;
        let option = event
            .option(index)
            .ok_or(ActionError::InvalidOption(index))?
            .clone();
        if !self.state.can_afford(option.cost) {
            return Err(self.reject_funds(option.cost));
        }
        let title = event.title.clone();

        let mut next = self.state.clone();
        next.money -= option.cost;
        next.progress = clamp_progress(next.progress + option.progress_impact);
        next.stats = next.stats.with_impact(&option.stat_impact);
        next.morale = clamp_morale(next.morale + option.stat_impact.morale);
        next.log(format!("[Decision] {}: {}", title, option.text));
        info!("Event \"{}\" resolved with \"{}\"", title, option.text);

        self.pending_event = None;
        self.commit(next);
        if self.state.stage == Stage::Development {
            if self.state.progress >= 100.0 {
                self.begin_final_assets();
            } else {
                self.scheduler.decision_resolved();
            }
        }
        Ok(())
    }

    pub fn on_dev_complete(&mut self) -> ActionResult<()> {
        self.expect_stage(Stage::Development)?;
        if self.pending_event.is_some() {
            return Err(ActionError::EventPending);
        }
        if self.state.progress < 100.0 {
            return Err(ActionError::DevelopmentIncomplete(self.state.progress));
        }
        if self.scheduler.state() != SchedulerState::Stopped {
            return Err(ActionError::AssetsPending);
        }

        let mut next = self.state.clone();
        next.stage = Stage::Release;
        next.is_crunching = false;
        next.price = DEFAULT_PRICE;
        next.log("[Release] Heading to the storefront");
        info!(
            "Development finished after {} months: quality {:.1}, hype {:.1}, bugs {:.0}",
            next.current_month, next.stats.quality, next.stats.hype, next.stats.bugs
        );
        self.state = next;
        self.scheduler.stop();
        Ok(())
    }

    /// Abort development with a reason
    pub fn on_fail(&mut self, reason: impl Into<String>) -> ActionResult<()> {
        self.expect_stage(Stage::Development)?;
        self.fail(reason.into());
        Ok(())
    }

    // ---- RELEASE ----

    pub fn on_launch(&mut self, plan: LaunchPlan) -> ActionResult<FinalResult> {
        self.expect_stage(Stage::Release)?;
        if plan.price <= 0 {
            return Err(ActionError::InvalidPrice(plan.price));
        }
        let mut marketing: Vec<MarketingChannel> = Vec::new();
        for channel in plan.marketing {
            if !marketing.contains(&channel) {
                marketing.push(channel);
            }
        }
        let cost = marketing_cost(&marketing);
        if !self.state.can_afford(cost) {
            return Err(self.reject_funds(cost));
        }

        let inputs = LaunchInputs {
            stats: self.state.stats,
            quality_multiplier: self.state.engineering.quality_multiplier(),
            matches_trend: self.state.project.matches_trend(self.state.current_trend),
            price: plan.price,
            market_event: self.state.market_event.unwrap_or(MarketEvent::NEUTRAL),
        };
        let result = simulate_launch(&inputs, &mut self.rng);
        let settlement = Settlement::new(
            &result,
            plan.price,
            self.state.stats.bugs,
            marketing_boost(&marketing),
        );

        let mut next = self.state.clone();
        next.money -= cost;
        next.price = plan.price;
        next.marketing = marketing;
        next.stage = Stage::Results;
        next.total_games_released += 1;
        if !next.unlocked_achievements.contains(&result.achievement) {
            next.unlocked_achievements.push(result.achievement);
        }
        next.log(format!(
            "[Launch] Score {} ({}), achievement: {}",
            result.score,
            result.review.label(),
            result.achievement.name()
        ));
        next.launch = Some(LaunchRecord {
            result,
            settlement,
            marketing_cost: cost,
        });
        info!(
            "Launched \"{}\" at ${}: score {} ({}), potential {:.0}",
            next.project.title,
            plan.price,
            result.score,
            result.review.label(),
            result.base_potential
        );
        self.state = next;

        self.request_content(ContentPrompt::PlayerComments {
            title: self.state.project.title.clone(),
            score: result.score,
            bugs: self.state.stats.bugs,
        });
        Ok(result)
    }

    // ---- RESULTS ----

    pub fn settlement(&self) -> Option<&Settlement> {
        self.state.launch.as_ref().map(|launch| &launch.settlement)
    }

    pub fn settlement_finished(&self) -> bool {
        self.settlement().is_some_and(|s| s.is_finished())
    }

    /// Play one settlement month
    pub fn play_next_month(&mut self) -> ActionResult<SalesMonth> {
        self.expect_stage(Stage::Results)?;
        let mut next = self.state.clone();
        let launch = next
            .launch
            .as_mut()
            .ok_or(ActionError::SettlementFinished)?;
        let month = launch.settlement.play_month(&mut self.rng)?;
        let finished = launch.settlement.is_finished();
        let total = launch.settlement.total_revenue;

        next.log(format!(
            "[Sales] Month {}: {} units, ${}",
            month.month, month.units, month.revenue
        ));
        self.state = next;

        if finished {
            self.scheduler.set_auto_play(false);
            info!("Settlement finished: total revenue ${}", total);
        }
        Ok(month)
    }

    pub fn set_auto_play(&mut self, enabled: bool) -> ActionResult<()> {
        self.expect_stage(Stage::Results)?;
        if enabled && self.settlement_finished() {
            return Err(ActionError::SettlementFinished);
        }
        self.scheduler.set_auto_play(enabled);
        Ok(())
    }

    /// Bank the revenue, record the game and start the next playthrough
    ///
    /// Returns the profit, which is the settlement's total revenue.
    pub fn on_restart(&mut self) -> ActionResult<i64> {
        self.expect_stage(Stage::Results)?;
        let launch = self
            .state
            .launch
            .as_ref()
            .ok_or(ActionError::SettlementIncomplete)?;
        if !launch.settlement.is_finished() {
            return Err(ActionError::SettlementIncomplete);
        }

        let profit = launch.settlement.total_revenue;
        let entry = HistoryEntry {
            title: self.state.project.title.clone(),
            themes: self.state.project.themes.clone(),
            genre: self.state.project.genre,
            profit,
            score: launch.result.score,
            achievement: launch.result.achievement,
        };
        let mut carried = self.state.clone();
        carried.earn(profit);
        carried.history.push(entry);
        info!(
            "\"{}\" earned ${} (career total ${})",
            self.state.project.title,
            profit,
            carried.lifetime_profit()
        );
        let trend = carried.current_trend;

        self.content.cancel_all();
        self.scheduler.stop();
        self.milestones.reset();
        self.pending_event = None;
        self.state = carried.next_playthrough(&self.config, trend);
        self.begin_playthrough();
        Ok(profit)
    }

    /// Wipe the career and start over; money and history are forfeited
    pub fn restart(&mut self) {
        info!("Restarting career from {:?}", self.state.stage);
        self.content.cancel_all();
        self.scheduler.stop();
        self.milestones.reset();
        self.pending_event = None;
        let trend = roll_trend(&mut self.rng);
        self.state = GameState::new(&self.config, trend);
        self.begin_playthrough();
    }

    // ---- state merge ----

    /// Merge a partial state; bounded values are clamped and failure re-checked
    ///
    /// A build pushed to 100% during development starts its final assets.
    pub fn apply_updates(&mut self, update: StateUpdate) {
        let next = self.state.merged(update);
        self.commit(next);

        let development_clock = matches!(
            self.scheduler.state(),
            SchedulerState::Running | SchedulerState::Paused
        );
        if self.state.stage == Stage::Development
            && self.state.progress >= 100.0
            && self.pending_event.is_none()
            && development_clock
        {
            self.begin_final_assets();
        }
    }

    // ---- content ----

    fn request_content(&mut self, prompt: ContentPrompt) {
        match self.content.mode() {
            ContentMode::Offline => {
                let resolved = fallback(&prompt, &mut self.rng);
                self.apply_content(resolved);
            }
            ContentMode::Online => {
                let ticket = self.content.submit(prompt);
                debug!("Content requested: {:?}", ticket);
            }
        }
    }

    fn apply_content(&mut self, resolved: ResolvedContent) {
        let mut next = self.state.clone();
        match resolved {
            ResolvedContent::Title(title) => next.suggested_title = Some(title),
            ResolvedContent::CandidateCommentary(id, text) => {
                if let Some(offer) = next.hiring.offers.iter_mut().find(|o| o.member.id == id) {
                    offer.commentary = Some(text);
                }
            }
            ResolvedContent::StoreSummary(summary) => next.store_summary = Some(summary),
            ResolvedContent::PlayerComments(comments) => next.comments = comments,
            ResolvedContent::CoverArt(cover) => next.cover_art = cover,
        }
        self.state = next;
    }

    /// Requests waiting for a host to answer
    pub fn take_content_requests(&mut self) -> Vec<ContentRequest> {
        self.content.take_requests()
    }

    /// Land a provider answer; returns false when the ticket is stale
    pub fn deliver_content(
        &mut self,
        ticket: ContentTicket,
        result: Result<ContentResponse, ContentError>,
    ) -> bool {
        let Some(prompt) = self.content.accept(ticket) else {
            debug!("Dropping stale content for {:?}", ticket.field);
            return false;
        };
        match result.and_then(|response| resolve(&prompt, response)) {
            Ok(resolved) => self.apply_content(resolved),
            Err(err) => self.resolve_with_fallback(ticket.field, &prompt, err),
        }
        self.check_assets_ready();
        true
    }

    fn resolve_with_fallback(
        &mut self,
        field: ContentField,
        prompt: &ContentPrompt,
        err: ContentError,
    ) {
        warn!("Content for {:?} failed ({}), using fallback", field, err);
        let resolved = fallback(prompt, &mut self.rng);
        self.apply_content(resolved);
    }

    /// Answer every queued request synchronously; returns how many were sent
    pub fn pump_content<P: ContentProvider + ?Sized>(&mut self, provider: &mut P) -> usize {
        let requests = self.take_content_requests();
        let count = requests.len();
        for request in requests {
            let result = provider.respond(&request.prompt);
            self.deliver_content(request.ticket, result);
        }
        count
    }
}

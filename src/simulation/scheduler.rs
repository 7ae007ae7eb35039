//! Tick scheduling for development months and settlement auto-play
//!
//! Simulated time only accumulates toward a development month while the
//! scheduler is `Running`. Leaving `Running` drops the partial interval, so
//! a month can never be applied twice across a suspend/resume.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchedulerState {
    /// Months fire every `month_interval_secs`
    Running,
    /// Player paused development
    Paused,
    /// A decision event is waiting for an answer
    AwaitingDecision,
    /// Cover art and store summary are being generated
    AwaitingAssets,
    /// No development timer is active
    Stopped,
}

/// Fixed-interval accumulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    pub interval_secs: f32,
    elapsed: f32,
}

impl IntervalTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs: interval_secs.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn accumulate(&mut self, delta_secs: f32) {
        if delta_secs > 0.0 {
            self.elapsed += delta_secs;
        }
    }

    /// Consume one interval if one has elapsed
    pub fn take_due(&mut self) -> bool {
        if self.elapsed >= self.interval_secs {
            self.elapsed -= self.interval_secs;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    state: SchedulerState,
    month_timer: IntervalTimer,
    settlement_timer: IntervalTimer,
    auto_play: bool,
}

impl Scheduler {
    pub fn new(month_interval_secs: f32, settlement_interval_secs: f32) -> Self {
        Self {
            state: SchedulerState::Stopped,
            month_timer: IntervalTimer::new(month_interval_secs),
            settlement_timer: IntervalTimer::new(settlement_interval_secs),
            auto_play: false,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    fn enter(&mut self, state: SchedulerState) {
        if state != SchedulerState::Running {
            self.month_timer.reset();
        }
        self.state = state;
    }

    /// Start a fresh development timer
    pub fn start(&mut self) {
        self.month_timer.reset();
        self.state = SchedulerState::Running;
    }

    /// Returns false when there is nothing running to pause
    pub fn pause(&mut self) -> bool {
        if self.state == SchedulerState::Running {
            self.enter(SchedulerState::Paused);
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.state == SchedulerState::Paused {
            self.start();
            true
        } else {
            false
        }
    }

    pub fn await_decision(&mut self) {
        self.enter(SchedulerState::AwaitingDecision);
    }

    pub fn await_assets(&mut self) {
        self.enter(SchedulerState::AwaitingAssets);
    }

    /// A decision was answered; development carries on
    pub fn decision_resolved(&mut self) {
        if self.state == SchedulerState::AwaitingDecision {
            self.start();
        }
    }

    /// Final assets landed; development is over
    pub fn assets_resolved(&mut self) {
        if self.state == SchedulerState::AwaitingAssets {
            self.enter(SchedulerState::Stopped);
        }
    }

    pub fn stop(&mut self) {
        self.enter(SchedulerState::Stopped);
        self.auto_play = false;
        self.settlement_timer.reset();
    }

    /// Feed simulated time to whichever timers are live
    pub fn accumulate(&mut self, delta_secs: f32) {
        if self.state == SchedulerState::Running {
            self.month_timer.accumulate(delta_secs);
        }
        if self.auto_play {
            self.settlement_timer.accumulate(delta_secs);
        }
    }

    /// Consume one development month if running and due
    pub fn next_month_due(&mut self) -> bool {
        self.state == SchedulerState::Running && self.month_timer.take_due()
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        if self.auto_play != enabled {
            self.settlement_timer.reset();
        }
        self.auto_play = enabled;
    }

    /// Consume one settlement interval if auto-play is on and due
    pub fn next_settlement_due(&mut self) -> bool {
        self.auto_play && self.settlement_timer.take_due()
    }
}

use log::info;

use studio_sim::simulation::{FinalResult, GameState};

/// Running totals across every autopilot playthrough
#[derive(Debug, Default)]
pub struct CareerStats {
    pub playthroughs: u32,
    pub releases: u32,
    pub failures: u32,
    pub total_revenue: i64,
    pub best_score: u32,
    pub development_months: u32,
    pub elapsed_time: f32,
}

impl CareerStats {
    pub fn record_release(&mut self, result: &FinalResult, profit: i64, months: u32) {
        self.playthroughs += 1;
        self.releases += 1;
        self.total_revenue += profit;
        self.best_score = self.best_score.max(result.score);
        self.development_months += months;
    }

    pub fn record_failure(&mut self, months: u32) {
        self.playthroughs += 1;
        self.failures += 1;
        self.development_months += months;
    }

    pub fn release_rate(&self) -> f32 {
        if self.playthroughs > 0 {
            (self.releases as f32 / self.playthroughs as f32) * 100.0
        } else {
            0.0
        }
    }

    pub fn log_summary(&self, state: &GameState) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Elapsed time: {:.2}s", self.elapsed_time);
        info!("Playthroughs: {}", self.playthroughs);
        info!("Games released: {}", self.releases);
        info!("Studios failed: {}", self.failures);
        info!("Development months: {}", self.development_months);
        info!("Total revenue: ${}", self.total_revenue);
        info!("Best score: {}", self.best_score);
        info!("Final money: ${}", state.money);
        info!(
            "Achievements unlocked: {}",
            state
                .unlocked_achievements
                .iter()
                .map(|a| a.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        info!("Release rate: {:.1}%", self.release_rate());
    }
}

//! Tick clock and headless runs.

use super::*;

impl Game {
    /// One frame-paced tick. Runs a decision cycle only while auto mode is on.
    pub fn tick(&mut self) {
        if self.auto_mode {
            self.step();
        }
        self.tick += 1;
    }

    /// Runs decision cycles regardless of auto mode until the round ends or
    /// `max_ticks` cycles have run.
    pub fn advance(&mut self, max_ticks: u32) -> AdvanceResult {
        let mut ticks = 0;
        while ticks < max_ticks {
            let terminal = self.state.agent.terminal;
            if !terminal.is_playing() {
                return AdvanceResult {
                    simulated_ticks: ticks,
                    stop_reason: AdvanceStopReason::Finished(terminal),
                };
            }
            self.step();
            self.tick += 1;
            ticks += 1;
        }

        let terminal = self.state.agent.terminal;
        let stop_reason = if terminal.is_playing() {
            AdvanceStopReason::BudgetExhausted
        } else {
            AdvanceStopReason::Finished(terminal)
        };
        AdvanceResult { simulated_ticks: ticks, stop_reason }
    }
}

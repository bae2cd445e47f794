//! Physical Asia Ship.
//!
//! Every pass, each worker completes a timed task. Workers are ranked by
//! time and only the fastest half (never fewer than two) stay on the ship.
//! Passes repeat until exactly two remain. Fewer than three aboard means
//! there is nothing to cut.

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};
use crate::participant::ShipWorker;

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Workers kept after a pass over `field` workers.
#[must_use]
pub fn keep_count(field: usize) -> usize {
    (field / 2).max(2)
}

/// Timed-task elimination round.
#[derive(Clone, Debug)]
pub struct ShipTask {
    roster: Roster<ShipWorker>,
    base_time: f64,
    passes: usize,
}

impl ShipTask {
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            roster: Roster::new("Physical Asia Ship"),
            base_time: config.task_base_time,
            passes: 0,
        }
    }

    /// Task passes run in the last `play`.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl Default for ShipTask {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl Round for ShipTask {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(ShipWorker::new(*entrant, self.base_time));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.passes = 0;
        if let Some(outcome) = self.roster.short_of(3, reporter) {
            return outcome;
        }

        while self.roster.len() > 2 {
            self.passes += 1;
            reporter.blank();
            reporter.line(&format!("[Task Round {}]", self.passes));

            let mut timed: Vec<(ShipWorker, f64)> = self
                .roster
                .take_members()
                .into_iter()
                .map(|worker| {
                    let time = worker.do_task(&mut *rng, &mut *reporter);
                    (worker, time)
                })
                .collect();

            // Stable: equal times keep roster order.
            timed.sort_by(|a, b| a.1.total_cmp(&b.1));

            let slow = timed.split_off(keep_count(timed.len()));
            Roster::bury(slow.into_iter().map(|(worker, _)| worker), reporter);
            self.roster.restore(timed.into_iter().map(|(worker, _)| worker).collect());

            reporter.line(&format!("Survivors: {}", self.roster.len()));
        }

        reporter.blank();
        reporter.line("[Final Survivors]");
        self.roster.close(None, reporter);
        RoundOutcome::Completed
    }

    fn survivors(&self) -> Vec<Entrant> {
        self.roster.survivors()
    }

    fn stats(&self) -> Option<&RoundStats> {
        self.roster.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BufferReporter, GameRng, NullReporter, ScriptedSource};

    #[test]
    fn test_keep_count() {
        assert_eq!(keep_count(3), 2);
        assert_eq!(keep_count(4), 2);
        assert_eq!(keep_count(5), 2);
        assert_eq!(keep_count(9), 4);
        assert_eq!(keep_count(456), 228);
    }

    #[test]
    fn test_fastest_survive() {
        let mut game = ShipTask::default();
        game.join(&Entrant::new(1, 0, 0));
        game.join(&Entrant::new(2, 100, 100));
        game.join(&Entrant::new(3, 50, 50));
        game.join(&Entrant::new(4, 90, 90));
        game.join(&Entrant::new(5, 10, 10));

        // Same noise for everyone: ranking follows ability.
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut out = BufferReporter::new();
        game.play(&mut rng, &mut out);

        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![2, 4]);
        assert_eq!(game.passes(), 1);
        assert_eq!(out.count("lost at the ship task."), 3);
        assert!(out.contains("[Task Round 1]"));
        assert!(out.contains("[Final Survivors]"));
    }

    #[test]
    fn test_repeats_until_two() {
        let mut rng = GameRng::new(8);
        let mut game = ShipTask::default();
        for e in Entrant::field(20, &mut rng) {
            game.join(&e);
        }
        game.play(&mut rng, &mut NullReporter);

        // 20 -> 10 -> 5 -> 2
        assert_eq!(game.passes(), 3);
        assert_eq!(game.survivors().len(), 2);
        let stats = game.stats().unwrap();
        assert_eq!((stats.initial, stats.survivors, stats.deaths), (20, 2, 18));
    }

    #[test]
    fn test_small_field_untouched() {
        let mut game = ShipTask::default();
        game.join(&Entrant::new(1, 0, 0));
        game.join(&Entrant::new(2, 0, 0));

        let mut rng = ScriptedSource::new(vec![0.5]);
        let outcome = game.play(&mut rng, &mut NullReporter);

        assert_eq!(
            outcome,
            RoundOutcome::InsufficientPlayers {
                required: 3,
                present: 2
            }
        );
        assert_eq!(game.survivors().len(), 2);
        assert_eq!(game.passes(), 0);
        assert_eq!(rng.probability_draws(), 0);
    }
}

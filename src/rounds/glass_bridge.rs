//! Glass Bridge.
//!
//! A hidden path of panels is fixed before anyone steps on it. Walkers go in
//! roster order from a shared cursor: a correct guess advances the cursor and
//! the same walker keeps going, a wrong guess kills the walker and the next
//! one retries the same panel. The cursor never moves back. Reaching the far
//! end spares everyone still waiting.

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};
use crate::participant::{BridgeWalker, Participant};

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Shared-path puzzle round.
#[derive(Clone, Debug)]
pub struct GlassBridge {
    roster: Roster<BridgeWalker>,
    total_steps: usize,
    completed: usize,
}

impl GlassBridge {
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            roster: Roster::new("Glass Bridge"),
            total_steps: config.bridge_steps,
            completed: 0,
        }
    }

    /// Panels cleared in the last `play`.
    #[must_use]
    pub fn steps_completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }
}

impl Default for GlassBridge {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl Round for GlassBridge {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(BridgeWalker::new(*entrant));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.completed = 0;
        if let Some(outcome) = self.roster.short_of(1, reporter) {
            return outcome;
        }

        let safe_left: Vec<bool> = (0..self.total_steps).map(|_| rng.coin_flip()).collect();
        log::trace!("bridge layout {:?}", safe_left);

        // The walker on the glass is always the front of the roster: a fall
        // removes them and the next in line steps up.
        while let Some(walker) = self.roster.members().first() {
            if self.completed >= self.total_steps {
                break;
            }
            let number = walker.number();
            let step = self.completed + 1;

            if rng.coin_flip() == safe_left[self.completed] {
                reporter.line(&format!("Player #{number} stepped on safe glass at step {step}"));
                self.completed += 1;
                if self.completed >= self.total_steps {
                    reporter.line("Bridge completed! Remaining players survive.");
                }
            } else {
                reporter.line(&format!("Player #{number} fell at step {step}!"));
                self.roster.eliminate(0, reporter);
            }
        }

        let steps = (self.completed, self.total_steps);
        self.roster.close(Some(steps), reporter);
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
    use crate::core::{BufferReporter, NullReporter, ScriptedSource};

    fn bridge(steps: usize, walkers: u32) -> GlassBridge {
        let mut game = GlassBridge::new(&RoundConfig::default().with_bridge_steps(steps));
        for i in 1..=walkers {
            game.join(&Entrant::new(i, 0, 0));
        }
        game
    }

    #[test]
    fn test_cursor_retries_in_place() {
        let mut game = bridge(3, 3);
        // Layout: all safe-left (0.1 x3).
        // #1: left (ok, step 1), right (falls at step 2).
        // #2: right (falls at step 2).
        // #3: left, left (steps 2 and 3), bridge done.
        let mut rng = ScriptedSource::new(vec![0.1, 0.1, 0.1, 0.1, 0.9, 0.9, 0.1, 0.1]);
        let mut out = BufferReporter::new();
        game.play(&mut rng, &mut out);

        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![3]);
        assert_eq!(game.steps_completed(), 3);
        assert_eq!(out.count("fell at step 2!"), 2);
        assert!(out.contains("Player #1 stepped on safe glass at step 1"));
        assert!(out.contains("Player #3 stepped on safe glass at step 3"));
        assert!(out.contains("Bridge completed! Remaining players survive."));
        assert!(out.contains("Steps completed: 3/3"));
    }

    #[test]
    fn test_completion_spares_waiting_walkers() {
        let mut game = bridge(2, 4);
        // Layout right, right; #1 guesses right twice.
        let mut rng = ScriptedSource::new(vec![0.9, 0.9, 0.9, 0.9]);
        game.play(&mut rng, &mut NullReporter);

        assert_eq!(game.survivors().len(), 4);
        assert_eq!(game.stats().unwrap().deaths, 0);
        assert_eq!(rng.probability_draws(), 4);
    }

    #[test]
    fn test_everyone_falls() {
        let mut game = bridge(5, 2);
        // Layout left x5, every guess right.
        let mut rng = ScriptedSource::new(vec![0.1, 0.1, 0.1, 0.1, 0.1, 0.9, 0.9]);
        let mut out = BufferReporter::new();
        game.play(&mut rng, &mut out);

        assert!(game.survivors().is_empty());
        assert_eq!(game.steps_completed(), 0);
        assert!(out.contains("Steps completed: 0/5"));
        let stats = game.stats().unwrap();
        assert_eq!(stats.steps, Some((0, 5)));
        assert_eq!(stats.deaths, 2);
    }

    #[test]
    fn test_empty_bridge_is_insufficient() {
        let mut game = bridge(18, 0);
        let outcome = game.play(&mut ScriptedSource::default(), &mut NullReporter);
        assert_eq!(
            outcome,
            RoundOutcome::InsufficientPlayers {
                required: 1,
                present: 0
            }
        );
    }
}

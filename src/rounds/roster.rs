//! Roster bookkeeping shared by every round.
//!
//! `Roster<P>` owns a round's participants and does the parts every game
//! does the same way: the opening banner, the quorum check, elimination
//! narration, and the closing stats block.

use crate::core::{Entrant, Reporter};
use crate::participant::Participant;

use super::{RoundOutcome, RoundStats};

/// Ordered, owned collection of one round's participants.
#[derive(Clone, Debug)]
pub struct Roster<P> {
    name: String,
    members: Vec<P>,
    initial: usize,
    stats: Option<RoundStats>,
    winner: Option<Entrant>,
}

impl<P: Participant> Roster<P> {
    /// Create an empty roster for the named game.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            initial: 0,
            stats: None,
            winner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a participant.
    ///
    /// The first join after a finished round starts a fresh intake, so a
    /// played round can be filled and run again.
    pub fn join(&mut self, participant: P) {
        if self.stats.is_some() {
            log::debug!("{}: discarding {} members from the previous play", self.name, self.members.len());
            self.members.clear();
            self.initial = 0;
            self.stats = None;
            self.winner = None;
        }
        self.members.push(participant);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn members(&self) -> &[P] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [P] {
        &mut self.members
    }

    /// Print the banner and headcount, and remember the starting size.
    ///
    /// Opening a finished round with no new joins plays an empty roster.
    pub fn open(&mut self, reporter: &mut dyn Reporter) -> usize {
        if self.stats.is_some() {
            self.members.clear();
        }
        self.initial = self.members.len();
        self.stats = None;
        self.winner = None;

        reporter.line(&format!("[[[{}]]]", self.name));
        reporter.line(&format!("{} players joined the game.", self.initial));
        log::debug!("{}: starting with {} participants", self.name, self.initial);

        self.initial
    }

    /// If fewer than `required` are present, close the round untouched.
    ///
    /// Returns the outcome to hand back from `play` when short.
    pub fn short_of(&mut self, required: usize, reporter: &mut dyn Reporter) -> Option<RoundOutcome> {
        let present = self.members.len();
        if present >= required {
            return None;
        }

        reporter.line("There are not sufficient players.");
        log::debug!("{}: {present} present, {required} required", self.name);
        self.close(None, reporter);

        Some(RoundOutcome::InsufficientPlayers { required, present })
    }

    /// Run `keep` on each participant in order; those it rejects die on the spot.
    pub fn retain_survivors(
        &mut self,
        reporter: &mut dyn Reporter,
        mut keep: impl FnMut(&mut P, &mut dyn Reporter) -> bool,
    ) {
        self.members.retain_mut(|p| {
            if keep(p, &mut *reporter) {
                true
            } else {
                p.elimination_message(&mut *reporter);
                false
            }
        });
    }

    /// Remove the participant at `index` and narrate the death.
    pub fn eliminate(&mut self, index: usize, reporter: &mut dyn Reporter) {
        let p = self.members.remove(index);
        p.elimination_message(reporter);
    }

    /// Narrate the deaths of participants already removed from the roster.
    pub fn bury(losers: impl IntoIterator<Item = P>, reporter: &mut dyn Reporter) {
        for loser in losers {
            loser.elimination_message(reporter);
        }
    }

    /// Move every participant out, leaving the roster empty.
    pub fn take_members(&mut self) -> Vec<P> {
        std::mem::take(&mut self.members)
    }

    /// Replace the roster with `members`.
    pub fn restore(&mut self, members: Vec<P>) {
        self.members = members;
    }

    /// Record the sole survivor as winner, if there is exactly one.
    pub fn crown(&mut self) -> Option<Entrant> {
        self.winner = match self.members.as_slice() {
            [only] => Some(*only.entrant()),
            _ => None,
        };
        self.winner
    }

    /// Capture the counters, then print survivors and the stats block.
    pub fn close(&mut self, steps: Option<(usize, usize)>, reporter: &mut dyn Reporter) -> RoundStats {
        let survivors = self.members.len();
        let stats = RoundStats {
            initial: self.initial,
            survivors,
            deaths: self.initial - survivors,
            steps,
        };
        self.stats = Some(stats);

        for p in &self.members {
            p.alive_message(reporter);
        }

        reporter.blank();
        reporter.line("[Game Statistics]");
        reporter.line(&format!("Total players: {}", stats.initial));
        reporter.line(&format!("Survivors: {}", stats.survivors));
        reporter.line(&format!("Deaths: {}", stats.deaths));
        if let Some((done, total)) = steps {
            reporter.line(&format!("Steps completed: {done}/{total}"));
        }
        reporter.blank();

        log::debug!(
            "{}: finished, {} survivors, {} deaths",
            self.name,
            stats.survivors,
            stats.deaths
        );
        stats
    }

    #[must_use]
    pub fn stats(&self) -> Option<&RoundStats> {
        self.stats.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Entrant> {
        self.winner
    }

    /// Value copies of the current members.
    #[must_use]
    pub fn survivors(&self) -> Vec<Entrant> {
        self.members.iter().map(|p| *p.entrant()).collect()
    }
}

//! Rock-paper-scissors duelist.

use crate::core::{Entrant, RandomSource, Reporter};

use super::Participant;

/// One of the three throws.
///
/// Declaration order matters: each hand beats the next one, wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

impl Hand {
    const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    /// Uniformly random hand.
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.pick_below(3) as usize]
    }

    fn index(self) -> usize {
        self as usize
    }

    /// `true` if `self` beats `other`.
    #[must_use]
    pub fn beats(self, other: Hand) -> bool {
        (self.index() + 1) % 3 == other.index()
    }
}

/// Participant who throws against a random opponent once per round.
#[derive(Clone, Debug)]
pub struct Duelist {
    entrant: Entrant,
}

impl Duelist {
    #[must_use]
    pub fn new(entrant: Entrant) -> Self {
        Self { entrant }
    }

    /// Draw hands for both sides, redrawing both until they differ.
    pub fn throw_hands(rng: &mut dyn RandomSource) -> (Hand, Hand) {
        loop {
            let mine = Hand::draw(rng);
            let theirs = Hand::draw(rng);
            if mine != theirs {
                return (mine, theirs);
            }
        }
    }
}

impl Participant for Duelist {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "died."
    }

    fn survives(&mut self, rng: &mut dyn RandomSource, _reporter: &mut dyn Reporter) -> bool {
        let (mine, theirs) = Self::throw_hands(rng);
        log::trace!("player {} threw {:?} against {:?}", self.entrant.number, mine, theirs);
        mine.beats(theirs)
    }
}

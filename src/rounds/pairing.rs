//! Bye handling and consecutive pairing for head-to-head games.

use crate::core::Reporter;
use crate::participant::Participant;

/// Result of one bracket pass.
#[derive(Debug)]
pub(crate) struct Bracket<P> {
    /// Bye first (if any), then match winners in match order.
    pub winners: Vec<P>,
    /// Match losers in match order.
    pub losers: Vec<P>,
    /// Number of matches played.
    pub matches: usize,
}

/// Pair `members` consecutively and play each match with `first_wins`.
///
/// With an odd count the last member gets a bye and advances without playing.
pub(crate) fn play_bracket<P: Participant>(
    mut members: Vec<P>,
    reporter: &mut dyn Reporter,
    mut first_wins: impl FnMut(&P, &P, &mut dyn Reporter) -> bool,
) -> Bracket<P> {
    let mut winners = Vec::with_capacity(members.len() / 2 + 1);

    if members.len() % 2 == 1 {
        if let Some(bye) = members.pop() {
            reporter.line(&format!("Player #{} gets a bye.", bye.number()));
            winners.push(bye);
        }
    }

    let mut losers = Vec::with_capacity(members.len() / 2);
    let mut matches = 0;
    let mut pending = members.into_iter();

    while let (Some(first), Some(second)) = (pending.next(), pending.next()) {
        reporter.line(&format!(
            "Match: Player #{} vs Player #{}",
            first.number(),
            second.number()
        ));
        matches += 1;

        if first_wins(&first, &second, &mut *reporter) {
            winners.push(first);
            losers.push(second);
        } else {
            winners.push(second);
            losers.push(first);
        }
    }

    Bracket {
        winners,
        losers,
        matches,
    }
}

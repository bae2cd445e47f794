//! Tug of War.
//!
//! The roster is split by position: even indices pull for team 1, odd
//! indices for team 2. The team with the strictly lower total power is
//! eliminated in full. Equal totals spare everyone.

use serde::{Deserialize, Serialize};

use crate::core::{Entrant, RandomSource, Reporter};
use crate::participant::{Participant, TeamMember};

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Aggregate power of both teams from the last pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPowers {
    pub team1: u64,
    pub team2: u64,
}

/// Team-aggregation round.
#[derive(Clone, Debug)]
pub struct TugOfWar {
    roster: Roster<TeamMember>,
    powers: Option<TeamPowers>,
}

impl TugOfWar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Roster::new("Tug of War"),
            powers: None,
        }
    }

    /// Team totals from the last `play`, if the teams were formed.
    #[must_use]
    pub fn powers(&self) -> Option<TeamPowers> {
        self.powers
    }

    fn team_powers(members: &[TeamMember]) -> TeamPowers {
        let mut powers = TeamPowers { team1: 0, team2: 0 };
        for (i, member) in members.iter().enumerate() {
            if i % 2 == 0 {
                powers.team1 += u64::from(member.power());
            } else {
                powers.team2 += u64::from(member.power());
            }
        }
        powers
    }
}

impl Default for TugOfWar {
    fn default() -> Self {
        Self::new()
    }
}

impl Round for TugOfWar {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(TeamMember::new(*entrant));
    }

    fn play(&mut self, _rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.powers = None;
        if let Some(outcome) = self.roster.short_of(2, reporter) {
            return outcome;
        }

        let powers = Self::team_powers(self.roster.members());
        self.powers = Some(powers);
        log::debug!("team powers {} vs {}", powers.team1, powers.team2);

        let losing_parity = match powers.team1.cmp(&powers.team2) {
            std::cmp::Ordering::Greater => {
                reporter.line("Team 2 lost");
                Some(1)
            }
            std::cmp::Ordering::Less => {
                reporter.line("Team 1 lost");
                Some(0)
            }
            std::cmp::Ordering::Equal => {
                reporter.line("It's a tie! Both teams survive.");
                None
            }
        };

        if let Some(parity) = losing_parity {
            // retain_mut visits members once each, in roster order.
            let mut index = 0usize;
            self.roster.retain_survivors(reporter, |_, _| {
                let keep = index % 2 != parity;
                index += 1;
                keep
            });
        }

        reporter.line(&format!("Team 1 power: {}", powers.team1));
        reporter.line(&format!("Team 2 power: {}", powers.team2));

        self.roster.close(None, reporter);
        if losing_parity.is_some() {
            RoundOutcome::Completed
        } else {
            RoundOutcome::Draw
        }
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

    fn with_powers(powers: &[u32]) -> TugOfWar {
        let mut game = TugOfWar::new();
        for (i, &p) in powers.iter().enumerate() {
            game.join(&Entrant::new(i as u32 + 1, p, 0));
        }
        game
    }

    #[test]
    fn test_alternating_teams() {
        let mut game = with_powers(&[10, 20, 30, 40]);
        let mut rng = ScriptedSource::default();
        let mut out = BufferReporter::new();

        assert_eq!(game.play(&mut rng, &mut out), RoundOutcome::Completed);
        assert_eq!(game.powers(), Some(TeamPowers { team1: 40, team2: 60 }));

        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![2, 4]);
        assert!(out.contains("Team 1 lost"));
        assert!(out.contains("Team 1 power: 40"));
        assert!(out.contains("Team 2 power: 60"));
        assert_eq!(out.count("fell into the water and died."), 2);
    }

    #[test]
    fn test_teams_follow_position_not_number() {
        let mut game = TugOfWar::new();
        game.join(&Entrant::new(1, 10, 0));
        game.join(&Entrant::new(1, 20, 0));
        game.join(&Entrant::new(2, 30, 0));
        game.join(&Entrant::new(2, 40, 0));
        game.play(&mut ScriptedSource::default(), &mut NullReporter);

        let powers: Vec<_> = game.survivors().iter().map(|e| e.power()).collect();
        assert_eq!(powers, vec![20, 40]);
        assert_eq!(game.stats().unwrap().deaths, 2);
    }

    #[test]
    fn test_team_two_loses() {
        let mut game = with_powers(&[50, 10, 50]);
        game.play(&mut ScriptedSource::default(), &mut NullReporter);

        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_tie_spares_everyone() {
        let mut game = with_powers(&[25, 25, 30, 30]);
        let mut out = BufferReporter::new();

        assert_eq!(game.play(&mut ScriptedSource::default(), &mut out), RoundOutcome::Draw);
        assert_eq!(game.survivors().len(), 4);
        assert_eq!(game.stats().unwrap().deaths, 0);
        assert!(out.contains("It's a tie!"));
    }

    #[test]
    fn test_insufficient() {
        let mut game = with_powers(&[10]);
        let outcome = game.play(&mut ScriptedSource::default(), &mut NullReporter);

        assert!(matches!(outcome, RoundOutcome::InsufficientPlayers { .. }));
        assert_eq!(game.powers(), None);
        assert_eq!(game.survivors().len(), 1);
    }
}

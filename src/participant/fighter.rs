//! Squid Game fighter.

use serde::{Deserialize, Serialize};

use crate::core::{Entrant, RandomSource, Reporter};

use super::Participant;

/// Attack or defend, chosen by a coin flip each confrontation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Posture {
    Attack,
    Defend,
}

/// Success odds for the final fight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FightOdds {
    /// Success chance before ability and posture.
    pub base: f64,
    /// Subtracted when attacking.
    pub attack_offset: f64,
    /// Added when defending.
    pub defend_offset: f64,
}

impl Default for FightOdds {
    fn default() -> Self {
        Self {
            base: 0.4,
            attack_offset: 0.1,
            defend_offset: 0.05,
        }
    }
}

/// Participant in the last-one-standing fight.
#[derive(Clone, Debug)]
pub struct Fighter {
    entrant: Entrant,
    odds: FightOdds,
}

impl Fighter {
    #[must_use]
    pub fn new(entrant: Entrant, odds: FightOdds) -> Self {
        Self { entrant, odds }
    }

    /// `base + (agility * 0.5 + fearlessness * 0.5) / 200`, shifted by posture.
    #[must_use]
    pub fn success_probability(&self, posture: Posture) -> f64 {
        let bonus = (f64::from(self.entrant.agility) * 0.5 + f64::from(self.entrant.fearlessness) * 0.5) / 200.0;
        let p = self.odds.base + bonus;
        match posture {
            Posture::Attack => p - self.odds.attack_offset,
            Posture::Defend => p + self.odds.defend_offset,
        }
    }

    /// Whether any posture leaves room for a failed roll.
    #[must_use]
    pub fn can_fail(&self) -> bool {
        self.success_probability(Posture::Attack) < 1.0 || self.success_probability(Posture::Defend) < 1.0
    }
}

impl Participant for Fighter {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "was eliminated in the Squid Game."
    }

    fn survives(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> bool {
        let posture = if rng.coin_flip() { Posture::Attack } else { Posture::Defend };
        let success = self.success_probability(posture);
        let roll = rng.next_probability();
        let survived = roll < success;

        reporter.line(&format!(
            "Player #{} {} (success prob : {:.3}, roll : {:.3}) -> {}",
            self.entrant.number,
            match posture {
                Posture::Attack => "attacks",
                Posture::Defend => "defends",
            },
            success,
            roll,
            if survived { "SURVIVED" } else { "FAILED" },
        ));

        survived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BufferReporter, NullReporter, ScriptedSource};

    #[test]
    fn test_success_probability() {
        let fighter = Fighter::new(Entrant::new(1, 100, 100), FightOdds::default());
        // 0.4 + 100 / 200 = 0.9
        assert!((fighter.success_probability(Posture::Attack) - 0.8).abs() < 1e-9);
        assert!((fighter.success_probability(Posture::Defend) - 0.95).abs() < 1e-9);

        let weak = Fighter::new(Entrant::new(2, 0, 0), FightOdds::default());
        assert!((weak.success_probability(Posture::Attack) - 0.3).abs() < 1e-9);
        assert!((weak.success_probability(Posture::Defend) - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_can_fail() {
        let fighter = Fighter::new(Entrant::new(1, 100, 100), FightOdds::default());
        assert!(fighter.can_fail());

        let sure = FightOdds {
            base: 1.0,
            attack_offset: 0.0,
            defend_offset: 0.0,
        };
        assert!(!Fighter::new(Entrant::new(2, 0, 0), sure).can_fail());
    }

    #[test]
    fn test_attack_roll() {
        let mut fighter = Fighter::new(Entrant::new(3, 0, 0), FightOdds::default());
        let mut out = BufferReporter::new();

        // Attack (0.1 < 0.5), roll 0.29 < 0.3: survives.
        let mut rng = ScriptedSource::new(vec![0.1, 0.29]);
        assert!(fighter.survives(&mut rng, &mut out));
        assert!(out.contains("Player #3 attacks"));
        assert!(out.contains("SURVIVED"));

        // Attack, roll 0.31: fails.
        let mut rng = ScriptedSource::new(vec![0.1, 0.31]);
        assert!(!fighter.survives(&mut rng, &mut NullReporter));
    }

    #[test]
    fn test_defend_roll() {
        let mut fighter = Fighter::new(Entrant::new(3, 0, 0), FightOdds::default());
        let mut out = BufferReporter::new();

        // Defend (0.7 >= 0.5), roll 0.44 < 0.45: survives.
        let mut rng = ScriptedSource::new(vec![0.7, 0.44]);
        assert!(fighter.survives(&mut rng, &mut out));
        assert!(out.contains("defends"));
    }
}

//! Tournament-wide participant identity.
//!
//! An `Entrant` is the plain value handed from one round to the next. Rounds
//! wrap it into their own participant variant on `join` and hand copies back
//! out through `survivors`, so nothing is shared across rounds.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Identity plus the two ability scalars.
///
/// `power` is derived, never stored, so it always equals
/// `agility + fearlessness`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    /// Player number, unique within a tournament.
    pub number: u32,
    /// Speed and reflexes.
    pub agility: u32,
    /// Willingness to take risks.
    pub fearlessness: u32,
}

impl Entrant {
    /// Create an entrant with explicit abilities.
    #[must_use]
    pub const fn new(number: u32, agility: u32, fearlessness: u32) -> Self {
        Self {
            number,
            agility,
            fearlessness,
        }
    }

    /// Create an entrant with abilities drawn from `rng`.
    ///
    /// Agility is drawn first, then fearlessness.
    pub fn random(number: u32, rng: &mut dyn RandomSource) -> Self {
        let agility = rng.next_ability();
        let fearlessness = rng.next_ability();
        Self::new(number, agility, fearlessness)
    }

    /// Create `count` entrants numbered from 1.
    ///
    /// ```
    /// use rust_rounds::core::{Entrant, GameRng};
    ///
    /// let mut rng = GameRng::new(1);
    /// let field = Entrant::field(5, &mut rng);
    /// assert_eq!(field.len(), 5);
    /// assert_eq!(field[0].number, 1);
    /// assert_eq!(field[4].number, 5);
    /// ```
    pub fn field(count: u32, rng: &mut dyn RandomSource) -> Vec<Self> {
        (1..=count).map(|number| Self::random(number, rng)).collect()
    }

    /// `agility + fearlessness`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn power(&self) -> u32 {
        self.agility.saturating_add(self.fearlessness)
    }
}

impl std::fmt::Display for Entrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player #{}({},{})", self.number, self.agility, self.fearlessness)
    }
}

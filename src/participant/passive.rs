//! Variants whose fate is decided entirely by their round.
//!
//! These keep the default `survives`, which always returns `true`; the round
//! compares powers, walks the bridge, or draws marbles on their behalf.

use crate::core::Entrant;

use super::Participant;

/// Tug of War team member. Contributes `power` to its team.
#[derive(Clone, Debug)]
pub struct TeamMember {
    entrant: Entrant,
}

impl TeamMember {
    #[must_use]
    pub fn new(entrant: Entrant) -> Self {
        Self { entrant }
    }
}

impl Participant for TeamMember {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "fell into the water and died."
    }
}

/// Glass Bridge walker.
#[derive(Clone, Debug)]
pub struct BridgeWalker {
    entrant: Entrant,
}

impl BridgeWalker {
    #[must_use]
    pub fn new(entrant: Entrant) -> Self {
        Self { entrant }
    }
}

impl Participant for BridgeWalker {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "fell into the water and died."
    }
}

/// Marbles player, paired for an odd/even guess.
#[derive(Clone, Debug)]
pub struct MarblePlayer {
    entrant: Entrant,
}

impl MarblePlayer {
    #[must_use]
    pub fn new(entrant: Entrant) -> Self {
        Self { entrant }
    }
}

impl Participant for MarblePlayer {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "lost at marbles and died."
    }
}

/// Ddakji player, paired for a power comparison.
#[derive(Clone, Debug)]
pub struct DdakjiPlayer {
    entrant: Entrant,
}

impl DdakjiPlayer {
    #[must_use]
    pub fn new(entrant: Entrant) -> Self {
        Self { entrant }
    }
}

impl Participant for DdakjiPlayer {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "lost at Ddakji."
    }
}

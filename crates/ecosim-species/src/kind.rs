//! The three fixed trophic tiers.

use serde::{Deserialize, Serialize};

/// Trophic tier of a species.
///
/// The set is closed: every species is exactly one of these, and the
/// ecosystem keeps one collection per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesKind {
    /// Primary producer. Reproduces unconditionally every day.
    Plant,
    /// Feeds on the plant tier.
    Herbivore,
    /// Feeds on the herbivore tier.
    Carnivore,
}

impl SpeciesKind {
    /// All tiers in the order the daily step evaluates them.
    pub const ALL: [Self; 3] = [Self::Plant, Self::Herbivore, Self::Carnivore];

    /// The lowercase tag used in persisted documents and config files.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Herbivore => "herbivore",
            Self::Carnivore => "carnivore",
        }
    }

    /// Parse a tier tag, case-insensitively.
    ///
    /// Returns `None` for anything that is not one of the three tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Whether species of this tier forage (and so carry foraging traits).
    pub const fn forages(self) -> bool {
        !matches!(self, Self::Plant)
    }
}

impl core::fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

//! Tag-based species descriptions, as written in configuration files.

use serde::Deserialize;

use crate::kind::SpeciesKind;
use crate::species::{Carnivore, Herbivore, Plant, Species};

/// A species described by a free-form tier tag.
///
/// Traits a tier does not use are ignored; traits a tier needs but the seed
/// omits default to zero. The tag is kept as a string so that an unknown
/// tier can be skipped instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesSeed {
    /// Display name.
    pub name: String,
    /// Tier tag (`plant`, `herbivore`, `carnivore`).
    pub kind: String,
    /// Per-day growth factor.
    pub reproduction_rate: f64,
    /// Foraging efficiency (animal tiers).
    #[serde(default)]
    pub search_capacity: f64,
    /// Consumption-rate multiplier (animal tiers).
    #[serde(default)]
    pub digestion_speed: f64,
    /// Hunting-success multiplier (carnivores).
    #[serde(default)]
    pub hunt_effectiveness: f64,
    /// Starting population. Construction uses 1 when absent.
    #[serde(default)]
    pub population: Option<f64>,
}

impl SpeciesSeed {
    /// Build the species this seed describes.
    ///
    /// Returns `None` when `kind` is not a recognized tier tag.
    pub fn build(&self) -> Option<Species> {
        let mut species: Species = match SpeciesKind::from_tag(&self.kind)? {
            SpeciesKind::Plant => Plant::new(self.name.clone(), self.reproduction_rate).into(),
            SpeciesKind::Herbivore => Herbivore::new(
                self.name.clone(),
                self.reproduction_rate,
                self.search_capacity,
                self.digestion_speed,
            )
            .into(),
            SpeciesKind::Carnivore => Carnivore::new(
                self.name.clone(),
                self.reproduction_rate,
                self.search_capacity,
                self.digestion_speed,
                self.hunt_effectiveness,
            )
            .into(),
        };
        if let Some(population) = self.population {
            species.core_mut().population = population;
        }
        Some(species)
    }
}

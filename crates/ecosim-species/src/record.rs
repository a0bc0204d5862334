//! Persisted per-tier schemas.
//!
//! Each tier has one explicit record type carrying every field of the
//! in-memory species, with the camelCase names used in saved documents:
//!
//! | tier      | fields                                                        |
//! |-----------|---------------------------------------------------------------|
//! | plant     | name, kind, reproductionRate, population                      |
//! | herbivore | ... + searchCapacity, digestionSpeed                          |
//! | carnivore | ... + searchCapacity, digestionSpeed, huntEffectiveness       |
//!
//! Restoring goes through the tier constructor first (which resets the
//! population to 1) and then overwrites the population with the stored value.
//!
//! `kind` is written on save and ignored on load. The array a record sits in
//! decides its tier, so a missing, unknown or mismatched tag still restores
//! the record into that array's tier and is re-saved with the correct tag.

use serde::{Deserialize, Serialize};

use crate::kind::SpeciesKind;
use crate::species::{Carnivore, Herbivore, Plant};

/// Saved form of a [`Plant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Display name.
    pub name: String,
    /// Tier tag as written on save. Ignored on load.
    #[serde(skip_deserializing, default = "plant_kind")]
    pub kind: SpeciesKind,
    /// Per-day growth factor.
    pub reproduction_rate: f64,
    /// Population at save time.
    pub population: f64,
}

/// Saved form of a [`Herbivore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerbivoreRecord {
    /// Display name.
    pub name: String,
    /// Tier tag as written on save. Ignored on load.
    #[serde(skip_deserializing, default = "herbivore_kind")]
    pub kind: SpeciesKind,
    /// Per-day growth factor.
    pub reproduction_rate: f64,
    /// Population at save time.
    pub population: f64,
    /// Foraging efficiency.
    pub search_capacity: f64,
    /// Consumption-rate multiplier.
    pub digestion_speed: f64,
}

/// Saved form of a [`Carnivore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarnivoreRecord {
    /// Display name.
    pub name: String,
    /// Tier tag as written on save. Ignored on load.
    #[serde(skip_deserializing, default = "carnivore_kind")]
    pub kind: SpeciesKind,
    /// Per-day growth factor.
    pub reproduction_rate: f64,
    /// Population at save time.
    pub population: f64,
    /// Foraging efficiency.
    pub search_capacity: f64,
    /// Consumption-rate multiplier.
    pub digestion_speed: f64,
    /// Hunting-success multiplier.
    pub hunt_effectiveness: f64,
}

const fn plant_kind() -> SpeciesKind {
    SpeciesKind::Plant
}

const fn herbivore_kind() -> SpeciesKind {
    SpeciesKind::Herbivore
}

const fn carnivore_kind() -> SpeciesKind {
    SpeciesKind::Carnivore
}

impl From<&Plant> for PlantRecord {
    fn from(plant: &Plant) -> Self {
        Self {
            name: plant.core.name.clone(),
            kind: SpeciesKind::Plant,
            reproduction_rate: plant.core.reproduction_rate,
            population: plant.core.population,
        }
    }
}

impl From<&Herbivore> for HerbivoreRecord {
    fn from(herbivore: &Herbivore) -> Self {
        Self {
            name: herbivore.core.name.clone(),
            kind: SpeciesKind::Herbivore,
            reproduction_rate: herbivore.core.reproduction_rate,
            population: herbivore.core.population,
            search_capacity: herbivore.search_capacity,
            digestion_speed: herbivore.digestion_speed,
        }
    }
}

impl From<&Carnivore> for CarnivoreRecord {
    fn from(carnivore: &Carnivore) -> Self {
        Self {
            name: carnivore.core.name.clone(),
            kind: SpeciesKind::Carnivore,
            reproduction_rate: carnivore.core.reproduction_rate,
            population: carnivore.core.population,
            search_capacity: carnivore.search_capacity,
            digestion_speed: carnivore.digestion_speed,
            hunt_effectiveness: carnivore.hunt_effectiveness,
        }
    }
}

impl PlantRecord {
    /// Name of the first numeric field that is NaN or infinite.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("reproductionRate", self.reproduction_rate),
            ("population", self.population),
        ]
        .into_iter()
        .find_map(|(field, value)| (!value.is_finite()).then_some(field))
    }

    /// Rebuild the plant: construct, then restore the stored population.
    pub fn into_species(self) -> Plant {
        let mut plant = Plant::new(self.name, self.reproduction_rate);
        plant.core.population = self.population;
        plant
    }
}

impl HerbivoreRecord {
    /// Name of the first numeric field that is NaN or infinite.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("reproductionRate", self.reproduction_rate),
            ("population", self.population),
            ("searchCapacity", self.search_capacity),
            ("digestionSpeed", self.digestion_speed),
        ]
        .into_iter()
        .find_map(|(field, value)| (!value.is_finite()).then_some(field))
    }

    /// Rebuild the herbivore: construct, then restore the stored population.
    pub fn into_species(self) -> Herbivore {
        let mut herbivore = Herbivore::new(
            self.name,
            self.reproduction_rate,
            self.search_capacity,
            self.digestion_speed,
        );
        herbivore.core.population = self.population;
        herbivore
    }
}

impl CarnivoreRecord {
    /// Name of the first numeric field that is NaN or infinite.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("reproductionRate", self.reproduction_rate),
            ("population", self.population),
            ("searchCapacity", self.search_capacity),
            ("digestionSpeed", self.digestion_speed),
            ("huntEffectiveness", self.hunt_effectiveness),
        ]
        .into_iter()
        .find_map(|(field, value)| (!value.is_finite()).then_some(field))
    }

    /// Rebuild the carnivore: construct, then restore the stored population.
    pub fn into_species(self) -> Carnivore {
        let mut carnivore = Carnivore::new(
            self.name,
            self.reproduction_rate,
            self.search_capacity,
            self.digestion_speed,
            self.hunt_effectiveness,
        );
        carnivore.core.population = self.population;
        carnivore
    }
}

//! Species tiers for the Ecosim ecosystem model.
//!
//! A species is a population-level record (not an individual) belonging to
//! one of three fixed trophic tiers: plants, herbivores, and carnivores.
//!
//! # Modules
//!
//! - [`kind`] -- The closed [`SpeciesKind`] tier tag.
//! - [`species`] -- Per-tier records, reproduction, and the [`Forager`]
//!   trait for the animal tiers.
//! - [`record`] -- Explicit per-tier schemas used by saved documents.
//! - [`seed`] -- Tag-based descriptions read from configuration.

pub mod kind;
pub mod record;
pub mod seed;
pub mod species;

// Re-export primary types at crate root.
pub use kind::SpeciesKind;
pub use record::{CarnivoreRecord, HerbivoreRecord, PlantRecord};
pub use seed::SpeciesSeed;
pub use species::{
    Carnivore, Forager, Herbivore, INITIAL_POPULATION, Plant, Species, SpeciesCore,
};

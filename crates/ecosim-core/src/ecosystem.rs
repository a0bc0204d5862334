//! The ecosystem: one ordered collection per trophic tier.
//!
//! Species are admitted through [`Ecosystem::add_species`], which routes each
//! record into the collection for its tier. Insertion order is kept and is
//! the order the daily step visits species in. Species are never moved
//! between collections or removed individually.

use ecosim_species::{Carnivore, Herbivore, Plant, Species, SpeciesKind, SpeciesSeed};
use tracing::debug;

/// Three homogeneous, insertion-ordered collections of species.
///
/// Not synchronized. Callers must not mutate one ecosystem from several
/// threads at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ecosystem {
    pub(crate) plants: Vec<Plant>,
    pub(crate) herbivores: Vec<Herbivore>,
    pub(crate) carnivores: Vec<Carnivore>,
}

impl Ecosystem {
    /// Create an empty ecosystem.
    pub const fn new() -> Self {
        Self {
            plants: Vec::new(),
            herbivores: Vec::new(),
            carnivores: Vec::new(),
        }
    }

    /// Append a species to the collection for its tier.
    pub fn add_species(&mut self, species: impl Into<Species>) {
        match species.into() {
            Species::Plant(plant) => self.plants.push(plant),
            Species::Herbivore(herbivore) => self.herbivores.push(herbivore),
            Species::Carnivore(carnivore) => self.carnivores.push(carnivore),
        }
    }

    /// Append the species described by a tag-based seed.
    ///
    /// A seed whose tier tag is not recognized is dropped without error.
    pub fn add_seed(&mut self, seed: &SpeciesSeed) {
        if let Some(species) = seed.build() {
            self.add_species(species);
        } else {
            debug!(species = %seed.name, tag = %seed.kind, "Unrecognized species kind, skipped");
        }
    }

    /// Plants in insertion order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Herbivores in insertion order.
    pub fn herbivores(&self) -> &[Herbivore] {
        &self.herbivores
    }

    /// Carnivores in insertion order.
    pub fn carnivores(&self) -> &[Carnivore] {
        &self.carnivores
    }

    /// Total number of species across all tiers.
    pub fn species_count(&self) -> usize {
        self.plants
            .len()
            .saturating_add(self.herbivores.len())
            .saturating_add(self.carnivores.len())
    }

    /// Number of species in one tier.
    pub fn tier_len(&self, kind: SpeciesKind) -> usize {
        match kind {
            SpeciesKind::Plant => self.plants.len(),
            SpeciesKind::Herbivore => self.herbivores.len(),
            SpeciesKind::Carnivore => self.carnivores.len(),
        }
    }

    /// Whether every tier is empty.
    pub fn is_empty(&self) -> bool {
        self.species_count() == 0
    }

    /// Sum of plant populations.
    pub fn plant_population(&self) -> f64 {
        self.plants.iter().map(|p| p.core.population).sum()
    }

    /// Sum of herbivore populations.
    pub fn herbivore_population(&self) -> f64 {
        self.herbivores.iter().map(|h| h.core.population).sum()
    }

    /// Sum of carnivore populations.
    pub fn carnivore_population(&self) -> f64 {
        self.carnivores.iter().map(|c| c.core.population).sum()
    }

    /// Sum of populations in one tier.
    pub fn tier_population(&self, kind: SpeciesKind) -> f64 {
        match kind {
            SpeciesKind::Plant => self.plant_population(),
            SpeciesKind::Herbivore => self.herbivore_population(),
            SpeciesKind::Carnivore => self.carnivore_population(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ecosystem_is_empty() {
        let eco = Ecosystem::new();
        assert!(eco.is_empty());
        assert_eq!(eco.species_count(), 0);
        assert!(eco.plant_population().abs() < f64::EPSILON);
    }

    #[test]
    fn add_species_routes_by_tier() {
        let mut eco = Ecosystem::new();
        eco.add_species(Plant::new("grass", 0.5));
        eco.add_species(Herbivore::new("rabbit", 0.2, 0.1, 0.1));
        eco.add_species(Carnivore::new("fox", 0.1, 0.3, 0.2, 0.5));
        eco.add_species(Plant::new("clover", 0.3));

        assert_eq!(eco.tier_len(SpeciesKind::Plant), 2);
        assert_eq!(eco.tier_len(SpeciesKind::Herbivore), 1);
        assert_eq!(eco.tier_len(SpeciesKind::Carnivore), 1);
        assert_eq!(eco.species_count(), 4);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut eco = Ecosystem::new();
        for name in ["a", "b", "c"] {
            eco.add_species(Plant::new(name, 0.1));
        }
        let names: Vec<&str> = eco.plants().iter().map(|p| p.core.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut eco = Ecosystem::new();
        eco.add_species(Plant::new("grass", 0.1));
        eco.add_species(Plant::new("grass", 0.1));
        assert_eq!(eco.plants().len(), 2);
    }

    #[test]
    fn unrecognized_seed_is_silently_dropped() {
        let mut eco = Ecosystem::new();
        let seed = SpeciesSeed {
            name: "mushroom".to_owned(),
            kind: "fungus".to_owned(),
            reproduction_rate: 0.3,
            search_capacity: 0.0,
            digestion_speed: 0.0,
            hunt_effectiveness: 0.0,
            population: None,
        };
        eco.add_seed(&seed);
        assert!(eco.is_empty());
    }

    #[test]
    fn recognized_seed_is_admitted() {
        let mut eco = Ecosystem::new();
        let seed = SpeciesSeed {
            name: "rabbit".to_owned(),
            kind: "herbivore".to_owned(),
            reproduction_rate: 0.2,
            search_capacity: 0.1,
            digestion_speed: 0.1,
            hunt_effectiveness: 0.0,
            population: Some(10.0),
        };
        eco.add_seed(&seed);
        assert_eq!(eco.herbivores().len(), 1);
        assert!((eco.herbivore_population() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn tier_population_sums_members() {
        let mut eco = Ecosystem::new();
        let mut a = Plant::new("a", 0.1);
        a.core.population = 3.0;
        let mut b = Plant::new("b", 0.1);
        b.core.population = 4.5;
        eco.add_species(a);
        eco.add_species(b);
        assert!((eco.tier_population(SpeciesKind::Plant) - 7.5).abs() < 1e-9);
        assert!(eco.tier_population(SpeciesKind::Carnivore).abs() < f64::EPSILON);
    }
}

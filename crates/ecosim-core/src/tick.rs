//! The daily step: three sequential passes in trophic order.
//!
//! 1. **Plants** -- every plant reproduces. Plants never starve.
//!
//! 2. **Herbivores** -- the food pool is the total plant population *after*
//!    the plant pass. Each herbivore sees the whole pool (there is no
//!    depletion between herbivores). If its consumption from the pool is
//!    positive it reproduces, otherwise its population decays to
//!    [`STARVATION_SURVIVAL`] of its value.
//!
//! 3. **Carnivores** -- same rule, with the herbivore total *after* the
//!    herbivore pass as the prey pool.
//!
//! Any positive consumption, however small, triggers full reproduction;
//! there is no partial regime. A tier's [`Forager::foraging_yield`] is not
//! consulted here.

use ecosim_species::Forager;
use tracing::debug;

use crate::ecosystem::Ecosystem;

/// Fraction of a population that survives a day without food.
pub const STARVATION_SURVIVAL: f64 = 0.9;

/// Observational summary of one daily step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DaySummary {
    /// Total plant population after the step.
    pub plant_population: f64,
    /// Total herbivore population after the step.
    pub herbivore_population: f64,
    /// Total carnivore population after the step.
    pub carnivore_population: f64,
    /// Herbivore species that ate and reproduced.
    pub herbivores_fed: usize,
    /// Herbivore species that found nothing and decayed.
    pub herbivores_starved: usize,
    /// Carnivore species that ate and reproduced.
    pub carnivores_fed: usize,
    /// Carnivore species that found nothing and decayed.
    pub carnivores_starved: usize,
}

/// Fed/starved tally for one animal tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FeedingOutcome {
    fed: usize,
    starved: usize,
}

impl Ecosystem {
    /// Advance the ecosystem by one day.
    pub fn simulate_day(&mut self) -> DaySummary {
        for plant in &mut self.plants {
            plant.reproduce();
        }

        let food_available = self.plant_population();
        let herbivores = feed_tier(&mut self.herbivores, food_available);

        let prey_available = self.herbivore_population();
        let carnivores = feed_tier(&mut self.carnivores, prey_available);

        let summary = DaySummary {
            plant_population: food_available,
            herbivore_population: prey_available,
            carnivore_population: self.carnivore_population(),
            herbivores_fed: herbivores.fed,
            herbivores_starved: herbivores.starved,
            carnivores_fed: carnivores.fed,
            carnivores_starved: carnivores.starved,
        };

        debug!(
            plants = summary.plant_population,
            herbivores = summary.herbivore_population,
            carnivores = summary.carnivore_population,
            herbivores_starved = summary.herbivores_starved,
            carnivores_starved = summary.carnivores_starved,
            "Day simulated"
        );

        summary
    }
}

/// Reproduce-or-decay pass over one animal tier against a shared pool.
fn feed_tier<A: Forager>(animals: &mut [A], pool: f64) -> FeedingOutcome {
    let mut outcome = FeedingOutcome::default();
    for animal in animals {
        if animal.food_consumed(pool) > 0.0 {
            animal.core_mut().reproduce();
            outcome.fed = outcome.fed.saturating_add(1);
        } else {
            animal.core_mut().population *= STARVATION_SURVIVAL;
            outcome.starved = outcome.starved.saturating_add(1);
        }
    }
    outcome
}

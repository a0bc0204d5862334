//! Species records for the three trophic tiers.
//!
//! Every tier shares a [`SpeciesCore`] (name, reproduction rate, population).
//! The two animal tiers add foraging traits and implement [`Forager`], which
//! is the seam the daily step uses to decide between growth and decay.
//!
//! Populations are real numbers. Reproduction adds a growth increment
//! truncated toward zero, so a small population with a small rate can stall
//! (4 individuals at rate 0.1 grow by `trunc(0.4) = 0`). Nothing here clamps
//! a population to zero or to an integer; decay can leave it fractional.

use crate::kind::SpeciesKind;

/// Population assigned to every species on construction.
pub const INITIAL_POPULATION: f64 = 1.0;

// ---------------------------------------------------------------------------
// SpeciesCore
// ---------------------------------------------------------------------------

/// Fields shared by every tier.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesCore {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Fractional per-day growth factor. Caller-supplied, unvalidated.
    pub reproduction_rate: f64,
    /// Current population. May become fractional through decay.
    pub population: f64,
}

impl SpeciesCore {
    /// Create a core record with [`INITIAL_POPULATION`].
    pub fn new(name: impl Into<String>, reproduction_rate: f64) -> Self {
        Self {
            name: name.into(),
            reproduction_rate,
            population: INITIAL_POPULATION,
        }
    }

    /// Grow the population by `trunc(population * reproduction_rate)`.
    ///
    /// Returns the increment that was added (possibly zero).
    pub fn reproduce(&mut self) -> f64 {
        let increment = (self.population * self.reproduction_rate).trunc();
        self.population += increment;
        increment
    }
}

// ---------------------------------------------------------------------------
// Forager
// ---------------------------------------------------------------------------

/// Behavior shared by the animal tiers.
pub trait Forager {
    /// Shared record of this animal species.
    fn core(&self) -> &SpeciesCore;

    /// Mutable access to the shared record.
    fn core_mut(&mut self) -> &mut SpeciesCore;

    /// Per-individual capability metric derived only from the species' own
    /// traits.
    ///
    /// This is a standalone query. The daily step does not scale
    /// consumption by it; see [`Forager::food_consumed`].
    fn foraging_yield(&self) -> f64;

    /// Amount of food this species takes from a pool of `food_available`
    /// during the daily step.
    fn food_consumed(&self, food_available: f64) -> f64;
}

// ---------------------------------------------------------------------------
// Plant
// ---------------------------------------------------------------------------

/// A producer species.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    /// Shared fields.
    pub core: SpeciesCore,
}

impl Plant {
    /// Create a plant species with population 1.
    pub fn new(name: impl Into<String>, reproduction_rate: f64) -> Self {
        Self {
            core: SpeciesCore::new(name, reproduction_rate),
        }
    }

    /// See [`SpeciesCore::reproduce`].
    pub fn reproduce(&mut self) -> f64 {
        self.core.reproduce()
    }
}

// ---------------------------------------------------------------------------
// Herbivore
// ---------------------------------------------------------------------------

/// A plant-eating species.
#[derive(Debug, Clone, PartialEq)]
pub struct Herbivore {
    /// Shared fields.
    pub core: SpeciesCore,
    /// Foraging efficiency.
    pub search_capacity: f64,
    /// Consumption-rate multiplier.
    pub digestion_speed: f64,
}

impl Herbivore {
    /// Create a herbivore species with population 1.
    pub fn new(
        name: impl Into<String>,
        reproduction_rate: f64,
        search_capacity: f64,
        digestion_speed: f64,
    ) -> Self {
        Self {
            core: SpeciesCore::new(name, reproduction_rate),
            search_capacity,
            digestion_speed,
        }
    }

    /// See [`SpeciesCore::reproduce`].
    pub fn reproduce(&mut self) -> f64 {
        self.core.reproduce()
    }
}

impl Forager for Herbivore {
    fn core(&self) -> &SpeciesCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeciesCore {
        &mut self.core
    }

    /// `search_capacity * digestion_speed`.
    fn foraging_yield(&self) -> f64 {
        self.search_capacity * self.digestion_speed
    }

    fn food_consumed(&self, food_available: f64) -> f64 {
        food_available * self.search_capacity * self.digestion_speed
    }
}

// ---------------------------------------------------------------------------
// Carnivore
// ---------------------------------------------------------------------------

/// A herbivore-hunting species.
#[derive(Debug, Clone, PartialEq)]
pub struct Carnivore {
    /// Shared fields.
    pub core: SpeciesCore,
    /// Foraging efficiency.
    pub search_capacity: f64,
    /// Consumption-rate multiplier.
    pub digestion_speed: f64,
    /// Hunting-success multiplier.
    pub hunt_effectiveness: f64,
}

impl Carnivore {
    /// Create a carnivore species with population 1.
    pub fn new(
        name: impl Into<String>,
        reproduction_rate: f64,
        search_capacity: f64,
        digestion_speed: f64,
        hunt_effectiveness: f64,
    ) -> Self {
        Self {
            core: SpeciesCore::new(name, reproduction_rate),
            search_capacity,
            digestion_speed,
            hunt_effectiveness,
        }
    }

    /// See [`SpeciesCore::reproduce`].
    pub fn reproduce(&mut self) -> f64 {
        self.core.reproduce()
    }
}

impl Forager for Carnivore {
    fn core(&self) -> &SpeciesCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SpeciesCore {
        &mut self.core
    }

    /// `search_capacity * hunt_effectiveness * digestion_speed`.
    fn foraging_yield(&self) -> f64 {
        self.search_capacity * self.hunt_effectiveness * self.digestion_speed
    }

    fn food_consumed(&self, prey_available: f64) -> f64 {
        prey_available * self.search_capacity * self.hunt_effectiveness * self.digestion_speed
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// A species of any tier.
#[derive(Debug, Clone, PartialEq)]
pub enum Species {
    /// Producer tier.
    Plant(Plant),
    /// Plant-eating tier.
    Herbivore(Herbivore),
    /// Hunting tier.
    Carnivore(Carnivore),
}

impl Species {
    /// The tier tag.
    pub const fn kind(&self) -> SpeciesKind {
        match self {
            Self::Plant(_) => SpeciesKind::Plant,
            Self::Herbivore(_) => SpeciesKind::Herbivore,
            Self::Carnivore(_) => SpeciesKind::Carnivore,
        }
    }

    /// Shared fields.
    pub const fn core(&self) -> &SpeciesCore {
        match self {
            Self::Plant(p) => &p.core,
            Self::Herbivore(h) => &h.core,
            Self::Carnivore(c) => &c.core,
        }
    }

    /// Mutable shared fields.
    pub const fn core_mut(&mut self) -> &mut SpeciesCore {
        match self {
            Self::Plant(p) => &mut p.core,
            Self::Herbivore(h) => &mut h.core,
            Self::Carnivore(c) => &mut c.core,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.core().name
    }

    /// Current population.
    pub const fn population(&self) -> f64 {
        self.core().population
    }

    /// See [`SpeciesCore::reproduce`].
    pub fn reproduce(&mut self) -> f64 {
        self.core_mut().reproduce()
    }

    /// Foraging yield for animal tiers, `None` for plants.
    pub fn foraging_yield(&self) -> Option<f64> {
        match self {
            Self::Plant(_) => None,
            Self::Herbivore(h) => Some(h.foraging_yield()),
            Self::Carnivore(c) => Some(c.foraging_yield()),
        }
    }
}

impl From<Plant> for Species {
    fn from(plant: Plant) -> Self {
        Self::Plant(plant)
    }
}

impl From<Herbivore> for Species {
    fn from(herbivore: Herbivore) -> Self {
        Self::Herbivore(herbivore)
    }
}

impl From<Carnivore> for Species {
    fn from(carnivore: Carnivore) -> Self {
        Self::Carnivore(carnivore)
    }
}

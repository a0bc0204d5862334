//! Integration tests for the daily step and saved-document round trips.
//!
//! These go through the public API only and use real files under the
//! system temp directory.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use std::path::PathBuf;

use ecosim_core::{Ecosystem, FileStorage, PersistError, STARVATION_SURVIVAL, Storage};
use ecosim_species::{Carnivore, Forager, Herbivore, Plant};

fn temp_dir(label: &str) -> PathBuf {
    let unique = format!(
        "ecosim_{label}_{}_{:?}",
        std::process::id(),
        std::thread::current().id(),
    );
    let dir = std::env::temp_dir().join(unique);
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn food_web() -> Ecosystem {
    let mut eco = Ecosystem::new();

    let mut grass = Plant::new("grass", 0.5);
    grass.core.population = 200.0;
    eco.add_species(grass);

    let mut clover = Plant::new("clover", 0.3);
    clover.core.population = 50.0;
    eco.add_species(clover);

    let mut rabbit = Herbivore::new("rabbit", 0.2, 0.1, 0.1);
    rabbit.core.population = 10.0;
    eco.add_species(rabbit);

    let mut fox = Carnivore::new("fox", 0.1, 0.3, 0.2, 0.5);
    fox.core.population = 3.0;
    eco.add_species(fox);

    eco
}

#[test]
fn reproduce_formula_holds_for_every_plant() {
    let mut eco = food_web();
    for _ in 0..10 {
        let before: Vec<(f64, f64)> = eco
            .plants()
            .iter()
            .map(|p| (p.core.population, p.core.reproduction_rate))
            .collect();
        eco.simulate_day();
        for (plant, (p, r)) in eco.plants().iter().zip(before) {
            assert_eq!(plant.core.population, p + (p * r).trunc());
        }
    }
}

#[test]
fn herbivores_decay_exactly_when_plants_are_gone() {
    let mut eco = Ecosystem::new();
    let mut bare = Plant::new("bare", 2.0);
    bare.core.population = 0.0;
    eco.add_species(bare);
    let mut rabbit = Herbivore::new("rabbit", 0.5, 1.0, 1.0);
    rabbit.core.population = 17.0;
    eco.add_species(rabbit);

    eco.simulate_day();
    assert_eq!(eco.herbivores()[0].core.population, STARVATION_SURVIVAL * 17.0);
}

#[test]
fn carnivore_without_prey_decays_once_per_day() {
    let mut eco = Ecosystem::new();
    let mut fox = Carnivore::new("fox", 0.5, 1.0, 1.0, 1.0);
    fox.core.population = 10.0;
    eco.add_species(fox);

    eco.simulate_day();
    assert_eq!(eco.carnivores()[0].core.population, 10.0 * STARVATION_SURVIVAL);
}

#[test]
fn file_round_trip_preserves_fields_and_order() {
    let dir = temp_dir("roundtrip");
    let path = dir.join("eco.json");

    let mut eco = food_web();
    for _ in 0..5 {
        eco.simulate_day();
    }
    eco.save(&path).unwrap();

    let mut restored = Ecosystem::new();
    restored.load(&path).unwrap();
    assert_eq!(restored, eco);

    let names: Vec<&str> = restored
        .plants()
        .iter()
        .map(|p| p.core.name.as_str())
        .collect();
    assert_eq!(names, ["grass", "clover"]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn saved_document_uses_documented_keys() {
    let dir = temp_dir("keys");
    let path = dir.join("eco.json");
    food_web().save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    let herbivore = &value["herbivoros"][0];
    assert_eq!(herbivore["name"], "rabbit");
    assert_eq!(herbivore["kind"], "herbivore");
    assert_eq!(herbivore["reproductionRate"], 0.2);
    assert_eq!(herbivore["population"], 10.0);
    assert_eq!(herbivore["searchCapacity"], 0.1);
    assert_eq!(herbivore["digestionSpeed"], 0.1);

    let carnivore = &value["carnivoros"][0];
    assert_eq!(carnivore["huntEffectiveness"], 0.5);
    assert_eq!(value["plantas"].as_array().map(Vec::len), Some(2));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn loading_twice_duplicates_entries() {
    let dir = temp_dir("twice");
    let path = dir.join("one.json");
    let mut single = Ecosystem::new();
    single.add_species(Plant::new("grass", 0.5));
    single.save(&path).unwrap();

    let mut eco = Ecosystem::new();
    eco.load(&path).unwrap();
    eco.load(&path).unwrap();
    assert_eq!(eco.plants().len(), 2);
    assert_eq!(eco.plants()[0], eco.plants()[1]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn loading_into_populated_ecosystem_appends_after_existing() {
    let dir = temp_dir("append");
    let path = dir.join("web.json");
    food_web().save(&path).unwrap();

    let mut eco = Ecosystem::new();
    eco.add_species(Plant::new("moss", 0.1));
    eco.load(&path).unwrap();

    let names: Vec<&str> = eco.plants().iter().map(|p| p.core.name.as_str()).collect();
    assert_eq!(names, ["moss", "grass", "clover"]);
    assert_eq!(eco.herbivores().len(), 1);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn truncated_file_is_a_serialization_error() {
    let dir = temp_dir("truncated");
    let path = dir.join("bad.json");
    let mut storage = FileStorage::default();
    storage.write(&path, br#"{"plantas": [{"name": "gr"#).unwrap();

    let mut eco = Ecosystem::new();
    let result = eco.load(&path);
    assert!(matches!(result, Err(PersistError::Serialization(_))));
    assert!(eco.is_empty());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = temp_dir("missing");
    let mut eco = Ecosystem::new();
    let result = eco.load(&dir.join("nope.json"));
    assert!(matches!(result, Err(PersistError::Io { .. })));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn foraging_yield_is_independent_of_the_step() {
    let mut eco = food_web();
    let yield_before = eco.herbivores()[0].foraging_yield();
    eco.simulate_day();
    assert_eq!(eco.herbivores()[0].foraging_yield(), yield_before);
}

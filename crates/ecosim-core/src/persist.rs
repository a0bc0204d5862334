//! Saving and restoring the full ecosystem state.
//!
//! The saved form is a single UTF-8 JSON document with exactly three keys,
//! `plantas`, `herbivoros` and `carnivoros`, each an ordered array of flat
//! per-tier records (see [`ecosim_species::record`]).
//!
//! JSON has no representation for NaN or infinity, so saving refuses a
//! species with a non-finite value rather than write a document that cannot
//! be loaded back. Saving overwrites the target. Loading is additive: restored species are
//! appended to whatever the ecosystem already holds, so loading the same
//! document twice duplicates every entry.

use std::path::Path;

use ecosim_species::{CarnivoreRecord, HerbivoreRecord, PlantRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ecosystem::Ecosystem;
use crate::error::PersistError;
use crate::storage::{FileStorage, Storage};

/// On-disk schema of a saved ecosystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcosystemDocument {
    /// Plant tier, in collection order.
    pub plantas: Vec<PlantRecord>,
    /// Herbivore tier, in collection order.
    pub herbivoros: Vec<HerbivoreRecord>,
    /// Carnivore tier, in collection order.
    pub carnivoros: Vec<CarnivoreRecord>,
}

impl Ecosystem {
    /// Snapshot every species into a document.
    pub fn to_document(&self) -> EcosystemDocument {
        EcosystemDocument {
            plantas: self.plants.iter().map(PlantRecord::from).collect(),
            herbivoros: self.herbivores.iter().map(HerbivoreRecord::from).collect(),
            carnivoros: self.carnivores.iter().map(CarnivoreRecord::from).collect(),
        }
    }

    /// Append every species in `document` to the matching collection.
    pub fn extend_from_document(&mut self, document: EcosystemDocument) {
        self.plants
            .extend(document.plantas.into_iter().map(PlantRecord::into_species));
        self.herbivores.extend(
            document
                .herbivoros
                .into_iter()
                .map(HerbivoreRecord::into_species),
        );
        self.carnivores.extend(
            document
                .carnivoros
                .into_iter()
                .map(CarnivoreRecord::into_species),
        );
    }

    /// Encode the ecosystem as a pretty-printed JSON document.
    ///
    /// Fails with [`PersistError::NonFinite`] if any numeric field is NaN or
    /// infinite.
    pub fn to_json(&self) -> Result<String, PersistError> {
        let document = self.to_document();
        check_finite(&document)?;
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Parse a JSON document and append its species.
    ///
    /// Nothing is appended if parsing fails.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), PersistError> {
        let document: EcosystemDocument = serde_json::from_str(json)?;
        self.extend_from_document(document);
        Ok(())
    }

    /// Write the ecosystem to `name` in `storage`, replacing any previous
    /// content.
    pub fn save_to(&self, storage: &mut dyn Storage, name: &Path) -> Result<(), PersistError> {
        let json = self.to_json()?;
        storage
            .write(name, json.as_bytes())
            .map_err(|source| PersistError::Io {
                name: name.display().to_string(),
                source,
            })?;
        info!(
            target_name = %name.display(),
            plants = self.plants.len(),
            herbivores = self.herbivores.len(),
            carnivores = self.carnivores.len(),
            "Ecosystem saved"
        );
        Ok(())
    }

    /// Read `name` from `storage` and append its species.
    pub fn load_from(&mut self, storage: &dyn Storage, name: &Path) -> Result<(), PersistError> {
        let bytes = storage.read(name).map_err(|source| PersistError::Io {
            name: name.display().to_string(),
            source,
        })?;
        let document: EcosystemDocument = serde_json::from_slice(&bytes)?;
        info!(
            source_name = %name.display(),
            plants = document.plantas.len(),
            herbivores = document.herbivoros.len(),
            carnivores = document.carnivoros.len(),
            "Ecosystem loaded"
        );
        self.extend_from_document(document);
        Ok(())
    }

    /// Save to a file path, overwriting it.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        self.save_to(&mut FileStorage::default(), path)
    }

    /// Load from a file path, appending to the current collections.
    pub fn load(&mut self, path: &Path) -> Result<(), PersistError> {
        self.load_from(&FileStorage::default(), path)
    }
}

fn check_finite(document: &EcosystemDocument) -> Result<(), PersistError> {
    let plants = document
        .plantas
        .iter()
        .map(|r| (&r.name, r.non_finite_field()));
    let herbivores = document
        .herbivoros
        .iter()
        .map(|r| (&r.name, r.non_finite_field()));
    let carnivores = document
        .carnivoros
        .iter()
        .map(|r| (&r.name, r.non_finite_field()));

    for (name, field) in plants.chain(herbivores).chain(carnivores) {
        if let Some(field) = field {
            return Err(PersistError::NonFinite {
                name: name.clone(),
                field,
            });
        }
    }
    Ok(())
}

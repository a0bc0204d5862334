//! Configuration loading and typed config structures for the Ecosim model.
//!
//! The canonical configuration lives in `ecosim-config.yaml` at the project
//! root. Every section is optional; missing sections and fields fall back to
//! the defaults below.

use std::path::{Path, PathBuf};

use ecosim_species::SpeciesSeed;
use serde::Deserialize;

use crate::ecosystem::Ecosystem;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Run length and snapshot settings.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Species admitted into a fresh ecosystem at startup.
    #[serde(default)]
    pub species: Vec<SpeciesSeed>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ECOSIM_SNAPSHOT_PATH` overrides `simulation.snapshot_path` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.simulation.apply_env_overrides();
        Ok(config)
    }

    /// Build an ecosystem from the configured species seeds.
    ///
    /// Seeds with an unrecognized kind are skipped.
    pub fn seed_ecosystem(&self) -> Ecosystem {
        let mut ecosystem = Ecosystem::new();
        for seed in &self.species {
            ecosystem.add_seed(seed);
        }
        ecosystem
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable ecosystem name.
    #[serde(default = "default_world_name")]
    pub name: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
        }
    }
}

/// Run length and snapshot settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u64,

    /// Write a snapshot every N days. Zero disables periodic snapshots.
    #[serde(default = "default_snapshot_interval_days")]
    pub snapshot_interval_days: u64,

    /// Where snapshots and the final state are written.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// A saved document to load before running. The configured species
    /// are still admitted first; loading appends.
    #[serde(default)]
    pub resume_from: Option<PathBuf>,
}

impl SimulationBoundsConfig {
    /// Override the snapshot path with `ECOSIM_SNAPSHOT_PATH` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ECOSIM_SNAPSHOT_PATH") {
            self.snapshot_path = PathBuf::from(val);
        }
    }
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            snapshot_interval_days: default_snapshot_interval_days(),
            snapshot_path: default_snapshot_path(),
            resume_from: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_world_name() -> String {
    "Ecosim".to_owned()
}

const fn default_days() -> u64 {
    30
}

const fn default_snapshot_interval_days() -> u64 {
    10
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("ecosystem.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use ecosim_species::SpeciesKind;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.world.name, "Ecosim");
        assert_eq!(config.simulation.days, 30);
        assert_eq!(config.simulation.snapshot_interval_days, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.species.is_empty());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
world:
  name: "Meadow"

simulation:
  days: 5
  snapshot_interval_days: 2
  resume_from: "previous.json"

logging:
  level: "debug"

species:
  - name: grass
    kind: plant
    reproduction_rate: 0.5
    population: 100
  - name: rabbit
    kind: herbivore
    reproduction_rate: 0.2
    search_capacity: 0.1
    digestion_speed: 0.1
  - name: fox
    kind: carnivore
    reproduction_rate: 0.1
    search_capacity: 0.3
    digestion_speed: 0.2
    hunt_effectiveness: 0.5
"#;

        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.world.name, "Meadow");
        assert_eq!(config.simulation.days, 5);
        assert_eq!(config.simulation.snapshot_interval_days, 2);
        assert_eq!(
            config.simulation.resume_from.as_deref(),
            Some(Path::new("previous.json"))
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.species.len(), 3);

        let eco = config.seed_ecosystem();
        assert_eq!(eco.tier_len(SpeciesKind::Plant), 1);
        assert_eq!(eco.tier_len(SpeciesKind::Herbivore), 1);
        assert_eq!(eco.tier_len(SpeciesKind::Carnivore), 1);
        assert!((eco.plant_population() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "simulation:\n  days: 7\n";
        let config = SimulationConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Days is overridden
        assert_eq!(config.simulation.days, 7);
        // Everything else uses defaults
        assert_eq!(config.simulation.snapshot_interval_days, 10);
        assert_eq!(config.world.name, "Ecosim");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn unknown_species_kind_is_skipped_when_seeding() {
        let yaml = r"
species:
  - name: mushroom
    kind: fungus
    reproduction_rate: 0.4
  - name: grass
    kind: plant
    reproduction_rate: 0.5
";
        let config = SimulationConfig::parse(yaml).ok().unwrap_or_default();
        assert_eq!(config.species.len(), 2);
        let eco = config.seed_ecosystem();
        assert_eq!(eco.species_count(), 1);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = SimulationConfig::parse("simulation: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("ecosim-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}

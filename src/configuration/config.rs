//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`WorldConfig`]       – plane extent, also the wrap bounds
//! - [`PhysicsConfig`]     – damping, rest cutoff, overlap correction mode
//! - [`InteractionConfig`] – drag-to-launch scale
//! - [`PopulationConfig`]  – randomly generated bodies added at startup
//! - [`BodyConfig`]        – explicitly placed bodies
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional and falls back to the reference values.
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   width: 1000.0
//!   height: 800.0
//!
//! physics:
//!   damping: 0.8             # acceleration = -velocity * damping
//!   rest_speed_sq: 0.5       # squared speed snapped to zero
//!   correction: "sequential" # or "symmetric"
//!
//! interaction:
//!   launch_scale: 5.0
//!
//! population:
//!   count: 40
//!   radius_min: 5.0
//!   radius_max: 35.0
//!   seed: 42                 # omit for a fresh layout every run
//!
//! bodies:
//!   - x: [ 100.0, 100.0 ]
//!     v: [ 50.0, 0.0 ]
//!     radius: 10.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
pub use crate::simulation::collision::CorrectionMode;
use crate::simulation::params::{
    DEFAULT_DAMPING, DEFAULT_LAUNCH_SCALE, DEFAULT_REST_SPEED_SQ, DEFAULT_WORLD_HEIGHT,
    DEFAULT_WORLD_WIDTH,
};
use crate::simulation::states::DEFAULT_RADIUS;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhysicsConfig {
    pub damping: f64, // linear drag coefficient
    pub rest_speed_sq: f64, // velocity clamp epsilon (squared speed)
    pub correction: CorrectionMode,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            rest_speed_sq: DEFAULT_REST_SPEED_SQ,
            correction: CorrectionMode::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct InteractionConfig {
    pub launch_scale: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            launch_scale: DEFAULT_LAUNCH_SCALE,
        }
    }
}

/// Random bodies generated once at startup
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PopulationConfig {
    pub count: usize,
    pub radius_min: f64, // inclusive
    pub radius_max: f64, // exclusive, unless equal to radius_min
    pub seed: Option<u64>, // deterministic layout when set
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            count: 40,
            radius_min: 5.0,
            radius_max: 35.0,
            seed: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, at rest when omitted
    #[serde(default = "default_radius")]
    pub radius: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub interaction: InteractionConfig,
    pub population: PopulationConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Population-level checks; per-body radius and position are checked by
    /// `BodyStore::create` and the runtime parameters by `Parameters::validate`
    pub fn validate_population(&self) -> Result<(), SimError> {
        let p = &self.population;
        if p.count == 0 {
            return Ok(());
        }
        if !(p.radius_min.is_finite() && p.radius_min > 0.0) {
            return Err(SimError::invalid(format!(
                "population radius_min must be positive and finite, got {}",
                p.radius_min
            )));
        }
        if !(p.radius_max.is_finite() && p.radius_max >= p.radius_min) {
            return Err(SimError::invalid(format!(
                "population radius range [{}, {}) is empty",
                p.radius_min, p.radius_max
            )));
        }
        Ok(())
    }
}

//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the body population (`BodyStore`)
//! - pointer interaction state (`InteractionController`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven one frame
//! at a time by the visualization systems.

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, PopulationConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::interaction::{InteractionController, PointerCommand};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyStore, NVec2};
use crate::simulation::step::{advance, StepReport};

/// Bevy resource representing a fully-initialized simulation
///
/// No process-wide state: every operation goes through this value, so any
/// number of independent simulations can coexist.
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub store: BodyStore,
    pub controller: InteractionController,
}

impl Scenario {
    /// Empty world with the given parameters
    pub fn new(parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            store: BodyStore::new(),
            controller: InteractionController::new(),
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from the world/physics/interaction sections
        let parameters = Parameters {
            world_width: cfg.world.width,
            world_height: cfg.world.height,
            damping: cfg.physics.damping,
            rest_speed_sq: cfg.physics.rest_speed_sq,
            launch_scale: cfg.interaction.launch_scale,
            correction: cfg.physics.correction,
        };
        cfg.validate_population()?;

        let mut scenario = Self::new(parameters)?;
        scenario.store = BodyStore::with_capacity(cfg.bodies.len() + cfg.population.count);

        // Explicit bodies first, so their ids follow file order
        for bc in &cfg.bodies {
            scenario.add_body(bc)?;
        }

        scenario.populate(&cfg.population)?;

        info!(
            "scenario ready: {} bodies in {}x{} world, {:?} correction",
            scenario.store.len(),
            scenario.parameters.world_width,
            scenario.parameters.world_height,
            scenario.parameters.correction
        );

        Ok(scenario)
    }

    fn add_body(&mut self, bc: &BodyConfig) -> Result<usize, SimError> {
        let id = self.store.create(NVec2::new(bc.x[0], bc.x[1]), bc.radius)?;
        let v = NVec2::new(bc.v[0], bc.v[1]);
        if !(v.x.is_finite() && v.y.is_finite()) {
            return Err(SimError::invalid(format!("body {id} has non-finite velocity")));
        }
        if let Some(body) = self.store.get_mut(id) {
            body.velocity = v;
        }
        Ok(id)
    }

    /// Randomly sized and positioned bodies, uniform over the world
    fn populate(&mut self, pop: &PopulationConfig) -> Result<(), SimError> {
        if pop.count == 0 {
            return Ok(());
        }

        let mut rng = match pop.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (w, h) = (self.parameters.world_width, self.parameters.world_height);
        for _ in 0..pop.count {
            let position = NVec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h));
            let radius = if pop.radius_max > pop.radius_min {
                rng.gen_range(pop.radius_min..pop.radius_max)
            } else {
                pop.radius_min
            };
            self.store.create(position, radius)?;
        }
        Ok(())
    }

    /// One frame: pointer commands first, then the physics step
    pub fn frame(&mut self, commands: &[PointerCommand], dt: f64) -> StepReport {
        let Scenario {
            parameters,
            store,
            controller,
        } = self;

        controller.apply(store, parameters, commands);
        advance(store, dt, parameters)
    }
}

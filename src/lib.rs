pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, BodyStore, NVec2};
pub use simulation::params::Parameters;
pub use simulation::integrator::{integrate, integrate_body, wrap_coordinate, wrap_position};
pub use simulation::collision::{
    correct_overlaps, overlaps, resolve_collision, respond, CollisionPair, CorrectionMode,
};
pub use simulation::step::{advance, StepReport};
pub use simulation::interaction::{InteractionController, PointerCommand};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, InteractionConfig, PhysicsConfig, PopulationConfig, ScenarioConfig,
    WorldConfig,
};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_step;

pub mod states;
pub mod params;
pub mod integrator;
pub mod collision;
pub mod step;
pub mod interaction;
pub mod scenario;

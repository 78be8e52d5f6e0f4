//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - world extent used for toroidal wrap,
//! - damping coefficient and the rest-speed cutoff,
//! - launch scale for drag-to-fling,
//! - overlap correction mode

use super::collision::CorrectionMode;
use crate::error::SimError;

pub const DEFAULT_WORLD_WIDTH: f64 = 1000.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 800.0;
pub const DEFAULT_DAMPING: f64 = 0.8;
pub const DEFAULT_REST_SPEED_SQ: f64 = 0.5;
pub const DEFAULT_LAUNCH_SCALE: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub world_width: f64, // wrap extent along x
    pub world_height: f64, // wrap extent along y
    pub damping: f64, // acceleration = -velocity * damping
    pub rest_speed_sq: f64, // squared speed below which velocity snaps to zero
    pub launch_scale: f64, // velocity = launch_scale * (body - release point)
    pub correction: CorrectionMode, // overlap correction strategy
}

impl Parameters {
    /// Check every value the step and the controller divide or wrap by
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.world_width.is_finite() && self.world_width > 0.0) {
            return Err(SimError::invalid(format!(
                "world width must be positive and finite, got {}",
                self.world_width
            )));
        }
        if !(self.world_height.is_finite() && self.world_height > 0.0) {
            return Err(SimError::invalid(format!(
                "world height must be positive and finite, got {}",
                self.world_height
            )));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(SimError::invalid(format!(
                "damping must be non-negative and finite, got {}",
                self.damping
            )));
        }
        if !(self.rest_speed_sq.is_finite() && self.rest_speed_sq >= 0.0) {
            return Err(SimError::invalid(format!(
                "rest speed threshold must be non-negative and finite, got {}",
                self.rest_speed_sq
            )));
        }
        if !self.launch_scale.is_finite() {
            return Err(SimError::invalid(format!(
                "launch scale must be finite, got {}",
                self.launch_scale
            )));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            damping: DEFAULT_DAMPING,
            rest_speed_sq: DEFAULT_REST_SPEED_SQ,
            launch_scale: DEFAULT_LAUNCH_SCALE,
            correction: CorrectionMode::default(),
        }
    }
}

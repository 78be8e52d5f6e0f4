//! Damped explicit-Euler integration with toroidal wrap
//!
//! Each body is advanced independently: the damping acceleration is derived
//! from the current velocity, velocity and position are updated, the position
//! wraps around the world, and near-zero velocities snap to rest.

use super::params::Parameters;
use super::states::{Body, BodyStore, NVec2};

/// Wrap one coordinate into `[0, extent)`.
///
/// A single add/subtract covers every in-frame displacement smaller than the
/// extent; anything further out falls back to `rem_euclid`.
pub fn wrap_coordinate(c: f64, extent: f64) -> f64 {
    if !c.is_finite() {
        return c;
    }

    let mut w = c;
    if w < 0.0 {
        w += extent;
    }
    if w >= extent {
        w -= extent;
    }

    if w < 0.0 || w >= extent {
        w = w.rem_euclid(extent);
        // rem_euclid can round up to `extent` for tiny negative inputs
        if w >= extent {
            w = 0.0;
        }
    }
    w
}

/// Wrap a point into `[0, width) x [0, height)`, independently per axis
pub fn wrap_position(p: NVec2, width: f64, height: f64) -> NVec2 {
    NVec2::new(wrap_coordinate(p.x, width), wrap_coordinate(p.y, height))
}

/// Advance a single body by `dt`
pub fn integrate_body(body: &mut Body, dt: f64, params: &Parameters) {
    // a = -v * k, linear drag
    body.acceleration = -body.velocity * params.damping;
    body.velocity += body.acceleration * dt;
    body.position += body.velocity * dt;

    body.position = wrap_position(body.position, params.world_width, params.world_height);

    if body.velocity.norm_squared() < params.rest_speed_sq {
        body.velocity = NVec2::zeros();
    }
}

/// Advance every body in the store by `dt`, ignoring the others
pub fn integrate(store: &mut BodyStore, dt: f64, params: &Parameters) {
    for body in store.iter_mut() {
        integrate_body(body, dt, params);
    }
}

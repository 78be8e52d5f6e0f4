//! One physics frame over the whole population
//!
//! Fixed order: damping + integration (with wrap and rest clamp), overlap
//! correction, collision response, re-wrap of corrected positions.

use log::trace;

use super::collision::{correct_overlaps, respond};
use super::integrator::{integrate, wrap_position};
use super::params::Parameters;
use super::states::BodyStore;

/// Summary of a single `advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub colliding_pairs: usize, // ordered pairs recorded during correction
    pub responses: usize, // pairs whose velocities were exchanged
}

/// Advance the store by `dt` seconds.
///
/// A non-positive or non-finite `dt` leaves the store untouched.
pub fn advance(store: &mut BodyStore, dt: f64, params: &Parameters) -> StepReport {
    if !(dt.is_finite() && dt > 0.0) || store.is_empty() {
        return StepReport::default();
    }

    integrate(store, dt, params);

    let pairs = correct_overlaps(store, params.correction);
    let responses = respond(store, &pairs);

    // correction may push a body across an edge; the response above still
    // needs the unwrapped centers to get the contact normal right
    if !pairs.is_empty() {
        for body in store.iter_mut() {
            body.position = wrap_position(body.position, params.world_width, params.world_height);
        }
    }

    if !pairs.is_empty() {
        trace!("step dt={dt:.4}: {} colliding pairs, {responses} responses", pairs.len());
    }

    StepReport {
        colliding_pairs: pairs.len(),
        responses,
    }
}

//! Pairwise overlap correction and elastic collision response
//!
//! Detection is a full O(n^2) scan. Correction pushes interpenetrating bodies
//! apart along their center line and records every colliding ordered pair;
//! response then exchanges the normal velocity components of each recorded
//! pair with radius standing in for mass.

use log::warn;
use serde::Deserialize;

use super::states::{Body, BodyStore, NVec2};

/// How interpenetrating pairs are pushed apart
/// `correction: "sequential"` or `correction: "symmetric"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrectionMode {
    #[default]
    #[serde(rename = "sequential")] // every ordered pair in place, second body sees the first one's move
    Sequential,

    #[serde(rename = "symmetric")] // each unordered pair once from a snapshot, equal and opposite moves
    Symmetric,
}

/// An ordered pair of body indices found overlapping during correction
pub type CollisionPair = (usize, usize);

/// Circles touch or interpenetrate
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let r = a.radius + b.radius;
    (a.position - b.position).norm_squared() <= r * r
}

/// Separate overlapping bodies and return the pairs to feed into `respond`
pub fn correct_overlaps(store: &mut BodyStore, mode: CorrectionMode) -> Vec<CollisionPair> {
    match mode {
        CorrectionMode::Sequential => correct_sequential(store),
        CorrectionMode::Symmetric => correct_symmetric(store),
    }
}

/// Visit every ordered pair and move both bodies in place.
///
/// Each unordered pair is seen from both directions, and the second body's
/// correction is computed from the first body's already-moved position.
fn correct_sequential(store: &mut BodyStore) -> Vec<CollisionPair> {
    let n = store.len();
    let mut pairs = Vec::new();

    for i in 0..n {
        for j in 0..n {
            let Some((a, b)) = store.pair_mut(i, j) else {
                continue; // i == j
            };
            if !overlaps(a, b) {
                continue;
            }

            let distance = (a.position - b.position).norm();
            if distance <= 0.0 {
                warn!("bodies {i} and {j} share a center, skipping correction");
                continue;
            }

            // half the penetration depth, non-positive
            let overlap = 0.5 * (distance - a.radius - b.radius);

            let push_a = overlap * (a.position - b.position) / distance;
            a.position -= push_a;
            // uses a's corrected position
            let push_b = overlap * (a.position - b.position) / distance;
            b.position += push_b;

            pairs.push((i, j));
        }
    }

    pairs
}

/// Visit each unordered pair once against a snapshot taken before the pass
/// and apply the summed displacements together.
fn correct_symmetric(store: &mut BodyStore) -> Vec<CollisionPair> {
    let snapshot: Vec<Body> = store.as_slice().to_vec();
    let mut shift = vec![NVec2::zeros(); snapshot.len()];
    let mut pairs = Vec::new();

    for i in 0..snapshot.len() {
        for j in (i + 1)..snapshot.len() {
            let (a, b) = (&snapshot[i], &snapshot[j]);
            if !overlaps(a, b) {
                continue;
            }

            let distance = (a.position - b.position).norm();
            if distance <= 0.0 {
                warn!("bodies {i} and {j} share a center, skipping correction");
                continue;
            }

            let overlap = 0.5 * (distance - a.radius - b.radius);
            let delta = overlap * (a.position - b.position) / distance;
            shift[i] -= delta;
            shift[j] += delta;

            pairs.push((i, j));
        }
    }

    for (body, d) in store.iter_mut().zip(shift.iter()) {
        body.position += *d;
    }

    pairs
}

/// One-dimensional elastic exchange along the line of centers.
///
/// Tangential components pass through untouched. Coincident centers leave
/// both velocities as they were. Returns whether anything was applied.
pub fn resolve_collision(store: &mut BodyStore, i: usize, j: usize) -> bool {
    let Some((a, b)) = store.pair_mut(i, j) else {
        return false;
    };

    let distance = (a.position - b.position).norm();
    if distance <= 0.0 {
        return false;
    }

    let normal = (b.position - a.position) / distance;
    let tangent = NVec2::new(-normal.y, normal.x);

    let tan_a = a.velocity.dot(&tangent);
    let tan_b = b.velocity.dot(&tangent);
    let norm_a = a.velocity.dot(&normal);
    let norm_b = b.velocity.dot(&normal);

    // radius is the mass proxy; positive by construction so the sum never vanishes
    let total = a.radius + b.radius;
    let m1 = (norm_a * (a.radius - b.radius) + 2.0 * b.radius * norm_b) / total;
    let m2 = (norm_b * (b.radius - a.radius) + 2.0 * a.radius * norm_a) / total;

    a.velocity = tangent * tan_a + normal * m1;
    b.velocity = tangent * tan_b + normal * m2;
    true
}

/// Run `resolve_collision` over every recorded pair, in recorded order
pub fn respond(store: &mut BodyStore, pairs: &[CollisionPair]) -> usize {
    pairs
        .iter()
        .filter(|&&(i, j)| resolve_collision(store, i, j))
        .count()
}

//! Core state types for the ball simulation.
//!
//! - `Body`      one circular rigid particle
//! - `BodyStore` the sole owner of the body population, keyed by insertion order
//!
//! Bodies are never removed, so an index handed out by `create` stays valid
//! for the lifetime of the store.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Radius used by `BodyStore::add_default`
pub const DEFAULT_RADIUS: f64 = 15.0;

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2, // plane coordinates
    pub velocity: NVec2, // units / s
    pub acceleration: NVec2, // damping term, overwritten every step
    pub radius: f64, // also the mass proxy in collision response
    pub id: usize, // insertion index
}

impl Body {
    /// True when `point` lies strictly inside the circle
    pub fn contains(&self, point: NVec2) -> bool {
        (point - self.position).norm_squared() < self.radius * self.radius
    }

    pub fn speed_sq(&self) -> f64 {
        self.velocity.norm_squared()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(n),
        }
    }

    /// Append a body at rest and return its id.
    ///
    /// The radius doubles as the mass basis of the collision formulas, so a
    /// non-positive (or non-finite) radius is rejected.
    pub fn create(&mut self, position: NVec2, radius: f64) -> Result<usize, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::invalid(format!(
                "body radius must be positive and finite, got {radius}"
            )));
        }
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(SimError::invalid(format!(
                "body position must be finite, got ({}, {})",
                position.x, position.y
            )));
        }

        let id = self.bodies.len();
        self.bodies.push(Body {
            position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            radius,
            id,
        });
        Ok(id)
    }

    pub fn add_default(&mut self, position: NVec2) -> Result<usize, SimError> {
        self.create(position, DEFAULT_RADIUS)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// First body (in population order) whose circle contains `point`
    pub fn body_at(&self, point: NVec2) -> Option<usize> {
        self.bodies.iter().position(|b| b.contains(point))
    }

    /// Mutable access to two distinct bodies at once
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
        if i == j || i >= self.bodies.len() || j >= self.bodies.len() {
            return None;
        }
        if i < j {
            let (lo, hi) = self.bodies.split_at_mut(j);
            Some((&mut lo[i], &mut hi[0]))
        } else {
            let (lo, hi) = self.bodies.split_at_mut(i);
            Some((&mut hi[0], &mut lo[j]))
        }
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

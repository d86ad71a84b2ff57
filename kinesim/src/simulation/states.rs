//! Core state types for both scenarios.
//!
//! Defines:
//! - `Body` / `BodySet` using `NVec2` (bouncing balls)
//! - `PendulumState` with its `NVec4` state-vector view (double pendulum)
//!
//! The body set owns the spawn cap; the pendulum state carries its own clock `t`.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Vector2, Vector4};
use tracing::debug;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;
pub type NVec4 = Vector4<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // center position
    pub v: NVec2, // velocity, units per tick
    pub radius: f64, // fixed at creation
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        Self { x, v, radius }
    }
}

/// Stable index of a body inside its [`BodySet`], in spawn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Ordered collection of bodies, insertion order = spawn order
#[derive(Debug, Clone)]
pub struct BodySet {
    pub bodies: Vec<Body>,
    cap: usize,
}

impl BodySet {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    /// Append a body unless the set is already at its cap.
    /// A rejected insert leaves the set untouched.
    pub fn insert(&mut self, body: Body) -> Result<BodyHandle, SimError> {
        if self.bodies.len() >= self.cap {
            debug!(cap = self.cap, "spawn rejected, body set full");
            return Err(SimError::CapacityExceeded { cap: self.cap });
        }
        self.bodies.push(body);
        Ok(BodyHandle(self.bodies.len() - 1))
    }
}

/// Generalized coordinates of the double pendulum plus its clock.
/// Angles are measured from the downward vertical and never wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
    pub t: f64,
}

impl PendulumState {
    pub fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> Self {
        Self { theta1, theta2, omega1, omega2, t: 0.0 }
    }

    /// Both arms horizontal, at rest, t = 0
    pub fn resting() -> Self {
        Self::new(FRAC_PI_2, FRAC_PI_2, 0.0, 0.0)
    }

    /// Restart configuration: first arm at `theta1`, second arm horizontal, no motion.
    /// The clock keeps running from `t`.
    pub fn restart(theta1: f64, t: f64) -> Self {
        Self { theta1, theta2: FRAC_PI_2, omega1: 0.0, omega2: 0.0, t }
    }

    /// (theta1, theta2, omega1, omega2)
    pub fn coords(&self) -> NVec4 {
        NVec4::new(self.theta1, self.theta2, self.omega1, self.omega2)
    }

    pub fn from_coords(q: &NVec4, t: f64) -> Self {
        Self { theta1: q[0], theta2: q[1], omega1: q[2], omega2: q[3], t }
    }

    pub fn is_finite(&self) -> bool {
        self.coords().iter().all(|c| c.is_finite()) && self.t.is_finite()
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::resting()
    }
}

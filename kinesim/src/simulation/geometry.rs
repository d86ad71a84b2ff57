//! Shared vector helpers
//!
//! - normal-frame rotation used by the collision resolver
//! - Cartesian endpoints of the pendulum arms
//! - energy / momentum diagnostics for both scenarios

use crate::simulation::params::PendulumParameters;
use crate::simulation::states::{Body, NVec2, PendulumState};

/// Rotate a world-frame vector into the frame whose first axis points along
/// the contact normal (cos, sin of the contact angle)
pub fn to_normal_frame(v: NVec2, cos: f64, sin: f64) -> NVec2 {
    NVec2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}

/// Inverse of [`to_normal_frame`]
pub fn from_normal_frame(v: NVec2, cos: f64, sin: f64) -> NVec2 {
    NVec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

/// Map a pointer position (relative to the pivot) to an angle for `reset_pendulum`
pub fn pointer_angle(x: f64, y: f64) -> f64 {
    y.atan2(x)
}

/// Cartesian positions of the two bobs, pivot at the origin, y up
pub fn pendulum_endpoints(state: &PendulumState, l1: f64, l2: f64) -> (NVec2, NVec2) {
    let p1 = NVec2::new(l1 * state.theta1.sin(), -l1 * state.theta1.cos());
    let p2 = p1 + NVec2::new(l2 * state.theta2.sin(), -l2 * state.theta2.cos());
    (p1, p2)
}

/// Total kinetic energy of the set, unit mass per body
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.v.norm_squared()).sum()
}

/// Total momentum of the set, unit mass per body
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.v)
}

/// Kinetic + potential energy of the point-mass double pendulum.
/// Potential is zero at the pivot height.
pub fn pendulum_energy(state: &PendulumState, p: &PendulumParameters) -> f64 {
    let PendulumState { theta1, theta2, omega1, omega2, .. } = *state;

    let v1_sq = p.l1 * p.l1 * omega1 * omega1;
    let v2_sq = v1_sq
        + p.l2 * p.l2 * omega2 * omega2
        + 2.0 * p.l1 * p.l2 * omega1 * omega2 * (theta1 - theta2).cos();
    let kinetic = 0.5 * p.m1 * v1_sq + 0.5 * p.m2 * v2_sq;

    let y1 = -p.l1 * theta1.cos();
    let y2 = y1 - p.l2 * theta2.cos();
    let potential = p.m1 * p.g * y1 + p.m2 * p.g * y2;

    kinetic + potential
}

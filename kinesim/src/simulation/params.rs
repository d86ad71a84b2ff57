//! Numerical and physical parameters for both scenarios
//!
//! `BallParameters` holds the per-tick settings of the bouncing-ball world:
//! - canvas bounds, gravity per tick and rest threshold,
//! - spawn cap, radius and initial velocity of spawned bodies,
//! - overlap padding used by the collision resolver
//!
//! `PendulumParameters` holds the point masses, rod lengths, gravity and step size

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct BallParameters {
    pub width: f64, // canvas width
    pub height: f64, // canvas height, floor at y = height
    pub gravity: f64, // dy increment per tick
    pub rest_threshold: f64, // |dy| below this on the floor -> dy = 0
    pub overlap_padding: f64, // extra separation past tangency
    pub spawn_cap: usize, // max bodies in the set
    pub radius: f64, // radius of spawned bodies
    pub spawn_velocity: NVec2, // velocity of spawned bodies
}

impl Default for BallParameters {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            gravity: 0.1,
            rest_threshold: 0.1,
            overlap_padding: 1.0,
            spawn_cap: 50,
            radius: 10.0,
            spawn_velocity: NVec2::new(0.0, 2.0),
        }
    }
}

impl BallParameters {
    pub fn validate(&self) -> SimResult<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("radius", self.radius)?;
        non_negative("gravity", self.gravity)?;
        non_negative("rest_threshold", self.rest_threshold)?;
        non_negative("overlap_padding", self.overlap_padding)?;
        if self.spawn_cap == 0 {
            return Err(SimError::invalid("cap", 0.0, "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PendulumParameters {
    pub m1: f64, // mass of the first bob
    pub m2: f64, // mass of the second bob
    pub g: f64, // gravitational acceleration
    pub l1: f64, // first rod length
    pub l2: f64, // second rod length
    pub dt: f64, // fixed step size
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            g: 10.0,
            l1: 1.0,
            l2: 1.0,
            dt: 0.01,
        }
    }
}

impl PendulumParameters {
    /// m1 = 0 is allowed; it is the degenerate case the stepper must carry through.
    pub fn validate(&self) -> SimResult<()> {
        non_negative("m1", self.m1)?;
        positive("m2", self.m2)?;
        non_negative("g", self.g)?;
        positive("l1", self.l1)?;
        positive("l2", self.l2)?;
        positive("dt", self.dt)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, value, "must be finite and > 0"))
    }
}

fn non_negative(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, value, "must be finite and >= 0"))
    }
}

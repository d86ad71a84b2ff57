//! Tick-level entry points the shell calls into
//!
//! `BallWorld` owns a body set and its parameters; `PendulumSim` owns a
//! pendulum state, its parameters and the "started" flag. Both are advanced
//! only when the caller asks for a tick

use tracing::{debug, info};

use crate::error::SimResult;
use crate::simulation::collision::resolve_collisions;
use crate::simulation::geometry::pendulum_endpoints;
use crate::simulation::integrator::{step_pendulum, vertical_motion};
use crate::simulation::params::{BallParameters, PendulumParameters};
use crate::simulation::states::{Body, BodyHandle, BodySet, NVec2, PendulumState};

/// Vertical-motion update on every body, then one collision pass over the set.
/// Returns the number of pair resolutions applied
pub fn tick_bodies(set: &mut BodySet, params: &BallParameters) -> usize {
    for body in set.bodies.iter_mut() {
        vertical_motion(body, params);
    }
    resolve_collisions(&mut set.bodies, params.overlap_padding)
}

#[derive(Debug, Clone)]
pub struct BallWorld {
    pub parameters: BallParameters,
    pub set: BodySet,
    pub ticks: u64,
}

impl BallWorld {
    pub fn new(parameters: BallParameters) -> Self {
        let set = BodySet::with_cap(parameters.spawn_cap);
        Self { parameters, set, ticks: 0 }
    }

    /// Spawn a body at (x, y) with the configured radius and velocity.
    /// Fails with `CapacityExceeded` once the cap is reached; the set is unchanged
    pub fn spawn_body(&mut self, x: f64, y: f64) -> SimResult<BodyHandle> {
        let body = Body::new(NVec2::new(x, y), self.parameters.spawn_velocity, self.parameters.radius);
        let handle = self.set.insert(body)?;
        debug!(id = handle.0, x, y, "spawned body");
        Ok(handle)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.set.bodies
    }

    pub fn tick(&mut self) -> usize {
        self.ticks += 1;
        tick_bodies(&mut self.set, &self.parameters)
    }
}

#[derive(Debug, Clone)]
pub struct PendulumSim {
    pub parameters: PendulumParameters,
    pub state: PendulumState,
    started: bool,
}

impl PendulumSim {
    /// Resting configuration, not started
    pub fn new(parameters: PendulumParameters) -> Self {
        Self::with_state(parameters, PendulumState::resting(), false)
    }

    pub fn with_state(parameters: PendulumParameters, state: PendulumState, started: bool) -> Self {
        Self { parameters, state, started }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// theta1 = `initial_theta1`, theta2 = pi/2, both omegas zero; marks the run started
    pub fn reset_pendulum(&mut self, initial_theta1: f64) {
        self.state = PendulumState::restart(initial_theta1, self.state.t);
        self.started = true;
        info!(theta1 = initial_theta1, t = self.state.t, "pendulum restarted");
    }

    /// One RK4 step if started, otherwise a no-op. Returns whether the state advanced
    pub fn tick(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.state = step_pendulum(&self.state, &self.parameters, self.parameters.dt);
        true
    }

    /// Cartesian positions of the two bobs for the current state
    pub fn endpoints(&self) -> (NVec2, NVec2) {
        pendulum_endpoints(&self.state, self.parameters.l1, self.parameters.l2)
    }
}

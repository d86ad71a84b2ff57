//! Fixed-step time integrators
//!
//! Provides the per-tick explicit Euler update of a bouncing body (gravity,
//! floor and wall reflection) and a classical RK4 step driven by any
//! [`Derivative`] implementation

use super::equations::{Derivative, DoublePendulum};
use super::params::{BallParameters, PendulumParameters};
use super::states::{Body, PendulumState};

/// Advance one body by one tick using explicit Euler with floor/wall reflection.
/// Positions are in canvas units with y growing downward, floor at `params.height`.
pub fn vertical_motion(body: &mut Body, params: &BallParameters) {
    // x_n+1 = x_n + v_n (one tick)
    body.x += body.v;

    let on_floor = body.x.y + body.radius >= params.height;
    if on_floor {
        // Bounce and put the lower edge exactly on the floor
        body.v.y = -body.v.y;
        body.x.y = params.height - body.radius;
    } else {
        body.v.y += params.gravity;
    }

    // Small residual bounce on the floor -> rest
    if on_floor && body.v.y.abs() < params.rest_threshold {
        body.v.y = 0.0;
    }

    // Side walls only reflect; the body is not pushed back inside
    if body.x.x - body.radius <= 0.0 || body.x.x + body.radius >= params.width {
        body.v.x = -body.v.x;
    }
}

/// Advance `state` by one step of size `dt` with classical RK4.
/// Pure: returns the new state and leaves the input untouched.
/// Non-finite derivatives propagate into the result unchanged
pub fn rk4_step<D: Derivative + ?Sized>(state: &PendulumState, f: &D, dt: f64) -> PendulumState {
    let half_dt = 0.5 * dt;
    let q = state.coords();

    // k1 at q_n, k2/k3 at half steps, k4 at the full step from k3
    let k1 = f.derivative(&q);
    let k2 = f.derivative(&(q + half_dt * k1));
    let k3 = f.derivative(&(q + half_dt * k2));
    let k4 = f.derivative(&(q + dt * k3));

    // q_n+1 = q_n + dt/6 (k1 + 2 k2 + 2 k3 + k4)
    let q_next = q + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

    PendulumState::from_coords(&q_next, state.t + dt)
}

/// One RK4 step of the double pendulum. `dt` may be negative to step backward
pub fn step_pendulum(state: &PendulumState, params: &PendulumParameters, dt: f64) -> PendulumState {
    rk4_step(state, &DoublePendulum::from(params), dt)
}

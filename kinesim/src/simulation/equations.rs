//! Equations of motion for the integrators
//!
//! Defines the `Derivative` trait the RK4 stepper is generic over, and the
//! closed-form coupled double pendulum that implements it

use crate::simulation::params::PendulumParameters;
use crate::simulation::states::{NVec4, PendulumState};

/// Time derivative of a four-component state vector
/// `q = (theta1, theta2, omega1, omega2)`.
/// Implementations must be pure: same input, same output, no side effects
pub trait Derivative {
    fn derivative(&self, q: &NVec4) -> NVec4;
}

/// Point-mass double pendulum with massless rigid rods
#[derive(Debug, Clone)]
pub struct DoublePendulum {
    pub m1: f64,
    pub m2: f64,
    pub g: f64,
    pub l1: f64,
    pub l2: f64,
}

impl From<&PendulumParameters> for DoublePendulum {
    fn from(p: &PendulumParameters) -> Self {
        Self {
            m1: p.m1,
            m2: p.m2,
            g: p.g,
            l1: p.l1,
            l2: p.l2,
        }
    }
}

impl DoublePendulum {
    /// Angular accelerations (omega1_dot, omega2_dot).
    ///
    /// The shared denominator `2m1 + m2 - m2 cos(2(theta1 - theta2))` vanishes
    /// only for m1 = 0 with theta1 - theta2 a multiple of pi; the division is
    /// left unguarded and yields inf/NaN there.
    pub fn angular_accelerations(&self, theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> (f64, f64) {
        let Self { m1, m2, g, l1, l2 } = *self;

        let delta = theta1 - theta2;
        let (sin_d, cos_d) = delta.sin_cos();
        let w1_sq = omega1 * omega1;
        let w2_sq = omega2 * omega2;

        let den = 2.0 * m1 + m2 - m2 * (2.0 * theta1 - 2.0 * theta2).cos();

        let num1 = -g * (2.0 * m1 + m2) * theta1.sin()
            - m2 * g * (theta1 - 2.0 * theta2).sin()
            - 2.0 * sin_d * m2 * (l2 * w2_sq + l1 * w1_sq * cos_d);

        let num2 = 2.0 * sin_d
            * (l1 * w1_sq * (m1 + m2)
                + g * (m1 + m2) * theta1.cos()
                + l2 * w2_sq * m2 * cos_d);

        (num1 / (l1 * den), num2 / (l2 * den))
    }
}

impl Derivative for DoublePendulum {
    fn derivative(&self, q: &NVec4) -> NVec4 {
        let (alpha1, alpha2) = self.angular_accelerations(q[0], q[1], q[2], q[3]);
        NVec4::new(q[2], q[3], alpha1, alpha2)
    }
}

/// (theta1_dot, theta2_dot, omega1_dot, omega2_dot) of `state` under `params`
pub fn derivative(state: &PendulumState, params: &PendulumParameters) -> NVec4 {
    DoublePendulum::from(params).derivative(&state.coords())
}

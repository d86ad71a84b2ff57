pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodyHandle, BodySet, PendulumState, NVec2, NVec4};
pub use simulation::params::{BallParameters, PendulumParameters};
pub use simulation::equations::{derivative, Derivative, DoublePendulum};
pub use simulation::integrator::{rk4_step, step_pendulum, vertical_motion};
pub use simulation::collision::{resolve_collisions, resolve_pair};
pub use simulation::world::{tick_bodies, BallWorld, PendulumSim};
pub use simulation::scenario::{BallScenario, PendulumScenario};

pub use configuration::config::{ScenarioConfig, ScenarioKind, EngineConfig, BallsConfig, PendulumConfig, PointerConfig};

pub use visualization::{balls_view::run_balls, pendulum_view::run_pendulum};

pub use benchmark::benchmark::{bench_collisions, bench_rk4};

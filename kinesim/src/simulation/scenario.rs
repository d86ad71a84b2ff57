//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles
//! (`BallScenario` or `PendulumScenario`) containing:
//! - engine settings (`Engine`)
//! - the core world (`BallWorld` / `PendulumSim`) with validated parameters
//! - the scripted pointer events the headless shell replays
//!
//! Missing config values fall back to the `Default` parameters

use crate::configuration::config::{BallsConfig, EngineConfig, PendulumConfig, PointerConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::params::{BallParameters, PendulumParameters};
use crate::simulation::states::{NVec2, PendulumState};
use crate::simulation::world::{BallWorld, PendulumSim};

const DEFAULT_TICKS: u64 = 1000;
const DEFAULT_LOG_EVERY: u64 = 100;
const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Runtime bundle for the bouncing-ball scenario
///
/// The world starts empty; bodies appear as the shell replays `spawns`
#[derive(Debug, Clone)]
pub struct BallScenario {
    pub engine: Engine,
    pub world: BallWorld,
    pub spawns: Vec<PointerConfig>,
}

impl BallScenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let engine = build_engine(&cfg.engine)?;
        let b_cfg: BallsConfig = cfg.balls.unwrap_or_default();

        // Parameters (runtime) from BallsConfig
        let defaults = BallParameters::default();
        let parameters = BallParameters {
            width: b_cfg.width.unwrap_or(defaults.width),
            height: b_cfg.height.unwrap_or(defaults.height),
            gravity: b_cfg.gravity.unwrap_or(defaults.gravity),
            rest_threshold: b_cfg.rest_threshold.unwrap_or(defaults.rest_threshold),
            overlap_padding: b_cfg.overlap_padding.unwrap_or(defaults.overlap_padding),
            spawn_cap: b_cfg.cap.unwrap_or(defaults.spawn_cap),
            radius: b_cfg.radius.unwrap_or(defaults.radius),
            spawn_velocity: b_cfg
                .spawn_velocity
                .map(|[dx, dy]| NVec2::new(dx, dy))
                .unwrap_or(defaults.spawn_velocity),
        };
        parameters.validate()?;

        // Spawns replay in tick order; ties keep file order
        let mut spawns = b_cfg.spawns;
        spawns.sort_by_key(|s| s.tick);

        Ok(Self {
            engine,
            world: BallWorld::new(parameters),
            spawns,
        })
    }
}

/// Runtime bundle for the double pendulum scenario
#[derive(Debug, Clone)]
pub struct PendulumScenario {
    pub engine: Engine,
    pub sim: PendulumSim,
    pub hover: Vec<PointerConfig>,
    pub clicks: Vec<PointerConfig>,
}

impl PendulumScenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let engine = build_engine(&cfg.engine)?;
        let p_cfg: PendulumConfig = cfg.pendulum.unwrap_or_default();

        // Parameters (runtime) from PendulumConfig
        let defaults = PendulumParameters::default();
        let parameters = PendulumParameters {
            m1: p_cfg.m1.unwrap_or(defaults.m1),
            m2: p_cfg.m2.unwrap_or(defaults.m2),
            g: p_cfg.g.unwrap_or(defaults.g),
            l1: p_cfg.l1.unwrap_or(defaults.l1),
            l2: p_cfg.l2.unwrap_or(defaults.l2),
            dt: p_cfg.dt.unwrap_or(defaults.dt),
        };
        parameters.validate()?;

        // Initial state: explicit, or both arms horizontal at rest
        let state = match p_cfg.initial {
            Some(s) => {
                let components = [
                    ("initial.theta1", s.theta1),
                    ("initial.theta2", s.theta2),
                    ("initial.omega1", s.omega1),
                    ("initial.omega2", s.omega2),
                ];
                for (name, value) in components {
                    if !value.is_finite() {
                        return Err(SimError::invalid(name, value, "must be finite"));
                    }
                }
                PendulumState::new(s.theta1, s.theta2, s.omega1, s.omega2)
            }
            None => PendulumState::resting(),
        };

        let mut hover = p_cfg.hover;
        hover.sort_by_key(|h| h.tick);
        let mut clicks = p_cfg.clicks;
        clicks.sort_by_key(|c| c.tick);

        Ok(Self {
            engine,
            sim: PendulumSim::with_state(parameters, state, p_cfg.autostart),
            hover,
            clicks,
        })
    }
}

/// Engine (runtime) from EngineConfig
fn build_engine(e_cfg: &EngineConfig) -> SimResult<Engine> {
    let trail_length = e_cfg.trail_length.unwrap_or(DEFAULT_TRAIL_LENGTH);
    if trail_length == 0 {
        return Err(SimError::invalid("trail_length", 0.0, "must be at least 1"));
    }
    Ok(Engine {
        scenario: e_cfg.scenario,
        ticks: e_cfg.ticks.unwrap_or(DEFAULT_TICKS),
        log_every: e_cfg.log_every.unwrap_or(DEFAULT_LOG_EVERY),
        trail_length,
    })
}

use tracing::{debug, info, warn};

use crate::simulation::geometry::{pendulum_endpoints, pendulum_energy, pointer_angle};
use crate::simulation::params::PendulumParameters;
use crate::simulation::scenario::PendulumScenario;
use crate::simulation::states::{NVec2, PendulumState};
use crate::visualization::trail::Trail;

/// What the headless pendulum viewer saw over a run
#[derive(Debug, Clone)]
pub struct PendulumRunSummary {
    pub ticks: u64,
    pub steps: u64, // RK4 steps actually taken
    pub restarts: usize,
    pub skipped_frames: u64, // frames with a non-finite endpoint
    pub started: bool,
    pub state: PendulumState,
    pub preview: Option<(NVec2, NVec2)>, // last hover preview shown before the start
    pub energy_start: Option<f64>, // energy at the latest (re)start
    pub energy_end: f64,
    pub bob1_trail: Trail<NVec2>,
    pub bob2_trail: Trail<NVec2>,
}

/// Endpoints shown while hovering: first arm toward the pointer, second arm horizontal
pub fn preview_endpoints(x: f64, y: f64, params: &PendulumParameters) -> (NVec2, NVec2) {
    let state = PendulumState::restart(pointer_angle(x, y), 0.0);
    pendulum_endpoints(&state, params.l1, params.l2)
}

/// Drive the pendulum for `engine.ticks` ticks, replaying hover and click events.
/// Until the first click (or with `autostart`) the state does not advance
pub fn run_pendulum(mut scenario: PendulumScenario) -> PendulumRunSummary {
    let engine = scenario.engine.clone();
    let params = scenario.sim.parameters.clone();
    info!(
        ticks = engine.ticks,
        dt = params.dt,
        autostart = scenario.sim.is_started(),
        "run_pendulum: starting headless pendulum viewer"
    );

    let mut bob1_trail = Trail::new(engine.trail_length);
    let mut bob2_trail = Trail::new(engine.trail_length);
    let mut preview = None;
    let mut energy_start = scenario.sim.is_started().then(|| pendulum_energy(&scenario.sim.state, &params));
    let mut steps = 0;
    let mut restarts = 0;
    let mut skipped_frames = 0;
    let mut next_hover = 0;
    let mut next_click = 0;

    for tick in 0..engine.ticks {
        // Pointer moves due this tick; only the latest one matters for the preview
        while let Some(h) = scenario.hover.get(next_hover).filter(|h| h.tick <= tick) {
            next_hover += 1;
            if !scenario.sim.is_started() {
                preview = Some(preview_endpoints(h.x, h.y, &params));
            }
        }

        // Restart clicks due this tick
        while let Some(c) = scenario.clicks.get(next_click).filter(|c| c.tick <= tick) {
            next_click += 1;
            scenario.sim.reset_pendulum(pointer_angle(c.x, c.y));
            restarts += 1;
            energy_start = Some(pendulum_energy(&scenario.sim.state, &params));
        }

        if !scenario.sim.tick() {
            continue;
        }
        steps += 1;

        let (p1, p2) = scenario.sim.endpoints();
        if !(p1.iter().chain(p2.iter()).all(|c| c.is_finite())) {
            skipped_frames += 1;
            warn!(tick, t = scenario.sim.state.t, "skipping frame with non-finite pendulum endpoints");
            continue;
        }
        bob1_trail.push(p1);
        bob2_trail.push(p2);

        if engine.log_every > 0 && (tick + 1) % engine.log_every == 0 {
            let s = &scenario.sim.state;
            info!(
                tick = tick + 1,
                t = s.t,
                theta1 = s.theta1,
                theta2 = s.theta2,
                x2 = p2.x,
                y2 = p2.y,
                "frame"
            );
        }
    }

    let state = scenario.sim.state;
    let energy_end = pendulum_energy(&state, &params);
    if let Some(e0) = energy_start {
        debug!(e0, e1 = energy_end, drift = energy_end - e0, "energy since last start");
    }
    info!(steps, restarts, skipped_frames, t = state.t, "run_pendulum: done");

    PendulumRunSummary {
        ticks: engine.ticks,
        steps,
        restarts,
        skipped_frames,
        started: scenario.sim.is_started(),
        state,
        preview,
        energy_start,
        energy_end,
        bob1_trail,
        bob2_trail,
    }
}

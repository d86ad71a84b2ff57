use tracing::{debug, info, warn};

use crate::simulation::geometry::{kinetic_energy, total_momentum};
use crate::simulation::scenario::BallScenario;
use crate::simulation::states::{Body, NVec2};
use crate::visualization::trail::Trail;

/// One drawn motion segment: position before and after a tick
pub type Segment = (NVec2, NVec2);

/// What the headless ball viewer saw over a run
#[derive(Debug, Clone)]
pub struct BallRunSummary {
    pub ticks: u64,
    pub spawned: usize,
    pub rejected: usize,
    pub resolutions: usize, // pair resolutions over the whole run
    pub skipped_frames: u64, // frames with a non-finite coordinate
    pub bodies: Vec<Body>,
    pub trails: Vec<Trail<Segment>>, // one per body, spawn order
}

/// Drive the ball world for `engine.ticks` ticks, replaying the scripted spawns.
/// Spawns scheduled for a tick happen before that tick's physics update
pub fn run_balls(mut scenario: BallScenario) -> BallRunSummary {
    let engine = scenario.engine.clone();
    info!(
        ticks = engine.ticks,
        spawns = scenario.spawns.len(),
        cap = scenario.world.parameters.spawn_cap,
        "run_balls: starting headless ball viewer"
    );

    let mut trails: Vec<Trail<Segment>> = Vec::new();
    let mut spawned = 0;
    let mut rejected = 0;
    let mut resolutions = 0;
    let mut skipped_frames = 0;
    let mut next_spawn = 0;

    for tick in 0..engine.ticks {
        // Spawn clicks due this tick
        while let Some(click) = scenario.spawns.get(next_spawn).filter(|s| s.tick <= tick) {
            next_spawn += 1;
            match scenario.world.spawn_body(click.x, click.y) {
                Ok(_) => {
                    spawned += 1;
                    trails.push(Trail::new(engine.trail_length));
                }
                Err(e) => {
                    rejected += 1;
                    warn!(tick, x = click.x, y = click.y, "spawn ignored: {e}");
                }
            }
        }

        let before: Vec<NVec2> = scenario.world.bodies().iter().map(|b| b.x).collect();
        let resolved = scenario.world.tick();
        resolutions += resolved;

        let bodies = scenario.world.bodies();
        if !frame_is_finite(bodies) {
            skipped_frames += 1;
            warn!(tick, "skipping frame with non-finite body coordinates");
            continue;
        }

        for ((trail, prev), body) in trails.iter_mut().zip(before).zip(bodies) {
            trail.push((prev, body.x));
        }

        if engine.log_every > 0 && (tick + 1) % engine.log_every == 0 {
            let p = total_momentum(bodies);
            info!(
                tick = tick + 1,
                bodies = bodies.len(),
                resolved,
                kinetic = kinetic_energy(bodies),
                px = p.x,
                py = p.y,
                "frame"
            );
        }
    }

    if next_spawn < scenario.spawns.len() {
        debug!(pending = scenario.spawns.len() - next_spawn, "spawns scheduled after the last tick were not applied");
    }

    let bodies = scenario.world.bodies().to_vec();
    for (i, b) in bodies.iter().enumerate() {
        debug!(id = i, x = b.x.x, y = b.x.y, dx = b.v.x, dy = b.v.y, "final body");
    }
    info!(spawned, rejected, resolutions, skipped_frames, "run_balls: done");

    BallRunSummary {
        ticks: engine.ticks,
        spawned,
        rejected,
        resolutions,
        skipped_frames,
        bodies,
        trails,
    }
}

fn frame_is_finite(bodies: &[Body]) -> bool {
    bodies.iter().all(|b| b.x.x.is_finite() && b.x.y.is_finite())
}

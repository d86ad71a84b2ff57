use std::time::Instant;

use crate::simulation::params::{BallParameters, PendulumParameters};
use crate::simulation::states::{Body, BodySet, NVec2, PendulumState};
use crate::simulation::world::tick_bodies;
use crate::simulation::integrator::step_pendulum;

/// Time one full body tick (vertical motion + pairwise collision pass) for
/// body counts up to the spawn cap
/// Paste output directly into excel to graph
pub fn bench_collisions() {
    let params = BallParameters::default();
    let steps = 2000;

    println!("N,tick_us,resolutions_per_tick");

    for n in (5..=params.spawn_cap).step_by(5) {
        let mut set = make_body_set(n, &params);

        // Warm-up
        tick_bodies(&mut set, &params);

        let mut resolutions = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            resolutions += tick_bodies(&mut set, &params);
        }
        let us_per_tick = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        println!("{},{:.3},{:.3}", n, us_per_tick, resolutions as f64 / steps as f64);
    }
}

/// Time RK4 steps of the double pendulum at the default step size
pub fn bench_rk4() {
    let params = PendulumParameters::default();

    println!("steps,total_ms,ns_per_step");

    for steps in [1_000u64, 10_000, 100_000, 1_000_000] {
        let mut state = PendulumState::new(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2, 0.0, 1.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            state = step_pendulum(&state, &params, params.dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        // keep the loop from being optimized out
        std::hint::black_box(state);

        println!("{},{:.3},{:.1}", steps, elapsed * 1000.0, elapsed * 1.0e9 / steps as f64);
    }
}

/// Helper to build a set of `n` bodies on a loose grid, close enough to collide
fn make_body_set(n: usize, params: &BallParameters) -> BodySet {
    let mut set = BodySet::with_cap(params.spawn_cap);
    let spacing = 1.8 * params.radius;
    let per_row = ((params.width - 4.0 * params.radius) / spacing).max(1.0) as usize;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions and velocities, no rand needed
        let x = NVec2::new(
            2.0 * params.radius + (i % per_row) as f64 * spacing,
            params.height * 0.5 - (i / per_row) as f64 * spacing,
        );
        let v = NVec2::new((i_f * 0.37).sin() * 2.0, (i_f * 0.13).cos() * 2.0);

        set.insert(Body::new(x, v, params.radius)).expect("n <= spawn cap");
    }

    set
}

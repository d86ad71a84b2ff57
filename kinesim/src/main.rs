use kinesim::{ScenarioConfig, ScenarioKind, BallScenario, PendulumScenario};
use kinesim::{run_balls, run_pendulum};
use kinesim::{bench_collisions, bench_rk4};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, relative to the crate's `scenarios/` directory unless absolute
    #[arg(short, default_value = "balls.yaml")]
    file_name: String,

    /// Override `engine.ticks` from the scenario
    #[arg(long)]
    ticks: Option<u64>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.is_absolute() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(given)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("loading scenario {}", config_path.display()))?;

    tracing::debug!(?scenario_cfg, "scenario loaded");

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_collisions();
        bench_rk4();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(ticks) = args.ticks {
        scenario_cfg.engine.ticks = Some(ticks);
    }

    match scenario_cfg.engine.scenario {
        ScenarioKind::Balls => {
            let scenario = BallScenario::build_scenario(scenario_cfg).context("building ball scenario")?;
            let summary = run_balls(scenario);
            for (i, b) in summary.bodies.iter().enumerate() {
                println!("{},{:.3},{:.3},{:.3},{:.3}", i, b.x.x, b.x.y, b.v.x, b.v.y);
            }
        }
        ScenarioKind::Pendulum => {
            let scenario = PendulumScenario::build_scenario(scenario_cfg).context("building pendulum scenario")?;
            let summary = run_pendulum(scenario);
            let s = summary.state;
            println!("{:.4},{:.6},{:.6},{:.6},{:.6}", s.t, s.theta1, s.theta2, s.omega1, s.omega2);
        }
    }

    Ok(())
}

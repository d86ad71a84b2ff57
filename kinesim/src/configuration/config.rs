//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – which scenario runs and how the shell drives it
//! - [`BallsConfig`]    – canvas, body constants and scripted spawn clicks
//! - [`PendulumConfig`] – physical constants, initial state and scripted pointer input
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A bouncing-ball scenario:
//!
//! ```yaml
//! engine:
//!   scenario: "balls"       # or "pendulum"
//!   ticks: 2000
//!   log_every: 250          # 0 -> final report only
//!   trail_length: 100
//!
//! balls:
//!   width: 800.0
//!   height: 600.0
//!   gravity: 0.1            # dy increment per tick
//!   rest_threshold: 0.1
//!   overlap_padding: 1.0
//!   cap: 50
//!   radius: 10.0
//!   spawn_velocity: [0.0, 2.0]
//!   spawns:
//!     - { tick: 0, x: 400.0, y: 100.0 }
//!     - { tick: 30, x: 405.0, y: 60.0 }
//! ```
//!
//! A pendulum scenario:
//!
//! ```yaml
//! engine:
//!   scenario: "pendulum"
//!   ticks: 1000
//!
//! pendulum:
//!   m1: 1.0
//!   m2: 1.0
//!   g: 10.0
//!   l1: 1.0
//!   l2: 1.0
//!   dt: 0.01
//!   hover:
//!     - { tick: 0, x: 1.0, y: -1.0 }
//!   clicks:
//!     - { tick: 10, x: 1.0, y: -1.0 }
//! ```
//!
//! Every field except `engine.scenario` is optional and falls back to the
//! `Default` parameter values. The scenario builder maps this configuration into runtime
//! parameter structs and validates them.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::SimResult;

/// Which of the two simulations the engine runs
/// `scenario: "balls"` or `scenario: "pendulum"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    #[serde(rename = "balls")] // circular bodies with gravity, bounces and pairwise collisions
    Balls,

    #[serde(rename = "pendulum")] // RK4 double pendulum
    Pendulum,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub scenario: ScenarioKind, // which simulation to run
    pub ticks: Option<u64>, // ticks before the shell stops calling the core
    pub log_every: Option<u64>, // frame report cadence
    pub trail_length: Option<usize>, // trail ring buffer capacity
}

/// A scripted pointer event, in the shell's coordinates
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PointerConfig {
    pub tick: u64, // tick at which the event fires, before the core is stepped
    pub x: f64,
    pub y: f64,
}

/// Bouncing-ball world constants and spawn script
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BallsConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub gravity: Option<f64>,
    pub rest_threshold: Option<f64>,
    pub overlap_padding: Option<f64>,
    pub cap: Option<usize>,
    pub radius: Option<f64>,
    pub spawn_velocity: Option<[f64; 2]>,
    #[serde(default)]
    pub spawns: Vec<PointerConfig>, // spawn clicks, in order
}

/// Explicit starting state, used with `autostart`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InitialStateConfig {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

/// Double pendulum constants, initial state and pointer script
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PendulumConfig {
    pub m1: Option<f64>,
    pub m2: Option<f64>,
    pub g: Option<f64>,
    pub l1: Option<f64>,
    pub l2: Option<f64>,
    pub dt: Option<f64>,
    pub initial: Option<InitialStateConfig>, // defaults to the resting configuration
    #[serde(default)]
    pub autostart: bool, // step from `initial` without waiting for a click
    #[serde(default)]
    pub hover: Vec<PointerConfig>, // cursor moves, drive the preview before start
    #[serde(default)]
    pub clicks: Vec<PointerConfig>, // restart clicks
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub balls: Option<BallsConfig>, // defaults when absent
    pub pendulum: Option<PendulumConfig>, // defaults when absent
}

impl ScenarioConfig {
    /// Parse a scenario from any YAML source
    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Open and parse a scenario file; a missing or unreadable file is `SimError::Io`
    pub fn from_path(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_yaml_str(yaml: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

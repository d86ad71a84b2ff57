//! High-level runtime engine settings
//!
//! Selects which scenario runs and how the headless shell drives it
//! (number of ticks, report cadence, trail length)

use crate::configuration::config::ScenarioKind;

#[derive(Debug, Clone)]
pub struct Engine {
    pub scenario: ScenarioKind, // balls or pendulum
    pub ticks: u64, // ticks to run before stopping
    pub log_every: u64, // frame report cadence, 0 = final report only
    pub trail_length: usize, // ring buffer capacity per trail
}

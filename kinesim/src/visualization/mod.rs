//! Headless presentation shell
//!
//! Replays scripted pointer input, drives the core once per tick, keeps the
//! trail buffers and reports frames through `tracing`. Non-finite coordinates
//! are caught here, not in the core

pub mod trail;
pub mod balls_view;
pub mod pendulum_view;

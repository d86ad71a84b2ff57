pub mod states;
pub mod params;
pub mod engine;
pub mod geometry;
pub mod equations;
pub mod integrator;
pub mod collision;
pub mod world;
pub mod scenario;

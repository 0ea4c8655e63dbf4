//! Headless host for `crawl-core`.
//!
//! Loads [`ClientConfig`] from the environment, builds the demo dungeon and
//! drives the engine at a fixed tick rate with a scripted [`Autopilot`]
//! standing in for keyboard input. Rendering stays outside this crate.
pub mod autopilot;
pub mod config;
pub mod demo;
pub mod logging;
pub mod runner;

pub use autopilot::Autopilot;
pub use config::ClientConfig;
pub use logging::setup_logging;
pub use runner::{RunSummary, run};

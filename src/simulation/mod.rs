pub mod collision;
pub mod engine;
pub mod report;

pub use collision::{CollisionDetector, Crash};
pub use engine::{CarSnapshot, SimulationEngine};
pub use report::{CollisionRecord, Outcome, ReportEntry, RunReport};

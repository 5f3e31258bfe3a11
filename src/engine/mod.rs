mod engine;
mod options;
mod source;

pub use engine::{CycleReport, Engine};
pub use options::EngineOptions;
pub use source::{is_read_error, LineSource, SnapshotSource};

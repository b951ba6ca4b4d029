//! Scan session flow
//!
//! Owns the `Upload → Scanning → Dashboard` state machine, the
//! degrade-to-demo analysis pipeline, and the progress ticker that decides
//! when the scanning phase may end.

pub mod demo;
pub mod machine;
pub mod ports;
pub mod progress;
pub mod service;

pub use machine::SessionMachine;
pub use ports::AnalysisBackend;
pub use progress::{ScanProgress, ScanStage, ScanTicker};
pub use service::{ScanOutcome, ScanService};

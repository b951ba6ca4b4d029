//! # SubsidyScope App
//!
//! Composition root: wires the core scan flow to the HTTP adapter and
//! exposes the command layer consumed by the binary (and by an embedding
//! UI shell).

pub mod commands;
pub mod context;
pub mod utils;

pub use commands::alerts::{cancel_email_alert, configure_email_alert};
pub use commands::catalog::{industry_benchmark, list_subsidies, subsidy_details};
pub use commands::health::backend_health;
pub use commands::preferences::{current_preferences, record_cookie_consent, toggle_theme};
pub use commands::report::export_report_csv;
pub use commands::scan::{run_scan, session_snapshot};
pub use context::AppContext;

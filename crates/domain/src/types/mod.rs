//! Domain types and models
//!
//! Wire-facing types use `camelCase` field names to match the backend
//! contract; session types are client-side only.

pub mod alerts;
pub mod analysis;
pub mod preferences;
pub mod session;

pub use alerts::{
    AlertKind, AlertReceipt, CancelReceipt, EmailAlertRequest, SubsidyCatalog, UploadReceipt,
};
pub use analysis::{AnalysisResult, BenchmarkSnapshot, DataOrigin, SubsidyCategory, SubsidyOpportunity};
pub use preferences::{CookieConsent, ThemePreference, UiPreferences};
pub use session::{DocumentFile, ScanPhase, SessionState};

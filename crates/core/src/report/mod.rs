//! Dashboard report derivations
//!
//! Pure, stateless functions over an [`subsidyscope_domain::AnalysisResult`];
//! cheap enough to recompute on every render, so nothing here caches.

pub mod benchmark;
pub mod categories;
pub mod currency;
pub mod export;

pub use benchmark::utilization_gap;
pub use categories::{category_icon, CategoryIcon};
pub use currency::format_eur;
pub use export::render_csv;

//! Category → icon mapping

use subsidyscope_domain::SubsidyCategory;

/// Icon identifiers used by the dashboard table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    FileCheck,
    Zap,
    Users,
    Target,
    Building,
    Euro,
}

impl CategoryIcon {
    /// Stable icon name, matching the icon set used by the UI
    pub fn name(self) -> &'static str {
        match self {
            Self::FileCheck => "file-check",
            Self::Zap => "zap",
            Self::Users => "users",
            Self::Target => "target",
            Self::Building => "building",
            Self::Euro => "euro",
        }
    }
}

/// Look up the icon for a category
///
/// Unrecognized categories fall back to the file-check icon; the lookup
/// never fails.
pub fn category_icon(category: &SubsidyCategory) -> CategoryIcon {
    match category {
        SubsidyCategory::Tax => CategoryIcon::FileCheck,
        SubsidyCategory::Energy => CategoryIcon::Zap,
        SubsidyCategory::Hr => CategoryIcon::Users,
        SubsidyCategory::Digital => CategoryIcon::Target,
        SubsidyCategory::Export => CategoryIcon::Building,
        SubsidyCategory::Finance => CategoryIcon::Euro,
        SubsidyCategory::Other(_) => CategoryIcon::FileCheck,
    }
}

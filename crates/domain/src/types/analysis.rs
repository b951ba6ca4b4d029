//! Analysis result types returned by the backend

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Complete analysis payload for one upload session
///
/// Consumed as-is from the backend; the client performs no recomputation
/// beyond display derivations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub session_id: String,
    /// Signed total; negative means money left unclaimed
    pub total_leakage: f64,
    pub subsidies: Vec<SubsidyOpportunity>,
    pub benchmark: BenchmarkSnapshot,
    /// ISO-8601 timestamp string as supplied by the backend
    pub analyzed_at: String,
    pub document_count: u32,
}

impl AnalysisResult {
    /// Parse the backend timestamp, if it is well-formed ISO-8601
    pub fn analyzed_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.analyzed_at).ok()
    }
}

/// A single detected subsidy / tax-credit candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubsidyOpportunity {
    /// Stable key within one result set
    pub id: String,
    pub item: String,
    pub subsidy: String,
    pub category: SubsidyCategory,
    /// Signed amount; negative means leakage
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<Vec<String>>,
}

/// Open category enumeration
///
/// The backend sends free-form strings; the known set gets dedicated
/// variants and anything else round-trips through `Other` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubsidyCategory {
    Tax,
    Energy,
    Hr,
    Digital,
    Export,
    Finance,
    Other(String),
}

impl SubsidyCategory {
    /// Map a backend label onto the category set
    pub fn from_label(label: &str) -> Self {
        match label {
            "Tax" => Self::Tax,
            "Energy" => Self::Energy,
            "HR" => Self::Hr,
            "Digital" => Self::Digital,
            "Export" => Self::Export,
            "Finance" => Self::Finance,
            other => Self::Other(other.to_string()),
        }
    }

    /// The exact label this category serializes back to
    pub fn as_label(&self) -> &str {
        match self {
            Self::Tax => "Tax",
            Self::Energy => "Energy",
            Self::Hr => "HR",
            Self::Digital => "Digital",
            Self::Export => "Export",
            Self::Finance => "Finance",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for SubsidyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl Serialize for SubsidyCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for SubsidyCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// Comparative subsidy utilization percentages
///
/// Values are displayed exactly as provided; the client neither clamps
/// nor validates the 0-100 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSnapshot {
    pub you: f64,
    pub competitors: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_average: Option<f64>,
}

/// Where the current analysis result came from
///
/// `Demo` marks the degrade path: the backend was unreachable or failed
/// mid-scan and the fixed demonstration dataset was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Backend,
    Demo,
}

impl DataOrigin {
    pub fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }
}

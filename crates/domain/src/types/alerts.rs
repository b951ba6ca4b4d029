//! Email alert and catalog payload types

use serde::{Deserialize, Serialize};

use super::analysis::SubsidyOpportunity;

/// Alert subscription categories offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    WeeklySummary,
    NewSubsidies,
    DeadlineReminders,
    MarketUpdates,
}

impl AlertKind {
    /// All kinds, in presentation order
    pub fn all() -> [AlertKind; 4] {
        [
            Self::WeeklySummary,
            Self::NewSubsidies,
            Self::DeadlineReminders,
            Self::MarketUpdates,
        ]
    }

    /// Kinds enabled by default on a fresh form
    pub fn default_selection() -> Vec<AlertKind> {
        vec![Self::WeeklySummary, Self::NewSubsidies]
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::WeeklySummary => "Weekly Summary",
            Self::NewSubsidies => "New Subsidies",
            Self::DeadlineReminders => "Deadline Reminders",
            Self::MarketUpdates => "Market Updates",
        }
    }
}

/// JSON body for the alert subscription endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAlertRequest {
    pub email: String,
    pub session_id: String,
    pub alert_types: Vec<AlertKind>,
}

/// Backend acknowledgement of an alert subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertReceipt {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_id: Option<String>,
}

/// Backend acknowledgement of an alert cancellation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelReceipt {
    pub success: bool,
    pub message: String,
}

/// Response to a successful document upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub session_id: String,
    pub files_uploaded: u32,
}

/// Full subsidy catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyCatalog {
    pub count: u32,
    pub subsidies: Vec<SubsidyOpportunity>,
}

//! Fixed demonstration dataset
//!
//! Served whenever the backend is unreachable or the upload/analyze
//! pipeline fails, so every scan still reaches a dashboard.

use chrono::Utc;
use subsidyscope_domain::{
    AnalysisResult, BenchmarkSnapshot, SubsidyCategory, SubsidyOpportunity,
};

/// Session id carried by the demonstration dataset
pub const DEMO_SESSION_ID: &str = "demo-session";

/// Build the demonstration analysis result
///
/// Content is fixed apart from the timestamp; five opportunities summing
/// to a total leakage of -14 200.
pub fn demo_report() -> AnalysisResult {
    AnalysisResult {
        session_id: DEMO_SESSION_ID.to_string(),
        total_leakage: -14_200.0,
        subsidies: vec![
            SubsidyOpportunity {
                id: "wbso-2024".into(),
                item: "Unused R&D Tax Credits".into(),
                subsidy: "WBSO Subsidy".into(),
                category: SubsidyCategory::Tax,
                amount: -4_800.0,
                description: Some("Tax credit for research and development activities.".into()),
                deadline: Some("September 30, 2024".into()),
                eligibility: Some(vec![
                    "Companies performing R&D activities".into(),
                    "Minimum 500 R&D hours per year".into(),
                ]),
            },
            SubsidyOpportunity {
                id: "sde-2024".into(),
                item: "Energy Efficiency Program".into(),
                subsidy: "SDE++ Grant".into(),
                category: SubsidyCategory::Energy,
                amount: -3_200.0,
                description: Some("Subsidy for renewable energy projects.".into()),
                deadline: Some("Rolling applications".into()),
                eligibility: Some(vec![
                    "Energy production from renewable sources".into(),
                    "CO2 reduction projects".into(),
                ]),
            },
            SubsidyOpportunity {
                id: "stap-2024".into(),
                item: "Employee Training Budget".into(),
                subsidy: "STAP Budget".into(),
                category: SubsidyCategory::Hr,
                amount: -2_800.0,
                description: Some("Budget for employee training and development.".into()),
                deadline: Some("Continuous enrollment".into()),
                eligibility: Some(vec![
                    "Dutch residents aged 18+".into(),
                    "Registered training providers".into(),
                ]),
            },
            SubsidyOpportunity {
                id: "mit-2024".into(),
                item: "Digital Transformation".into(),
                subsidy: "MIT Scheme".into(),
                category: SubsidyCategory::Digital,
                amount: -2_100.0,
                description: Some("SME Innovation Stimulus.".into()),
                deadline: Some("April 2024 / September 2024".into()),
                eligibility: Some(vec![
                    "Small and medium enterprises".into(),
                    "Innovation or R&D project".into(),
                ]),
            },
            SubsidyOpportunity {
                id: "dhi-2024".into(),
                item: "Export Development".into(),
                subsidy: "DHI Subsidy".into(),
                category: SubsidyCategory::Export,
                amount: -1_300.0,
                description: Some("International business development.".into()),
                deadline: Some("Ongoing applications".into()),
                eligibility: Some(vec![
                    "Dutch companies with export ambitions".into(),
                    "Projects in emerging markets".into(),
                ]),
            },
        ],
        benchmark: BenchmarkSnapshot {
            you: 23.0,
            competitors: 67.0,
            industry_average: Some(65.0),
        },
        analyzed_at: Utc::now().to_rfc3339(),
        document_count: 1,
    }
}

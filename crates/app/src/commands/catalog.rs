//! Subsidy catalog and benchmark commands

use std::time::Instant;

use subsidyscope_core::SubsidyDetailView;
use subsidyscope_domain::{BenchmarkSnapshot, Result, SubsidyCatalog, SubsidyOpportunity};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// List the full subsidy catalog
pub async fn list_subsidies(ctx: &AppContext) -> Result<SubsidyCatalog> {
    let command_name = "catalog::list_subsidies";
    let start = Instant::now();

    let result = ctx.backend.list_subsidies().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Fetch one subsidy through the detail view state machine
pub async fn subsidy_details(ctx: &AppContext, subsidy_id: &str) -> Result<SubsidyOpportunity> {
    let command_name = "catalog::subsidy_details";
    let start = Instant::now();

    let mut view = SubsidyDetailView::new();
    let result = view.load(ctx.backend.as_ref(), subsidy_id).await.map(Clone::clone);

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Fetch industry benchmark data
pub async fn industry_benchmark(ctx: &AppContext) -> Result<BenchmarkSnapshot> {
    let command_name = "catalog::industry_benchmark";
    let start = Instant::now();

    let result = ctx.backend.benchmark().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

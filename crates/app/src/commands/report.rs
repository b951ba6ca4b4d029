//! Dashboard report commands

use std::time::Instant;

use subsidyscope_core::report::render_csv;
use subsidyscope_domain::{Result, ScanError, ScanPhase};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Render the current dashboard table as CSV
///
/// Only available once the session has reached the dashboard; the fixed
/// download filename lives in
/// [`subsidyscope_domain::constants::CSV_EXPORT_FILENAME`].
///
/// # Errors
/// Fails with `Internal` outside the dashboard phase.
pub async fn export_report_csv(ctx: &AppContext) -> Result<String> {
    let command_name = "report::export_report_csv";
    let start = Instant::now();

    let result = {
        let machine = ctx.session.read().await;
        let state = machine.state();
        if state.phase != ScanPhase::Dashboard {
            Err(ScanError::Internal("no report to export before the dashboard".into()))
        } else {
            match &state.result {
                Some(result) => render_csv(&result.subsidies),
                None => Err(ScanError::Internal("dashboard reached without a result".into())),
            }
        }
    };

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

//! Backend health command

use std::time::Instant;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Probe the analysis backend
///
/// Mirrors the port contract: `true` only on HTTP success within the
/// configured timeout, never an error.
pub async fn backend_health(ctx: &AppContext) -> bool {
    let command_name = "health::backend_health";
    let start = Instant::now();

    let healthy = ctx.backend.check_health().await;

    log_command_execution(command_name, start.elapsed(), true);
    healthy
}

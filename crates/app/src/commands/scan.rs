//! Scan session commands

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use subsidyscope_core::{ScanService, ScanTicker};
use subsidyscope_domain::{DocumentFile, Result, SessionState};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Run a full scan: upload, analyze, and reach the dashboard
///
/// The session flips to `Scanning` synchronously before any network
/// activity. The analysis pipeline and the progress ticker then run as
/// two joined tasks: the ticker doubles its speed once the pipeline has
/// settled, and the session enters `Dashboard` only after *both* are
/// done. Pipeline failures never surface here — the scan service
/// degrades to the demonstration dataset.
///
/// # Errors
/// Fails with `ValidationFailed` on an empty selection and `Internal` on
/// a phase misuse (e.g. a second scan in the same session).
pub async fn run_scan(ctx: &AppContext, documents: Vec<DocumentFile>) -> Result<SessionState> {
    let command_name = "scan::run_scan";
    let start = Instant::now();

    info!(command = command_name, documents = documents.len(), "starting scan");

    // Synchronous transition: Upload -> Scanning before any I/O resolves
    {
        let mut machine = ctx.session.write().await;
        if let Err(err) = machine.begin_scan(documents.len()) {
            log_command_execution(command_name, start.elapsed(), false);
            return Err(err);
        }
    }

    let service = ScanService::new(ctx.backend.clone());
    let ticker = ScanTicker::new(&ctx.config.scan);
    let data_ready = AtomicBool::new(false);

    let pipeline = async {
        let outcome = service.analyze(&documents).await;
        data_ready.store(true, Ordering::Relaxed);
        outcome
    };
    let animation = async {
        let mut last_stage = None;
        ticker
            .run_with(&data_ready, |progress| {
                let stage = progress.stage();
                if last_stage != Some(stage) {
                    tracing::debug!(percent = progress.percent(), stage = stage.label(), "scan progress");
                    last_stage = Some(stage);
                }
            })
            .await;
    };

    // Proceed only when both the minimum-duration animation and the data
    // task have settled; the network call is never cancelled.
    let (outcome, ()) = tokio::join!(pipeline, animation);

    let state = {
        let mut machine = ctx.session.write().await;
        machine.record_outcome(outcome)?;
        machine.complete_scan()?;
        machine.state().clone()
    };

    log_command_execution(command_name, start.elapsed(), true);
    Ok(state)
}

/// Current session state, for rendering
pub async fn session_snapshot(ctx: &AppContext) -> SessionState {
    ctx.session.read().await.state().clone()
}

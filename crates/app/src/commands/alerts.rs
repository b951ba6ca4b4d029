//! Email alert commands

use std::time::Instant;

use subsidyscope_core::scan::demo::DEMO_SESSION_ID;
use subsidyscope_core::EmailAlertForm;
use subsidyscope_domain::{AlertKind, AlertReceipt, CancelReceipt, Result};
use tracing::info;

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Subscribe an email address to alert categories
///
/// Drives the modal form: local validation first (an address without `@`
/// never reaches the network), then exactly one backend call with the
/// selected kinds. `kinds` of `None` keeps the default selection.
pub async fn configure_email_alert(
    ctx: &AppContext,
    email: &str,
    kinds: Option<Vec<AlertKind>>,
) -> Result<AlertReceipt> {
    let command_name = "alerts::configure_email_alert";
    let start = Instant::now();

    let mut form = EmailAlertForm::new();
    form.set_email(email);
    if let Some(kinds) = kinds {
        for kind in AlertKind::all() {
            if form.is_selected(kind) != kinds.contains(&kind) {
                form.toggle(kind);
            }
        }
    }

    let selected: Vec<&str> = form.selection().iter().map(|kind| kind.label()).collect();
    tracing::debug!(command = command_name, ?selected, "alert selection");

    let session_id = alert_session_id(ctx).await;
    let result = form.submit(ctx.backend.as_ref(), &session_id).await;

    match &result {
        Ok(receipt) => info!(command = command_name, alert_id = ?receipt.alert_id, "alerts enabled"),
        Err(err) => info!(command = command_name, error = error_label(err), "alert setup rejected"),
    }
    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Cancel an existing alert subscription
pub async fn cancel_email_alert(ctx: &AppContext, alert_id: &str) -> Result<CancelReceipt> {
    let command_name = "alerts::cancel_email_alert";
    let start = Instant::now();

    let result = ctx.backend.cancel_email_alert(alert_id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Session id carried by alert subscriptions
///
/// Prefers the live upload session; a degraded session falls back to the
/// id of the demonstration dataset so the flow stays usable in demo mode.
async fn alert_session_id(ctx: &AppContext) -> String {
    let machine = ctx.session.read().await;
    let state = machine.state();
    state
        .session_id
        .clone()
        .or_else(|| state.result.as_ref().map(|r| r.session_id.clone()))
        .unwrap_or_else(|| DEMO_SESSION_ID.to_string())
}

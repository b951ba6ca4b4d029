//! SubsidyScope - subsidy discovery client
//!
//! Command-line entry point: uploads the given financial documents to the
//! analysis backend, runs the scan flow, and renders the leakage report.
//! Falls back to the demonstration dataset when the backend is
//! unreachable, exactly like the dashboard UI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use subsidyscope_app::{current_preferences, export_report_csv, run_scan, AppContext};
use subsidyscope_core::report::{format_eur, utilization_gap};
use subsidyscope_domain::constants::CSV_EXPORT_FILENAME;
use subsidyscope_domain::{DocumentFile, SessionState};
use tracing_subscriber::EnvFilter;

struct Args {
    documents: Vec<PathBuf>,
    csv_output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first so .env loading is visible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(_) => tracing::debug!("no .env file found"),
    }

    let args = parse_args(std::env::args().skip(1).collect())?;
    let config = subsidyscope_infra::config::load()?;
    let ctx = Arc::new(AppContext::new(config)?);

    let preferences = current_preferences(&ctx).await;
    tracing::info!(theme = ?preferences.theme, "preferences loaded");

    let documents = read_documents(&args.documents)?;
    println!("Selected documents:");
    for document in &documents {
        println!("  {} ({:.1} KB)", document.name, document.size_kib());
    }
    println!("\nScanning {} document(s) for missed subsidies...", documents.len());

    let state = run_scan(&ctx, documents).await?;
    println!("{}", render_report(&state));

    if let Some(path) = &args.csv_output {
        let csv = export_report_csv(&ctx).await?;
        std::fs::write(path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Report exported to {}", path.display());
    }

    Ok(())
}

fn parse_args(raw: Vec<String>) -> anyhow::Result<Args> {
    let mut documents = Vec::new();
    let mut csv_output = None;

    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => {
                let path = iter.next().map(PathBuf::from);
                csv_output = Some(path.unwrap_or_else(|| PathBuf::from(CSV_EXPORT_FILENAME)));
            }
            "--help" | "-h" => {
                bail!("usage: subsidyscope [--csv <path>] <document>...");
            }
            _ => documents.push(PathBuf::from(arg)),
        }
    }

    if documents.is_empty() {
        bail!("usage: subsidyscope [--csv <path>] <document>...");
    }

    Ok(Args { documents, csv_output })
}

fn read_documents(paths: &[PathBuf]) -> anyhow::Result<Vec<DocumentFile>> {
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(DocumentFile::new(name, bytes))
        })
        .collect()
}

fn render_report(state: &SessionState) -> String {
    let Some(result) = &state.result else {
        return "No analysis result available.".to_string();
    };

    let mut out = String::new();
    out.push_str("\n=== Capital Leakage Report ===\n");
    if state.is_degraded() {
        out.push_str("[Demo Mode] backend unavailable, showing demonstration data\n");
    }

    out.push_str(&format!(
        "\nTotal capital leakage: {} per year (estimated)\n",
        format_eur(result.total_leakage)
    ));
    out.push_str(&format!("{} opportunities found\n\n", result.subsidies.len()));

    for subsidy in &result.subsidies {
        out.push_str(&format!(
            "  {:<34} {:<18} {:<10} {:>12}\n",
            subsidy.item,
            subsidy.subsidy,
            subsidy.category.as_label(),
            format_eur(subsidy.amount)
        ));
    }

    let benchmark = &result.benchmark;
    out.push_str(&format!(
        "\nSubsidy utilization: you {}% vs competitors {}% — {}% left on the table\n",
        benchmark.you,
        benchmark.competitors,
        utilization_gap(benchmark)
    ));

    let analyzed = result
        .analyzed_at_parsed()
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| result.analyzed_at.clone());
    out.push_str(&format!(
        "Analyzed: {} • {} document(s)\n",
        analyzed, result.document_count
    ));

    out
}

#[cfg(test)]
mod tests {
    use subsidyscope_core::scan::demo::demo_report;
    use subsidyscope_domain::DataOrigin;

    use super::*;

    #[test]
    fn args_require_at_least_one_document() {
        assert!(parse_args(vec![]).is_err());
        assert!(parse_args(vec!["--csv".into(), "out.csv".into()]).is_err());

        let args = parse_args(vec!["ledger.pdf".into(), "payroll.csv".into()]).unwrap();
        assert_eq!(args.documents.len(), 2);
        assert!(args.csv_output.is_none());
    }

    #[test]
    fn csv_flag_defaults_to_the_fixed_filename() {
        let args = parse_args(vec!["ledger.pdf".into(), "--csv".into()]).unwrap();
        assert_eq!(args.csv_output.unwrap(), PathBuf::from(CSV_EXPORT_FILENAME));
    }

    #[test]
    fn degraded_report_carries_the_demo_badge() {
        let mut state = SessionState::new();
        state.result = Some(demo_report());
        state.origin = DataOrigin::Demo;
        state.backend_available = false;

        let rendered = render_report(&state);
        assert!(rendered.contains("[Demo Mode]"));
        assert!(rendered.contains("-€\u{a0}14.200"));
        assert!(rendered.contains("5 opportunities found"));
    }

    #[test]
    fn live_report_has_no_demo_badge() {
        let mut state = SessionState::new();
        state.result = Some(demo_report());

        let rendered = render_report(&state);
        assert!(!rendered.contains("[Demo Mode]"));
    }
}

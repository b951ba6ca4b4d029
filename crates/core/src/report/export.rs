//! CSV export of detected opportunities
//!
//! Fields are written through a real CSV writer, so embedded commas and
//! quotes are quoted per convention. The download filename lives in
//! [`subsidyscope_domain::constants::CSV_EXPORT_FILENAME`]; writing the
//! file is the caller's concern.

use subsidyscope_domain::{Result, ScanError, SubsidyOpportunity};

/// Render the opportunity table as CSV
///
/// Header row `Item,Subsidy,Category,Amount`, then one row per
/// opportunity with the raw signed amount.
pub fn render_csv(subsidies: &[SubsidyOpportunity]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Item", "Subsidy", "Category", "Amount"])
        .map_err(|e| ScanError::Internal(format!("csv header: {e}")))?;

    for subsidy in subsidies {
        let amount = format_amount(subsidy.amount);
        writer
            .write_record([
                subsidy.item.as_str(),
                subsidy.subsidy.as_str(),
                subsidy.category.as_label(),
                amount.as_str(),
            ])
            .map_err(|e| ScanError::Internal(format!("csv row: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScanError::Internal(format!("csv flush: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ScanError::Internal(format!("csv encoding: {e}")))
}

/// Amounts are exported as plain numbers, without the display formatting
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

// src/export.rs
use anyhow::{Context, Result};
use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::AnalysisResult;

pub const EXPORT_FILE_NAME: &str = "claimsmart_results.csv";

const CSV_HEADER: [&str; 4] = [
    "Claim ID",
    "Billed Amount",
    "Success Probability",
    "Predicted Recovery",
];

/// Renders the top-5 table as CSV text, one row per appeal in service
/// order. Probabilities become one-decimal percentages, recoveries dollar
/// values with two decimals, billed amounts stay raw.
pub fn to_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for appeal in &result.top_5_appeals {
        writer.write_record(&[
            appeal.claim_id.clone(),
            format!("{}", appeal.billed_amount),
            format!("{:.1}%", appeal.success_probability * 100.0),
            format!("${:.2}", appeal.predicted_recovery),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

pub fn write_csv(result: &AnalysisResult, path: &Path) -> Result<()> {
    let text = to_csv(result)?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "exported results");
    Ok(())
}

/// Asks the user where to put the export and writes it there. Returns the
/// chosen path, or None when the dialog was cancelled.
pub fn save_with_dialog(result: &AnalysisResult) -> Result<Option<PathBuf>> {
    let picked = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name(EXPORT_FILE_NAME)
        .set_title("Export Results CSV")
        .save_file();

    match picked {
        Some(path) => {
            write_csv(result, &path)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClaimAppeal;

    fn single_appeal_result() -> AnalysisResult {
        AnalysisResult {
            total_claims: 10,
            recommended_appeals: 6,
            top_5_appeals: vec![ClaimAppeal {
                claim_id: "C1".to_string(),
                billed_amount: 1000.0,
                success_probability: 0.8,
                predicted_recovery: 250.5,
            }],
            total_estimated_recovery: None,
            avg_success_probability: None,
        }
    }

    #[test]
    fn golden_row_formatting() {
        let text = to_csv(&single_appeal_result()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Claim ID,Billed Amount,Success Probability,Predicted Recovery")
        );
        assert_eq!(lines.next(), Some("C1,1000,80.0%,$250.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rows_follow_service_order() {
        let mut result = single_appeal_result();
        result.top_5_appeals.push(ClaimAppeal {
            claim_id: "C9".to_string(),
            billed_amount: 500.25,
            success_probability: 0.515,
            predicted_recovery: 100.0,
        });

        let text = to_csv(&result).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "C1,1000,80.0%,$250.50");
        assert_eq!(lines[2], "C9,500.25,51.5%,$100.00");
    }

    #[test]
    fn empty_result_exports_header_only() {
        let mut result = single_appeal_result();
        result.top_5_appeals.clear();
        let text = to_csv(&result).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn writes_file_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        write_csv(&single_appeal_result(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Claim ID,"));
        assert!(written.contains("C1,1000,80.0%,$250.50"));
    }
}

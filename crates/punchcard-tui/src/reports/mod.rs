//! Pay report rendering and export
//!
//! The rows come from the server as-is; this module only renders them to
//! CSV or JSON and writes the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use punchcard_core::{PayPeriod, ReportRow};

use crate::app::ReportFormatConfig;

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl From<ReportFormatConfig> for ReportFormat {
    fn from(config: ReportFormatConfig) -> Self {
        match config {
            ReportFormatConfig::Csv => ReportFormat::Csv,
            ReportFormatConfig::Json => ReportFormat::Json,
        }
    }
}

/// File name for an exported report
pub fn filename(period: PayPeriod, format: ReportFormat) -> String {
    format!(
        "punchcard_pay_{}_{}.{}",
        period.start,
        period.end,
        format.extension()
    )
}

/// Render rows in the requested format
pub fn render(rows: &[ReportRow], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        ReportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for row in rows {
                wtr.serialize(row)?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
    }
}

/// Write the rendered report into `dir`, returning the file path
pub fn export(
    rows: &[ReportRow],
    period: PayPeriod,
    format: ReportFormat,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(filename(period, format));
    fs::write(&path, render(rows, format)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use punchcard_core::EmployeeId;

    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                employee_id: EmployeeId::new("e-1"),
                employee_name: "Sam Ortiz".to_string(),
                regular_hours: 64.0,
                overtime_hours: 0.0,
            },
            ReportRow {
                employee_id: EmployeeId::new("e-2"),
                employee_name: "Dana Reyes".to_string(),
                regular_hours: 80.0,
                overtime_hours: 6.5,
            },
        ]
    }

    fn period() -> PayPeriod {
        PayPeriod::new(
            NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 2).unwrap(),
        )
    }

    #[test]
    fn test_filename_encodes_period_and_format() {
        assert_eq!(
            filename(period(), ReportFormat::Csv),
            "punchcard_pay_2026-07-20_2026-08-02.csv"
        );
        assert_eq!(
            filename(period(), ReportFormat::Json),
            "punchcard_pay_2026-07-20_2026-08-02.json"
        );
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let rendered = render(&rows(), ReportFormat::Csv).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "employeeId,employeeName,regularHours,overtimeHours"
        );
        assert!(lines[2].starts_with("e-2,Dana Reyes,80.0,6.5"));
    }

    #[test]
    fn test_json_round_trips() {
        let rendered = render(&rows(), ReportFormat::Json).unwrap();
        let parsed: Vec<ReportRow> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, rows());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export(&rows(), period(), ReportFormat::Csv, dir.path()).unwrap();
        assert!(path.exists());
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Sam Ortiz"));
    }
}

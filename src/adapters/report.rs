use crate::domain::model::RunReport;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::validate_file_extension;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const REPORT_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    suite: &'a str,
    base_url: &'a str,
    started_at: DateTime<Utc>,
    aborted: bool,
    passed: usize,
    total: usize,
    total_duration_ms: u64,
    results: Vec<CaseRow<'a>>,
}

#[derive(Debug, Serialize)]
struct CaseRow<'a> {
    name: &'a str,
    passed: bool,
    duration_ms: u64,
}

fn rows(report: &RunReport) -> Vec<CaseRow<'_>> {
    report
        .results
        .iter()
        .map(|r| CaseRow {
            name: &r.name,
            passed: r.passed,
            duration_ms: r.duration.as_millis() as u64,
        })
        .collect()
}

/// 依副檔名輸出 JSON 或 CSV 報告
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    validate_file_extension("report", path, &REPORT_FORMATS)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let data = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => render_csv(report)?,
        Some("json") => render_json(report)?,
        _ => {
            return Err(SmokeError::ConfigError {
                message: format!("Unsupported report path: {}", path.display()),
            })
        }
    };

    fs::write(path, data)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

fn render_json(report: &RunReport) -> Result<Vec<u8>> {
    let document = ReportDocument {
        suite: &report.suite,
        base_url: &report.base_url,
        started_at: report.started_at,
        aborted: report.aborted,
        passed: report.passed(),
        total: report.total(),
        total_duration_ms: report.total_duration().as_millis() as u64,
        results: rows(report),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

fn render_csv(report: &RunReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows(report) {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| SmokeError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CaseResult;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sample_report() -> RunReport {
        let mut report = RunReport::new("render-deploy", "https://openfood-backend.onrender.com");
        report.results.push(CaseResult {
            name: "Backend Health".to_string(),
            passed: true,
            duration: Duration::from_millis(120),
        });
        report.results.push(CaseResult {
            name: "YouTube Search".to_string(),
            passed: false,
            duration: Duration::from_millis(30),
        });
        report
    }

    #[test]
    fn test_write_json_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/run.json");

        write_report(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["suite"], "render-deploy");
        assert_eq!(value["passed"], 1);
        assert_eq!(value["total"], 2);
        assert_eq!(value["total_duration_ms"], 150);
        assert_eq!(value["results"][1]["name"], "YouTube Search");
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_write_csv_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run.csv");

        write_report(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "name,passed,duration_ms");
        assert_eq!(lines[1], "Backend Health,true,120");
        assert_eq!(lines[2], "YouTube Search,false,30");
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run.txt");

        assert!(write_report(&sample_report(), &path).is_err());
        assert!(!path.exists());
    }
}

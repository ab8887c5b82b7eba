// ============================================================
// ANALYZE CSV USE CASE
// ============================================================
// Orchestrate CSV decoding and the summarizer core

use std::path::Path;

use crate::domain::error::Result;
use crate::domain::summary::{analyze, DataSummary};
use crate::infrastructure::csv::CsvParser;

/// Parse an uploaded CSV payload and reduce it to aggregate statistics.
#[derive(Default)]
pub struct AnalyzeCsvUseCase;

impl AnalyzeCsvUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Analyze raw CSV text (the upload path).
    pub fn execute_content(&self, content: &str) -> Result<DataSummary> {
        let delimiter = CsvParser::detect_delimiter(content);
        let rows = CsvParser::new()
            .with_delimiter(delimiter)
            .parse_content(content)?;

        tracing::info!(rows = rows.len(), "analyzing uploaded CSV");
        Ok(analyze(&rows))
    }

    /// Analyze a CSV file on disk.
    pub fn execute_file(&self, path: &Path) -> Result<DataSummary> {
        let rows = CsvParser::parse_file_auto_detect(path)?;
        tracing::info!(rows = rows.len(), path = %path.display(), "analyzing CSV file");
        Ok(analyze(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_csv_end_to_end() {
        let content = "Date,Amount,BA\n2024-01-05,100,Alice\n2024-01-20,50,Bob\n2024-02-01,200,Alice";
        let summary = AnalyzeCsvUseCase::new().execute_content(content).unwrap();

        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.total_amount, 350.0);
        assert_eq!(summary.top_ba.unwrap().name, "Alice");
        assert_eq!(summary.monthly_trend[0].month, "Jan 2024");
    }

    #[test]
    fn test_semicolon_delimited_upload() {
        let content = "Date;Amount;Customer\n2024-01-05;10;Ann\n2024-01-06;20;Ben";
        let summary = AnalyzeCsvUseCase::new().execute_content(content).unwrap();

        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.total_amount, 30.0);
    }

    #[test]
    fn test_empty_upload_yields_empty_summary() {
        let summary = AnalyzeCsvUseCase::new().execute_content("").unwrap();
        assert_eq!(summary, DataSummary::empty());
    }
}

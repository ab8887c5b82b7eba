// ============================================================
// CSV PARSER
// ============================================================
// Decode CSV files into typed rows with encoding fallback

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::csv::{Cell, Row};
use crate::domain::error::AppError;

/// CSV reader configuration.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse a CSV file into typed rows.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Row>, AppError> {
        let content = read_with_encoding_fallback(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from a string.
    ///
    /// The first record supplies the header set; short records pad with
    /// empty cells. An empty body yields no rows, not an error.
    pub fn parse_content(&self, content: &str) -> Result<Vec<Row>, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(build_row(index, &headers, &record));
        }

        Ok(rows)
    }

    /// Pick the delimiter whose per-line count is high and consistent
    /// across the first lines of the sample.
    pub fn detect_delimiter(content: &str) -> u8 {
        const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

        let sample: Vec<&str> = content.lines().take(10).collect();
        if sample.is_empty() {
            return b',';
        }

        let mut best = (b',', 0.0f32);
        for candidate in CANDIDATES {
            let counts: Vec<usize> = sample
                .iter()
                .map(|line| line.bytes().filter(|&b| b == candidate).count())
                .collect();

            let mean = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
            let variance = counts
                .iter()
                .map(|&c| (c as f32 - mean).powi(2))
                .sum::<f32>()
                / counts.len() as f32;

            let score = mean / (1.0 + variance.sqrt());
            if score > best.1 {
                best = (candidate, score);
            }
        }

        best.0
    }

    /// Parse a CSV file with automatic delimiter detection.
    pub fn parse_file_auto_detect(path: &Path) -> Result<Vec<Row>, AppError> {
        let content = read_with_encoding_fallback(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::default().with_delimiter(delimiter).parse_content(&content)
    }
}

fn build_row(index: usize, headers: &StringRecord, record: &StringRecord) -> Row {
    let cells = headers
        .iter()
        .enumerate()
        .map(|(i, header)| Cell::new(header.to_string(), record.get(i).unwrap_or("")))
        .collect();
    Row::new(index, cells)
}

/// Read a file as UTF-8, decoding legacy exports as Windows-1252.
fn read_with_encoding_fallback(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(err) => {
            let (content, _, _) = WINDOWS_1252.decode(err.as_bytes());
            Ok(content.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::CellValue;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let rows = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells.len(), 3);
        assert_eq!(rows[0].cells[0].name, "name");
        assert_eq!(rows[0].cells[0].value, CellValue::Text("Alice".to_string()));
        assert_eq!(rows[0].cells[1].value, CellValue::Number(30.0));
    }

    #[test]
    fn test_short_records_pad_with_empty_cells() {
        let content = "a,b,c\n1,2";
        let rows = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(rows[0].cells[2].value, CellValue::Empty);
    }

    #[test]
    fn test_empty_content_yields_no_rows() {
        let rows = CsvParser::new().parse_content("").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvParser::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvParser::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvParser::detect_delimiter("a\tb\nc\td"), b'\t');
    }

    #[test]
    fn test_values_are_trimmed_before_coercion() {
        let content = "amount,name\n 42 , Bob ";
        let rows = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(rows[0].cells[0].value, CellValue::Number(42.0));
        assert_eq!(rows[0].cells[1].value, CellValue::Text("Bob".to_string()));
    }
}

// ============================================================
// CELL VALUE
// ============================================================
// A decoded CSV cell: numeric, textual, or absent

use serde::{Deserialize, Serialize};

/// A single decoded cell value.
///
/// Serialized untagged so JSON round-trips as number / string / null,
/// matching what the upstream decoder hands to the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Build a value from a raw CSV cell, coercing number-looking text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    /// Best-effort coercion to a monetary amount.
    ///
    /// The decoder usually coerces numeric cells already, but the value may
    /// still arrive as a number-looking string; anything unresolvable
    /// contributes zero rather than an error.
    pub fn as_amount(&self) -> f64 {
        match self {
            CellValue::Number(n) if n.is_finite() => *n,
            CellValue::Number(_) => 0.0,
            CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Empty => 0.0,
        }
    }

    /// Render as a grouping key.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_coerces_numbers() {
        assert_eq!(CellValue::from_raw("42"), CellValue::Number(42.0));
        assert_eq!(CellValue::from_raw(" 3.5 "), CellValue::Number(3.5));
        assert_eq!(
            CellValue::from_raw("Alice"),
            CellValue::Text("Alice".to_string())
        );
        assert_eq!(CellValue::from_raw(""), CellValue::Empty);
        assert_eq!(CellValue::from_raw("   "), CellValue::Empty);
    }

    #[test]
    fn test_dates_stay_textual() {
        assert_eq!(
            CellValue::from_raw("2024-01-05"),
            CellValue::Text("2024-01-05".to_string())
        );
    }

    #[test]
    fn test_as_amount_parses_numeric_text() {
        assert_eq!(CellValue::Text("12.5".to_string()).as_amount(), 12.5);
        assert_eq!(CellValue::Number(100.0).as_amount(), 100.0);
        assert_eq!(CellValue::Text("n/a".to_string()).as_amount(), 0.0);
        assert_eq!(CellValue::Empty.as_amount(), 0.0);
    }

    #[test]
    fn test_display_string_drops_trailing_zero() {
        assert_eq!(CellValue::Number(1000.0).to_display_string(), "1000");
        assert_eq!(CellValue::Number(10.5).to_display_string(), "10.5");
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let json = serde_json::to_string(&CellValue::Number(7.0)).unwrap();
        assert_eq!(json, "7.0");
        let back: CellValue = serde_json::from_str("\"west\"").unwrap();
        assert_eq!(back, CellValue::Text("west".to_string()));
        let null: CellValue = serde_json::from_str("null").unwrap();
        assert_eq!(null, CellValue::Empty);
    }
}

// ============================================================
// SUMMARY TYPES
// ============================================================
// Output contract consumed by rendering and narrative generation

use serde::{Deserialize, Serialize};

/// A named, ranked value (leaderboard or breakdown entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub value: f64,
}

/// One bucket of the chronological trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: f64,
}

/// Aggregate statistics for one uploaded data set.
///
/// An immutable snapshot; field names on the wire are part of the contract
/// with downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    pub total_rows: usize,
    pub total_amount: f64,
    #[serde(rename = "topBA")]
    pub top_ba: Option<RankedEntry>,
    pub monthly_trend: Vec<TrendPoint>,
    pub category_breakdown: Vec<RankedEntry>,
    pub headers: Vec<String>,
}

impl DataSummary {
    /// The summary of an input with no rows.
    pub fn empty() -> Self {
        Self {
            total_rows: 0,
            total_amount: 0.0,
            top_ba: None,
            monthly_trend: Vec::new(),
            category_breakdown: Vec::new(),
            headers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let summary = DataSummary {
            total_rows: 1,
            total_amount: 10.0,
            top_ba: Some(RankedEntry {
                name: "Alice".to_string(),
                value: 10.0,
            }),
            monthly_trend: vec![TrendPoint {
                month: "Jan 2024".to_string(),
                value: 10.0,
            }],
            category_breakdown: Vec::new(),
            headers: vec!["Amount".to_string()],
        };
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["totalRows"], 1);
        assert_eq!(json["totalAmount"], 10.0);
        assert_eq!(json["topBA"]["name"], "Alice");
        assert_eq!(json["monthlyTrend"][0]["month"], "Jan 2024");
        assert!(json["categoryBreakdown"].as_array().unwrap().is_empty());
        assert_eq!(json["headers"][0], "Amount");
    }

    #[test]
    fn test_empty_summary_shape() {
        let summary = DataSummary::empty();
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.total_amount, 0.0);
        assert!(summary.top_ba.is_none());
        assert!(summary.monthly_trend.is_empty());
        assert!(summary.category_breakdown.is_empty());
        assert!(summary.headers.is_empty());
    }
}

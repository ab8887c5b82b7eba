// ============================================================
// ROW ANALYZER
// ============================================================
// One synchronous pass over decoded rows, then ranking

use super::aggregate_map::AggregateMap;
use super::column_roles::ColumnRoles;
use super::period::{period_key, sort_chronologically};
use super::stats::{DataSummary, RankedEntry, TrendPoint};
use crate::domain::csv::{CellValue, Row};

/// Entries kept in the category breakdown.
const CATEGORY_LIMIT: usize = 5;

/// Reduce decoded rows to aggregate statistics.
///
/// Never fails: malformed amounts contribute zero, unassigned roles skip
/// their aggregation, and an empty input yields the all-zero summary.
pub fn analyze(rows: &[Row]) -> DataSummary {
    let first_row = match rows.first() {
        Some(row) => row,
        None => return DataSummary::empty(),
    };

    let headers = first_row.headers();
    let roles = ColumnRoles::detect(first_row);

    let mut total_amount = 0.0;
    let mut dimension_map = AggregateMap::new();
    let mut period_map = AggregateMap::new();
    let mut category_map = AggregateMap::new();

    for row in rows {
        let amount = roles
            .amount_column
            .as_deref()
            .and_then(|column| row.get(column))
            .map(CellValue::as_amount)
            .unwrap_or(0.0);
        total_amount += amount;

        if let Some(value) = assigned_value(roles.dimension_column.as_deref(), row) {
            dimension_map.add(&value.to_display_string(), amount);
        }

        if let Some(value) = assigned_value(roles.date_column.as_deref(), row) {
            period_map.add(&period_key(&value.to_display_string()), amount);
        }

        if let Some(value) = assigned_value(roles.category_column.as_deref(), row) {
            category_map.add(&value.to_display_string(), amount);
        }
    }

    let top_ba = dimension_map.top_entry().map(|(name, value)| RankedEntry {
        name: name.to_string(),
        value,
    });

    let mut trend = period_map.into_entries();
    sort_chronologically(&mut trend);
    let monthly_trend = trend
        .into_iter()
        .map(|(month, value)| TrendPoint { month, value })
        .collect();

    let mut breakdown = rank_descending(category_map);
    breakdown.truncate(CATEGORY_LIMIT);
    let category_breakdown = breakdown
        .into_iter()
        .map(|(name, value)| RankedEntry { name, value })
        .collect();

    DataSummary {
        total_rows: rows.len(),
        total_amount,
        top_ba,
        monthly_trend,
        category_breakdown,
        headers,
    }
}

/// The row's value for an assigned role column, if present and non-empty.
fn assigned_value<'a>(column: Option<&str>, row: &'a Row) -> Option<&'a CellValue> {
    let value = row.get(column?)?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Entries sorted by value descending; the stable sort keeps first-seen
/// order among ties.
fn rank_descending(map: AggregateMap) -> Vec<(String, f64)> {
    let mut entries = map.into_entries();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}

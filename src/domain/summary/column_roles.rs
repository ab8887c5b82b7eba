// ============================================================
// COLUMN ROLE DETECTION
// ============================================================
// Assign semantic roles to columns from naming conventions and
// first-row value types

use crate::domain::csv::{CellValue, Row};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)amount|price|value|net|sales").unwrap());
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)date|month|year|day|time").unwrap());
// The dimension could be "Business Area", "Sold-to", "Customer", or explicitly "BA"
static DIMENSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ba|business|sold-to|customer|agent").unwrap());
static CATEGORY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)category|group|type|material").unwrap());

/// A pure predicate over (column name, first-row value).
type RolePredicate = fn(&str, &CellValue) -> bool;

fn name_matches_amount(name: &str, _value: &CellValue) -> bool {
    AMOUNT_PATTERN.is_match(name)
}

fn name_matches_date(name: &str, _value: &CellValue) -> bool {
    DATE_PATTERN.is_match(name)
}

fn name_matches_dimension(name: &str, _value: &CellValue) -> bool {
    DIMENSION_PATTERN.is_match(name)
}

fn name_matches_category(name: &str, _value: &CellValue) -> bool {
    CATEGORY_PATTERN.is_match(name)
}

fn value_is_numeric(_name: &str, value: &CellValue) -> bool {
    value.is_number()
}

fn value_is_text(_name: &str, value: &CellValue) -> bool {
    value.is_text()
}

/// Semantic roles assigned to a column set.
///
/// Each field is either a header name present in the row set or unset.
/// Roles resolve independently, so a single column may hold more than one
/// role when its name satisfies several pattern families.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub amount_column: Option<String>,
    pub date_column: Option<String>,
    pub dimension_column: Option<String>,
    pub category_column: Option<String>,
}

impl ColumnRoles {
    /// Infer roles from the header set and the first row's value types.
    ///
    /// Per role, predicates run in priority order and the first column
    /// satisfying one wins; a role with no match stays unset and its
    /// aggregation is simply skipped downstream.
    pub fn detect(first_row: &Row) -> Self {
        Self {
            amount_column: first_match(first_row, &[name_matches_amount, value_is_numeric]),
            date_column: first_match(first_row, &[name_matches_date]),
            dimension_column: first_match(first_row, &[name_matches_dimension, value_is_text]),
            category_column: first_match(first_row, &[name_matches_category]),
        }
    }
}

fn first_match(row: &Row, predicates: &[RolePredicate]) -> Option<String> {
    for predicate in predicates {
        if let Some(cell) = row.cells.iter().find(|c| predicate(&c.name, &c.value)) {
            return Some(cell.name.clone());
        }
    }
    None
}

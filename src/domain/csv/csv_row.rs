// ============================================================
// CSV ROW TYPES
// ============================================================
// Data structures representing decoded CSV content

use super::CellValue;
use serde::{Deserialize, Serialize};

/// A single named cell in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Original header name
    pub name: String,

    /// Decoded value
    pub value: CellValue,
}

impl Cell {
    /// Create a cell from a raw CSV field.
    pub fn new(name: String, raw: &str) -> Self {
        Self {
            name,
            value: CellValue::from_raw(raw),
        }
    }
}

/// A single decoded row. Cells keep the header order of the source file;
/// every row shares the first row's header set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row index (0-based)
    pub index: usize,

    /// All cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(index: usize, cells: Vec<Cell>) -> Self {
        Self { index, cells }
    }

    /// Look up a cell value by its original header name.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.cells.iter().find(|c| c.name == name).map(|c| &c.value)
    }

    /// Header names in source order.
    pub fn headers(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_header_name() {
        let row = Row::new(
            0,
            vec![
                Cell::new("Amount".to_string(), "100"),
                Cell::new("BA".to_string(), "Alice"),
            ],
        );

        assert_eq!(row.get("Amount"), Some(&CellValue::Number(100.0)));
        assert_eq!(row.get("BA"), Some(&CellValue::Text("Alice".to_string())));
        assert_eq!(row.get("Missing"), None);
        assert_eq!(row.headers(), vec!["Amount", "BA"]);
    }
}

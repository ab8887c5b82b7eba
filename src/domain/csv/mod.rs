// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Typed cells and rows produced by the CSV decoder
// No I/O, no async

mod cell_value;
mod csv_row;

pub use cell_value::CellValue;
pub use csv_row::{Cell, Row};

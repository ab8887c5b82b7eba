// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV decoding with delimiter and encoding detection

mod csv_parser;

pub use csv_parser::CsvParser;

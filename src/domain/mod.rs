pub mod error;
pub mod llm_config;
pub mod story;

// CSV cells and rows
pub mod csv;

// Summarizer core
pub mod summary;

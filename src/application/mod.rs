pub mod use_cases;

pub use use_cases::analyze_csv::AnalyzeCsvUseCase;
pub use use_cases::story::StoryUseCase;

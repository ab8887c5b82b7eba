pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

use std::sync::{Arc, Mutex};

use actix_web::web;

use crate::application::{AnalyzeCsvUseCase, StoryUseCase};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_clients::{GeminiClient, LLMClient};
use crate::interfaces::http::{start_server, HttpState};

pub use crate::domain::csv::{Cell, CellValue, Row};
pub use crate::domain::error::{AppError, Result};
pub use crate::domain::summary::{analyze, ColumnRoles, DataSummary, RankedEntry, TrendPoint};
pub use crate::infrastructure::csv::CsvParser;

pub async fn run() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(GeminiClient::new());
    let state = web::Data::new(HttpState {
        analyzer: AnalyzeCsvUseCase::new(),
        story: StoryUseCase::new(llm_client.clone()),
        llm_client,
        default_llm: config.llm.clone(),
        logs: Arc::new(Mutex::new(Vec::new())),
    });

    tracing::info!("Starting HTTP server on {}:{}", config.host, config.port);
    let server = start_server(&config, state)?;
    server.await
}

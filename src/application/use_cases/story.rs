// ============================================================
// STORY USE CASE
// ============================================================
// Turn a data summary into a narrative report via the LLM backend

use std::sync::Arc;

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::domain::story::Story;
use crate::domain::summary::DataSummary;
use crate::infrastructure::llm_clients::LLMClient;

const SYSTEM_PROMPT: &str = "You are an expert data analyst and storyteller. \
Interpret the provided CSV summary data and write a narrative report in Markdown format. \
Give the report a catchy title. Explain the big picture (total performance). \
Highlight the heroes (top performers and categories). Analyze the journey \
(time trends, spikes, and drops, with plausible business reasons when the data \
itself gives none). Finish with recommendations for the future. \
Use emojis and clear headers.";

const DEFAULT_INSTRUCTION: &str = "Analyze the data and tell a compelling business \
story about the performance, trends, and anomalies.";

pub struct StoryUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl StoryUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>) -> Self {
        Self { llm_client }
    }

    pub async fn execute(
        &self,
        config: &LLMConfig,
        summary: &DataSummary,
        instruction: Option<String>,
    ) -> Result<Story> {
        if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(AppError::LLMError(
                "Missing API key for story generation".to_string(),
            ));
        }

        let user_prompt = build_user_prompt(summary, instruction.as_deref());
        let markdown = self
            .llm_client
            .generate(config, SYSTEM_PROMPT, &user_prompt)
            .await?;

        Ok(Story { markdown })
    }
}

/// Serialize the summary into prompt context.
///
/// The trend and breakdown go in full, not truncated, so the model sees
/// every bucket the dashboard sees.
fn build_user_prompt(summary: &DataSummary, instruction: Option<&str>) -> String {
    let top_ba = match &summary.top_ba {
        Some(entry) => format!("{} ({:.2})", entry.name, entry.value),
        None => "N/A".to_string(),
    };
    let trend =
        serde_json::to_string(&summary.monthly_trend).unwrap_or_else(|_| "[]".to_string());
    let breakdown =
        serde_json::to_string(&summary.category_breakdown).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Data Summary:\n\
         - Total Records: {}\n\
         - Total Amount/Value: {:.2}\n\
         - Top Performer: {}\n\
         - Time Period Trend: {}\n\
         - Category Breakdown: {}\n\n\
         Request: {}",
        summary.total_rows,
        summary.total_amount,
        top_ba,
        trend,
        breakdown,
        instruction.unwrap_or(DEFAULT_INSTRUCTION)
    )
}

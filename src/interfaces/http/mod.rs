use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::application::{AnalyzeCsvUseCase, StoryUseCase};
use crate::domain::llm_config::LLMConfig;
use crate::domain::summary::DataSummary;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_clients::LLMClient;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub analyzer: AnalyzeCsvUseCase,
    pub story: StoryUseCase,
    pub llm_client: Arc<dyn LLMClient + Send + Sync>,
    pub default_llm: LLMConfig,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Deserialize)]
pub struct StoryRequest {
    pub summary: DataSummary,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub config: Option<LLMConfig>,
}

#[post("/analyze")]
async fn analyze_upload(data: web::Data<HttpState>, body: String) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Analyzing uploaded CSV ({} bytes)", body.len()),
    );

    match data.analyzer.execute_content(&body) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Analysis failed: {}", e),
            );
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

#[post("/story")]
async fn generate_story(data: web::Data<HttpState>, req: web::Json<StoryRequest>) -> impl Responder {
    let config = req.config.clone().unwrap_or_else(|| data.default_llm.clone());

    if config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
        add_log(
            &data.logs,
            "ERROR",
            "HttpApi",
            "Story request rejected: no API key configured",
        );
        return HttpResponse::BadRequest()
            .body("Missing API key; set GEMINI_API_KEY or pass config.api_key");
    }

    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!(
            "Generating story (model={} rows={})",
            config.model, req.summary.total_rows
        ),
    );

    match data
        .story
        .execute(&config, &req.summary, req.instruction.clone())
        .await
    {
        Ok(story) => HttpResponse::Ok().json(story),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Story generation failed: {}", e),
            );
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}

#[post("/models")]
async fn list_models(data: web::Data<HttpState>, config: web::Json<LLMConfig>) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "HttpApi",
        &format!("Fetching models (base_url={})", config.base_url),
    );

    match data.llm_client.list_models(&config).await {
        Ok(models) => HttpResponse::Ok().json(models),
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "HttpApi",
                &format!("Failed to list models: {}", e),
            );
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap().clone();
    HttpResponse::Ok().json(logs)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(config: &AppConfig, state: web::Data<HttpState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(analyze_upload)
                .service(generate_story)
                .service(list_models)
                .service(get_logs)
                .service(health),
        )
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

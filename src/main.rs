//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; triage and chat live in the use cases.

use dotenv::dotenv;
use medihelp::adapters::chat::{MockChatAdapter, OpenAiChatAdapter};
use medihelp::adapters::ui::tui::TuiInputPort;
use medihelp::ports::{ChatPort, InputPort};
use medihelp::usecases::{ChatService, TriageService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    medihelp::adapters::ui::init_ui();

    let cfg = medihelp::shared::config::AppConfig::load().unwrap_or_default();

    // --- Chat adapter: live endpoint when a key is set, mock otherwise ---
    let chat_adapter: Arc<dyn ChatPort> = if cfg.is_chat_configured() {
        info!(
            model = %cfg.chat_model_or_default(),
            url = %cfg.chat_api_url_or_default(),
            "AI chat enabled with OpenAI-compatible adapter"
        );
        Arc::new(
            OpenAiChatAdapter::new(
                cfg.chat_api_url_or_default(),
                cfg.chat_api_key().unwrap_or_default(),
                cfg.chat_model_or_default(),
                Duration::from_secs(cfg.request_timeout_secs_or_default()),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("MEDIHELP_CHAT_API_KEY not set, using mock chat adapter");
        Arc::new(MockChatAdapter::new())
    };

    // --- Services ---
    let triage_service = Arc::new(TriageService::new());
    let chat_service = Arc::new(ChatService::new(chat_adapter));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        triage_service,
        chat_service,
        Duration::from_millis(cfg.analysis_delay_ms_or_default()),
    ));

    // --- Run (main menu -> Symptom Check / AI Chat) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

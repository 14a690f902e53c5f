//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, run UI.
//! No triage logic here; the rules live in the domain layer.

use dotenv::dotenv;
use post_care::adapters::ai::HuggingFaceAdapter;
use post_care::adapters::ui::tui::TuiInputPort;
use post_care::domain::SummaryComposer;
use post_care::ports::{InputPort, SummarizerPort};
use post_care::shared::config::AppConfig;
use post_care::usecases::AssessmentService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

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

    post_care::adapters::ui::init_ui();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            AppConfig::default()
        }
    };

    // --- Summarizer: optional, rule-based report is always available ---
    let summarizer = build_summarizer(&cfg)?;

    // --- Composer: built-in analyzers, configured fallback excerpt ---
    let composer =
        SummaryComposer::new().with_excerpt_chars(cfg.fallback_excerpt_chars_or_default());
    let service = Arc::new(AssessmentService::new(composer, summarizer));

    // --- UI: intake loop until the user stops ---
    let tui = TuiInputPort::new(service);
    tui.run().await.map_err(anyhow::Error::from)?;

    info!("session finished");
    Ok(())
}

fn build_summarizer(cfg: &AppConfig) -> anyhow::Result<Option<Arc<dyn SummarizerPort>>> {
    if !cfg.is_summarizer_configured() {
        warn!("HUGGINGFACE_API_TOKEN not set, narrative summaries disabled");
        return Ok(None);
    }
    let adapter = HuggingFaceAdapter::new(
        cfg.hf_api_token().unwrap_or_default(),
        cfg.summary_model_url_or_default(),
        cfg.summary_backup_model_url_or_default(),
        Duration::from_secs(cfg.summary_timeout_secs_or_default()),
    )?;
    info!(url = %cfg.summary_model_url_or_default(), "narrative summaries enabled");
    Ok(Some(Arc::new(adapter)))
}

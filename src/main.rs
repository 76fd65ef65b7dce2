//! Trip Planner Server
//! 
//! HTTP service that forwards trip parameters to Gemini and returns the generated itinerary

use anyhow::{Context, Result};
use tracing::info;

use tripplanner::config::{settings::LoggingConfig, AppConfig, Settings};
use tripplanner::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings come first: they carry the logging configuration
    let settings = Settings::new().context("Failed to load server settings")?;
    
    init_logging(&settings.logging)?;
    info!("{}", tripplanner::version_info());
    
    let app_config = AppConfig::load_default()
        .context("Failed to load configuration file")?;
    
    if settings.gemini.api_key.is_some() {
        info!("🔑 Server-side Gemini key configured; requests without a credential will use it");
    }
    
    let app = create_router(settings.clone()).await?;
    
    let addr = app_config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    
    info!("🚀 Trip planner server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("🧳 Plan endpoint: http://{}/v1/plans (model: {})", addr, settings.gemini.model);
    
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;
    
    Ok(())
}

/// Initialize logging system
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if logging.format == "json" {
        // JSON format logs (production environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(logging.level.as_str())
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format (development environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(logging.level.as_str())
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };
    
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    
    info!("Logging system initialized");
    Ok(())
}

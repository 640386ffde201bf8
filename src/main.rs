use anyhow::Context;
use clap::Parser;
use roll_bot::utils::logger;
use roll_bot::{create_router, AppState, ServeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 先讀 .env，讓 clap 的 env fallback 看得到
    dotenvy::dotenv().ok();

    let args = ServeConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting roll-bot v{}", env!("CARGO_PKG_VERSION"));

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        format = %config.format,
        application_id = config.application_id.as_deref().unwrap_or("-"),
        "✅ Listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

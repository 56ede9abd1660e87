//! english-exam-gen server entry point.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use english_exam_gen::config::{load_env_file, Cli, Config, API_KEY_ENV};
use english_exam_gen::generator::OpenAiGenerator;
use english_exam_gen::metrics::Metrics;
use english_exam_gen::server::api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read before tracing starts so RUST_LOG can come from the file.
    let env_file = load_env_file(Path::new(".env"));

    // Parse CLI arguments.
    let cli = Cli::parse();

    // Initialize tracing/logging.
    let filter = if cli.verbose {
        "english_exam_gen=debug,tower_http=debug"
    } else {
        "english_exam_gen=info,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter.into());

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }

    info!("english-exam-gen v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = env_file {
        warn!(error = %e, "Ignoring unreadable .env file");
    }

    // Load configuration.
    let config = Arc::new(Config::load(&cli.config)?);

    info!(
        api_url = %config.llm.api_url,
        model = %config.llm.model,
        vocabulary = %config.data.vocabulary_path.display(),
        exam_template = %config.data.exam_template_path.display(),
        "Configuration loaded"
    );

    let api_key = Config::api_key_from_env();
    if api_key.is_none() {
        warn!("{API_KEY_ENV} is not set; generation requests will fail");
    }

    let generator = Arc::new(OpenAiGenerator::new(&config.llm, api_key)?);
    let metrics = Metrics::new()?;
    let state = Arc::new(AppState::new(config.clone(), generator, metrics));

    // Build the HTTP router.
    let app = build_router(state);

    // Start the server.
    let listen_addr = cli.listen;
    info!(addr = listen_addr, "Starting server");

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Listening on {listen_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

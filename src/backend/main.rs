/**
 * ChatLink Server Entry Point
 *
 * Loads configuration (fail-fast), initializes tracing, and serves the
 * Axum application.
 */

use chatlink::backend::server::config::ServerConfig;
use chatlink::backend::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // All required variables are validated here, before any request is
    // accepted; a missing one is fatal.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            eprintln!("Configuration error: {e}");
            eprintln!("Please check the .env file in the server directory.");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

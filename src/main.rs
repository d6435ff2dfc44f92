use anyhow::Result;
use portfolio_site::config::Config;
use portfolio_site::{nav, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Navigation label gaps are authoring defects; refuse to start with them
    nav::validate()?;

    if config.resend_api_key.is_none() {
        info!("RESEND_API_KEY not set; contact submissions will be accepted without sending");
    }

    let port = config.port;
    let state = server::AppState::new(config)?;
    let app = server::router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use paystack_bridge::api::{self, AppState};
use paystack_bridge::config::Config;
use paystack_bridge::payments::gateway::PaystackGateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Paystack bridge");
    tracing::info!("Environment: {}", config.server.environment);
    if config.paystack.secret_key.is_none() {
        tracing::warn!(
            "PAYSTACK_SECRET_KEY is not set; payment operations will fail until it is configured"
        );
    }

    let gateway = Arc::new(PaystackGateway::new(&config.paystack)?);
    let app = api::router(AppState {
        config: config.clone(),
        gateway,
    });

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

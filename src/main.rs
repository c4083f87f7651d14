//! Process entry point: configuration, clients, router, server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use invoice_gateway::api::{create_router, AppState};
use invoice_gateway::clients::{HttpAccountingClient, StripeChargeClient};
use invoice_gateway::config::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path =
        std::env::var("GATEWAY_CONFIG").unwrap_or_else(|_| "./config/gateway.yaml".to_string());
    let settings = Settings::load(&config_path)?;

    let timeout = settings.request_timeout();
    let accounting = HttpAccountingClient::new(settings.accounting.clone(), timeout)?;
    let processor = StripeChargeClient::new(settings.processor.clone(), timeout)?;

    let listen_addr = settings.listen_addr.clone();
    let state = AppState::new(Arc::new(accounting), Arc::new(processor), settings);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!(addr = %listen_addr, "Invoice payment gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

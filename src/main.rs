use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use loagen::config::AppConfig;
use loagen::handlers;
use loagen::inventory::NetBoxClient;
use loagen::services::lookup::FALLBACK_TENANT;
use loagen::services::tenant::TenantRegistry;
use loagen::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up NETBOX_HOST, NETBOX_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::parse();

    let tenants = TenantRegistry::from_yaml_file(&config.tenants_file)?;
    if !tenants.contains(FALLBACK_TENANT) {
        tracing::warn!(
            "tenant registry has no '{}' entry; devices without a tenant slug cannot be resolved",
            FALLBACK_TENANT
        );
    }

    let inventory = NetBoxClient::new(
        &config.netbox_base_url(),
        &config.netbox_token,
        Duration::from_secs(config.netbox_timeout_secs),
    )
    .context("constructing NetBox client")?;

    let state = AppState::new(Arc::new(inventory), tenants);
    let app = handlers::router(state);

    tracing::info!("loagen listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}

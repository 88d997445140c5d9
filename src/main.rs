use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use portfolio_api::app::app;
use portfolio_api::auth::password;
use portfolio_api::config::{AppConfig, Environment};
use portfolio_api::state::AppState;
use portfolio_api::store::{Admin, MemoryStore, PgStore, PortfolioStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().context("configuration")?;

    let default_filter = match config.environment {
        Environment::Development => "portfolio_api=debug,tower_http=debug",
        Environment::Production => "portfolio_api=info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("starting portfolio API in {:?} mode", config.environment);

    let store: Arc<dyn PortfolioStore> = match config.database.url.clone() {
        Some(url) => {
            let pg = PgStore::connect(&url, config.database.max_connections)
                .await
                .context("connect to database")?;
            pg.migrate().await.context("apply schema")?;
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using the in-memory store (development only)");
            let memory = MemoryStore::new();
            seed_admin_from_env(&memory).await?;
            Arc::new(memory)
        }
    };

    let state = AppState::new(config.clone(), store);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server")?;

    Ok(())
}

/// The in-memory store starts empty; without a seeded administrator every
/// login fails. Postgres deployments provision via the `provision` binary
/// instead.
async fn seed_admin_from_env(store: &MemoryStore) -> anyhow::Result<()> {
    let (Ok(username), Ok(pwd)) = (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        tracing::warn!(
            "ADMIN_USERNAME/ADMIN_PASSWORD not set; no administrator is provisioned and login will always fail"
        );
        return Ok(());
    };

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| format!("{}@localhost", username));
    let github_username = std::env::var("ADMIN_GITHUB_USERNAME").ok();

    let password_hash = password::hash_password(&pwd)?;
    let admin = store
        .upsert_admin(Admin::new(username, email, password_hash, github_username))
        .await?;

    tracing::info!(admin = %admin.username, "seeded in-memory administrator from environment");
    Ok(())
}

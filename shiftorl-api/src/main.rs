//! # ShiftORL Site API Server
//!
//! HTTP backend for the ShiftORL recruiting site.
//!
//! ## Architecture
//!
//! The API server is built with Axum and provides:
//! - Form handlers (contact, job application, hiring inquiry) that validate
//!   input, store contact inquiries and send notification email via Resend
//! - Newsletter subscription
//! - Blog and job listing reads
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p shiftorl-api
//! ```

use shiftorl_api::{
    app::{build_router, AppState},
    config::Config,
};
use shiftorl_shared::{
    db::{
        migrations::run_migrations,
        pool::{close_pool, create_pool, DatabaseConfig},
    },
    email::ResendMailer,
    store::PgStore,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shiftorl_api=debug,shiftorl_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "ShiftORL API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;
    run_migrations(&pool).await?;

    if config.email.resend_api_key.is_none() {
        tracing::warn!(
            "RESEND_API_KEY not configured; applications and hiring inquiries will be rejected"
        );
    }
    let mailer = ResendMailer::new(
        config.email.resend_api_key.clone(),
        config.email.resend_api_url.clone(),
    );

    let bind_address = config.bind_address();
    let state = AppState::new(
        Arc::new(PgStore::new(pool.clone())),
        Arc::new(mailer),
        config,
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received, exiting...");
}

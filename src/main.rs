//! Pitch review API server.
//!
//! Boot order: configuration, logging, the single Postgres pool, optional
//! migrations, then the HTTP listener. On SIGINT/SIGTERM the listener drains
//! in-flight requests and the pool is closed before exit.

use std::sync::Arc;

use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pitch_review::adapters::auth::JwtSessionValidator;
use pitch_review::adapters::http::{self, AppState};
use pitch_review::adapters::notification::LoggingReviewNotifier;
use pitch_review::adapters::postgres::{
    PostgresMessageCounter, PostgresVerificationReader, PostgresVerificationRepository,
};
use pitch_review::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        "Starting pitch review service"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let state = app_state(&config, pool.clone());
    let app = http::app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

fn app_state(config: &AppConfig, pool: PgPool) -> AppState {
    AppState {
        repository: Arc::new(PostgresVerificationRepository::new(pool.clone())),
        reader: Arc::new(PostgresVerificationReader::new(pool.clone())),
        messages: Arc::new(PostgresMessageCounter::new(pool)),
        notifier: Arc::new(LoggingReviewNotifier::new()),
        session_validator: Arc::new(JwtSessionValidator::from_config(&config.auth)),
        review: config.review.clone(),
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining requests");
}

/*
 * Responsibility
 * - Load Config -> build the repo stack -> assemble the Router
 * - Apply middleware (request id / trace / limits)
 * - Start with axum::serve() and shut down on Ctrl-C / SIGTERM
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    api::v1::handlers::health::health,
    config::Config,
    middleware,
    repos::{CachedCommentRepo, CommentRepo, InMemoryCommentRepo, PgCommentRepo},
    services::{CommentService, cache::ValkeyClient},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,comment_service=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get lost.
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    let comments = CommentService::new(build_repo(&config).await?);
    tracing::info!(
        "starting comment service in {:?} mode on {} (storage: {})",
        config.app_env,
        config.addr,
        comments.backend_name()
    );

    let state = AppState::new(comments);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("comment service stopped");
    Ok(())
}

async fn build_repo(config: &Config) -> Result<Arc<dyn CommentRepo>> {
    let repo: Arc<dyn CommentRepo> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await
                .context("failed to connect to DATABASE_URL")?;
            Arc::new(PgCommentRepo::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; comments are kept in memory");
            Arc::new(InMemoryCommentRepo::new())
        }
    };

    let Some(redis_url) = &config.redis_url else {
        return Ok(repo);
    };

    let cache = ValkeyClient::new(redis_url)
        .await
        .context("failed to connect to REDIS_URL")?;
    tracing::info!(ttl = ?config.comment_cache_ttl, "comment list cache enabled");

    Ok(Arc::new(CachedCommentRepo::new(
        repo,
        cache,
        config.comment_cache_ttl,
    )))
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/rpc", api::v1::routes())
        .with_state(state);

    middleware::http::apply(router, config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}

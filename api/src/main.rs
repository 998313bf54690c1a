//! Post Feed API Server
//!
//! A small JSON API for creating short text posts and reading them back as
//! chronological, random, or recent-window feeds.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, InMemoryPostRepository, PostgresPostRepository, SystemClock};
use app::{FeedService, PostService};
use config::{Config, StorageBackend};
use domain::ports::{Clock, PostRepository};

/// Application state shared across all handlers
pub struct AppState<R, C>
where
    R: PostRepository,
    C: Clock,
{
    pub post_service: Arc<PostService<R, C>>,
    pub feed_service: Arc<FeedService<R, C>>,
    pub config: Config,
}

impl<R, C> AppState<R, C>
where
    R: PostRepository,
    C: Clock,
{
    /// Wire both services to one store and one clock
    pub fn new(posts: Arc<R>, clock: Arc<C>, config: Config) -> Self {
        let post_service = Arc::new(PostService::new(posts.clone(), clock.clone()));
        let feed_service = Arc::new(FeedService::new(posts, clock, config.recent_window));

        Self {
            post_service,
            feed_service,
            config,
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: PostRepository,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            post_service: self.post_service.clone(),
            feed_service: self.feed_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// CORS for the single configured browser origin
fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.cors_allowed_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(86400)))
}

/// Build the HTTP router for any store/clock pair
pub fn app_router<R, C>(state: AppState<R, C>) -> anyhow::Result<Router>
where
    R: PostRepository + 'static,
    C: Clock + 'static,
{
    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        // Health check
        .route("/health", get(health))
        // Posts
        .route(
            "/api/posts",
            get(handlers::list_posts::<R, C>).post(handlers::create_post::<R, C>),
        )
        .route("/api/posts/create", post(handlers::create_post::<R, C>))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn serve<R, C>(posts: Arc<R>, clock: Arc<C>, config: Config) -> anyhow::Result<()>
where
    R: PostRepository + 'static,
    C: Clock + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = app_router(AppState::new(posts, clock, config))?;

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,postfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Post Feed API...");

    // Load configuration
    let config = Config::from_env()?;
    let clock = Arc::new(SystemClock::new());

    tracing::info!(storage = %config.storage, "Selecting post store");
    match config.storage {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .context("DATABASE_URL must be set for the postgres storage backend")?;

            tracing::info!("Connecting to database...");
            let db = Database::connect(&url)
                .await
                .context("Failed to connect to database")?;
            ensure_schema(&db)
                .await
                .context("Failed to prepare database schema")?;
            tracing::info!("Database connected");

            serve(Arc::new(PostgresPostRepository::new(db)), clock, config).await
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory post store; posts are lost on restart");
            serve(Arc::new(InMemoryPostRepository::new()), clock, config).await
        }
    }
}

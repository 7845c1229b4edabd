//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing)
//! - Hold the shared application state
//! - Serve with graceful shutdown
//!
//! The outbound `reqwest::Client` in the state is constructed once here and
//! shared across all requests as an immutable, concurrency-safe singleton;
//! the pipeline itself holds no cross-request mutable state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::routes;
use crate::upstream::UpstreamDispatcher;
use crate::vertex::{MetadataClient, TokenProvider};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub dispatcher: UpstreamDispatcher,
    pub metadata: MetadataClient,
    pub tokens: Arc<dyn TokenProvider>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a server with the default credential source (the metadata
    /// service).
    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::new();
        let metadata = MetadataClient::from_config(client.clone(), &config.metadata);
        let tokens: Arc<dyn TokenProvider> = Arc::new(metadata.clone());
        Self::build(config, client, metadata, tokens)
    }

    /// Create a server with an injected credential source.
    pub fn with_token_provider(config: GatewayConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        let client = reqwest::Client::new();
        let metadata = MetadataClient::from_config(client.clone(), &config.metadata);
        Self::build(config, client, metadata, tokens)
    }

    fn build(
        config: GatewayConfig,
        client: reqwest::Client,
        metadata: MetadataClient,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        let state = AppState {
            config: Arc::new(config),
            dispatcher: UpstreamDispatcher::new(client),
            metadata,
            tokens,
        };
        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all routes and middleware.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/v1/score", post(routes::score::handle))
            .route(
                "/api/v1/explain",
                post(routes::explain::handle).options(routes::explain::preflight),
            )
            // Aliases kept for older clients; one handler serves them all.
            .route("/explain", post(routes::explain::handle))
            .route("/api/explain", post(routes::explain::handle))
            .route("/v1/explain", post(routes::explain::handle))
            .route("/healthz", get(routes::health::healthz))
            .route("/v1/ping", get(routes::health::ping))
            .route("/demo", get(routes::demo::index))
            .route("/demo/{*path}", get(routes::demo::asset))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server on the given listener until shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

mod adapter;
mod demo;
mod health;
mod json;
mod responder;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use bulwark_config::Config;
use bulwark_core::{SharedSink, TracingSink};
use tower_http::trace::{DefaultOnFailure, HttpMakeClassifier, TraceLayer};

pub use adapter::{Fallible, FallibleMarker, fallible};
pub use demo::DEMO_PATHS;
pub use json::{json_response, write_json};
pub use responder::respond;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server, reporting masked errors through `tracing`
    ///
    /// # Errors
    ///
    /// See [`Server::with_sink`]
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Build the server with a custom error sink
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the health path
    /// collides with a demo route
    pub fn with_sink(config: &Config, sink: SharedSink) -> anyhow::Result<Self> {
        config.validate()?;

        let server = &config.server;
        let mut app = Router::new();

        if server.demo.enabled {
            app = app.merge(demo::demo_router());
        }

        if server.health.enabled {
            let path = server.health.path.as_str();
            if server.demo.enabled && DEMO_PATHS.contains(&path) {
                anyhow::bail!("health path '{path}' collides with a demo route");
            }
            app = app.route(path, axum::routing::get(health::health_handler));
        }

        let router = app.layer(trace_layer()).with_state(sink);

        Ok(Self {
            router,
            listen_address: server.listen_address(),
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// HTTP tracing with 5xx failures demoted to `DEBUG`
///
/// Masked errors are already reported once through the [`EventSink`], and a
/// business error carrying a 5xx status is not reported at all.
///
/// [`EventSink`]: bulwark_core::EventSink
fn trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(tracing::Level::DEBUG))
}

//! Test server wrapper that starts Bulwark on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use bulwark_config::Config;
use bulwark_core::RecordingSink;
use bulwark_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
    sink: RecordingSink,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Masked errors are captured in a [`RecordingSink`] instead of the log
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let sink = RecordingSink::new();
        let server = Server::with_sink(&config, Arc::new(sink.clone()))?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
            sink,
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sink receiving every masked error
    pub fn sink(&self) -> &RecordingSink {
        &self.sink
    }

    /// GET `path` and return the status with the raw body
    pub async fn get(&self, path: &str) -> anyhow::Result<(u16, String)> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.text().await?))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

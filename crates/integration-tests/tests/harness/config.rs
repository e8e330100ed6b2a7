//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use bulwark_config::Config;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Loopback listener, health and demo routes enabled
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        Self { config }
    }

    /// Serve health checks on a different path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn without_demo(mut self) -> Self {
        self.config.server.demo.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Server configuration: defaults, optional config file, environment.

use anyhow::Context as _;
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5050;

/// Bind configuration for the HTTP server.
///
/// Layering, later wins: built-in defaults, an optional `lapwatch.toml` in
/// the working directory, then the `HOST`/`PORT` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the file and environment layers.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("lapwatch").required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .context("failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("invalid server configuration")
    }

    /// The socket address to bind, parsed from host and port.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

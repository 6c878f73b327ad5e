use config::builder::{ConfigBuilder, DefaultState};
use config::ConfigError;
use serde::Deserialize;
use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub collaborators: CollaboratorConfig,
    pub services: ServicesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// How the orchestrator reaches its collaborators.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorMode {
    /// Remote tonic services at the configured URLs.
    Grpc,
    /// Evaluate the predicates in-process.
    Local,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollaboratorConfig {
    pub mode: CollaboratorMode,
    pub fraud_detection_url: String,
    pub transaction_verification_url: String,
    pub suggestions_url: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl CollaboratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub host: String,
    pub fraud_detection_port: u16,
    pub transaction_verification_port: u16,
    pub suggestions_port: u16,
}

impl ServicesConfig {
    pub fn fraud_detection_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.addr(self.fraud_detection_port)
    }

    pub fn transaction_verification_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.addr(self.transaction_verification_port)
    }

    pub fn suggestions_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.addr(self.suggestions_port)
    }

    fn addr(&self, port: u16) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, port).parse()
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = with_defaults(config::Config::builder())?
            // Shared settings, then the per-environment overlay
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BOOKSTORE__SERVER__PORT=8081` sets `server.port`
            .add_source(
                config::Environment::with_prefix("BOOKSTORE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Built-in defaults only, no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        with_defaults(config::Config::builder())?
            .build()?
            .try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("collaborators.mode", "grpc")?
        .set_default("collaborators.fraud_detection_url", "http://fraud_detection:50051")?
        .set_default(
            "collaborators.transaction_verification_url",
            "http://transaction_verification:50052",
        )?
        .set_default("collaborators.suggestions_url", "http://suggestions:50053")?
        .set_default("collaborators.timeout_ms", 3000_i64)?
        .set_default("collaborators.connect_timeout_ms", 1000_i64)?
        .set_default("services.host", "0.0.0.0")?
        .set_default("services.fraud_detection_port", 50051_i64)?
        .set_default("services.transaction_verification_port", 50052_i64)?
        .set_default("services.suggestions_port", 50053_i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_deployment() {
        let config = Config::defaults().unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.collaborators.mode, CollaboratorMode::Grpc);
        assert_eq!(config.collaborators.timeout(), Duration::from_secs(3));
        assert_eq!(config.collaborators.fraud_detection_url, "http://fraud_detection:50051");
        assert_eq!(config.services.suggestions_addr().unwrap().port(), 50053);
    }

    #[test]
    fn test_server_addr_parses() {
        let server = ServerConfig { host: "127.0.0.1".to_string(), port: 8081 };
        assert_eq!(server.addr().unwrap(), "127.0.0.1:8081".parse().unwrap());
    }
}

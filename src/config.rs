use crate::error::ServerError;
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;
use tracing::{error, info};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Name reported by the root greeting, the health check and the API docs
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// CORS allowed origins, comma separated. Unset or `*` allows any origin.
    pub cors_origins: Option<String>,

    /// Seconds to wait after a shutdown signal before the listener stops
    #[serde(default)]
    pub shutdown_grace_secs: u64,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ServerError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match Self::from_vars(std::env::vars()) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Build a configuration from key/value pairs named like the environment variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the server address into a socket address
    pub fn socket_address(&self) -> Result<SocketAddr, ServerError> {
        let address = self.server_address();
        address
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ServerError::InvalidAddress(address))
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "prod" || self.environment.to_lowercase() == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            service_name: default_service_name(),
            cors_origins: None,
            shutdown_grace_secs: 0,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_service_name() -> String {
    "Vastu Architect AI Backend".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

use crate::config::Config;
use std::sync::Arc;

/// Shared, read-only data handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }
}

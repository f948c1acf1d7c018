//! Application-level errors for the composition root and demo binary.

use crate::config::ConfigError;
use thiserror::Error;
use tiered_client::ClientError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A store task panicked or was cancelled during shutdown.
    #[error("Store task failed: {0}")]
    StoreTask(String),
}

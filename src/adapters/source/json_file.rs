//! Implements DeliverySource by reading a JSON array of deliveries from disk.
//!
//! The whole file is read and parsed per load; order in the file is the order queries see.

use crate::domain::{Delivery, DomainError};
use crate::ports::DeliverySource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// JSON file source. One file holding `[ {delivery}, ... ]`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl DeliverySource for JsonFileSource {
    async fn load_deliveries(&self) -> Result<Vec<Delivery>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Source(format!(
                    "delivery file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(DomainError::Source(e.to_string())),
        };
        let deliveries: Vec<Delivery> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Parse(format!("{}: {}", self.path.display(), e))
        })?;
        info!(
            path = %self.path.display(),
            count = deliveries.len(),
            "read deliveries from JSON"
        );
        Ok(deliveries)
    }
}

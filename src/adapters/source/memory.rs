//! Implements DeliverySource over a vector the host already holds.

use crate::domain::{Delivery, DomainError};
use crate::ports::DeliverySource;

/// In-memory source. Each load hands out a copy; the held vector is never changed.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    deliveries: Vec<Delivery>,
}

impl InMemorySource {
    pub fn new(deliveries: Vec<Delivery>) -> Self {
        Self { deliveries }
    }
}

#[async_trait::async_trait]
impl DeliverySource for InMemorySource {
    async fn load_deliveries(&self) -> Result<Vec<Delivery>, DomainError> {
        Ok(self.deliveries.clone())
    }
}

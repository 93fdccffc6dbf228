//! Model inventory port
//!
//! Defines how the application layer asks an endpoint for its models.

use async_trait::async_trait;
use census_domain::{Endpoint, ProbeError};

/// Gateway that lists the models an endpoint serves
///
/// Implementations (adapters) live in the infrastructure layer. One call is
/// one probe: implementations must not retry, and must turn every expected
/// failure into a [`ProbeError`] rather than panicking.
#[async_trait]
pub trait ModelInventoryGateway: Send + Sync {
    /// Fetch model names in the order the endpoint reports them
    async fn list_models(&self, endpoint: &Endpoint) -> Result<Vec<String>, ProbeError>;
}

// Read-only query contract against the DCIM inventory (NetBox).
//
// The lookup chain only ever sees this trait, so tests substitute a
// fixture implementation and the rest of the pipeline never touches the
// network directly.

pub mod models;
pub mod netbox;

use async_trait::async_trait;

use models::{Device, Rack, RearPort, Site};

pub use netbox::NetBoxClient;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("record not found")]
    NotFound,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("response decode error: {0}")]
    Decode(String),
}

/// The five read operations the pipeline needs. Not-found and transport
/// failures are both terminal for the caller; only timeouts are reported
/// distinctly.
#[async_trait]
pub trait Inventory: Send + Sync {
    async fn device(&self, id: i64) -> Result<Device, InventoryError>;

    async fn rear_ports_for_device(&self, device_id: i64) -> Result<Vec<RearPort>, InventoryError>;

    async fn rear_port(&self, id: i64) -> Result<RearPort, InventoryError>;

    async fn site(&self, id: i64) -> Result<Site, InventoryError>;

    async fn rack(&self, id: i64) -> Result<Rack, InventoryError>;
}

use std::sync::Arc;

use crate::inventory::Inventory;
use crate::services::tenant::TenantRegistry;

/// Process-lifetime state shared by all requests: the injected inventory
/// client and the read-only tenant registry. Neither is mutated after
/// startup, so requests share it without locking.
pub struct AppState {
    pub inventory: Arc<dyn Inventory>,
    pub tenants: TenantRegistry,
}

impl AppState {
    pub fn new(inventory: Arc<dyn Inventory>, tenants: TenantRegistry) -> Arc<Self> {
        Arc::new(Self { inventory, tenants })
    }
}

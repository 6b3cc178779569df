use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use loagen::handlers;
use loagen::inventory::models::{Device, DeviceRef, Rack, RackRef, RearPort, Site, SiteRef};
use loagen::inventory::{Inventory, InventoryError};
use loagen::services::tenant::TenantRegistry;
use loagen::state::AppState;

const TENANTS_YAML: &str = r#"
tenants:
  default:
    name: Example Networks GmbH
    short: ExampleNet
    street: Beispielstrasse 1
    city: 60314 Frankfurt am Main
    noc: NOC Example Networks
    email: noc@example.net
    phone: "+49 69 000000"
    expiry: 60
"#;

/// Inventory stub backing the end-to-end tests: the reference chain of
/// rear port 42 on device 7 in rack R01 at site "Hall A".
#[derive(Debug, Default)]
pub struct StubInventory {
    pub devices: HashMap<i64, Device>,
    pub rear_ports: HashMap<i64, RearPort>,
    pub sites: HashMap<i64, Site>,
    pub racks: HashMap<i64, Rack>,
}

impl StubInventory {
    pub fn hall_a() -> Self {
        let mut stub = Self::default();

        stub.sites.insert(
            1,
            Site {
                id: 1,
                facility: Some("Hall A".into()),
            },
        );
        stub.racks.insert(
            3,
            Rack {
                id: 3,
                facility_id: Some("R01".into()),
            },
        );
        stub.devices.insert(
            7,
            Device {
                id: 7,
                name: Some("sw-core-1".into()),
                site: Some(SiteRef { id: 1 }),
                rack: Some(RackRef { id: 3 }),
                tenant: None,
                position: Some(12.0),
            },
        );
        for (id, name) in [(41, "Port 2"), (42, "Port 3")] {
            stub.rear_ports.insert(
                id,
                RearPort {
                    id,
                    name: name.into(),
                    device: Some(DeviceRef {
                        id: 7,
                        name: Some("sw-core-1".into()),
                    }),
                },
            );
        }

        stub
    }
}

#[async_trait]
impl Inventory for StubInventory {
    async fn device(&self, id: i64) -> Result<Device, InventoryError> {
        self.devices.get(&id).cloned().ok_or(InventoryError::NotFound)
    }

    async fn rear_ports_for_device(&self, device_id: i64) -> Result<Vec<RearPort>, InventoryError> {
        let mut ports: Vec<RearPort> = self
            .rear_ports
            .values()
            .filter(|port| port.device.as_ref().map(|d| d.id) == Some(device_id))
            .cloned()
            .collect();
        ports.sort_by_key(|port| port.id);
        Ok(ports)
    }

    async fn rear_port(&self, id: i64) -> Result<RearPort, InventoryError> {
        self.rear_ports.get(&id).cloned().ok_or(InventoryError::NotFound)
    }

    async fn site(&self, id: i64) -> Result<Site, InventoryError> {
        self.sites.get(&id).cloned().ok_or(InventoryError::NotFound)
    }

    async fn rack(&self, id: i64) -> Result<Rack, InventoryError> {
        self.racks.get(&id).cloned().ok_or(InventoryError::NotFound)
    }
}

/// Build the real router over the reference inventory.
pub fn app() -> Router {
    app_with(|_| {})
}

/// Build the router after mutating the reference inventory, to model
/// partial or broken inventory data.
pub fn app_with(mutate: impl FnOnce(&mut StubInventory)) -> Router {
    let mut inventory = StubInventory::hall_a();
    mutate(&mut inventory);

    let tenants = TenantRegistry::from_yaml(TENANTS_YAML).expect("test tenants yaml");
    handlers::router(AppState::new(Arc::new(inventory), tenants))
}

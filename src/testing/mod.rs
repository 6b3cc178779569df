use std::collections::HashMap;

use async_trait::async_trait;

use crate::inventory::models::{Device, DeviceRef, Rack, RackRef, RearPort, Site, SiteRef};
use crate::inventory::{Inventory, InventoryError};

/// In-memory inventory double for unit tests. Holds plain records keyed
/// by id; mutate them through the `*_mut` accessors to model partial
/// inventory data.
#[derive(Debug, Default)]
pub struct FixtureInventory {
    pub devices: HashMap<i64, Device>,
    pub rear_ports: HashMap<i64, RearPort>,
    pub sites: HashMap<i64, Site>,
    pub racks: HashMap<i64, Rack>,
    /// When set, device fetches fail as timeouts.
    pub timeout_on_device: bool,
}

impl FixtureInventory {
    /// The fully populated reference chain: rear port 42 "Port 3" on
    /// device 7 "sw-core-1" at U12 in rack R01, site facility "Hall A",
    /// no explicit tenant.
    pub fn hall_a() -> Self {
        let mut fixture = Self::default();

        fixture.sites.insert(
            1,
            Site {
                id: 1,
                facility: Some("Hall A".into()),
            },
        );
        fixture.racks.insert(
            3,
            Rack {
                id: 3,
                facility_id: Some("R01".into()),
            },
        );
        fixture.devices.insert(
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
        fixture.rear_ports.insert(
            41,
            RearPort {
                id: 41,
                name: "Port 2".into(),
                device: Some(DeviceRef {
                    id: 7,
                    name: Some("sw-core-1".into()),
                }),
            },
        );
        fixture.rear_ports.insert(
            42,
            RearPort {
                id: 42,
                name: "Port 3".into(),
                device: Some(DeviceRef {
                    id: 7,
                    name: Some("sw-core-1".into()),
                }),
            },
        );

        fixture
    }

    pub fn device_mut(&mut self, id: i64) -> &mut Device {
        self.devices.get_mut(&id).expect("fixture device")
    }

    pub fn rear_port_mut(&mut self, id: i64) -> &mut RearPort {
        self.rear_ports.get_mut(&id).expect("fixture rear port")
    }

    pub fn site_mut(&mut self, id: i64) -> &mut Site {
        self.sites.get_mut(&id).expect("fixture site")
    }

    pub fn rack_mut(&mut self, id: i64) -> &mut Rack {
        self.racks.get_mut(&id).expect("fixture rack")
    }

    pub fn clear_rear_ports(&mut self, device_id: i64) {
        self.rear_ports
            .retain(|_, port| port.device.as_ref().map(|d| d.id) != Some(device_id));
    }
}

#[async_trait]
impl Inventory for FixtureInventory {
    async fn device(&self, id: i64) -> Result<Device, InventoryError> {
        if self.timeout_on_device {
            return Err(InventoryError::Timeout);
        }
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

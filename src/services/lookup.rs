use crate::inventory::models::TenantRef;
use crate::inventory::{Inventory, InventoryError};

/// Tenant key used when a device carries no tenant slug. The registry
/// must have an entry for it; that is an operational precondition, not a
/// code-level fallback record.
pub const FALLBACK_TENANT: &str = "default";

/// Fully resolved physical location of a rear port. Every field is
/// mandatory; an incomplete record is never produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PortLocation {
    pub site_facility: String,
    pub rack_facility_id: String,
    pub rack_position: f64,
    pub device_name: String,
    pub rear_port_name: String,
    pub tenant_key: String,
}

/// Result of the port-enumeration path: the device's rear ports in
/// inventory order, plus the tenant identity a letter would be issued
/// under.
#[derive(Debug, Clone, PartialEq)]
pub struct DevicePorts {
    pub device_name: String,
    pub tenant_key: String,
    pub ports: Vec<(i64, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// An inventory call failed or a mandatory field was absent; the
    /// stage names the hop or field that could not be resolved.
    #[error("cannot resolve {0}")]
    Failed(&'static str),
}

fn require<T>(value: Option<T>, stage: &'static str) -> Result<T, LookupError> {
    value.ok_or(LookupError::Failed(stage))
}

fn require_text(value: Option<String>, stage: &'static str) -> Result<String, LookupError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(LookupError::Failed(stage)),
    }
}

fn stage_err(err: InventoryError, stage: &'static str) -> LookupError {
    match err {
        InventoryError::Timeout => LookupError::Failed("timeout"),
        _ => {
            tracing::error!(stage, error = %err, "inventory lookup failed");
            LookupError::Failed(stage)
        }
    }
}

fn tenant_key_or_default(tenant: Option<TenantRef>) -> String {
    match tenant {
        Some(t) if !t.slug.is_empty() => t.slug,
        _ => FALLBACK_TENANT.to_string(),
    }
}

/// Enumerate the rear ports of a device, for the picker view.
pub async fn resolve_for_device(
    inventory: &dyn Inventory,
    device_id: i64,
) -> Result<DevicePorts, LookupError> {
    let device = inventory
        .device(device_id)
        .await
        .map_err(|e| stage_err(e, "device"))?;

    let rear_ports = inventory
        .rear_ports_for_device(device_id)
        .await
        .map_err(|e| stage_err(e, "rear ports"))?;

    Ok(DevicePorts {
        device_name: device.name.unwrap_or_default(),
        tenant_key: tenant_key_or_default(device.tenant),
        ports: rear_ports.into_iter().map(|p| (p.id, p.name)).collect(),
    })
}

/// Walk the full chain rear port -> device -> site -> rack and produce a
/// complete location record.
///
/// Each hop is a strict prerequisite for the next, so the chain stops at
/// the first failure; no partial record is ever assembled. The only
/// defaulting rule is the tenant-key fallback.
pub async fn resolve_for_rear_port(
    inventory: &dyn Inventory,
    rear_port_id: i64,
) -> Result<PortLocation, LookupError> {
    let rear_port = inventory
        .rear_port(rear_port_id)
        .await
        .map_err(|e| stage_err(e, "rear-port"))?;

    if rear_port.name.is_empty() {
        return Err(LookupError::Failed("rear-port name"));
    }

    let device_ref = require(rear_port.device, "device")?;
    let device = inventory
        .device(device_ref.id)
        .await
        .map_err(|e| stage_err(e, "device"))?;

    let site_ref = require(device.site, "site")?;
    let site = inventory
        .site(site_ref.id)
        .await
        .map_err(|e| stage_err(e, "site"))?;

    // A device without a rack assignment cannot appear on a letter.
    let rack_ref = require(device.rack, "device's rack")?;
    let rack = inventory
        .rack(rack_ref.id)
        .await
        .map_err(|e| stage_err(e, "rack"))?;

    Ok(PortLocation {
        site_facility: require_text(site.facility, "site facility")?,
        rack_facility_id: require_text(rack.facility_id, "rack facility id")?,
        rack_position: require(device.position, "device position")?,
        device_name: require_text(device.name, "device name")?,
        rear_port_name: rear_port.name,
        tenant_key: tenant_key_or_default(device.tenant),
    })
}

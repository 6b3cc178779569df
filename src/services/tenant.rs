use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::render::LoaData;

fn default_expiry_days() -> i64 {
    60
}

/// Identity and contact data for one configured tenant (the letter's
/// "own organization" side).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TenantRecord {
    pub name: String,
    pub short: String,
    pub street: String,
    pub city: String,
    pub noc: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "expiry", default = "default_expiry_days")]
    pub expiry_days: i64,
}

#[derive(Debug, Deserialize)]
struct TenantsFile {
    tenants: HashMap<String, TenantRecord>,
}

/// Static tenant registry, loaded once at startup and read-only
/// thereafter. Lookups are exact-key and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    tenants: HashMap<String, TenantRecord>,
}

impl TenantRegistry {
    pub fn from_yaml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading tenants file {}", path.display()))?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let file: TenantsFile = serde_yaml::from_str(raw).context("parsing tenants file")?;
        Ok(Self {
            tenants: file.tenants,
        })
    }

    pub fn get(&self, key: &str) -> Option<&TenantRecord> {
        self.tenants.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tenants.contains_key(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantError {
    #[error("unknown tenant: {0}")]
    NotFound(String),
}

/// Merge the tenant's identity onto a partially filled document record.
///
/// An unknown key is a hard error, even for the fallback key itself; no
/// substitute tenant is ever used.
pub fn merge_tenant(
    registry: &TenantRegistry,
    key: &str,
    mut partial: LoaData,
) -> Result<LoaData, TenantError> {
    let tenant = registry
        .get(key)
        .ok_or_else(|| TenantError::NotFound(key.to_string()))?;

    partial.our_name = tenant.name.clone();
    partial.our_short = tenant.short.clone();
    partial.our_street = tenant.street.clone();
    partial.our_city = tenant.city.clone();
    partial.our_noc_name = tenant.noc.clone();
    partial.our_noc_email = tenant.email.clone();
    partial.our_noc_phone = tenant.phone.clone();
    partial.expiry_days = tenant.expiry_days;

    Ok(partial)
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::models::{Device, Paginated, Rack, RearPort, Site};
use super::{Inventory, InventoryError};

/// NetBox REST client. One instance is constructed at startup and shared
/// across requests; reqwest pools connections internally.
pub struct NetBoxClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl NetBoxClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, InventoryError> {
        let base = Url::parse(base_url).map_err(|e| InventoryError::Transport(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InventoryError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base,
            token: token.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, InventoryError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| InventoryError::Transport(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(classify)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound);
        }

        let response = response.error_for_status().map_err(classify)?;

        response
            .json::<T>()
            .await
            .map_err(|e| InventoryError::Decode(e.to_string()))
    }
}

fn classify(err: reqwest::Error) -> InventoryError {
    if err.is_timeout() {
        InventoryError::Timeout
    } else {
        InventoryError::Transport(err.to_string())
    }
}

#[async_trait]
impl Inventory for NetBoxClient {
    async fn device(&self, id: i64) -> Result<Device, InventoryError> {
        self.get_json(&format!("/api/dcim/devices/{id}/")).await
    }

    async fn rear_ports_for_device(&self, device_id: i64) -> Result<Vec<RearPort>, InventoryError> {
        // limit=0 disables NetBox pagination; port counts per device are small
        let page: Paginated<RearPort> = self
            .get_json(&format!("/api/dcim/rear-ports/?device_id={device_id}&limit=0"))
            .await?;
        Ok(page.results)
    }

    async fn rear_port(&self, id: i64) -> Result<RearPort, InventoryError> {
        self.get_json(&format!("/api/dcim/rear-ports/{id}/")).await
    }

    async fn site(&self, id: i64) -> Result<Site, InventoryError> {
        self.get_json(&format!("/api/dcim/sites/{id}/")).await
    }

    async fn rack(&self, id: i64) -> Result<Rack, InventoryError> {
        self.get_json(&format!("/api/dcim/racks/{id}/")).await
    }
}

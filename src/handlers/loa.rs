use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::render::{self, LoaData};
use crate::services::{lookup, tenant};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoaQuery {
    pub port: i64,
    #[serde(default)]
    pub partner: String,
    #[serde(default)]
    pub partner_street: String,
    #[serde(default)]
    pub partner_city: String,
}

/// GET /api/v1/loa/rear-ports - resolve the rear port's location, merge
/// the issuing tenant, render the letter, and return it as a download.
///
/// The document is fully assembled in memory before the response starts;
/// a failure at any stage produces an error response and no bytes.
pub async fn generate_loa(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoaQuery>,
) -> Result<Response, ApiError> {
    let location = lookup::resolve_for_rear_port(state.inventory.as_ref(), query.port).await?;

    let partial = LoaData {
        site_facility: location.site_facility,
        rack_facility_id: location.rack_facility_id,
        rack_position: location.rack_position,
        device_name: location.device_name,
        rear_port_name: location.rear_port_name,
        partner: query.partner,
        partner_street: query.partner_street,
        partner_city: query.partner_city,
        ..LoaData::default()
    };

    let data = tenant::merge_tenant(&state.tenants, &location.tenant_key, partial)?;
    let pdf = render::generate(&data)?;

    let filename = download_filename(&data.partner, &data.site_facility);
    tracing::info!(port = query.port, %filename, "generated loa");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}

fn download_filename(partner: &str, site_label: &str) -> String {
    format!(
        "LOA_{}_{}_{}.pdf",
        partner.replace(' ', ""),
        chrono::Local::now().format("%Y-%m-%d"),
        site_label
    )
}

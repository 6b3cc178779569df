use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use super::html_escape;
use crate::error::ApiError;
use crate::services::lookup::{self, DevicePorts};
use crate::services::tenant::{TenantError, TenantRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PortsQuery {
    /// Pre-selects an entry in the rendered picker; not validated
    /// against the enumerated list.
    pub rear_port: Option<i64>,
}

/// GET /api/v1/devices/:device_id - enumerate a device's rear ports into
/// a selection form that submits to the LOA endpoint.
pub async fn device_ports(
    State(state): State<Arc<AppState>>,
    Path(device_id): Path<i64>,
    Query(query): Query<PortsQuery>,
) -> Result<Html<String>, ApiError> {
    let ports = lookup::resolve_for_device(state.inventory.as_ref(), device_id).await?;

    let tenant = state
        .tenants
        .get(&ports.tenant_key)
        .ok_or_else(|| TenantError::NotFound(ports.tenant_key.clone()))?;

    Ok(Html(render_picker(&ports, tenant, query.rear_port.unwrap_or(0))))
}

fn render_picker(ports: &DevicePorts, tenant: &TenantRecord, selected: i64) -> String {
    let device = html_escape(&ports.device_name);

    let mut html = String::with_capacity(2048);
    html.push_str("<!DOCTYPE html>\n<html>\n<head><title>loagen</title></head>\n<body>\n");
    html.push_str("<h1>Letter of Authorization</h1>\n");
    html.push_str(&format!(
        "<p>Device <strong>{}</strong> &mdash; issued by {} ({})</p>\n",
        device,
        html_escape(&tenant.name),
        html_escape(&tenant.short),
    ));

    html.push_str("<form action=\"/api/v1/loa/rear-ports\" method=\"get\">\n");
    html.push_str("<p><label for=\"port\">Demarcation port</label>\n<select id=\"port\" name=\"port\">\n");
    for (id, name) in &ports.ports {
        let marker = if *id == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            id,
            marker,
            html_escape(name),
        ));
    }
    html.push_str("</select></p>\n");

    html.push_str(
        "<p><label for=\"partner\">Partner</label>\n\
         <input id=\"partner\" name=\"partner\" placeholder=\"Partner name\"></p>\n\
         <p><input name=\"partner_street\" placeholder=\"Street\">\n\
         <input name=\"partner_city\" placeholder=\"City\"></p>\n",
    );
    html.push_str("<p><button type=\"submit\">Generate LOA</button></p>\n");
    html.push_str("</form>\n</body>\n</html>\n");

    html
}

use serde::Deserialize;

// NetBox record shapes, reduced to the fields the pipeline reads.
// Every field NetBox may omit or null out is an explicit Option here;
// the lookup chain decides which absences are terminal.

#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: Option<String>,
    pub site: Option<SiteRef>,
    pub rack: Option<RackRef>,
    pub tenant: Option<TenantRef>,
    /// Rack unit position; NetBox stores half-unit positions as x.5.
    pub position: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RackRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TenantRef {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRef {
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RearPort {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub device: Option<DeviceRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub id: i64,
    pub facility: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rack {
    pub id: i64,
    pub facility_id: Option<String>,
}

/// NetBox list endpoints wrap results in a pagination envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: i64,
    pub results: Vec<T>,
}

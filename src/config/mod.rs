use clap::Parser;

/// Process configuration, from flags or environment.
///
/// The tenant registry lives in a separate YAML file (see
/// `services::tenant::TenantRegistry::from_yaml_file`) so legal/contact
/// data can be managed apart from deployment settings.
#[derive(Debug, Clone, Parser)]
#[command(name = "loagen", version, about = "LOA generator for data-center cross-connect requests")]
pub struct AppConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Host of the NetBox server
    #[arg(long, env = "NETBOX_HOST")]
    pub netbox_host: String,

    /// http/https
    #[arg(long, env = "NETBOX_SCHEME", default_value = "https")]
    pub netbox_scheme: String,

    /// API token for NetBox
    #[arg(long, env = "NETBOX_TOKEN")]
    pub netbox_token: String,

    /// Per-call timeout for NetBox requests, in seconds
    #[arg(long, env = "NETBOX_TIMEOUT_SECS", default_value_t = 10)]
    pub netbox_timeout_secs: u64,

    /// YAML file holding the tenant registry
    #[arg(long, env = "TENANTS_FILE", default_value = "config.yaml")]
    pub tenants_file: std::path::PathBuf,
}

impl AppConfig {
    pub fn netbox_base_url(&self) -> String {
        format!("{}://{}", self.netbox_scheme, self.netbox_host)
    }
}

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A Pingdom probe server
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Probe {
    /// Probe identifier
    pub id: i64,
    /// Country the probe is located in
    pub country: Option<String>,
    /// City the probe is located in
    pub city: Option<String>,
    /// Probe name
    pub name: Option<String>,
    /// Whether the probe is currently active
    pub active: Option<bool>,
    /// Probe hostname
    pub hostname: Option<String>,
    /// Probe IP address
    pub ip: Option<String>,
    /// ISO code of the probe country
    #[serde(rename = "countryiso")]
    pub country_iso: Option<String>,
}

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Result of a traceroute run from a probe
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Traceroute {
    /// Raw traceroute output
    pub result: String,
    /// Identifier of the probe that ran the traceroute
    #[serde(rename = "probeid")]
    pub probe_id: i64,
    /// Human-readable probe description
    #[serde(rename = "probedescription")]
    pub probe_description: Option<String>,
}

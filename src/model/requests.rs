/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Query and body parameters for API calls.
//!
//! Unset fields are skipped during serialization, so the API sees only what
//! the caller populated. Timestamps are plain Unix seconds, matching the wire
//! format of the query string.

use crate::presentation::check::CheckType;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Interval granularity for performance summaries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceResolution {
    /// One interval per hour
    Hour,
    /// One interval per day
    Day,
    /// One interval per week
    Week,
}

/// Paging parameters for the check list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChecksQuery {
    /// Maximum number of checks to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the full list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of a check creation request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCheckRequest {
    /// Check name
    pub name: String,
    /// Target host
    pub host: String,
    /// Kind of test to perform
    #[serde(rename = "type")]
    pub check_type: CheckType,
    /// Test interval in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
    /// Whether the check starts paused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    /// Whether alerts go out by email
    #[serde(rename = "sendtoemail", skip_serializing_if = "Option::is_none")]
    pub send_to_email: Option<bool>,
    /// Consecutive failed tests before a notification is sent
    #[serde(
        rename = "sendnotificationwhendown",
        skip_serializing_if = "Option::is_none"
    )]
    pub send_notification_when_down: Option<u32>,
    /// Notification repeat interval, in tests
    #[serde(rename = "notifyagainevery", skip_serializing_if = "Option::is_none")]
    pub notify_again_every: Option<u32>,
    /// Whether a notification goes out when the check recovers
    #[serde(rename = "notifywhenbackup", skip_serializing_if = "Option::is_none")]
    pub notify_when_back_up: Option<bool>,
    /// Path to request (HTTP checks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether the connection uses TLS (HTTP checks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<bool>,
    /// Target port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl CreateCheckRequest {
    /// Creates a request with only the required fields populated.
    #[must_use]
    pub fn new(name: &str, host: &str, check_type: CheckType) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            check_type,
            resolution: None,
            paused: None,
            send_to_email: None,
            send_notification_when_down: None,
            notify_again_every: None,
            notify_when_back_up: None,
            url: None,
            encryption: None,
            port: None,
        }
    }
}

/// Body of a check modification request
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ModifyCheckRequest {
    /// New check name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New target host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// New test interval in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u32>,
    /// Pause or resume the check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
}

/// Filters for the actions (alerts) endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ActionsQuery {
    /// Only include alerts generated at or after this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// Only include alerts generated at or before this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Maximum number of alerts to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the full list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Comma-separated check identifiers to filter on
    #[serde(rename = "checkids", skip_serializing_if = "Option::is_none")]
    pub check_ids: Option<String>,
    /// Comma-separated contact identifiers to filter on
    #[serde(rename = "contactids", skip_serializing_if = "Option::is_none")]
    pub contact_ids: Option<String>,
    /// Comma-separated delivery statuses to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Comma-separated media to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

/// Filters for the analysis list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnalysisQuery {
    /// Only include analyses started at or after this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// Only include analyses started at or before this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Maximum number of analyses to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the full list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filters for the raw results endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResultsQuery {
    /// Only include results from tests at or after this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// Only include results from tests at or before this Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Comma-separated probe identifiers to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<String>,
    /// Comma-separated result statuses to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the full list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Period and probe filters for the average summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryAverageQuery {
    /// Start of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// End of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Comma-separated probe identifiers to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<String>,
    /// Whether to include the uptime section in the response
    #[serde(rename = "includeuptime", skip_serializing_if = "Option::is_none")]
    pub include_uptime: Option<bool>,
}

/// Period filters for the outage summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryOutageQuery {
    /// Start of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// End of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Sort order of the states, "asc" or "desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Period and resolution filters for the performance summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryPerformanceQuery {
    /// Start of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// End of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Interval granularity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<PerformanceResolution>,
    /// Whether to include uptime figures per interval
    #[serde(rename = "includeuptime", skip_serializing_if = "Option::is_none")]
    pub include_uptime: Option<bool>,
    /// Comma-separated probe identifiers to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<String>,
    /// Sort order of the intervals, "asc" or "desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Period filters for the probe summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryProbesQuery {
    /// Start of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// End of the covered period as a Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    /// Comma-separated probe identifiers to filter on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<String>,
}

/// Parameters for a traceroute run
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TracerouteQuery {
    /// Target host
    pub host: String,
    /// Probe to run the traceroute from; a random probe is used when unset
    #[serde(rename = "probeid", skip_serializing_if = "Option::is_none")]
    pub probe_id: Option<i64>,
}

impl TracerouteQuery {
    /// Creates a traceroute query for `host` using a random probe.
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            probe_id: None,
        }
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Averaged response time over a period
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResponseTimeSummary {
    /// Start of the covered period
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub from: Option<DateTime<Utc>>,
    /// End of the covered period
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub to: Option<DateTime<Utc>>,
    /// Average response time in milliseconds
    #[serde(rename = "avgresponse")]
    pub avg_response: Option<u64>,
}

/// Accumulated uptime/downtime over a period, in seconds
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UptimeSummary {
    /// Total seconds up
    #[serde(rename = "totalup")]
    pub total_up: Option<u64>,
    /// Total seconds down
    #[serde(rename = "totaldown")]
    pub total_down: Option<u64>,
    /// Total seconds without monitoring data
    #[serde(rename = "totalunknown")]
    pub total_unknown: Option<u64>,
}

/// Average summary for a check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AverageSummary {
    /// Response time section; present unless excluded by the query
    #[serde(rename = "responsetime")]
    pub response_time: Option<ResponseTimeSummary>,
    /// Uptime section; present only when requested with `includeuptime`
    pub status: Option<UptimeSummary>,
}

/// Status of an outage interval
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutageStatus {
    /// Target was up
    Up,
    /// Target was down
    Down,
    /// No monitoring data for the interval
    Unknown,
}

/// One homogeneous interval in an outage summary
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutageState {
    /// Status during the interval
    pub status: OutageStatus,
    /// Interval start
    #[serde(rename = "timefrom", with = "chrono::serde::ts_seconds")]
    pub time_from: DateTime<Utc>,
    /// Interval end
    #[serde(rename = "timeto", with = "chrono::serde::ts_seconds")]
    pub time_to: DateTime<Utc>,
}

/// Outage summary for a check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutageSummary {
    /// Consecutive status intervals covering the queried period
    #[serde(default)]
    pub states: Vec<OutageState>,
}

/// Performance metrics for one interval
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PerformanceInterval {
    /// Interval start
    #[serde(
        rename = "starttime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Average response time in milliseconds
    #[serde(rename = "avgresponse")]
    pub avg_response: Option<u64>,
    /// Seconds up during the interval
    pub uptime: Option<u64>,
    /// Seconds down during the interval
    pub downtime: Option<u64>,
    /// Seconds without monitoring data
    pub unmonitored: Option<u64>,
}

/// Performance summary for a check.
///
/// Exactly one of the interval lists is populated, matching the resolution
/// requested in the query.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PerformanceSummary {
    /// Hourly intervals
    pub hours: Option<Vec<PerformanceInterval>>,
    /// Daily intervals
    pub days: Option<Vec<PerformanceInterval>>,
    /// Weekly intervals
    pub weeks: Option<Vec<PerformanceInterval>>,
}

/// Per-probe statistics for a check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProbeSummary {
    /// Probe identifier
    #[serde(rename = "probeid")]
    pub probe_id: Option<i64>,
    /// Average response time in milliseconds
    #[serde(rename = "avgresponse")]
    pub avg_response: Option<u64>,
    /// Number of tests run in the covered period
    #[serde(rename = "newtests")]
    pub new_tests: Option<u64>,
    /// Number of confirmed downs in the covered period
    pub downtimes: Option<u64>,
}

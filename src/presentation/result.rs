use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Outcome of one raw test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// Target responded
    Up,
    /// Target confirmed down
    Down,
    /// Failure not yet confirmed by a second probe
    Unconfirmed,
}

/// One raw test result
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawResult {
    /// Identifier of the probe that ran the test
    #[serde(rename = "probeid")]
    pub probe_id: i64,
    /// Time of the test
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    /// Test outcome
    pub status: ResultStatus,
    /// Response time in milliseconds
    #[serde(rename = "responsetime")]
    pub response_time: Option<u64>,
    /// Short status description
    #[serde(rename = "statusdesc")]
    pub status_desc: Option<String>,
    /// Long status description
    #[serde(rename = "statusdesclong")]
    pub status_desc_long: Option<String>,
    /// Identifier of the triggered analysis, if any. Available from API
    /// version 2.1.
    #[serde(rename = "analysisid")]
    pub analysis_id: Option<i64>,
}

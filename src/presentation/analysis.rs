use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Reference to a downtime root-cause analysis
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    /// Analysis identifier
    pub id: i64,
    /// Time of the first failed test
    #[serde(
        rename = "timefirsttest",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub time_first_test: Option<DateTime<Utc>>,
    /// Time the failure was confirmed by a second probe
    #[serde(
        rename = "timeconfirmtest",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub time_confirm_test: Option<DateTime<Utc>>,
}

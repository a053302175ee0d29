/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! JSON envelopes wrapping the entities on the wire.
//!
//! Pingdom nests every response payload under a resource-specific key
//! (`{"checks": [...]}`, `{"check": {...}}`, ...). Services unwrap these and
//! hand the inner entities to the caller.

use crate::error::ApiError;
use crate::presentation::alert::Alert;
use crate::presentation::analysis::Analysis;
use crate::presentation::check::{Check, DetailedCheck};
use crate::presentation::contact::Contact;
use crate::presentation::probe::Probe;
use crate::presentation::report::{EmailReport, PublicReport, SharedReports};
use crate::presentation::result::RawResult;
use crate::presentation::settings::Settings;
use crate::presentation::summary::{
    AverageSummary, OutageSummary, PerformanceSummary, ProbeSummary,
};
use crate::presentation::traceroute::Traceroute;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Envelope of a non-success response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Remote-reported error payload
    pub error: ApiError,
}

/// Envelope of a write operation acknowledgement
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable acknowledgement
    pub message: String,
}

/// Counts accompanying a check list
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CheckCounts {
    /// Total number of checks on the account
    pub total: Option<u64>,
    /// Number of checks returned after paging
    pub limited: Option<u64>,
    /// Number of checks matching the filters
    pub filtered: Option<u64>,
}

/// Envelope of the check list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecksResponse {
    /// Checks on the account
    pub checks: Vec<Check>,
    /// Paging counts
    pub counts: Option<CheckCounts>,
}

/// Envelope of the check details endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResponse {
    /// The requested check
    pub check: DetailedCheck,
}

/// Identifier and name of a freshly created check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedCheck {
    /// Identifier assigned by the API
    pub id: i64,
    /// Check name
    pub name: String,
}

/// Envelope of the check creation endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedCheckResponse {
    /// The created check
    pub check: CreatedCheck,
}

/// Envelope of the probe list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbesResponse {
    /// Available probe servers
    pub probes: Vec<Probe>,
}

/// Envelope of the contact list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsResponse {
    /// Contacts on the account
    pub contacts: Vec<Contact>,
}

/// Alert list nested inside the actions envelope
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ActionsList {
    /// Sent alerts
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Envelope of the actions endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsResponse {
    /// Alert history
    pub actions: ActionsList,
}

/// Envelope of the analysis list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    /// Analyses for the check
    pub analysis: Vec<Analysis>,
}

/// Envelope of the raw results endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultsResponse {
    /// Raw test results
    pub results: Vec<RawResult>,
    /// Identifiers of probes active during the period
    #[serde(rename = "activeprobes")]
    pub active_probes: Option<Vec<i64>>,
}

/// Envelope of the server time endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerTimeResponse {
    /// Current time of the API server
    #[serde(rename = "servertime", with = "chrono::serde::ts_seconds")]
    pub server_time: DateTime<Utc>,
}

/// Envelope of the settings endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsResponse {
    /// Account settings
    pub settings: Settings,
}

/// Envelope of the average summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryAverageResponse {
    /// Average summary
    pub summary: AverageSummary,
}

/// Envelope of the outage summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryOutageResponse {
    /// Outage summary
    pub summary: OutageSummary,
}

/// Envelope of the performance summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryPerformanceResponse {
    /// Performance summary
    pub summary: PerformanceSummary,
}

/// Envelope of the probe summary endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryProbesResponse {
    /// Per-probe statistics
    pub probes: Vec<ProbeSummary>,
}

/// Envelope of the traceroute endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TracerouteResponse {
    /// Traceroute result
    pub traceroute: Traceroute,
}

/// Envelope of the email reports endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailReportsResponse {
    /// Email report subscriptions
    pub subscription: Vec<EmailReport>,
}

/// Envelope of the public reports endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicReportsResponse {
    /// Published public report pages
    #[serde(rename = "public")]
    pub public_reports: Vec<PublicReport>,
}

/// Envelope of the shared reports endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SharedReportsResponse {
    /// Shared reports
    pub shared: SharedReports,
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current status of a check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Target is responding
    Up,
    /// Target is confirmed down
    Down,
    /// A failed test has not been confirmed by a second probe yet
    UnconfirmedDown,
    /// No test data available
    Unknown,
    /// Check is paused
    Paused,
}

/// Kind of test a check performs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckType {
    /// HTTP check
    Http,
    /// Custom HTTP check
    HttpCustom,
    /// TCP port check
    Tcp,
    /// ICMP ping check
    Ping,
    /// DNS resolution check
    Dns,
    /// UDP port check
    Udp,
    /// SMTP server check
    Smtp,
    /// POP3 server check
    Pop3,
    /// IMAP server check
    Imap,
}

/// Check overview as returned by the check list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Check {
    /// Check identifier
    pub id: i64,
    /// Check name
    pub name: String,
    /// Kind of test performed
    #[serde(rename = "type")]
    pub check_type: CheckType,
    /// Target host
    pub hostname: Option<String>,
    /// Current status
    pub status: CheckStatus,
    /// Test interval in minutes
    pub resolution: u32,
    /// Time of the last error
    #[serde(
        rename = "lasterrortime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_error_time: Option<DateTime<Utc>>,
    /// Time of the last test
    #[serde(
        rename = "lasttesttime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_test_time: Option<DateTime<Utc>>,
    /// Response time of the last test in milliseconds
    #[serde(rename = "lastresponsetime")]
    pub last_response_time: Option<u64>,
    /// Creation time. Available from API version 2.1.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Whether the check uses the legacy notification log. Available from API
    /// version 2.1.
    #[serde(rename = "use_legacy_notifications")]
    pub use_legacy_notifications: Option<bool>,
}

/// Full check description as returned by the check details endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedCheck {
    /// Check identifier
    pub id: i64,
    /// Check name
    pub name: String,
    /// Target host
    pub hostname: Option<String>,
    /// Current status
    pub status: CheckStatus,
    /// Test interval in minutes
    pub resolution: u32,
    /// Per-type details; exactly one inner field is populated
    #[serde(rename = "type")]
    pub check_type: CheckTypeDetails,
    /// Identifiers of contacts alerted by this check
    #[serde(rename = "contactids")]
    pub contact_ids: Option<Vec<i64>>,
    /// Whether alerts go out by email
    #[serde(rename = "sendtoemail")]
    pub send_to_email: Option<bool>,
    /// Whether alerts go out by SMS
    #[serde(rename = "sendtosms")]
    pub send_to_sms: Option<bool>,
    /// Whether alerts go out via Twitter
    #[serde(rename = "sendtotwitter")]
    pub send_to_twitter: Option<bool>,
    /// Whether alerts go out via the iPhone app
    #[serde(rename = "sendtoiphone")]
    pub send_to_iphone: Option<bool>,
    /// Consecutive failed tests before a notification is sent
    #[serde(rename = "sendnotificationwhendown")]
    pub send_notification_when_down: Option<u32>,
    /// Notification repeat interval, in tests; zero disables repeats
    #[serde(rename = "notifyagainevery")]
    pub notify_again_every: Option<u32>,
    /// Whether a notification goes out when the check recovers
    #[serde(rename = "notifywhenbackup")]
    pub notify_when_back_up: Option<bool>,
    /// Time of the last error
    #[serde(
        rename = "lasterrortime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_error_time: Option<DateTime<Utc>>,
    /// Time of the last test
    #[serde(
        rename = "lasttesttime",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub last_test_time: Option<DateTime<Utc>>,
    /// Creation time. Available from API version 2.1.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
}

/// Container for the per-type details of a check.
///
/// The API nests the details under a key named after the check type, e.g.
/// `"type": {"http": {...}}`, so every field here is optional.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckTypeDetails {
    /// HTTP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpDetails>,
    /// Custom HTTP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub httpcustom: Option<HttpCustomDetails>,
    /// TCP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpDetails>,
    /// Ping check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping: Option<PingDetails>,
    /// DNS check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<DnsDetails>,
    /// UDP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<UdpDetails>,
    /// SMTP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpDetails>,
    /// POP3 check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop3: Option<Pop3Details>,
    /// IMAP check details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imap: Option<ImapDetails>,
}

/// Details of an HTTP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HttpDetails {
    /// Path to request
    pub url: Option<String>,
    /// Whether the connection uses TLS
    pub encryption: Option<bool>,
    /// Target port
    pub port: Option<u16>,
    /// Username for target HTTP authentication
    pub username: Option<String>,
    /// Password for target HTTP authentication
    pub password: Option<String>,
    /// String the response body must contain
    #[serde(rename = "shouldcontain")]
    pub should_contain: Option<String>,
    /// String the response body must not contain
    #[serde(rename = "shouldnotcontain")]
    pub should_not_contain: Option<String>,
    /// Data posted with the request
    #[serde(rename = "postdata")]
    pub post_data: Option<String>,
    /// Custom request headers
    #[serde(rename = "requestheaders")]
    pub request_headers: Option<HashMap<String, String>>,
}

/// Details of a custom HTTP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HttpCustomDetails {
    /// Path to request
    pub url: Option<String>,
    /// Whether the connection uses TLS
    pub encryption: Option<bool>,
    /// Target port
    pub port: Option<u16>,
    /// Additional URLs to target
    #[serde(rename = "additionalurls")]
    pub additional_urls: Option<Vec<String>>,
}

/// Details of a TCP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TcpDetails {
    /// Target port
    pub port: Option<u16>,
    /// String to send on connect
    #[serde(rename = "stringtosend")]
    pub string_to_send: Option<String>,
    /// String expected in the reply
    #[serde(rename = "stringtoexpect")]
    pub string_to_expect: Option<String>,
}

/// Details of a ping check (no parameters)
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PingDetails {}

/// Details of a DNS check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DnsDetails {
    /// Name server queried
    pub nameserver: Option<String>,
    /// IP address the name must resolve to
    #[serde(rename = "expectedip")]
    pub expected_ip: Option<String>,
}

/// Details of a UDP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UdpDetails {
    /// Target port
    pub port: Option<u16>,
    /// String to send
    #[serde(rename = "stringtosend")]
    pub string_to_send: Option<String>,
    /// String expected in the reply
    #[serde(rename = "stringtoexpect")]
    pub string_to_expect: Option<String>,
}

/// Details of an SMTP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SmtpDetails {
    /// Target port
    pub port: Option<u16>,
    /// Username for target SMTP authentication
    pub username: Option<String>,
    /// Password for target SMTP authentication
    pub password: Option<String>,
    /// Whether the connection uses TLS
    pub encryption: Option<bool>,
    /// String expected in the server banner
    #[serde(rename = "stringtoexpect")]
    pub string_to_expect: Option<String>,
}

/// Details of a POP3 check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Pop3Details {
    /// Target port
    pub port: Option<u16>,
    /// Whether the connection uses TLS
    pub encryption: Option<bool>,
    /// String expected in the server banner
    #[serde(rename = "stringtoexpect")]
    pub string_to_expect: Option<String>,
}

/// Details of an IMAP check
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImapDetails {
    /// Target port
    pub port: Option<u16>,
    /// Whether the connection uses TLS
    pub encryption: Option<bool>,
    /// String expected in the server banner
    #[serde(rename = "stringtoexpect")]
    pub string_to_expect: Option<String>,
}

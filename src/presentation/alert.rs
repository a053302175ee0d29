use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Medium an alert was sent through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertVia {
    /// Email alert
    Email,
    /// SMS alert
    Sms,
    /// Twitter alert
    Twitter,
    /// iPhone push alert
    Iphone,
}

/// Delivery status of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Handed over to the delivery provider
    SentToProvider,
    /// Confirmed delivered
    Delivered,
    /// Delivery failed
    Error,
    /// Provider reported the alert as not delivered
    NotDelivered,
    /// Account had no alert credits left
    NoCredits,
}

/// One sent alert, as returned by the actions endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Name of the alerted contact
    #[serde(rename = "contactname")]
    pub contact_name: Option<String>,
    /// Identifier of the alerted contact
    #[serde(rename = "contactid")]
    pub contact_id: Option<i64>,
    /// Identifier of the check that triggered the alert
    #[serde(rename = "checkid")]
    pub check_id: Option<i64>,
    /// Time the alert was sent
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    /// Medium the alert was sent through
    pub via: AlertVia,
    /// Delivery status
    pub status: AlertStatus,
    /// Short alert message
    #[serde(rename = "messageshort")]
    pub message_short: Option<String>,
    /// Full alert message
    #[serde(rename = "messagefull")]
    pub message_full: Option<String>,
    /// Addresses or numbers the alert was sent to
    #[serde(rename = "sentto")]
    pub sent_to: Option<Vec<String>>,
    /// Whether the alert was charged against the account credits
    pub charged: Option<bool>,
}

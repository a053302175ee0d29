use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A notification contact
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Contact identifier
    pub id: i64,
    /// Contact name
    pub name: String,
    /// Contact email address
    pub email: Option<String>,
    /// Contact cellphone number
    pub cellphone: Option<String>,
    /// ISO code of the contact country
    #[serde(rename = "countryiso")]
    pub country_iso: Option<String>,
    /// Phone country code
    #[serde(rename = "countrycode")]
    pub country_code: Option<String>,
    /// Default SMS provider for this contact
    #[serde(rename = "defaultsmsprovider")]
    pub default_sms_provider: Option<String>,
    /// Whether Twitter alerts are sent as direct messages
    #[serde(rename = "directtwitter")]
    pub direct_twitter: Option<bool>,
    /// Twitter username
    #[serde(rename = "twitteruser")]
    pub twitter_user: Option<String>,
    /// Whether alerts to this contact are paused
    pub paused: Option<bool>,
}

use crate::presentation::reference::Timezone;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A phone number with country information
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Phone {
    /// ISO code of the country
    #[serde(rename = "countryiso")]
    pub country_iso: Option<String>,
    /// Phone country code
    #[serde(rename = "countrycode")]
    pub country_code: Option<String>,
    /// Phone number
    pub number: Option<String>,
}

/// Account settings
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    /// Account holder first name
    #[serde(rename = "firstname")]
    pub first_name: Option<String>,
    /// Account holder last name
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    /// Company name
    pub company: Option<String>,
    /// Account email address
    pub email: Option<String>,
    /// Account phone number
    pub phone: Option<Phone>,
    /// Account cellphone number
    pub cellphone: Option<Phone>,
    /// Account timezone
    pub timezone: Option<Timezone>,
    /// Preferred date/time format
    #[serde(rename = "datetimeformat")]
    pub date_time_format: Option<String>,
    /// Preferred number format
    #[serde(rename = "numberformat")]
    pub number_format: Option<String>,
    /// Account creation time
    #[serde(
        rename = "accountcreated",
        default,
        with = "chrono::serde::ts_seconds_option"
    )]
    pub account_created: Option<DateTime<Utc>>,
}

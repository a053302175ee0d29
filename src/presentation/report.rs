/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// An email report subscription
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailReport {
    /// Subscription identifier
    pub id: i64,
    /// Subscription name
    pub name: String,
    /// Identifier of the covered check; absent when the report covers all checks
    #[serde(rename = "checkid")]
    pub check_id: Option<i64>,
    /// Report type, e.g. "private" or "user"
    #[serde(rename = "type")]
    pub report_type: Option<String>,
}

/// A published public report page
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicReport {
    /// Identifier of the published check
    #[serde(rename = "checkid")]
    pub check_id: i64,
    /// Name of the published check
    #[serde(rename = "checkname")]
    pub check_name: Option<String>,
    /// URL of the public report page
    #[serde(rename = "reporturl")]
    pub report_url: Option<String>,
}

/// Kind of data a shared banner displays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    /// Uptime banner
    Uptime,
    /// Response time banner
    Response,
}

/// A shared uptime/response banner.
///
/// Every field is available from API version 2.0 onward and decodes as absent
/// when the live API omits it.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Banner {
    /// Banner identifier
    pub id: Option<i64>,
    /// Banner name
    pub name: Option<String>,
    /// Identifier of the covered check
    #[serde(rename = "checkid")]
    pub check_id: Option<i64>,
    /// Whether the covered period advances automatically
    pub auto: Option<bool>,
    /// Kind of data displayed
    #[serde(rename = "type")]
    pub banner_type: Option<BannerType>,
    /// Banner image URL
    pub url: Option<String>,
    /// First year of the covered period
    #[serde(rename = "fromyear")]
    pub from_year: Option<i32>,
    /// First month of the covered period
    #[serde(rename = "frommonth")]
    pub from_month: Option<u32>,
    /// First day of the covered period
    #[serde(rename = "fromday")]
    pub from_day: Option<u32>,
    /// Last year of the covered period
    #[serde(rename = "toyear")]
    pub to_year: Option<i32>,
    /// Last month of the covered period
    #[serde(rename = "tomonth")]
    pub to_month: Option<u32>,
    /// Last day of the covered period
    #[serde(rename = "today")]
    pub to_day: Option<u32>,
}

/// Shared reports owned by the account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SharedReports {
    /// Shared banners
    pub banners: Option<Vec<Banner>>,
}

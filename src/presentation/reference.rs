use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A geographical region
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Region identifier
    pub id: i64,
    /// Region description
    pub description: Option<String>,
}

/// A timezone
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timezone {
    /// Timezone identifier
    pub id: i64,
    /// Timezone description
    pub description: Option<String>,
}

/// A date/time format
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateTimeFormat {
    /// Format identifier
    pub id: i64,
    /// Format description
    pub description: Option<String>,
}

/// A number format
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberFormat {
    /// Format identifier
    pub id: i64,
    /// Format description
    pub description: Option<String>,
}

/// Reference data for settings values
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Reference {
    /// Available regions
    #[serde(default)]
    pub regions: Vec<Region>,
    /// Available timezones
    #[serde(default)]
    pub timezones: Vec<Timezone>,
    /// Available date/time formats
    #[serde(rename = "datetimeformats", default)]
    pub date_time_formats: Vec<DateTimeFormat>,
    /// Available number formats
    #[serde(rename = "numberformats", default)]
    pub number_formats: Vec<NumberFormat>,
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Error taxonomy for the Pingdom client.
//!
//! Failures are never swallowed or retried: transport errors, decoding errors
//! and remote-reported API errors all propagate to the caller as distinct
//! variants of [`PingdomError`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error payload returned by the Pingdom API on non-success statuses.
///
/// Wire shape: `{"error": {"statuscode": 403, "statusdesc": "Forbidden",
/// "errormessage": "Something went wrong!"}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code reported inside the error body
    #[serde(rename = "statuscode")]
    pub status_code: u16,
    /// Short status description, e.g. "Forbidden"
    #[serde(rename = "statusdesc")]
    pub status_desc: String,
    /// Human-readable error message
    #[serde(rename = "errormessage")]
    pub error_message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.status_code, self.status_desc, self.error_message
        )
    }
}

/// Main error type for the library.
#[derive(Debug)]
pub enum PingdomError {
    /// Transport-level failure (connection, TLS, timeout) surfaced from reqwest
    Http(reqwest::Error),
    /// Response body did not match the expected entity shape
    Json(serde_json::Error),
    /// The API returned a non-success status with a Pingdom error payload
    Api(ApiError),
    /// The API returned a non-success status without a decodable error payload
    Unexpected(StatusCode),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for PingdomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingdomError::Http(e) => write!(f, "http error: {e}"),
            PingdomError::Json(e) => write!(f, "deserialization error: {e}"),
            PingdomError::Api(e) => write!(f, "api error {e}"),
            PingdomError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            PingdomError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for PingdomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PingdomError::Http(e) => Some(e),
            PingdomError::Json(e) => Some(e),
            PingdomError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PingdomError {
    fn from(e: reqwest::Error) -> Self {
        PingdomError::Http(e)
    }
}

impl From<serde_json::Error> for PingdomError {
    fn from(e: serde_json::Error) -> Self {
        PingdomError::Json(e)
    }
}

impl From<std::io::Error> for PingdomError {
    fn from(e: std::io::Error) -> Self {
        PingdomError::Io(e)
    }
}

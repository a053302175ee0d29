/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Shared default configuration for service creation.
//!
//! Every field is optional: a field is applied to a newly created service if
//! and only if it was explicitly populated. Unset fields leave the service at
//! its own default. No field is validated here; bad credentials or
//! out-of-range timeouts surface later from the transport.

use crate::transport::interface::PingdomService;
use crate::utils::config::get_env_or_none;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional defaults applied to newly created services
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// App-Key credential for the Pingdom API
    pub app_key: Option<String>,
    /// Account email for basic authentication
    pub email: Option<String>,
    /// Account password for basic authentication
    pub password: Option<String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: Option<u64>,
    /// Read timeout in milliseconds
    pub read_timeout_ms: Option<u64>,
    /// Override of the API base URL
    pub base_url: Option<String>,
}

impl Config {
    /// Creates an empty configuration with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from environment variables and a `.env` file.
    ///
    /// Recognised variables: `PINGDOM_APP_KEY`, `PINGDOM_EMAIL`,
    /// `PINGDOM_PASSWORD`, `PINGDOM_CONNECT_TIMEOUT_MS`,
    /// `PINGDOM_READ_TIMEOUT_MS`, `PINGDOM_BASE_URL`. Missing variables leave
    /// the corresponding field unset.
    #[must_use]
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            app_key: get_env_or_none("PINGDOM_APP_KEY"),
            email: get_env_or_none("PINGDOM_EMAIL"),
            password: get_env_or_none("PINGDOM_PASSWORD"),
            connect_timeout_ms: get_env_or_none("PINGDOM_CONNECT_TIMEOUT_MS"),
            read_timeout_ms: get_env_or_none("PINGDOM_READ_TIMEOUT_MS"),
            base_url: get_env_or_none("PINGDOM_BASE_URL"),
        }
    }
}

/// Applies every populated field of `config` to `service`.
///
/// Fields are applied in a fixed order: App-Key, credentials, connection
/// timeout, read timeout, base URL. The basic-auth pair is applied only when
/// both email and password are present; fields left unset are skipped, so the
/// service keeps whatever default it initialized with.
pub fn apply_config<S: PingdomService>(service: &mut S, config: &Config) {
    if let Some(key) = &config.app_key {
        service.set_app_key(key);
    }
    if let (Some(email), Some(password)) = (&config.email, &config.password) {
        service.set_authentication(email, password);
    }
    if let Some(millis) = config.connect_timeout_ms {
        service.set_connect_timeout(millis);
    }
    if let Some(millis) = config.read_timeout_ms {
        service.set_read_timeout(millis);
    }
    if let Some(url) = &config.base_url {
        service.set_base_url(url);
    }
}

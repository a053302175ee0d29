/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Reqwest-based HTTP transport for the Pingdom API.
//!
//! The transport carries the authentication state (App-Key header, basic-auth
//! pair) and the connect/read timeouts. It performs no retries, no rate
//! limiting and no caching; every failure propagates to the caller as a
//! [`PingdomError`].

use crate::constants::{APP_KEY_HEADER, BASE_URL, USER_AGENT};
use crate::error::PingdomError;
use crate::model::responses::ErrorResponse;
use crate::transport::interface::PingdomTransport;
use async_trait::async_trait;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Basic-auth credential pair for the Pingdom API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// HTTP transport holding per-instance authentication and timeout state.
///
/// Not concurrency-safe: configuration is mutable at any time and applies to
/// the next request issued, so create one instance per logical caller.
pub struct HttpClient {
    agent: ReqwestClient,
    base_url: String,
    app_key: Option<String>,
    credentials: Option<BasicCredentials>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl HttpClient {
    /// Creates a transport with no credentials and reqwest's own timeout defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: Self::build_agent(None, None),
            base_url: BASE_URL.to_string(),
            app_key: None,
            credentials: None,
            connect_timeout: None,
            read_timeout: None,
        }
    }

    fn build_agent(connect_timeout: Option<Duration>, read_timeout: Option<Duration>) -> ReqwestClient {
        let mut builder = ReqwestClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = read_timeout {
            builder = builder.read_timeout(timeout);
        }
        builder.build().expect("Failed to create HTTP client")
    }

    // Timeouts live on the reqwest client, so changing one rebuilds the agent.
    fn rebuild_agent(&mut self) {
        self.agent = Self::build_agent(self.connect_timeout, self.read_timeout);
    }

    /// Currently configured App-Key, if any.
    #[must_use]
    pub fn app_key(&self) -> Option<&str> {
        self.app_key.as_deref()
    }

    /// Currently configured basic-auth credentials, if any.
    #[must_use]
    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }

    /// Currently configured connection timeout, if any.
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Currently configured read timeout, if any.
    #[must_use]
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PingdomTransport for HttpClient {
    async fn request<Q, B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, PingdomError>
    where
        Q: Serialize + Sync,
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!("{} {}", method, url);

        let mut request = self
            .agent
            .request(method, &url)
            .header("Accept", "application/json; charset=UTF-8");

        if let Some(key) = &self.app_key {
            request = request.header(APP_KEY_HEADER, key);
        }
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.email, Some(&credentials.password));
        }
        if let Some(q) = query {
            request = request.query(q);
        }
        if let Some(b) = body {
            request = request.form(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            // Pingdom wraps remote errors in {"error": {...}}; anything else
            // is surfaced with the raw status.
            if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(&text) {
                error!(
                    "Pingdom API error {}: {}",
                    envelope.error.status_code, envelope.error.error_message
                );
                return Err(PingdomError::Api(envelope.error));
            }
            error!("Request failed with status {}: {}", status, text);
            return Err(PingdomError::Unexpected(status));
        }

        serde_json::from_str(&text).map_err(PingdomError::from)
    }

    fn set_app_key(&mut self, value: &str) {
        self.app_key = Some(value.to_string());
    }

    fn set_authentication(&mut self, email: &str, password: &str) {
        self.credentials = Some(BasicCredentials {
            email: email.to_string(),
            password: password.to_string(),
        });
    }

    fn set_connect_timeout(&mut self, millis: u64) {
        self.connect_timeout = Some(Duration::from_millis(millis));
        self.rebuild_agent();
    }

    fn set_read_timeout(&mut self, millis: u64) {
        self.read_timeout = Some(Duration::from_millis(millis));
        self.rebuild_agent();
    }

    fn set_base_url(&mut self, url: &str) {
        self.base_url = url.to_string();
    }
}

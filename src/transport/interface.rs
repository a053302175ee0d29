/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Traits that describe the transport seam of the library.
//!
//! [`PingdomTransport`] is the low-level contract (send one request, decode
//! one typed response). [`PingdomService`] is the capability every resource
//! service exposes to callers and to the factory: accept an App-Key, a
//! basic-auth pair and connect/read timeouts. Resource services get their
//! [`PingdomService`] implementation for free through [`HasTransport`].

use crate::error::PingdomError;
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Low-level HTTP contract implemented by [`crate::transport::HttpClient`].
///
/// Configuration setters are accept-and-store: no validation is performed and
/// each value applies to the next request issued.
#[async_trait]
pub trait PingdomTransport: Send + Sync {
    /// Sends one request and decodes the JSON response into `T`.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL, e.g. `checks`
    /// * `query` - Optional query parameters, serialized with serde
    /// * `body` - Optional form-encoded request body
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
        T: DeserializeOwned + Send;

    /// Sets the App-Key sent with every request.
    fn set_app_key(&mut self, value: &str);

    /// Sets the basic-auth credential pair sent with every request.
    fn set_authentication(&mut self, email: &str, password: &str);

    /// Sets the connection timeout in milliseconds.
    fn set_connect_timeout(&mut self, millis: u64);

    /// Sets the read timeout in milliseconds.
    fn set_read_timeout(&mut self, millis: u64);

    /// Overrides the API base URL.
    fn set_base_url(&mut self, url: &str);
}

/// Configurable-service capability shared by every resource service.
///
/// Values are stored as-is; zero or negative-equivalent timeouts are passed
/// through uninterpreted and left to the transport to accept or reject.
pub trait PingdomService {
    /// Sets the App-Key credential.
    fn set_app_key(&mut self, value: &str);
    /// Sets the basic-auth email/password pair.
    fn set_authentication(&mut self, email: &str, password: &str);
    /// Sets the connection timeout in milliseconds.
    fn set_connect_timeout(&mut self, millis: u64);
    /// Sets the read timeout in milliseconds.
    fn set_read_timeout(&mut self, millis: u64);
    /// Overrides the API base URL.
    fn set_base_url(&mut self, url: &str);
}

/// Glue trait giving a resource service access to its transport.
pub trait HasTransport {
    /// Concrete transport type backing this service
    type Transport: PingdomTransport;

    /// Returns the underlying transport.
    fn transport(&self) -> &Self::Transport;

    /// Returns the underlying transport mutably.
    fn transport_mut(&mut self) -> &mut Self::Transport;
}

impl<S: HasTransport> PingdomService for S {
    fn set_app_key(&mut self, value: &str) {
        self.transport_mut().set_app_key(value);
    }

    fn set_authentication(&mut self, email: &str, password: &str) {
        self.transport_mut().set_authentication(email, password);
    }

    fn set_connect_timeout(&mut self, millis: u64) {
        self.transport_mut().set_connect_timeout(millis);
    }

    fn set_read_timeout(&mut self, millis: u64) {
        self.transport_mut().set_read_timeout(millis);
    }

    fn set_base_url(&mut self, url: &str) {
        self.transport_mut().set_base_url(url);
    }
}

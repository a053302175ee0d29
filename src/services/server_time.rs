use crate::error::PingdomError;
use crate::model::responses::ServerTimeResponse;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use chrono::{DateTime, Utc};
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `servertime` resource.
    ServerTimeService
}

impl<T: PingdomTransport> ServerTimeService<T> {
    /// Gets the current time of the API server.
    pub async fn get(&self) -> Result<DateTime<Utc>, PingdomError> {
        debug!("Getting server time");
        let response: ServerTimeResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "servertime", None, None)
            .await?;
        Ok(response.server_time)
    }
}

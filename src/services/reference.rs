use crate::error::PingdomError;
use crate::presentation::reference::Reference;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `reference` resource (regions, timezones, formats).
    ReferenceService
}

impl<T: PingdomTransport> ReferenceService<T> {
    /// Gets the reference data for settings values.
    pub async fn get(&self) -> Result<Reference, PingdomError> {
        debug!("Getting reference data");
        self.transport
            .request::<(), (), _>(Method::GET, "reference", None, None)
            .await
    }
}

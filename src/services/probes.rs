use crate::error::PingdomError;
use crate::model::responses::ProbesResponse;
use crate::presentation::probe::Probe;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `probes` resource.
    ProbeService
}

impl<T: PingdomTransport> ProbeService<T> {
    /// Lists all Pingdom probe servers.
    pub async fn list(&self) -> Result<Vec<Probe>, PingdomError> {
        debug!("Listing probes");
        let response: ProbesResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "probes", None, None)
            .await?;
        debug!("{} probes found", response.probes.len());
        Ok(response.probes)
    }
}

use crate::error::PingdomError;
use crate::model::requests::TracerouteQuery;
use crate::model::responses::TracerouteResponse;
use crate::presentation::traceroute::Traceroute;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `traceroute` resource.
    TracerouteService
}

impl<T: PingdomTransport> TracerouteService<T> {
    /// Runs a traceroute to a host from a Pingdom probe.
    pub async fn trace(&self, params: &TracerouteQuery) -> Result<Traceroute, PingdomError> {
        debug!("Running traceroute to {}", params.host);
        let response: TracerouteResponse = self
            .transport
            .request::<_, (), _>(Method::GET, "traceroute", Some(params), None)
            .await?;
        Ok(response.traceroute)
    }
}

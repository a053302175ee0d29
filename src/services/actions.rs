use crate::error::PingdomError;
use crate::model::requests::ActionsQuery;
use crate::model::responses::ActionsResponse;
use crate::presentation::alert::Alert;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `actions` resource (alert history).
    ActionsService
}

impl<T: PingdomTransport> ActionsService<T> {
    /// Lists sent alerts.
    pub async fn list(&self) -> Result<Vec<Alert>, PingdomError> {
        debug!("Listing alerts");
        let response: ActionsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "actions", None, None)
            .await?;
        debug!("{} alerts found", response.actions.alerts.len());
        Ok(response.actions.alerts)
    }

    /// Lists sent alerts matching the given filters.
    pub async fn list_with(&self, params: &ActionsQuery) -> Result<Vec<Alert>, PingdomError> {
        debug!("Listing alerts with filters");
        let response: ActionsResponse = self
            .transport
            .request::<_, (), _>(Method::GET, "actions", Some(params), None)
            .await?;
        Ok(response.actions.alerts)
    }
}

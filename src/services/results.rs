use crate::error::PingdomError;
use crate::model::requests::ResultsQuery;
use crate::model::responses::ResultsResponse;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `results` resource (raw test results).
    ResultsService
}

impl<T: PingdomTransport> ResultsService<T> {
    /// Gets raw test results for a check.
    ///
    /// The response also carries the identifiers of the probes that were
    /// active during the covered period, so the full envelope is returned.
    pub async fn list(&self, check_id: i64) -> Result<ResultsResponse, PingdomError> {
        let path = format!("results/{check_id}");
        debug!("Getting raw results for check {}", check_id);
        self.transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await
    }

    /// Gets raw test results for a check, filtered by period, probes and paging.
    pub async fn list_with(
        &self,
        check_id: i64,
        params: &ResultsQuery,
    ) -> Result<ResultsResponse, PingdomError> {
        let path = format!("results/{check_id}");
        debug!("Getting raw results for check {} with filters", check_id);
        self.transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await
    }
}

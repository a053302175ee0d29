use crate::error::PingdomError;
use crate::model::requests::AnalysisQuery;
use crate::model::responses::AnalysisResponse;
use crate::presentation::analysis::Analysis;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `analysis` resource (downtime root-cause analyses).
    AnalysisService
}

impl<T: PingdomTransport> AnalysisService<T> {
    /// Lists the analyses recorded for a check.
    pub async fn list(&self, check_id: i64) -> Result<Vec<Analysis>, PingdomError> {
        let path = format!("analysis/{check_id}");
        debug!("Listing analyses for check {}", check_id);
        let response: AnalysisResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.analysis)
    }

    /// Lists the analyses recorded for a check, filtered by period and paging.
    pub async fn list_with(
        &self,
        check_id: i64,
        params: &AnalysisQuery,
    ) -> Result<Vec<Analysis>, PingdomError> {
        let path = format!("analysis/{check_id}");
        debug!("Listing analyses for check {} with filters", check_id);
        let response: AnalysisResponse = self
            .transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await?;
        Ok(response.analysis)
    }
}

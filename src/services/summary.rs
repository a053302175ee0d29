use crate::error::PingdomError;
use crate::model::requests::{
    SummaryAverageQuery, SummaryOutageQuery, SummaryPerformanceQuery, SummaryProbesQuery,
};
use crate::model::responses::{
    SummaryAverageResponse, SummaryOutageResponse, SummaryPerformanceResponse,
    SummaryProbesResponse,
};
use crate::presentation::summary::{
    AverageSummary, OutageSummary, PerformanceSummary, ProbeSummary,
};
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `summary.average` resource.
    SummaryAverageService
}

impl<T: PingdomTransport> SummaryAverageService<T> {
    /// Gets the average summary for a check.
    pub async fn get(&self, check_id: i64) -> Result<AverageSummary, PingdomError> {
        let path = format!("summary.average/{check_id}");
        debug!("Getting average summary for check {}", check_id);
        let response: SummaryAverageResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.summary)
    }

    /// Gets the average summary for a check over a specific period.
    pub async fn get_with(
        &self,
        check_id: i64,
        params: &SummaryAverageQuery,
    ) -> Result<AverageSummary, PingdomError> {
        let path = format!("summary.average/{check_id}");
        debug!("Getting average summary for check {} with filters", check_id);
        let response: SummaryAverageResponse = self
            .transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await?;
        Ok(response.summary)
    }
}

define_service! {
    /// Client for the `summary.outage` resource.
    SummaryOutageService
}

impl<T: PingdomTransport> SummaryOutageService<T> {
    /// Gets the outage summary for a check.
    pub async fn get(&self, check_id: i64) -> Result<OutageSummary, PingdomError> {
        let path = format!("summary.outage/{check_id}");
        debug!("Getting outage summary for check {}", check_id);
        let response: SummaryOutageResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.summary)
    }

    /// Gets the outage summary for a check over a specific period.
    pub async fn get_with(
        &self,
        check_id: i64,
        params: &SummaryOutageQuery,
    ) -> Result<OutageSummary, PingdomError> {
        let path = format!("summary.outage/{check_id}");
        debug!("Getting outage summary for check {} with filters", check_id);
        let response: SummaryOutageResponse = self
            .transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await?;
        Ok(response.summary)
    }
}

define_service! {
    /// Client for the `summary.performance` resource.
    SummaryPerformanceService
}

impl<T: PingdomTransport> SummaryPerformanceService<T> {
    /// Gets the performance summary for a check.
    pub async fn get(&self, check_id: i64) -> Result<PerformanceSummary, PingdomError> {
        let path = format!("summary.performance/{check_id}");
        debug!("Getting performance summary for check {}", check_id);
        let response: SummaryPerformanceResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.summary)
    }

    /// Gets the performance summary for a check with period and resolution filters.
    pub async fn get_with(
        &self,
        check_id: i64,
        params: &SummaryPerformanceQuery,
    ) -> Result<PerformanceSummary, PingdomError> {
        let path = format!("summary.performance/{check_id}");
        debug!(
            "Getting performance summary for check {} with filters",
            check_id
        );
        let response: SummaryPerformanceResponse = self
            .transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await?;
        Ok(response.summary)
    }
}

define_service! {
    /// Client for the `summary.probes` resource.
    SummaryProbesService
}

impl<T: PingdomTransport> SummaryProbesService<T> {
    /// Gets per-probe statistics for a check.
    pub async fn get(&self, check_id: i64) -> Result<Vec<ProbeSummary>, PingdomError> {
        let path = format!("summary.probes/{check_id}");
        debug!("Getting probe summary for check {}", check_id);
        let response: SummaryProbesResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.probes)
    }

    /// Gets per-probe statistics for a check over a specific period.
    pub async fn get_with(
        &self,
        check_id: i64,
        params: &SummaryProbesQuery,
    ) -> Result<Vec<ProbeSummary>, PingdomError> {
        let path = format!("summary.probes/{check_id}");
        debug!("Getting probe summary for check {} with filters", check_id);
        let response: SummaryProbesResponse = self
            .transport
            .request::<_, (), _>(Method::GET, &path, Some(params), None)
            .await?;
        Ok(response.probes)
    }
}

use crate::error::PingdomError;
use crate::model::responses::{
    EmailReportsResponse, MessageResponse, PublicReportsResponse, SharedReportsResponse,
};
use crate::presentation::report::{EmailReport, PublicReport, SharedReports};
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::{debug, info};

define_service! {
    /// Client for the `reports.email` resource.
    ReportsEmailService
}

impl<T: PingdomTransport> ReportsEmailService<T> {
    /// Lists all email report subscriptions.
    pub async fn list(&self) -> Result<Vec<EmailReport>, PingdomError> {
        debug!("Listing email report subscriptions");
        let response: EmailReportsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "reports.email", None, None)
            .await?;
        Ok(response.subscription)
    }

    /// Deletes an email report subscription. Returns the acknowledgement message.
    pub async fn delete(&self, report_id: i64) -> Result<String, PingdomError> {
        let path = format!("reports.email/{report_id}");
        info!("Deleting email report {}", report_id);
        let response: MessageResponse = self
            .transport
            .request::<(), (), _>(Method::DELETE, &path, None, None)
            .await?;
        Ok(response.message)
    }
}

define_service! {
    /// Client for the `reports.public` resource.
    ReportsPublicService
}

impl<T: PingdomTransport> ReportsPublicService<T> {
    /// Lists all published public report pages.
    pub async fn list(&self) -> Result<Vec<PublicReport>, PingdomError> {
        debug!("Listing public reports");
        let response: PublicReportsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "reports.public", None, None)
            .await?;
        Ok(response.public_reports)
    }
}

define_service! {
    /// Client for the `reports.shared` resource (banners).
    ReportsSharedService
}

impl<T: PingdomTransport> ReportsSharedService<T> {
    /// Lists all shared reports.
    pub async fn list(&self) -> Result<SharedReports, PingdomError> {
        debug!("Listing shared reports");
        let response: SharedReportsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "reports.shared", None, None)
            .await?;
        Ok(response.shared)
    }
}

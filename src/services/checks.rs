use crate::error::PingdomError;
use crate::model::requests::{ChecksQuery, CreateCheckRequest, ModifyCheckRequest};
use crate::model::responses::{
    CheckResponse, ChecksResponse, CreatedCheck, CreatedCheckResponse, MessageResponse,
};
use crate::presentation::check::{Check, DetailedCheck};
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::{debug, info};

define_service! {
    /// Client for the `checks` resource: list, inspect, create, modify and
    /// delete uptime checks.
    CheckService
}

impl<T: PingdomTransport> CheckService<T> {
    /// Lists all checks on the account.
    pub async fn list(&self) -> Result<Vec<Check>, PingdomError> {
        debug!("Listing checks");
        let response: ChecksResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "checks", None, None)
            .await?;
        debug!("{} checks found", response.checks.len());
        Ok(response.checks)
    }

    /// Lists checks with paging parameters.
    pub async fn list_with(&self, params: &ChecksQuery) -> Result<Vec<Check>, PingdomError> {
        debug!("Listing checks with paging");
        let response: ChecksResponse = self
            .transport
            .request::<_, (), _>(Method::GET, "checks", Some(params), None)
            .await?;
        Ok(response.checks)
    }

    /// Gets the full description of one check.
    pub async fn details(&self, check_id: i64) -> Result<DetailedCheck, PingdomError> {
        let path = format!("checks/{check_id}");
        debug!("Getting check details: {}", check_id);
        let response: CheckResponse = self
            .transport
            .request::<(), (), _>(Method::GET, &path, None, None)
            .await?;
        Ok(response.check)
    }

    /// Creates a new check.
    pub async fn create(&self, params: &CreateCheckRequest) -> Result<CreatedCheck, PingdomError> {
        info!("Creating check: {}", params.name);
        let response: CreatedCheckResponse = self
            .transport
            .request::<(), _, _>(Method::POST, "checks", None, Some(params))
            .await?;
        info!("Check created with id {}", response.check.id);
        Ok(response.check)
    }

    /// Modifies an existing check. Returns the acknowledgement message.
    pub async fn modify(
        &self,
        check_id: i64,
        params: &ModifyCheckRequest,
    ) -> Result<String, PingdomError> {
        let path = format!("checks/{check_id}");
        info!("Modifying check: {}", check_id);
        let response: MessageResponse = self
            .transport
            .request::<(), _, _>(Method::PUT, &path, None, Some(params))
            .await?;
        Ok(response.message)
    }

    /// Deletes a check. Returns the acknowledgement message.
    pub async fn delete(&self, check_id: i64) -> Result<String, PingdomError> {
        let path = format!("checks/{check_id}");
        info!("Deleting check: {}", check_id);
        let response: MessageResponse = self
            .transport
            .request::<(), (), _>(Method::DELETE, &path, None, None)
            .await?;
        Ok(response.message)
    }
}

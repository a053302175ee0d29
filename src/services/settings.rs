use crate::error::PingdomError;
use crate::model::responses::SettingsResponse;
use crate::presentation::settings::Settings;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `settings` resource.
    SettingsService
}

impl<T: PingdomTransport> SettingsService<T> {
    /// Gets the account settings.
    pub async fn get(&self) -> Result<Settings, PingdomError> {
        debug!("Getting account settings");
        let response: SettingsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "settings", None, None)
            .await?;
        Ok(response.settings)
    }
}

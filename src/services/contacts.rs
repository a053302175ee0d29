use crate::error::PingdomError;
use crate::model::responses::ContactsResponse;
use crate::presentation::contact::Contact;
use crate::services::define_service;
use crate::transport::PingdomTransport;
use reqwest::Method;
use tracing::debug;

define_service! {
    /// Client for the `contacts` resource.
    ContactService
}

impl<T: PingdomTransport> ContactService<T> {
    /// Lists all notification contacts on the account.
    pub async fn list(&self) -> Result<Vec<Contact>, PingdomError> {
        debug!("Listing contacts");
        let response: ContactsResponse = self
            .transport
            .request::<(), (), _>(Method::GET, "contacts", None, None)
            .await?;
        Ok(response.contacts)
    }
}

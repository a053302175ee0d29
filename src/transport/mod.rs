/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Reqwest-based transport implementation
pub mod http_client;
/// Transport and configurable-service traits
pub mod interface;

pub use http_client::{BasicCredentials, HttpClient};
pub use interface::{HasTransport, PingdomService, PingdomTransport};

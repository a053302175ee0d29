/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Per-resource API services.
//!
//! Every service is a thin typed wrapper over one transport instance: the
//! shared plumbing (construction, configuration, transport access) is
//! generated by [`define_service`], each module adds only the domain methods
//! of its resource. Services are not concurrency-safe; create one instance
//! per logical caller.

/// Actions (alert history) service
pub mod actions;
/// Downtime analysis service
pub mod analysis;
/// Check management service
pub mod checks;
/// Contact service
pub mod contacts;
/// Probe server service
pub mod probes;
/// Reference data service
pub mod reference;
/// Report services (email, public, shared)
pub mod reports;
/// Raw results service
pub mod results;
/// Server time service
pub mod server_time;
/// Account settings service
pub mod settings;
/// Summary services (average, outage, performance, probes)
pub mod summary;
/// Traceroute service
pub mod traceroute;

pub use actions::ActionsService;
pub use analysis::AnalysisService;
pub use checks::CheckService;
pub use contacts::ContactService;
pub use probes::ProbeService;
pub use reference::ReferenceService;
pub use reports::{ReportsEmailService, ReportsPublicService, ReportsSharedService};
pub use results::ResultsService;
pub use server_time::ServerTimeService;
pub use settings::SettingsService;
pub use summary::{
    SummaryAverageService, SummaryOutageService, SummaryPerformanceService, SummaryProbesService,
};
pub use traceroute::TracerouteService;

/// Defines a resource service: the struct, its constructors, and the
/// transport plumbing that gives it the configurable-service capability.
macro_rules! define_service {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T: $crate::transport::PingdomTransport = $crate::transport::HttpClient> {
            transport: T,
        }

        impl $name {
            /// Creates a service with its own default transport and no credentials.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    transport: $crate::transport::HttpClient::new(),
                }
            }

            /// Creates a service and applies every populated field of `config` to it.
            #[must_use]
            pub fn with_config(config: $crate::config::Config) -> Self {
                let mut service = Self::new();
                $crate::config::apply_config(&mut service, &config);
                service
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: $crate::transport::PingdomTransport> $name<T> {
            /// Creates a service on top of a caller-supplied transport.
            pub fn with_transport(transport: T) -> Self {
                Self { transport }
            }
        }

        impl<T: $crate::transport::PingdomTransport> $crate::transport::HasTransport for $name<T> {
            type Transport = T;

            fn transport(&self) -> &T {
                &self.transport
            }

            fn transport_mut(&mut self) -> &mut T {
                &mut self.transport
            }
        }
    };
}
pub(crate) use define_service;

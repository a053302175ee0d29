/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Service factory with shared defaults.
//!
//! A [`ServiceManager`] holds one [`Config`] and hands out service instances
//! with that configuration already applied. The manager keeps no reference to
//! the services it creates: mutating it afterwards never retroactively
//! affects already-created instances. Setters store values as-is and raise no
//! errors; downstream failures surface from the services themselves.

use crate::config::{Config, apply_config};
use crate::services::{
    ActionsService, AnalysisService, CheckService, ContactService, ProbeService, ReferenceService,
    ReportsEmailService, ReportsPublicService, ReportsSharedService, ResultsService,
    ServerTimeService, SettingsService, SummaryAverageService, SummaryOutageService,
    SummaryPerformanceService, SummaryProbesService, TracerouteService,
};
use crate::transport::interface::PingdomService;

/// Factory that mass-produces default-configured services
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceManager {
    config: Config,
}

impl ServiceManager {
    /// Creates a manager with every default unset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Creates a manager from an explicit configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Creates a manager from environment variables (see [`Config::from_env`]).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            config: Config::from_env(),
        }
    }

    /// Current defaults held by the manager.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets the default basic-auth credentials.
    ///
    /// Both values are stored; they are applied to created services only as a
    /// pair.
    pub fn set_authentication(&mut self, email: &str, password: &str) -> &mut Self {
        self.config.email = Some(email.to_string());
        self.config.password = Some(password.to_string());
        self
    }

    /// Sets the default App-Key.
    pub fn set_app_key(&mut self, value: &str) -> &mut Self {
        self.config.app_key = Some(value.to_string());
        self
    }

    /// Sets the default connection timeout in milliseconds.
    pub fn set_connect_timeout(&mut self, millis: u64) -> &mut Self {
        self.config.connect_timeout_ms = Some(millis);
        self
    }

    /// Sets the default read timeout in milliseconds.
    pub fn set_read_timeout(&mut self, millis: u64) -> &mut Self {
        self.config.read_timeout_ms = Some(millis);
        self
    }

    /// Overrides the default API base URL.
    pub fn set_base_url(&mut self, url: &str) -> &mut Self {
        self.config.base_url = Some(url.to_string());
        self
    }

    fn setup<S: PingdomService>(&self, service: &mut S) {
        apply_config(service, &self.config);
    }

    /// Actions (alerts) service with the current defaults applied.
    #[must_use]
    pub fn actions_service(&self) -> ActionsService {
        let mut service = Self::new_actions_service();
        self.setup(&mut service);
        service
    }

    /// Analysis service with the current defaults applied.
    #[must_use]
    pub fn analysis_service(&self) -> AnalysisService {
        let mut service = Self::new_analysis_service();
        self.setup(&mut service);
        service
    }

    /// Check service with the current defaults applied.
    #[must_use]
    pub fn check_service(&self) -> CheckService {
        let mut service = Self::new_check_service();
        self.setup(&mut service);
        service
    }

    /// Contact service with the current defaults applied.
    #[must_use]
    pub fn contact_service(&self) -> ContactService {
        let mut service = Self::new_contact_service();
        self.setup(&mut service);
        service
    }

    /// Probe service with the current defaults applied.
    #[must_use]
    pub fn probe_service(&self) -> ProbeService {
        let mut service = Self::new_probe_service();
        self.setup(&mut service);
        service
    }

    /// Reference service with the current defaults applied.
    #[must_use]
    pub fn reference_service(&self) -> ReferenceService {
        let mut service = Self::new_reference_service();
        self.setup(&mut service);
        service
    }

    /// Email reports service with the current defaults applied.
    #[must_use]
    pub fn reports_email_service(&self) -> ReportsEmailService {
        let mut service = Self::new_reports_email_service();
        self.setup(&mut service);
        service
    }

    /// Public reports service with the current defaults applied.
    #[must_use]
    pub fn reports_public_service(&self) -> ReportsPublicService {
        let mut service = Self::new_reports_public_service();
        self.setup(&mut service);
        service
    }

    /// Shared reports service with the current defaults applied.
    #[must_use]
    pub fn reports_shared_service(&self) -> ReportsSharedService {
        let mut service = Self::new_reports_shared_service();
        self.setup(&mut service);
        service
    }

    /// Raw results service with the current defaults applied.
    #[must_use]
    pub fn results_service(&self) -> ResultsService {
        let mut service = Self::new_results_service();
        self.setup(&mut service);
        service
    }

    /// Server time service with the current defaults applied.
    #[must_use]
    pub fn server_time_service(&self) -> ServerTimeService {
        let mut service = Self::new_server_time_service();
        self.setup(&mut service);
        service
    }

    /// Settings service with the current defaults applied.
    #[must_use]
    pub fn settings_service(&self) -> SettingsService {
        let mut service = Self::new_settings_service();
        self.setup(&mut service);
        service
    }

    /// Average summary service with the current defaults applied.
    #[must_use]
    pub fn summary_average_service(&self) -> SummaryAverageService {
        let mut service = Self::new_summary_average_service();
        self.setup(&mut service);
        service
    }

    /// Outage summary service with the current defaults applied.
    #[must_use]
    pub fn summary_outage_service(&self) -> SummaryOutageService {
        let mut service = Self::new_summary_outage_service();
        self.setup(&mut service);
        service
    }

    /// Performance summary service with the current defaults applied.
    #[must_use]
    pub fn summary_performance_service(&self) -> SummaryPerformanceService {
        let mut service = Self::new_summary_performance_service();
        self.setup(&mut service);
        service
    }

    /// Probe summary service with the current defaults applied.
    #[must_use]
    pub fn summary_probes_service(&self) -> SummaryProbesService {
        let mut service = Self::new_summary_probes_service();
        self.setup(&mut service);
        service
    }

    /// Traceroute service with the current defaults applied.
    #[must_use]
    pub fn traceroute_service(&self) -> TracerouteService {
        let mut service = Self::new_traceroute_service();
        self.setup(&mut service);
        service
    }

    /// Creates an actions service with no defaults applied.
    #[must_use]
    pub fn new_actions_service() -> ActionsService {
        ActionsService::new()
    }

    /// Creates an analysis service with no defaults applied.
    #[must_use]
    pub fn new_analysis_service() -> AnalysisService {
        AnalysisService::new()
    }

    /// Creates a check service with no defaults applied.
    #[must_use]
    pub fn new_check_service() -> CheckService {
        CheckService::new()
    }

    /// Creates a contact service with no defaults applied.
    #[must_use]
    pub fn new_contact_service() -> ContactService {
        ContactService::new()
    }

    /// Creates a probe service with no defaults applied.
    #[must_use]
    pub fn new_probe_service() -> ProbeService {
        ProbeService::new()
    }

    /// Creates a reference service with no defaults applied.
    #[must_use]
    pub fn new_reference_service() -> ReferenceService {
        ReferenceService::new()
    }

    /// Creates an email reports service with no defaults applied.
    #[must_use]
    pub fn new_reports_email_service() -> ReportsEmailService {
        ReportsEmailService::new()
    }

    /// Creates a public reports service with no defaults applied.
    #[must_use]
    pub fn new_reports_public_service() -> ReportsPublicService {
        ReportsPublicService::new()
    }

    /// Creates a shared reports service with no defaults applied.
    #[must_use]
    pub fn new_reports_shared_service() -> ReportsSharedService {
        ReportsSharedService::new()
    }

    /// Creates a results service with no defaults applied.
    #[must_use]
    pub fn new_results_service() -> ResultsService {
        ResultsService::new()
    }

    /// Creates a server time service with no defaults applied.
    #[must_use]
    pub fn new_server_time_service() -> ServerTimeService {
        ServerTimeService::new()
    }

    /// Creates a settings service with no defaults applied.
    #[must_use]
    pub fn new_settings_service() -> SettingsService {
        SettingsService::new()
    }

    /// Creates an average summary service with no defaults applied.
    #[must_use]
    pub fn new_summary_average_service() -> SummaryAverageService {
        SummaryAverageService::new()
    }

    /// Creates an outage summary service with no defaults applied.
    #[must_use]
    pub fn new_summary_outage_service() -> SummaryOutageService {
        SummaryOutageService::new()
    }

    /// Creates a performance summary service with no defaults applied.
    #[must_use]
    pub fn new_summary_performance_service() -> SummaryPerformanceService {
        SummaryPerformanceService::new()
    }

    /// Creates a probe summary service with no defaults applied.
    #[must_use]
    pub fn new_summary_probes_service() -> SummaryProbesService {
        SummaryProbesService::new()
    }

    /// Creates a traceroute service with no defaults applied.
    #[must_use]
    pub fn new_traceroute_service() -> TracerouteService {
        TracerouteService::new()
    }
}

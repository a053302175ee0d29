/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Pingdom Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits of the library.
//!
//! ## Usage
//!
//! ```rust
//! use pingdom_client::prelude::*;
//!
//! let mut manager = ServiceManager::new();
//! manager.set_app_key("my-app-key");
//! let checks = manager.check_service();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Shared default configuration applied to newly created services
pub use crate::config::{Config, apply_config};

/// Service factory with shared defaults
pub use crate::manager::ServiceManager;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{ApiError, PingdomError};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport implementation and traits
pub use crate::transport::{BasicCredentials, HasTransport, HttpClient, PingdomService, PingdomTransport};

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::services::{
    ActionsService, AnalysisService, CheckService, ContactService, ProbeService, ReferenceService,
    ReportsEmailService, ReportsPublicService, ReportsSharedService, ResultsService,
    ServerTimeService, SettingsService, SummaryAverageService, SummaryOutageService,
    SummaryPerformanceService, SummaryProbesService, TracerouteService,
};

// ============================================================================
// ENTITIES
// ============================================================================

pub use crate::presentation::alert::{Alert, AlertStatus, AlertVia};
pub use crate::presentation::analysis::Analysis;
pub use crate::presentation::check::{Check, CheckStatus, CheckType, DetailedCheck};
pub use crate::presentation::contact::Contact;
pub use crate::presentation::probe::Probe;
pub use crate::presentation::reference::Reference;
pub use crate::presentation::report::{Banner, BannerType, EmailReport, PublicReport, SharedReports};
pub use crate::presentation::result::{RawResult, ResultStatus};
pub use crate::presentation::settings::Settings;
pub use crate::presentation::summary::{
    AverageSummary, OutageSummary, PerformanceSummary, ProbeSummary,
};
pub use crate::presentation::traceroute::Traceroute;

// ============================================================================
// REQUEST PARAMETERS
// ============================================================================

pub use crate::model::requests::{
    ActionsQuery, AnalysisQuery, ChecksQuery, CreateCheckRequest, ModifyCheckRequest,
    PerformanceResolution, ResultsQuery, SummaryAverageQuery, SummaryOutageQuery,
    SummaryPerformanceQuery, SummaryProbesQuery, TracerouteQuery,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup helper
pub use crate::utils::logger::setup_logger;

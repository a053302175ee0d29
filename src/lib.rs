/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Pingdom Client
//!
//! Async Rust client for the Pingdom monitoring REST API (v2.0).
//!
//! The crate is organised around two pieces:
//!
//! - [`manager::ServiceManager`]: a configuration holder that stores optional
//!   defaults (App-Key, basic-auth credentials, connect/read timeouts) and
//!   mass-produces ready-to-use service instances from them.
//! - Per-resource services ([`services`]): each wraps one group of related
//!   endpoints (checks, probes, contacts, results, summaries, ...) on top of a
//!   shared HTTP transport, and returns typed entities on success.
//!
//! Services created by the manager are independent of it: mutating the manager
//! afterwards never affects instances it already handed out. A single service
//! instance is not meant to be shared between concurrent callers; create one
//! instance per logical caller instead.
//!
//! # Example
//! ```ignore
//! use pingdom_client::manager::ServiceManager;
//!
//! let mut manager = ServiceManager::new();
//! manager
//!     .set_app_key("my-app-key")
//!     .set_authentication("user@example.com", "secret");
//!
//! let checks = manager.check_service();
//! let all = checks.list().await?;
//! for check in all {
//!     println!("{} -> {:?}", check.name, check.status);
//! }
//! ```

/// Shared default configuration applied to newly created services
pub mod config;
/// Crate-wide constants (base URL, header names, user agent)
pub mod constants;
/// Error types for transport, decoding and remote-reported failures
pub mod error;
/// Service factory with shared defaults
pub mod manager;
/// Request parameter and response envelope models
pub mod model;
/// Convenient re-exports of the commonly used surface
pub mod prelude;
/// Entity models mirroring Pingdom JSON response shapes
pub mod presentation;
/// Per-resource API services
pub mod services;
/// HTTP transport layer and its traits
pub mod transport;
/// Miscellaneous helpers (env parsing, logging)
pub mod utils;

/// Library version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version.
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

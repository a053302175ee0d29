/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Alert (action) models
pub mod alert;
/// Downtime analysis models
pub mod analysis;
/// Check models and per-type detail objects
pub mod check;
/// Contact models
pub mod contact;
/// Probe server models
pub mod probe;
/// Reference data models (regions, timezones, formats)
pub mod reference;
/// Report models (email, public, shared banners)
pub mod report;
/// Raw test result models
pub mod result;
/// Account settings models
pub mod settings;
/// Summary models (average, outage, performance, probes)
pub mod summary;
/// Traceroute models
pub mod traceroute;

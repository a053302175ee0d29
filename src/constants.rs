/// Base URL of the Pingdom REST API, version 2.0
pub const BASE_URL: &str = "https://api.pingdom.com/api/2.0";
/// Header carrying the application key on every request
pub const APP_KEY_HEADER: &str = "App-Key";
/// User agent string used in HTTP requests to identify this client to the Pingdom API
pub const USER_AGENT: &str = "Rust-Pingdom-Client/0.2.0";

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber once.
///
/// The maximum level is read from the `LOGLEVEL` environment variable
/// (defaults to `INFO`). Safe to call multiple times; only the first call
/// installs the subscriber.
pub fn setup_logger() {
    LOGGER_INIT.get_or_init(|| {
        let level: Level = get_env_or_default("LOGLEVEL", Level::INFO);
        let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
    });
}

use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".gastos_core";
const EXPENSES_FILE: &str = "gastos.json";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("gastos_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.gastos_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("GASTOS_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the persisted expense ledger.
pub fn expenses_file() -> PathBuf {
    app_data_dir().join(EXPENSES_FILE)
}

/// Path to the dispatcher configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

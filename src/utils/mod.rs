pub mod build_info;
pub mod persistence;

use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const DATA_FILE: &str = "expenses.json";
const CONFIG_FILE: &str = "config.json";
const EXPORT_FILE: &str = "expenses.csv";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. Logs go to stderr so they never
/// interleave with menu output; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the expense list.
pub fn default_data_file() -> PathBuf {
    app_data_dir().join(DATA_FILE)
}

/// Settings live beside the data file they describe.
pub fn config_file_for(data_file: &Path) -> PathBuf {
    sibling(data_file, CONFIG_FILE)
}

/// Default CSV export target beside the data file.
pub fn export_file_for(data_file: &Path) -> PathBuf {
    sibling(data_file, EXPORT_FILE)
}

fn sibling(path: &Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

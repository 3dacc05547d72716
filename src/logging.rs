use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// Default log location: `<cache dir>/dustpan/dustpan.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("dustpan").join("dustpan.log"))
}

/// Send tracing output to `path`; the terminal belongs to the UI.
///
/// Returns false when the file cannot be opened, in which case nothing is logged.
pub fn init_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = File::create(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

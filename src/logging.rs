use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize logging to `{data_dir}/loancalc.log`.
///
/// The TUI owns stdout, so log output goes to a file. The level comes from
/// `RUST_LOG` when set, otherwise from `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("loancalc.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("loancalc={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized (log_path={})", log_path.display());
    Ok(())
}

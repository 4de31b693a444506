use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::panic::{self, PanicHookInfo};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// `<cache_dir>/goodfirst/goodfirst.log`, falling back to the temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("goodfirst")
        .join("goodfirst.log")
}

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "goodfirst=debug"
    } else {
        "goodfirst=info"
    }
}

/// Install the global subscriber. Output goes to `log_file` because the
/// terminal belongs to the TUI.
pub fn init_tracing(log_file: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Keeps panic reports off the terminal while it is in raw mode. The
/// previous hook comes back on drop.
pub struct PanicHookGuard {
    previous: Option<PanicHook>,
}

/// Send panic reports to the log file until the guard is dropped.
pub fn quiet_panics() -> PanicHookGuard {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
    PanicHookGuard {
        previous: Some(previous),
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

//! Tracing setup: stdout plus an append-only log file.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hwstatus_engine=debug,hwstatus_bot=debug,hwstatus_domain=info";

/// Install the global subscriber.
///
/// Every event goes to stdout and is appended to `log_file`. Both lines carry
/// timestamp, level, target and line number.
pub fn init_tracing(log_file: &Path) -> anyhow::Result<()> {
    let file = open_log_file(log_file)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer().with_line_number(true))
        .with(
            fmt::layer()
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(())
}

/// Open `path` for appending, creating it and its parent directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bot.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn appends_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}

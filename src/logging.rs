use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "trash_console=info";
const VERBOSE_FILTER: &str = "trash_console=debug";

/// Where log lines go. The interactive console owns the terminal, so it
/// logs to a file instead of stderr.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `RUST_LOG` wins over the built-in default when set.
pub fn init_tracing(target: LogTarget, json: bool, verbose: bool) -> Result<()> {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()));

    match target {
        LogTarget::Stderr if json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
        LogTarget::Stderr => registry.with(fmt::layer().with_writer(io::stderr)).try_init()?,
        LogTarget::File(path) => {
            let file = Mutex::new(open_log_file(&path)?);
            if json {
                registry
                    .with(fmt::layer().json().with_writer(file))
                    .try_init()?
            } else {
                registry
                    .with(fmt::layer().with_ansi(false).with_writer(file))
                    .try_init()?
            }
        }
    }
    Ok(())
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("trash-console")
        .join("console.log")
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_directories_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("logs").join("console.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_default_log_path_is_namespaced() {
        let path = default_log_path();
        assert!(path.ends_with("trash-console/console.log"));
    }
}

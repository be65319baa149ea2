//! CLI configuration.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKROOM_DATA_DIR` - Directory holding the inventory data file
//!   (default: current directory). A `--data-dir` flag takes precedence.
//! - `RUST_LOG` - Log filter for `tracing-subscriber` (e.g. `debug`)

use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "STOCKROOM_DATA_DIR";

/// Resolve the data directory: explicit flag, then environment, then the
/// current directory.
#[must_use]
pub fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_default() {
        let dir = data_dir(Some(PathBuf::from("/tmp/stock")));
        assert_eq!(dir, PathBuf::from("/tmp/stock"));
    }

    #[test]
    fn test_defaults_to_current_directory() {
        // Only meaningful when the env var is unset in the test runner.
        if std::env::var_os(DATA_DIR_ENV).is_none() {
            assert_eq!(data_dir(None), PathBuf::from("."));
        }
    }
}

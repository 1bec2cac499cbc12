//! Runtime configuration for the CLI.

use std::path::PathBuf;

/// Environment variable naming the database file.
pub const DB_ENV: &str = "MEDITRACK_DB";

/// Database file used when neither `--db` nor `MEDITRACK_DB` is set.
pub const DEFAULT_DB: &str = "meditrack.db";

/// Default log filter directive, extended by `RUST_LOG`.
pub const DEFAULT_LOG_DIRECTIVE: &str = "meditrack=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve configuration from the command line and the process environment.
    ///
    /// Call after `.env` has been loaded.
    pub fn load(db_flag: Option<PathBuf>) -> Self {
        Self::resolve(db_flag, std::env::var(DB_ENV).ok())
    }

    /// `--db` wins over the environment, which wins over the default.
    fn resolve(db_flag: Option<PathBuf>, db_env: Option<String>) -> Self {
        let db_path = db_flag
            .or_else(|| db_env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB));
        Self { db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Config::resolve(None, None).db_path, PathBuf::from("meditrack.db"));
    }

    #[test]
    fn test_env_used() {
        let config = Config::resolve(None, Some("/var/lib/meditrack/clinic.db".into()));
        assert_eq!(config.db_path, PathBuf::from("/var/lib/meditrack/clinic.db"));
    }

    #[test]
    fn test_blank_env_ignored() {
        assert_eq!(
            Config::resolve(None, Some("  ".into())).db_path,
            PathBuf::from(DEFAULT_DB)
        );
    }

    #[test]
    fn test_flag_wins() {
        let config = Config::resolve(Some("local.db".into()), Some("env.db".into()));
        assert_eq!(config.db_path, PathBuf::from("local.db"));
    }
}

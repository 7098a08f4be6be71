//! Front-desk configuration.
//!
//! Everything has a sensible default, and each field can be overridden
//! from the environment:
//!
//! | Variable                  | Field                | Default             |
//! |---------------------------|----------------------|---------------------|
//! | `INNKEEP_SNAPSHOT`        | `snapshot_path`      | `hotel_backup.json` |
//! | `INNKEEP_LOG`             | `log_filter`         | `warn`              |
//! | `INNKEEP_PROMPT_CONTINUE` | `prompt_to_continue` | `true`              |
//!
//! `RUST_LOG`, when set, wins over `INNKEEP_LOG`.

use std::path::PathBuf;

use innkeep_store::DEFAULT_SNAPSHOT_FILE;
use tracing_subscriber::EnvFilter;

/// Configuration for a front-desk session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontDeskConfig {
    /// Where the inventory snapshot is loaded from and saved to.
    pub snapshot_path: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    /// Defaults to `warn` so log lines don't interleave with the menu.
    pub log_filter: String,

    /// Ask "Continue? (y/n)" after each action.
    pub prompt_to_continue: bool,
}

impl Default for FrontDeskConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            log_filter: "warn".to_string(),
            prompt_to_continue: true,
        }
    }
}

impl FrontDeskConfig {
    /// Builds a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or empty keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("INNKEEP_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }
        if let Some(filter) = get("INNKEEP_LOG") {
            config.log_filter = filter;
        }
        if let Some(flag) = get("INNKEEP_PROMPT_CONTINUE") {
            config.prompt_to_continue = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        config
    }

    /// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, or
    /// by [`log_filter`](Self::log_filter) when that is unset.
    ///
    /// Does nothing if a global subscriber is already installed.
    pub fn install_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

//! Store configuration.

use std::path::{Path, PathBuf};

use tracing::Level;

/// Snapshot file used when none is configured explicitly.
pub const DEFAULT_SNAPSHOT: &str = "database.txt";

/// Which backend implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BackendKind {
    /// Linked-list store with snapshot persistence.
    #[default]
    List,
    /// Reports every call and stores nothing.
    Logger,
}

impl BackendKind {
    /// Effective log level for a run with this backend.
    ///
    /// The logger backend reports calls at `INFO`, so it never runs quieter
    /// than that; other backends keep `requested`.
    pub fn log_level(self, requested: Level) -> Level {
        match self {
            BackendKind::List => requested,
            BackendKind::Logger => requested.max(Level::INFO),
        }
    }
}

/// Construction-time settings for a backend.
///
/// # Example
///
/// ```
/// use linkv::StoreConfig;
/// use std::path::Path;
///
/// let config = StoreConfig::new().with_snapshot("/tmp/kv.txt");
/// assert_eq!(config.snapshot(), Some(Path::new("/tmp/kv.txt")));
///
/// assert_eq!(StoreConfig::in_memory().snapshot(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    snapshot: Option<PathBuf>,
}

impl StoreConfig {
    /// Default configuration: snapshot at [`DEFAULT_SNAPSHOT`] in the
    /// working directory.
    pub fn new() -> Self {
        Self {
            snapshot: Some(PathBuf::from(DEFAULT_SNAPSHOT)),
        }
    }

    /// Configuration without any snapshot; nothing is loaded or saved.
    pub fn in_memory() -> Self {
        Self { snapshot: None }
    }

    /// Loads from and saves to `path`.
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot = Some(path.into());
        self
    }

    /// Disables snapshot load and save.
    pub fn without_snapshot(mut self) -> Self {
        self.snapshot = None;
        self
    }

    /// Returns the snapshot path, if persistence is enabled.
    pub fn snapshot(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! The backend capability contract.
//!
//! Callers (the command dispatcher, the binary) hold a `Box<dyn Backend>`
//! and never learn which implementation is behind it.
//!
//! ```text
//! Backend             - put/get/delete/clear required
//!     │                 enumerate/shutdown optional
//!     ├── ListStore      - linked-list entries, snapshot on shutdown
//!     └── LoggerBackend  - reports calls, stores nothing
//! ```

use std::io::Write;

use tracing::info;

use crate::config::{BackendKind, StoreConfig};
use crate::error::{Result, StoreError};
use crate::{Key, ListStore};

/// A key-value store implementation.
///
/// `shutdown` consumes the backend, so it runs at most once and nothing can
/// be called afterwards.
pub trait Backend {
    /// Short name used in messages.
    fn name(&self) -> &'static str;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: Key, value: &str) -> Result<()>;

    /// Returns a view of the value stored under `key`.
    fn get(&self, key: Key) -> Option<&str>;

    /// Removes the entry for `key`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if there is no such entry.
    fn delete(&mut self, key: Key) -> Result<()>;

    /// Removes every entry.
    fn clear(&mut self) -> Result<()>;

    /// Writes every entry to `out` as `key,value` lines.
    ///
    /// Unsupported unless the backend overrides it.
    fn enumerate(&self, out: &mut dyn Write) -> Result<()> {
        let _ = out;
        Err(StoreError::Unsupported("enumerate"))
    }

    /// Persists whatever the backend persists and releases it.
    ///
    /// The default releases without persisting anything.
    fn shutdown(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// Constructs the backend selected by `kind`.
///
/// For [`BackendKind::List`] this loads the configured snapshot, if any.
pub fn open(kind: BackendKind, config: &StoreConfig) -> Result<Box<dyn Backend>> {
    let backend: Box<dyn Backend> = match kind {
        BackendKind::List => Box::new(ListStore::open(config)?),
        BackendKind::Logger => Box::new(LoggerBackend::new()),
    };
    info!(backend = backend.name(), "backend ready");
    Ok(backend)
}

/// A backend that only reports the calls it receives.
///
/// `get` never finds anything, `delete` always succeeds, and there is
/// nothing to enumerate or persist.
#[derive(Debug, Default)]
pub struct LoggerBackend {
    _private: (),
}

impl LoggerBackend {
    /// Creates a logger backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for LoggerBackend {
    fn name(&self) -> &'static str {
        "logger"
    }

    fn put(&mut self, key: Key, value: &str) -> Result<()> {
        info!("l: put({key}, {value})");
        Ok(())
    }

    fn get(&self, key: Key) -> Option<&str> {
        info!("l: get({key})");
        None
    }

    fn delete(&mut self, key: Key) -> Result<()> {
        info!("l: del({key})");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        info!("l: clear");
        Ok(())
    }
}

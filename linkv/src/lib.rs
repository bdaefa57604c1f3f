//! Integer-keyed key-value store over pluggable backends.
//!
//! ```text
//! command::run_op("p,1,a")  ──►  dyn Backend
//!                                   ├── ListStore     (linkv_list::List of entries)
//!                                   └── LoggerBackend (reports calls only)
//!
//! startup:  snapshot::load_into(backend, path)  - replays key,value lines via put
//! shutdown: Backend::shutdown(self: Box<Self>)  - ListStore writes the snapshot
//! ```
//!
//! # Example
//!
//! ```
//! use linkv::{Backend, BackendKind, StoreConfig};
//!
//! let mut backend = linkv::open(BackendKind::List, &StoreConfig::in_memory()).unwrap();
//! backend.put(5, "hello").unwrap();
//! assert_eq!(backend.get(5), Some("hello"));
//! backend.shutdown().unwrap();
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod command;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod store;

pub use backend::{Backend, LoggerBackend, open};
pub use command::{Command, CommandError};
pub use config::{BackendKind, DEFAULT_SNAPSHOT, StoreConfig};
pub use error::{RecordError, Result, StoreError};
pub use snapshot::LoadStats;
pub use store::ListStore;

/// Key type shared by every backend.
pub type Key = i32;

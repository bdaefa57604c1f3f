//! Linked-list backed store.
//!
//! Entries live in a [`List`] in the order of their last successful `put`.
//! Lookups are linear. A `put` on an existing key removes the old entry
//! first, so each key appears at most once and moves to the tail.

use std::io::Write;
use std::path::PathBuf;

use linkv_list::{Handle, List};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::{Backend, Key, snapshot};

/// One stored pair; the list owns it and drops the value on removal.
#[derive(Debug)]
struct Entry {
    key: Key,
    value: String,
}

impl Entry {
    #[inline]
    fn has_key(&self, key: &Key) -> bool {
        self.key == *key
    }
}

/// Key-value store over a doubly-linked list.
///
/// # Example
///
/// ```
/// use linkv::{Backend, ListStore};
///
/// let mut store = ListStore::new();
/// store.put(1, "a").unwrap();
/// store.put(2, "b").unwrap();
/// store.put(1, "c").unwrap();
/// store.delete(2).unwrap();
///
/// assert_eq!(store.get(1), Some("c"));
/// assert_eq!(store.get(2), None);
/// assert_eq!(store.entries().collect::<Vec<_>>(), vec![(1, "c")]);
/// ```
#[derive(Debug, Default)]
pub struct ListStore {
    entries: List<Entry>,
    snapshot: Option<PathBuf>,
}

impl ListStore {
    /// Creates an empty store that persists nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from `config`, loading its snapshot if one exists.
    ///
    /// The same snapshot path is written on [`Backend::shutdown`].
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let mut store = Self {
            entries: List::new(),
            snapshot: config.snapshot().map(PathBuf::from),
        };

        if let Some(path) = config.snapshot() {
            snapshot::load_into(&mut store, path)?;
        }

        Ok(store)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in enumeration order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (Key, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.key, entry.value.as_str()))
    }

    /// Writes the current entries to `path` in snapshot format.
    pub fn save(&self, path: &std::path::Path) -> Result<usize> {
        snapshot::save(path, self.entries())
    }

    #[inline]
    fn position(&self, key: Key) -> Option<Handle> {
        self.entries.find(Entry::has_key, &key)
    }
}

impl Backend for ListStore {
    fn name(&self) -> &'static str {
        "list"
    }

    fn put(&mut self, key: Key, value: &str) -> Result<()> {
        if let Some(old) = self.position(key) {
            self.entries.remove(old);
        }
        self.entries.push_back(Entry {
            key,
            value: value.to_owned(),
        });
        Ok(())
    }

    fn get(&self, key: Key) -> Option<&str> {
        let handle = self.position(key)?;
        self.entries.get(handle).map(|entry| entry.value.as_str())
    }

    fn delete(&mut self, key: Key) -> Result<()> {
        let handle = self.position(key).ok_or(StoreError::NotFound(key))?;
        self.entries.remove(handle);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        debug!(entries = self.entries.len(), "clearing store");
        self.entries.clear();
        Ok(())
    }

    fn enumerate(&self, out: &mut dyn Write) -> Result<()> {
        snapshot::write_entries(out, self.entries())?;
        Ok(())
    }

    fn shutdown(self: Box<Self>) -> Result<()> {
        let mut store = *self;
        let saved = match store.snapshot.take() {
            Some(path) => store.save(&path).map(Some),
            None => Ok(None),
        };
        info!(entries = store.entries.len(), "store shut down");
        store.entries.clear();
        saved.map(|_| ())
    }
}

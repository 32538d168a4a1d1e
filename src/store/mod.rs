//! Key-value persistence for game sessions.
//!
//! The game keeps its state in a flat, string-keyed store with three
//! independent entries (see [`PIN_KEY`], [`DIGEST_KEY`], [`ATTEMPTS_KEY`]).
//! The store is deliberately narrow so the session logic can run against
//! an in-memory fake in tests and a JSON file on disk in the real binary.
//!
//! # Architecture
//!
//! * [`memory`]: [`MemoryStore`], a `BTreeMap` with no durability.
//! * [`file`]: [`FileStore`], a flat JSON object persisted on every write.
//!
//! # Blast radius
//!
//! [`KeyValueStore::clear`] wipes every key in the store, not only the
//! three game keys. Callers must not share a store with unrelated data.

pub mod file;
pub mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the secret 3-digit PIN.
pub const PIN_KEY: &str = "pin";

/// Key holding the lowercase hex SHA-256 digest of the PIN.
pub const DIGEST_KEY: &str = "sha256";

/// Key holding the attempt counter as a decimal string.
pub const ATTEMPTS_KEY: &str = "attempts";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a flat JSON object of strings.
    #[error("store file {path} is corrupted (run `pinhash reset` to discard it): {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the entries for writing failed.
    #[error("failed to serialize store entries: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A flat string-keyed store, in the spirit of browser local storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove every key from the store.
    fn clear(&mut self) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn clear(&mut self) -> StoreResult<()> {
        (**self).clear()
    }
}

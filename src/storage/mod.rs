//! State persistence: the JSON codec, the write side (gateway), and the
//! read side (file watcher delivering payloads into the app channel).

pub mod codec;
mod gateway;
mod watcher;

pub use gateway::{StorageError, StorageGateway};
pub use watcher::{StorageWatcher, WatcherError};

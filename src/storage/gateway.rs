//! Write side of state persistence.
//!
//! Writes are fire-and-forget: `persist` encodes the state and hands the
//! bytes to a dedicated writer thread over a bounded channel. Nothing is
//! awaited and nothing is retried; a failed or dropped write is logged and
//! otherwise invisible to the rest of the app.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use thiserror::Error;

use crate::storage::codec;
use crate::todo::TodoState;

const WRITE_CHANNEL_SIZE: usize = 64;

/// Errors that can occur while setting up the state file location.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no data directory available on this platform")]
    NoDataDir,

    #[error("failed to create state directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle to the writer thread, plus the memory the watcher uses to
/// recognize the gateway's own writes.
pub struct StorageGateway {
    sender: SyncSender<Vec<u8>>,
    last_written: Arc<Mutex<Option<Vec<u8>>>>,
    path: PathBuf,
}

impl StorageGateway {
    /// Default state file location: `<data_dir>/tuido/todos.json`.
    ///
    /// # Errors
    /// [`StorageError::NoDataDir`] when the platform has no data directory.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(dir.join("tuido").join("todos.json"))
    }

    /// Create the state directory and start the writer thread.
    ///
    /// # Errors
    /// [`StorageError::CreateDir`] when the parent directory cannot be made.
    pub fn start(path: PathBuf) -> Result<Self, StorageError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let (sender, receiver) = sync_channel(WRITE_CHANNEL_SIZE);
        let writer_path = path.clone();
        thread::Builder::new()
            .name("storage-writer".to_string())
            .spawn(move || writer_loop(receiver, writer_path))
            .ok();

        Ok(Self {
            sender,
            last_written: Arc::new(Mutex::new(None)),
            path,
        })
    }

    /// The state file this gateway writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Enqueue a write of the encoded state. Never blocks; a full queue
    /// drops the write with a warning.
    pub fn persist(&self, state: &TodoState) {
        let bytes = codec::encode_bytes(state);
        *self.last_written.lock() = Some(bytes.clone());
        if let Err(err) = self.sender.try_send(bytes) {
            tracing::warn!(target: "tuido::storage", "state write dropped: {err}");
        }
    }

    /// Shared cell holding the bytes of the most recent `persist` call.
    /// The watcher compares deliveries against it to skip self-echoes.
    pub fn last_written(&self) -> Arc<Mutex<Option<Vec<u8>>>> {
        Arc::clone(&self.last_written)
    }
}

fn writer_loop(receiver: Receiver<Vec<u8>>, path: PathBuf) {
    while let Ok(bytes) = receiver.recv() {
        if let Err(err) = write_atomic(&path, &bytes) {
            tracing::warn!(
                target: "tuido::storage",
                path = %path.display(),
                "state write failed: {err}"
            );
        } else {
            tracing::debug!(
                target: "tuido::storage",
                bytes = bytes.len(),
                "state written"
            );
        }
    }
}

/// Write to a sibling temp file, then rename over the target, so readers
/// never observe a half-written state.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

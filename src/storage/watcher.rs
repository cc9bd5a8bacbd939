//! Read side of state persistence.
//!
//! Watches the state file and delivers its raw bytes into the app event
//! channel: once at startup, then whenever the file changes on disk, with
//! debouncing to group rapid writes. Payloads identical to the gateway's
//! own last write are skipped, so a local `persist` never round-trips back
//! into the reducer. Decoding happens at the receiving end, not here.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use thiserror::Error;

use crate::ui::events::AppEvent;

/// Errors that can occur while starting the watcher.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("failed to create file watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("state path has no parent directory")]
    NoParentDir,
}

/// Watches the state file for external changes.
///
/// Dropping this stops the watcher and, with it, the debounce thread.
pub struct StorageWatcher {
    _watcher: RecommendedWatcher,
    _debounce_handle: thread::JoinHandle<()>,
}

impl StorageWatcher {
    /// Start watching `path`, delivering payloads to `event_tx`.
    ///
    /// `last_written` is the gateway's write memory; deliveries matching it
    /// are self-echoes and are dropped.
    ///
    /// # Errors
    /// Returns an error if the watcher cannot be initialized or the path
    /// has no parent directory to watch.
    pub fn start(
        path: PathBuf,
        last_written: Arc<Mutex<Option<Vec<u8>>>>,
        event_tx: mpsc::Sender<AppEvent>,
        debounce_ms: u64,
    ) -> Result<Self, WatcherError> {
        let watch_dir = path.parent().ok_or(WatcherError::NoParentDir)?.to_path_buf();
        let state_filename = path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_default();

        // Channel for raw file events
        let (raw_tx, raw_rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                if let Ok(event) = result {
                    let _ = raw_tx.send(event);
                }
            },
            notify::Config::default(),
        )?;

        // Watch the parent directory (handles file deletion + recreation)
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        let debounce_handle = thread::spawn(move || {
            // Initial load: whatever is already on disk arrives through the
            // same channel as later changes.
            deliver(&path, &last_written, &event_tx);
            debounce_loop(raw_rx, path, last_written, event_tx, state_filename, debounce_ms);
        });

        Ok(Self {
            _watcher: watcher,
            _debounce_handle: debounce_handle,
        })
    }
}

/// Waits for `debounce_ms` after the last relevant event before reading the
/// file and delivering its bytes.
fn debounce_loop(
    rx: mpsc::Receiver<Event>,
    path: PathBuf,
    last_written: Arc<Mutex<Option<Vec<u8>>>>,
    event_tx: mpsc::Sender<AppEvent>,
    state_filename: OsString,
    debounce_ms: u64,
) {
    let debounce = Duration::from_millis(debounce_ms);
    let mut pending: Option<Instant> = None;

    loop {
        let timeout = if pending.is_some() {
            debounce
        } else {
            Duration::from_secs(60)
        };

        match rx.recv_timeout(timeout) {
            Ok(event) => {
                if is_state_event(&event, &state_filename) {
                    pending = Some(Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(last) = pending {
                    if last.elapsed() >= debounce {
                        deliver(&path, &last_written, &event_tx);
                        pending = None;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Read the file and send its bytes, unless they match the gateway's own
/// last write or the file is unreadable.
fn deliver(
    path: &std::path::Path,
    last_written: &Mutex<Option<Vec<u8>>>,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(
                target: "tuido::storage",
                path = %path.display(),
                "state file not readable: {err}"
            );
            return;
        }
    };

    if last_written.lock().as_deref() == Some(bytes.as_slice()) {
        tracing::trace!(target: "tuido::storage", "skipping self-echo delivery");
        return;
    }

    tracing::debug!(
        target: "tuido::storage",
        bytes = bytes.len(),
        "storage payload delivered"
    );
    let _ = event_tx.send(AppEvent::StoragePayload(bytes));
}

/// Check whether a notify event affects the state file.
fn is_state_event(event: &Event, state_filename: &OsString) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );

    if !relevant {
        return false;
    }

    event.paths.iter().any(|p| {
        p.file_name()
            .map(|name| name == state_filename)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn modify_of_the_state_file_is_relevant() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/data/tuido/todos.json"));
        assert!(is_state_event(&event, &OsString::from("todos.json")));
    }

    #[test]
    fn changes_to_other_files_are_ignored() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/data/tuido/other.json"));
        assert!(!is_state_event(&event, &OsString::from("todos.json")));
    }

    #[test]
    fn access_events_are_ignored() {
        let event = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/data/tuido/todos.json"));
        assert!(!is_state_event(&event, &OsString::from("todos.json")));
    }

    #[test]
    fn self_echo_is_not_delivered() {
        let (tx, rx) = mpsc::channel();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, b"payload").unwrap();

        let last_written = Mutex::new(Some(b"payload".to_vec()));
        deliver(&path, &last_written, &tx);
        assert!(rx.try_recv().is_err());

        *last_written.lock() = Some(b"something else".to_vec());
        deliver(&path, &last_written, &tx);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::StoragePayload(bytes)) if bytes == b"payload"
        ));
    }
}

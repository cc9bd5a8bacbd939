use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event as TermEvent, KeyEvent};

/// Everything the runtime loop consumes, from all producers, in one
/// single-consumer channel: the input thread (keys, paste, resize, ticks),
/// the storage watcher, and signal delivery.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Bracketed paste into the draft entry line.
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Raw bytes read from the state file: the initial load, or an external
    /// change. Decoded at the receiving end.
    StoragePayload(Vec<u8>),
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let signal_flag = Arc::new(AtomicBool::new(false));
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGTERM,
                Arc::clone(&signal_flag),
            );
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGINT,
                Arc::clone(&signal_flag),
            );

            let mut last_tick = Instant::now();
            loop {
                if signal_flag.swap(false, Ordering::Relaxed) {
                    let _ = event_tx.send(AppEvent::Shutdown);
                }

                // Short poll timeout so signals are noticed promptly
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(TermEvent::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Key(key));
                        }
                        Ok(TermEvent::Paste(text)) => {
                            let _ = event_tx.send(AppEvent::Paste(text));
                        }
                        Ok(TermEvent::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::warn!(target: "tuido::ui", "input read error: {err}");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        tracing::warn!(target: "tuido::ui", "input poll error: {err}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handed to background producers (the storage watcher).
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

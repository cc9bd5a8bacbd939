use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::storage::{codec, StorageGateway, StorageWatcher};
use crate::todo::TodoIntent;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run() -> anyhow::Result<()> {
    // Config and storage come up before the terminal flips to raw mode, so
    // startup failures print like a normal process.
    let config = Config::load().context("loading configuration")?;
    let data_path = match &config.data_path {
        Some(path) => path.clone(),
        None => StorageGateway::default_path()?,
    };
    let gateway = StorageGateway::start(data_path.clone()).context("starting state storage")?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_ms);
    let events = EventHandler::new(tick_rate);
    let _watcher = StorageWatcher::start(
        data_path,
        gateway.last_written(),
        events.sender(),
        config.debounce_ms,
    )
    .context("starting state watcher")?;
    let mut app = App::new(gateway);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.paste_into_draft(&text),
            Ok(AppEvent::Tick) => {}
            // The next draw reads the current terminal size; nothing to track
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StoragePayload(bytes)) => {
                let intent = match codec::decode_bytes(&bytes) {
                    Ok(state) => TodoIntent::Replace { state },
                    Err(err) => {
                        tracing::warn!(
                            target: "tuido::storage",
                            "rejecting storage payload: {err}"
                        );
                        TodoIntent::Noop
                    }
                };
                app.dispatch(intent);
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

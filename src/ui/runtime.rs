use crate::api::FinancialClient;
use crate::config::Config;
use crate::fetcher::{spawn_fetch_worker, COMMAND_CAPACITY};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Run the browser until the user quits.
pub fn run(config: &Config, client: FinancialClient, runtime: &Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);
    let worker = spawn_fetch_worker(runtime, client, command_rx, events.sender());

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config.backend.base_url.clone());
    app.set_command_sender(command_tx);
    app.start();
    tracing::info!(base_url = %config.backend.base_url, "browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => {
                let size = terminal.size()?;
                handle_mouse(&mut app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::trace!(cols, rows, "resize"),
            Ok(AppEvent::FetchCompleted { seq, result }) => app.on_fetch_complete(seq, result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app drops the last command sender, which ends the worker.
    drop(app);
    worker.abort();
    drop(guard);
    tracing::info!("browser stopped");
    Ok(())
}

use crate::config::ConfigStore;
use crate::search::{HttpSearchClient, SearchService};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::search_worker::SearchWorker;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive search screen until the user quits.
///
/// Searches run on `runtime`; everything else happens on the calling thread.
pub fn run(config: ConfigStore, runtime: Handle, initial_query: Option<String>) -> io::Result<()> {
    let snapshot = config.get();
    let client = HttpSearchClient::new(&snapshot.service)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    tracing::info!(endpoint = client.endpoint(), "search client ready");
    let service: Arc<dyn SearchService> = Arc::new(client);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(snapshot.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let worker = SearchWorker::spawn(&runtime, service, events.sender());

    let mut app = App::new(config);
    app.set_command_sender(worker.sender());
    app.mount();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    if let Some(text) = initial_query {
        for ch in text.chars() {
            app.insert_char(ch);
        }
        app.submit();
    }

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    app.unmount();
    worker.shutdown();
    drop(guard);
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SearchResolved { seq, outcome }) => app.on_search_resolved(seq, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

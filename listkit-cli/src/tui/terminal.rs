//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use listkit_core::{DataFetcher, PostSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::oneshot;

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run one fetch on a background task; the settled fetcher arrives on the receiver
fn spawn_fetch(source: Arc<dyn PostSource>) -> oneshot::Receiver<DataFetcher> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let mut fetcher = DataFetcher::new();
        fetcher.load(source.as_ref()).await;
        // Receiver is gone if the user quit or refetched meanwhile
        let _ = tx.send(fetcher);
    });
    rx
}

/// Run the TUI application
pub fn run(app: App, source: Arc<dyn PostSource>) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = app;

    let result = run_loop(&mut terminal, &mut app, source);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    source: Arc<dyn PostSource>,
) -> Result<()> {
    let mut pending = Some(spawn_fetch(Arc::clone(&source)));

    loop {
        if let Some(rx) = pending.as_mut() {
            match rx.try_recv() {
                Ok(fetcher) => {
                    app.set_status(format!("Loaded {} posts", fetcher.posts().len()));
                    app.fetcher = fetcher;
                    pending = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    // Fetch task panicked; settle like a failed fetch
                    app.fetcher = DataFetcher::ready(Vec::new());
                    app.set_status("Error fetching data");
                    pending = None;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            match handle_key(app, key) {
                HandleResult::Quit => app.should_quit = true,
                HandleResult::Continue => {}
                HandleResult::Refetch => {
                    app.fetcher = DataFetcher::new();
                    app.set_status("Refetching posts...");
                    pending = Some(spawn_fetch(Arc::clone(&source)));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

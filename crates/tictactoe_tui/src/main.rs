//! Terminal tic-tac-toe against a random computer opponent.
//!
//! The binary owns the terminal: it runs the ratatui render loop, feeds
//! typed input lines to the human player, and hosts the orchestrator as a
//! background task so that Ctrl+C stays responsive even while the
//! computer's thinking delay is running.

#![warn(missing_docs)]

mod app;
mod input;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_core::{GameState, MarkAssignment};
use tokio::sync::mpsc;
use tracing::info;

use app::{App, Phase};
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    info!("starting tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels between the UI loop, the human player and the orchestrator.
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // The coin flip binds sides to marks for the whole session.
    let marks = MarkAssignment::random(&mut rand::rng());
    info!(human = %marks.human(), computer = %marks.computer(), "marks assigned");

    let game = GameState::new(marks);
    let human = Box::new(HumanPlayer::new("You", line_rx, event_tx.clone()));
    let computer = Box::new(ComputerPlayer::new("Computer"));
    let mut orchestrator = Orchestrator::new(game, human, computer, event_tx);

    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            tracing::error!(error = %e, "orchestrator error");
        }
    });

    let app = App::new(marks);
    let res = run_app(&mut terminal, app, line_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(summary)) => println!("{summary}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Logs go to a file so they don't fight the TUI for the terminal.
fn init_logging() -> Result<()> {
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Render loop. Returns the result line to print after the terminal is
/// restored, or `None` when the user quit before the game was decided.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    line_tx: mpsc::UnboundedSender<String>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if *app.phase() == Phase::Aborted {
            return Ok(None);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C terminates unconditionally, including while the
                // computer's delay is running.
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(None);
                }

                if matches!(app.phase(), Phase::Finished(_)) {
                    // Any key leaves the final board.
                    return Ok(app.summary());
                }

                match key.code {
                    KeyCode::Enter => {
                        let line = app.take_input();
                        let _ = line_tx.send(line);
                    }
                    KeyCode::Backspace => app.pop_input(),
                    KeyCode::Char(c) => app.push_input(c),
                    _ => {}
                }
            }
        }
    }
}

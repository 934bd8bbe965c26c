//! Terminal UI for rewindable tic-tac-toe.
//!
//! The shell owns the game state and re-derives the whole frame from it
//! after every key press; all rules live in `rewind_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, KeyOutcome};

/// Rewindable tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
struct Cli {
    /// Write tracing output to this file (the terminal itself is the UI).
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start with the history list newest-first.
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    info!("Starting rewind tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.descending);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code) == KeyOutcome::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}

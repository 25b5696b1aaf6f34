use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::io::stdout;
use std::time::{Duration, Instant};
use tracing::{error, info};

mod app;
mod config;
mod core;
mod input;
mod loading;
mod pages;
mod portal_view;
mod status;
mod ui;

use app::{Action, App};
use config::Args;
use crate::core::storage::FileStore;
use ui::Term;

const FRAME: Duration = Duration::from_millis(16);

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(ratatui::Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

// ── Main application loop ─────────────────────────────────────────────────────

fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut clock = Instant::now();

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = input::map_key(app, key) {
                        app.handle(action);
                    }
                }
                Event::Resize(cols, _) => app.handle(Action::Resize(cols)),
                _ => {}
            }
        }

        // Only whole milliseconds reach the timer queue; the remainder carries over.
        let whole = Duration::from_millis(clock.elapsed().as_millis() as u64);
        clock += whole;
        app.advance(whole);
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir()?;
    let _log_guard = config::init_logging(&data_dir, &args.log_level)?;

    let storage = FileStore::open(&data_dir)
        .with_context(|| format!("opening storage in {}", data_dir.display()))?;
    info!(path = %storage.path().display(), lang = args.lang.code(), "starting portal");

    let mut terminal = init_terminal().context("initializing terminal")?;
    let cols = terminal.size().map(|s| s.width).unwrap_or(0);
    let mut app = App::new(Box::new(storage), args.lang, cols);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        run(&mut terminal, &mut app)
    }));

    // Always restore terminal
    restore_terminal(&mut terminal).ok();

    match result {
        Ok(Ok(())) => {
            info!("portal closed");
            Ok(())
        }
        Ok(Err(e)) => {
            error!(error = %e, "portal exited with an error");
            Err(e)
        }
        Err(_) => {
            error!("portal panicked");
            eprintln!("republic-portal crashed. See {}", data_dir.join(config::LOG_FILE).display());
            Ok(())
        }
    }
}

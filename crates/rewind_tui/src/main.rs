//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod show;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Control};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TuiConfig::resolve(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_play(&config),
        Command::Show { moves, jump } => run_show(&config, &moves, jump),
    }
}

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Print the result of a scripted game.
fn run_show(config: &TuiConfig, moves: &[usize], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();

    let replay = show::replay(moves, jump);
    for note in &replay.dropped {
        eprintln!("{}", note);
    }
    print!("{}", show::render_text(&replay.state));
    Ok(())
}

/// Run the interactive terminal UI.
fn run_play(config: &TuiConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Exiting rewind TUI");
    res
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    let tick = Duration::from_millis(*config.tick_ms());

    loop {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}

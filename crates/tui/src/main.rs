//! gRPC Tour - a guided terminal introduction to gRPC.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Application state or input translation (see `grpc_tour::app`).
//! - Rendering (see `grpc_tour::ui`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Logs go to a daily rolling file; stdout stays clean for the UI.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use grpc_tour::action::Action;
use grpc_tour::app::{App, AppOptions};
use grpc_tour::cli::Cli;
use grpc_tour::runtime::TerminalGuard;
use grpc_tour::ui;
use grpc_tour_content::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "grpc-tour.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so logs are flushed.

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(!no_mouse);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut options = AppOptions {
        mouse_enabled: !no_mouse,
        ..Default::default()
    };
    if let Some(theme) = cli.theme {
        options.theme = theme;
    }
    if let Some(section) = cli.section {
        options.section = section;
    }
    let mut app = App::new(options);

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    tokio::spawn(async move {
        use crossterm::event::EventStream;
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let Ok(event) = event_result else {
                break;
            };
            let action = match event {
                crossterm::event::Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        Some(Action::Input(key))
                    } else {
                        None
                    }
                }
                crossterm::event::Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
                crossterm::event::Event::Resize(width, height) => {
                    Some(Action::Resize(width, height))
                }
                _ => None,
            };
            let Some(action) = action else {
                continue;
            };

            // Key and resize events carry user intent and are never
            // dropped; mouse events flood during movement and may be.
            let is_critical = matches!(
                event,
                crossterm::event::Event::Key(_) | crossterm::event::Event::Resize(_, _)
            );
            if is_critical {
                if tx_input.send(action).await.is_err() {
                    break;
                }
            } else {
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    tracing::info!("starting UI loop");
    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Explicit cleanup on the normal exit path; TerminalGuard covers
    // panics and early returns.
    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    tracing::info!("clean shutdown");
    Ok(())
}

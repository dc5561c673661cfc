//! Terminal crawl runner.
//!
//! Orchestrates tick timing, non-blocking input, simulation, and dirty
//! rendering. The simulation advances on a wall-clock delta, so a slow
//! iteration never queues up extra ticks and an idle iteration costs at
//! most the input poll timeout.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_crawl::core::GameState;
use tui_crawl::input::{handle_key_event, should_quit};
use tui_crawl::term::{game_view, TerminalRenderer};
use tui_crawl::types::{Status, INPUT_POLL_MS, TICK_MS};

fn main() -> Result<()> {
    let _log_guard = init_debug_log();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if result.is_ok() {
        println!("Thanks for playing!");
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new();

    let tick_duration = Duration::from_millis(TICK_MS);
    let poll_timeout = Duration::from_millis(INPUT_POLL_MS);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        // Simulation tick on wall-clock schedule.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.tick();
            dirty = true;
        }

        // Non-blocking input, bounded by the poll timeout.
        if event::poll(poll_timeout)? {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        state.apply_action(action);
                        dirty = true;
                    }
                    // Unrecognized keys are a no-op: no state change, no redraw.
                }
                Ok(Event::Resize(..)) => {
                    dirty = true;
                }
                Ok(_) => {}
                Err(err) => {
                    // End of input on the event channel acts as a quit signal.
                    tracing::info!(%err, "input channel closed");
                    return Ok(());
                }
            }
        }

        if dirty {
            let frame = game_view::render(&state);
            term.draw(&frame)?;
            state.clear_event();

            match state.status() {
                Status::Running => dirty = false,
                status @ (Status::Won | Status::Lost) => {
                    // The frame just drawn already carries the banner.
                    tracing::info!(?status, health = state.player().health, "run over");
                    return Ok(());
                }
            }
        }
    }
}

/// Install a file-backed debug log when `CRAWL_DEBUG` is set.
///
/// Without the toggle no subscriber exists and `tracing` calls are disabled
/// stubs. The returned guard must stay alive for the process lifetime so the
/// non-blocking writer flushes on exit.
fn init_debug_log() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if std::env::var_os("CRAWL_DEBUG").is_none() {
        return None;
    }

    let appender = tracing_appender::rolling::never(".", "crawl-debug.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::DEBUG.into());

    // File only: stdout belongs to the renderer.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

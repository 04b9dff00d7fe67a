//! Terminal UI for timed tic-tac-toe.
//!
//! Three event sources feed one loop: key presses from a reader thread,
//! a one-second clock, and delayed computer moves. The loop handles them
//! strictly one at a time, so the engine never sees concurrent calls.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::{App, Effects};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use timed_tictactoe::{ComputerTurn, GameConfig};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, error, info, instrument};

/// Log file used while the terminal is in raw mode.
const LOG_FILE: &str = "timed_tictactoe.log";

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Runs the terminal UI until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Logging goes to a file so it does not draw over the UI
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,timed_tictactoe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting timed tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        },
    )
    .context("Failed to set up terminal")?;

    let result = run_game_loop(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!("TUI shut down");
    result
}

/// Runs `setup`, calling `restore` before returning its error.
///
/// Raw mode is already on when terminal setup starts; a failed setup must
/// not leave it on.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|e| {
        error!(error = %e, "Terminal setup failed, restoring terminal");
        restore();
    })
}

#[instrument(skip_all)]
async fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: GameConfig,
) -> Result<()> {
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || read_keys(key_tx));

    let (turn_tx, mut turn_rx) = mpsc::unbounded_channel::<ComputerTurn>();

    let mut app = App::new(&config);
    let mut clock = new_clock();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let effects = tokio::select! {
            key = key_rx.recv() => {
                let Some(key) = key else {
                    info!("Keyboard reader stopped");
                    break;
                };
                match input::action_for(key) {
                    Some(action) => app.handle_action(action),
                    None => Effects::default(),
                }
            }
            _ = clock.tick() => {
                app.tick();
                Effects::default()
            }
            Some(ticket) = turn_rx.recv() => app.computer_turn(ticket),
        };

        if app.should_quit() {
            info!("User quit");
            break;
        }
        if effects.reset_clock {
            clock.reset();
        }
        if let Some(ticket) = effects.computer_turn {
            schedule_computer_turn(&turn_tx, ticket, app.computer_delay());
        }
    }

    Ok(())
}

/// One-second clock whose first tick is a full period away.
fn new_clock() -> Interval {
    let mut clock = interval_at(Instant::now() + CLOCK_PERIOD, CLOCK_PERIOD);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    clock
}

/// Sends the ticket back to the loop after `delay`.
///
/// The engine decides on receipt whether the ticket is still good.
fn schedule_computer_turn(
    turn_tx: &mpsc::UnboundedSender<ComputerTurn>,
    ticket: ComputerTurn,
    delay: Duration,
) {
    debug!(?ticket, delay_ms = delay.as_millis() as u64, "Scheduling computer move");
    let turn_tx = turn_tx.clone();
    tokio::spawn(async move {
        sleep(delay).await;
        // The loop may already be gone after a quit.
        let _ = turn_tx.send(ticket);
    });
}

/// Blocking key reader, run on its own thread.
fn read_keys(key_tx: mpsc::UnboundedSender<KeyCode>) {
    loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key_tx.send(key.code).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Failed to read terminal event");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::other("no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).expect("setup succeeds");
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}

//! numvault CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`numvault_engine`] (room state) and [`numvault_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> load config + curriculum -> TerminalSession::new() -> run_room() -> Room + TUI
//! ```
//!
//! # Event Loop
//!
//! Fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`numvault_tui::InputPump`])
//! 3. Drain room events and advance the borrow fade (`view.tick()`)
//! 4. Render frame

mod assets;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use numvault_config::NumvaultConfig;
use numvault_engine::{Curriculum, Room, RoomSettings};
use numvault_tui::{InputPump, RoomView, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.numvault/logs/numvault.log
    if let Some(dir) = numvault_config::config_dir() {
        candidates.push(dir.join("logs").join("numvault.log"));
    }

    // Fallback: ./.numvault/logs/numvault.log
    candidates.push(PathBuf::from(".numvault").join("logs").join("numvault.log"));

    candidates
}

/// Resolve room settings and the curriculum, falling back to defaults and
/// the built-in levels when the user's files can't be used.
fn load_setup() -> Result<(RoomSettings, Curriculum)> {
    let config = match NumvaultConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            None
        }
    };

    let settings = config
        .as_ref()
        .map(NumvaultConfig::room_settings)
        .unwrap_or_default();

    let custom = config
        .as_ref()
        .and_then(NumvaultConfig::curriculum_path)
        .and_then(|path| match numvault_config::load_curriculum(&path) {
            Ok(curriculum) => Some(curriculum),
            Err(err) => {
                tracing::warn!("Falling back to built-in curriculum: {err}");
                None
            }
        });

    let curriculum = match custom {
        Some(curriculum) => curriculum,
        None => assets::builtin_curriculum()?,
    };

    Ok((settings, curriculum))
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored on drop, so the terminal
/// stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (settings, curriculum) = load_setup()?;
    let mut room = Room::new(curriculum);
    let mut view = RoomView::new(settings);

    let result = {
        let mut session = TerminalSession::new()?;
        run_room(&mut session.terminal, &mut room, &mut view).await
    };

    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    let stats = room.stats();
    tracing::info!(
        attempts = stats.attempts(),
        solved = stats.solved(),
        best_streak = stats.best_streak(),
        "Session ended"
    );

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_room<B>(terminal: &mut Terminal<B>, room: &mut Room, view: &mut RoomView) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(room, view, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        let now = Instant::now();
        view.tick(room, now.duration_since(last_frame));
        last_frame = now;

        if let Err(e) = terminal.draw(|frame| draw(frame, room, view)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}

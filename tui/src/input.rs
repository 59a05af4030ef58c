//! Input handling for the vault room.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use numvault_engine::{Advance, Digit, Room};

use crate::view::RoomView;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into the room. Returns `true` when the user quit.
pub fn handle_events(room: &mut Room, view: &mut RoomView, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if let Event::Key(key) = ev
            && apply_key(room, view, key)
        {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// Apply one key press. Returns `true` when the key means quit.
pub fn apply_key(room: &mut Room, view: &mut RoomView, key: KeyEvent) -> bool {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if room.is_complete() {
        return matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter
        );
    }

    // The view catches up with a level change on its next tick; keys queued
    // behind `n` in the same frame must still address a real column.
    let column = view
        .selected()
        .min(room.level().column_count().saturating_sub(1));
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Left | KeyCode::Char('h') => view.select_left(),
        KeyCode::Right | KeyCode::Char('l') => view.select_right(room),
        KeyCode::Up | KeyCode::Char('k') => room.spin_up(column),
        KeyCode::Down | KeyCode::Char('j') => room.spin_down(column),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Ok(digit) = Digit::try_from(c) {
                room.set_column(column, digit);
                view.select_right(room);
            }
        }
        KeyCode::Char('b') => {
            let _ = room.borrow_from(column);
        }
        KeyCode::Enter => {
            room.verify();
        }
        KeyCode::Char('r') => room.reset_current(),
        KeyCode::Char('n') => {
            if room.is_solved() {
                if room.advance() == Advance::Complete {
                    debug!("Last level passed");
                }
            } else {
                view.set_notice("Solve this level before moving on");
            }
        }
        _ => {}
    }
    false
}

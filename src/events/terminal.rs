use crate::config::KeyAction;
use crate::navigation::NavKey;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{io, sync::mpsc, thread, time::Duration, time::Instant};

/// Specify terminal event poll rate in milliseconds. Also bounds how late a
/// navigation deadline can fire.
///
const TICK_RATE_IN_MS: u64 = 16;

/// Specify different terminal event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Specify struct for managing terminal events channel. The polling thread
/// owns the only sender, so `handle_next` fails once that thread stops.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        Handler::with_source(|timeout| {
            if !event::poll(timeout)? {
                return Ok(None);
            }
            Ok(match event::read()? {
                CrosstermEvent::Key(key) => Some(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
                _ => None,
            })
        })
    }

    /// Spawn the polling thread over `source`, which waits up to the tick
    /// rate for the next event. A tick follows every wait. The thread stops
    /// on the first source error or once the receiver is gone.
    ///
    pub fn with_source<F>(mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match source(tick_rate) {
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = self.rx.recv()?;
        Ok(handle_event(state, event, Instant::now()))
    }
}

/// Apply one event at `now`. Deadlines due at `now` fire before the input is
/// applied. Returns false if exit was requested.
///
pub fn handle_event(state: &mut State, event: Event, now: Instant) -> bool {
    state.tick(now);
    match event {
        Event::Key(key) => return handle_key(state, key, now),
        Event::Mouse(mouse) => handle_mouse(state, mouse, now),
        Event::Resize(width, height) => {
            debug!("Terminal resized to {}x{}", width, height);
        }
        Event::Tick => {}
    }
    true
}

fn handle_key(state: &mut State, key: KeyEvent, now: Instant) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    if state.is_prompt_focused() {
        handle_prompt_key(state, key, now);
        return true;
    }
    if key.code == KeyCode::Enter && state.focus_prompt() {
        return true;
    }

    if let Some(action) = state.keymap().action_for(&key) {
        trace!("Key {:?} mapped to {:?}", key.code, action);
        match action {
            KeyAction::Quit => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
            KeyAction::Forward => {
                state.on_nav_key(NavKey::Forward, now);
            }
            KeyAction::Backward => {
                state.on_nav_key(NavKey::Backward, now);
            }
            KeyAction::First => {
                state.on_nav_key(NavKey::First, now);
            }
            KeyAction::Last => {
                state.on_nav_key(NavKey::Last, now);
            }
            KeyAction::NextProject => {
                state.next_project();
            }
            KeyAction::ToggleTheme => state.toggle_theme(),
            KeyAction::ToggleLog => state.toggle_log(),
        }
        return true;
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() => {
            match c.to_digit(10).filter(|digit| *digit > 0) {
                Some(digit) if (digit as usize) <= state.section_count() => {
                    state.request_section(digit as usize - 1, now);
                }
                _ => debug!("Skipping processing of terminal event '{:?}'...", key),
            }
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", key),
    }
    true
}

/// Keys while the contact message field has focus. Navigation keys are not
/// mapped here, so typing never changes the section.
///
fn handle_prompt_key(state: &mut State, key: KeyEvent, now: Instant) {
    let typing = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
    match key.code {
        KeyCode::Char(c) if typing => state.type_prompt(c),
        KeyCode::Backspace => state.erase_prompt(),
        KeyCode::Enter => {
            if !state.submit_prompt(now) {
                debug!("Nothing to send");
            }
        }
        KeyCode::Esc => state.blur_prompt(),
        _ => debug!("Skipping processing of terminal event '{:?}'...", key),
    }
}

fn handle_mouse(state: &mut State, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll(1, now),
        MouseEventKind::ScrollUp => state.scroll(-1, now),
        MouseEventKind::Down(MouseButton::Left) => {
            state.click(mouse.column, mouse.row, now);
        }
        _ => {}
    }
}

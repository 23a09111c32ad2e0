/// Input: raw terminal key events mapped onto a closed set of logical keys.
///
/// Events are queued by the host and drained at the start of each tick, so
/// the simulation never observes input mid-update.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    /// Duck on the ground, fast-fall in the air.
    Duck,
    Attack,
    Enter,
    Quit,
}

/// Everything the host can feed the engine between ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    Resize { width: u16, height: u16 },
    Focus(bool),
}

/// Map a raw key event to its logical key, if any.
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Quit),
            _ => None,
        };
    }
    match event.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Jump),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Duck),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(Key::Attack)
        }
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// The set of logical keys currently held.
#[derive(Clone, Debug, Default)]
pub struct KeyHandler {
    pressed: HashSet<Key>,
}

impl KeyHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent; returns the mapped key.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> Option<Key> {
        let key = map_key(event)?;
        self.pressed.insert(key);
        Some(key)
    }

    pub fn on_key_up(&mut self, event: &KeyEvent) -> Option<Key> {
        let key = map_key(event)?;
        self.pressed.remove(&key);
        Some(key)
    }

    pub fn pressing_keys(&self) -> &HashSet<Key> {
        &self.pressed
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

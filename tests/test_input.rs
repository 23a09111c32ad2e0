use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dino_runner::input::{map_key, Key, KeyHandler};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// ── map_key ───────────────────────────────────────────────────────────────────

#[test]
fn jump_keys() {
    for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('w')] {
        assert_eq!(map_key(&key(code)), Some(Key::Jump), "{:?}", code);
    }
}

#[test]
fn duck_keys() {
    for code in [KeyCode::Down, KeyCode::Char('s')] {
        assert_eq!(map_key(&key(code)), Some(Key::Duck), "{:?}", code);
    }
}

#[test]
fn attack_keys() {
    for code in [KeyCode::Char('x'), KeyCode::Char('F')] {
        assert_eq!(map_key(&key(code)), Some(Key::Attack), "{:?}", code);
    }
}

#[test]
fn enter_and_quit() {
    assert_eq!(map_key(&key(KeyCode::Enter)), Some(Key::Enter));
    assert_eq!(map_key(&key(KeyCode::Esc)), Some(Key::Quit));
    assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(Key::Quit));
    assert_eq!(map_key(&ctrl('c')), Some(Key::Quit));
}

#[test]
fn unmapped_keys() {
    assert_eq!(map_key(&key(KeyCode::Char('c'))), None);
    assert_eq!(map_key(&key(KeyCode::Left)), None);
    assert_eq!(map_key(&ctrl('x')), None);
}

// ── KeyHandler ────────────────────────────────────────────────────────────────

#[test]
fn key_down_is_idempotent() {
    let mut keys = KeyHandler::new();
    keys.on_key_down(&key(KeyCode::Char(' ')));
    keys.on_key_down(&key(KeyCode::Up));
    assert_eq!(keys.pressing_keys().len(), 1);
    assert!(keys.is_pressed(Key::Jump));

    keys.on_key_up(&key(KeyCode::Char(' ')));
    assert!(!keys.is_pressed(Key::Jump));
}

#[test]
fn release_without_press_is_harmless() {
    let mut keys = KeyHandler::new();
    assert_eq!(keys.on_key_up(&key(KeyCode::Down)), Some(Key::Duck));
    assert!(keys.pressing_keys().is_empty());
}

#[test]
fn unmapped_keys_do_not_enter_the_set() {
    let mut keys = KeyHandler::new();
    assert_eq!(keys.on_key_down(&key(KeyCode::Tab)), None);
    assert!(keys.pressing_keys().is_empty());
}

#[test]
fn several_keys_held_at_once() {
    let mut keys = KeyHandler::new();
    keys.on_key_down(&key(KeyCode::Down));
    keys.on_key_down(&key(KeyCode::Char('x')));
    assert!(keys.is_pressed(Key::Duck));
    assert!(keys.is_pressed(Key::Attack));
    keys.clear();
    assert!(keys.pressing_keys().is_empty());
}

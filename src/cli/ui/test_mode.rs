//! Scripted key input for driving the form without a terminal.
//!
//! When `DIVE_LOG_TEST_KEYS` is set, the session reads keys from this queue
//! instead of the terminal. Tokens are comma separated: `<TAB>`, `<BACKTAB>`,
//! `<ENTER>`, `<LEFT>`, `<RIGHT>`, `<ESC>`, `<CTRL_C>`, `<CTRL_D>`,
//! `<BACKSPACE>`, `<CTRL_U>` and `<SPACE>` name special keys; any other token
//! is typed one character at a time.

use std::collections::VecDeque;
use std::sync::Mutex;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use once_cell::sync::Lazy;

use crate::config::Preferences;

struct KeyQueue {
    enabled: bool,
    keys: VecDeque<KeyEvent>,
}

impl KeyQueue {
    fn from_env() -> Self {
        match Preferences::from_env().scripted_keys {
            Some(raw) => Self {
                enabled: true,
                keys: parse_key_sequence(&raw),
            },
            None => Self::new(),
        }
    }

    fn new() -> Self {
        Self {
            enabled: false,
            keys: VecDeque::new(),
        }
    }
}

static SCRIPTED_KEYS: Lazy<Mutex<KeyQueue>> = Lazy::new(|| Mutex::new(KeyQueue::from_env()));

pub fn is_enabled() -> bool {
    SCRIPTED_KEYS
        .lock()
        .map(|guard| guard.enabled)
        .unwrap_or(false)
}

/// Removes and returns every queued key.
pub fn take_keys() -> VecDeque<KeyEvent> {
    SCRIPTED_KEYS
        .lock()
        .map(|mut guard| std::mem::take(&mut guard.keys))
        .unwrap_or_default()
}

pub fn install_keys(keys: Vec<KeyEvent>) {
    if let Ok(mut guard) = SCRIPTED_KEYS.lock() {
        guard.enabled = true;
        guard.keys = keys.into();
    }
}

pub fn reset_keys() {
    if let Ok(mut guard) = SCRIPTED_KEYS.lock() {
        guard.enabled = false;
        guard.keys.clear();
    }
}

pub fn parse_key_sequence(raw: &str) -> VecDeque<KeyEvent> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .flat_map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Vec<KeyEvent> {
    if let Some(name) = token.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        if let Some(key) = parse_named_key(name) {
            return vec![key];
        }
    }
    token
        .chars()
        .map(|ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
        .collect()
}

fn parse_named_key(name: &str) -> Option<KeyEvent> {
    let plain = |code| Some(KeyEvent::new(code, KeyModifiers::NONE));
    let ctrl = |ch| Some(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    match name.to_ascii_uppercase().as_str() {
        "TAB" => plain(KeyCode::Tab),
        "BACKTAB" | "SHIFT_TAB" => Some(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
        "ENTER" | "RETURN" => plain(KeyCode::Enter),
        "LEFT" => plain(KeyCode::Left),
        "RIGHT" => plain(KeyCode::Right),
        "ESC" | "ESCAPE" => plain(KeyCode::Esc),
        "BACKSPACE" => plain(KeyCode::Backspace),
        "SPACE" => plain(KeyCode::Char(' ')),
        "CTRL_C" => ctrl('c'),
        "CTRL_D" => ctrl('d'),
        "CTRL_U" => ctrl('u'),
        _ => None,
    }
}

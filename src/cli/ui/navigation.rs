use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::Command;

/// Maps a key press to the form command it triggers. Anything that is not a
/// navigation key becomes [`Command::Edit`] carrying the raw event.
pub fn classify(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D') =
            key.code
        {
            return Command::Cancel;
        }
    }

    match key.code {
        KeyCode::Right => Command::NextPage,
        KeyCode::Left => Command::PreviousPage,
        KeyCode::Enter => Command::Confirm,
        KeyCode::BackTab => Command::FocusPrevious,
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Command::FocusPrevious,
        KeyCode::Tab => Command::FocusNext,
        KeyCode::Esc => Command::Cancel,
        _ => Command::Edit(key),
    }
}

/// Blocks until the terminal reports a key press.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_change_pages() {
        assert_eq!(classify(plain(KeyCode::Right)), Command::NextPage);
        assert_eq!(classify(plain(KeyCode::Left)), Command::PreviousPage);
    }

    #[test]
    fn tab_variants_move_focus() {
        assert_eq!(classify(plain(KeyCode::Tab)), Command::FocusNext);
        assert_eq!(classify(plain(KeyCode::BackTab)), Command::FocusPrevious);
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(classify(shift_tab), Command::FocusPrevious);
    }

    #[test]
    fn quit_keys_cancel() {
        assert_eq!(classify(plain(KeyCode::Esc)), Command::Cancel);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(classify(ctrl_c), Command::Cancel);
        assert_eq!(classify(ctrl_d), Command::Cancel);
    }

    #[test]
    fn everything_else_is_an_edit() {
        let key = plain(KeyCode::Char('c'));
        assert_eq!(classify(key), Command::Edit(key));
        let up = plain(KeyCode::Up);
        assert_eq!(classify(up), Command::Edit(up));
        assert_eq!(classify(plain(KeyCode::Enter)), Command::Confirm);
    }
}

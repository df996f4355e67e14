use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::catalog::FieldDescriptor;

/// One editable entry of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub descriptor: FieldDescriptor,
    value: String,
    focused: bool,
}

impl Field {
    pub fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            value: String::new(),
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The slice of the value that fits the display width, keeping the most
    /// recently typed characters visible.
    pub fn visible_value(&self) -> &str {
        let len = self.value.chars().count();
        if len <= self.descriptor.width {
            return &self.value;
        }
        let skip = len - self.descriptor.width;
        match self.value.char_indices().nth(skip) {
            Some((offset, _)) => &self.value[offset..],
            None => "",
        }
    }
}

/// Text-editing behaviour applied to the focused field.
pub trait FieldEditor {
    /// Returns the updated value, or `None` when `key` does not edit.
    fn edit(&self, key: &KeyEvent, value: &str) -> Option<String>;
}

/// Append-only line editing: characters append, Backspace removes the last
/// character, Ctrl+U and Delete clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEditor;

impl FieldEditor for LineEditor {
    fn edit(&self, key: &KeyEvent, value: &str) -> Option<String> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') | KeyCode::Char('U') => Some(String::new()),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => {
                let mut updated = value.to_string();
                updated.push(ch);
                Some(updated)
            }
            KeyCode::Backspace => {
                let mut updated = value.to_string();
                updated.pop()?;
                Some(updated)
            }
            KeyCode::Delete => Some(String::new()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn characters_append() {
        let editor = LineEditor;
        assert_eq!(editor.edit(&key(KeyCode::Char('7')), "1"), Some("17".into()));
        let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(editor.edit(&shifted, ""), Some("R".into()));
    }

    #[test]
    fn backspace_on_empty_value_is_not_an_edit() {
        let editor = LineEditor;
        assert_eq!(editor.edit(&key(KeyCode::Backspace), ""), None);
        assert_eq!(editor.edit(&key(KeyCode::Backspace), "ab"), Some("a".into()));
    }

    #[test]
    fn ctrl_u_and_delete_clear() {
        let editor = LineEditor;
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(editor.edit(&ctrl_u, "reef"), Some(String::new()));
        assert_eq!(editor.edit(&key(KeyCode::Delete), "reef"), Some(String::new()));
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(editor.edit(&ctrl_x, "reef"), None);
    }

    #[test]
    fn ignores_navigation_keys() {
        assert_eq!(LineEditor.edit(&key(KeyCode::Up), "reef"), None);
    }

    #[test]
    fn visible_value_keeps_the_tail() {
        let mut field = Field::new(FieldDescriptor::new("notes").with_width(4));
        field.set_value("abc");
        assert_eq!(field.visible_value(), "abc");
        field.set_value("abcdef");
        assert_eq!(field.visible_value(), "cdef");
        field.set_value("ñandú!");
        assert_eq!(field.visible_value(), "ndú!");
    }
}

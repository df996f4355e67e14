//! Paginated focus/navigation state machine.
//!
//! [`FormState`] owns the page index, the focus index within that page, every
//! field value, and the last recoverable error. Each navigation [`Command`]
//! maps to one transition method; keys that are not navigation commands are
//! handed to a [`FieldEditor`] and written back into the focused field only.
//!
//! Invariants held after every transition:
//! - `current_page < page_count` and `focus_index < page_len(current_page)`;
//! - exactly one field in the whole form is focused, the one at
//!   `(current_page, focus_index)`;
//! - values persist across page changes in both directions.

use crossterm::event::KeyEvent;

use crate::errors::FormError;
use crate::form::catalog::{Catalog, FieldRole};
use crate::form::field::{Field, FieldEditor, LineEditor};
use crate::form::gas;

/// Navigation commands understood by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PreviousPage,
    Confirm,
    FocusNext,
    FocusPrevious,
    Cancel,
    Edit(KeyEvent),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Cancelled,
    /// Confirmed on the last field. `gas_remaining` is `None` when the gas
    /// readings did not parse; the error slot then holds the reason.
    Submitted { gas_remaining: Option<i64> },
}

/// Result of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit(SessionEnd),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    catalog: Catalog,
    fields: Vec<Field>,
    current_page: usize,
    focus_index: usize,
    error: Option<FormError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(Catalog::dive_log())
    }
}

impl FormState {
    /// Fresh state: first page, first field focused, every value empty.
    pub fn new(catalog: Catalog) -> Self {
        let fields = catalog.fields().iter().cloned().map(Field::new).collect();
        let mut state = Self {
            catalog,
            fields,
            current_page: 0,
            focus_index: 0,
            error: None,
        };
        state.apply_focus();
        state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields shown on the current page, in order.
    pub fn page_fields(&self) -> &[Field] {
        &self.fields[self.catalog.page(self.current_page)]
    }

    /// Global index of the focused field.
    pub fn focused_index(&self) -> usize {
        self.catalog.page(self.current_page).start + self.focus_index
    }

    pub fn focused_field(&self) -> &Field {
        &self.fields[self.focused_index()]
    }

    /// Value of the field carrying a gas role.
    pub fn value_of(&self, role: FieldRole) -> Option<&str> {
        self.catalog
            .position(role)
            .map(|index| self.fields[index].value())
    }

    /// Overwrites a field value by global index. Navigation state is untouched.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.set_value(value);
        }
    }

    /// Live gas preview; `None` until both readings parse.
    pub fn gas_preview(&self) -> Option<i64> {
        let start = self.value_of(FieldRole::GasStart)?;
        let end = self.value_of(FieldRole::GasEnd)?;
        gas::preview(start, end)
    }

    pub fn apply(&mut self, command: Command) -> Transition {
        self.apply_with(command, &LineEditor)
    }

    pub fn apply_with<E: FieldEditor>(&mut self, command: Command, editor: &E) -> Transition {
        match command {
            Command::NextPage => {
                // Failure is recorded in the error slot.
                let _ = self.move_to_next_page();
                Transition::Continue
            }
            Command::PreviousPage => {
                self.move_to_previous_page();
                Transition::Continue
            }
            Command::Confirm => self.advance_focus_or_submit(),
            Command::FocusNext => {
                self.focus_next();
                Transition::Continue
            }
            Command::FocusPrevious => {
                self.focus_previous();
                Transition::Continue
            }
            Command::Cancel => {
                tracing::debug!("session cancelled");
                Transition::Exit(SessionEnd::Cancelled)
            }
            Command::Edit(key) => {
                self.delegate_edit(editor, &key);
                Transition::Continue
            }
        }
    }

    /// Advances one page when every field on the current page has a value.
    /// On the last page this is a no-op.
    pub fn move_to_next_page(&mut self) -> Result<(), FormError> {
        if self.current_page + 1 >= self.catalog.page_count() {
            return Ok(());
        }
        if self.page_fields().iter().any(Field::is_empty) {
            tracing::info!(page = self.current_page, "page has empty fields");
            let err = FormError::IncompletePage;
            self.error = Some(err.clone());
            return Err(err);
        }

        self.current_page += 1;
        self.focus_index = 0;
        self.error = None;
        self.apply_focus();
        tracing::debug!(page = self.current_page, "moved to next page");
        Ok(())
    }

    /// Goes back one page without validating. The focus index is kept when it
    /// fits the previous page and clamped to its last field otherwise.
    pub fn move_to_previous_page(&mut self) {
        if self.current_page == 0 {
            return;
        }
        self.current_page -= 1;
        self.focus_index = self.focus_index.min(self.last_focus_index());
        self.apply_focus();
        tracing::debug!(page = self.current_page, "moved to previous page");
    }

    /// Confirm: submits from the very last field, otherwise behaves like
    /// [`FormState::focus_next`].
    pub fn advance_focus_or_submit(&mut self) -> Transition {
        if self.focused_index() + 1 == self.catalog.field_count() {
            return Transition::Exit(self.submit());
        }
        self.focus_next();
        Transition::Continue
    }

    /// Moves focus to the next field, crossing into the next page without
    /// validating the one being left.
    pub fn focus_next(&mut self) {
        if self.focus_index < self.last_focus_index() {
            self.focus_index += 1;
        } else if self.current_page + 1 < self.catalog.page_count() {
            self.current_page += 1;
            self.focus_index = 0;
        }
        self.apply_focus();
    }

    /// Moves focus to the previous field, landing on the last field of the
    /// previous page when leaving a page's first field.
    pub fn focus_previous(&mut self) {
        if self.focus_index > 0 {
            self.focus_index -= 1;
        } else if self.current_page > 0 {
            self.current_page -= 1;
            self.focus_index = self.last_focus_index();
        }
        self.apply_focus();
    }

    /// Forwards `key` to `editor` and stores the result in the focused field.
    /// Returns whether the value changed.
    pub fn delegate_edit<E: FieldEditor>(&mut self, editor: &E, key: &KeyEvent) -> bool {
        let index = self.focused_index();
        let field = &mut self.fields[index];
        match editor.edit(key, field.value()) {
            Some(updated) if updated != field.value() => {
                field.set_value(updated);
                true
            }
            _ => false,
        }
    }

    /// Computes the gas remaining. The session ends either way; a parse
    /// failure is kept in the error slot.
    pub fn submit(&mut self) -> SessionEnd {
        let start = self.value_of(FieldRole::GasStart).unwrap_or_default();
        let end = self.value_of(FieldRole::GasEnd).unwrap_or_default();
        match gas::gas_remaining(start, end) {
            Ok(remaining) => {
                tracing::info!(remaining, "dive submitted");
                SessionEnd::Submitted {
                    gas_remaining: Some(remaining),
                }
            }
            Err(err) => {
                tracing::info!(error = %err, "dive submitted with unreadable gas values");
                self.error = Some(err.into());
                SessionEnd::Submitted {
                    gas_remaining: None,
                }
            }
        }
    }

    fn last_focus_index(&self) -> usize {
        self.catalog.page_len(self.current_page) - 1
    }

    fn apply_focus(&mut self) {
        let focused = self.focused_index();
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(index == focused);
        }
    }
}

/// Applies `command` to `state` and hands the updated state back.
pub fn update(mut state: FormState, command: Command) -> (FormState, Transition) {
    let transition = state.apply(command);
    (state, transition)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dive_log::errors::FormError;
use dive_log::form::{update, Command, FieldRole, FormState, SessionEnd, Transition};

const NAVIGATION: [Command; 5] = [
    Command::NextPage,
    Command::PreviousPage,
    Command::Confirm,
    Command::FocusNext,
    Command::FocusPrevious,
];

fn typed(text: &str) -> Vec<Command> {
    text.chars()
        .map(|ch| Command::Edit(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)))
        .collect()
}

fn drive(state: FormState, commands: impl IntoIterator<Item = Command>) -> (FormState, Transition) {
    let mut state = state;
    let mut last = Transition::Continue;
    for command in commands {
        let (next, transition) = update(state, command);
        state = next;
        last = transition;
        if let Transition::Exit(_) = transition {
            break;
        }
    }
    (state, last)
}

fn assert_consistent(state: &FormState) {
    let catalog = state.catalog();
    assert!(state.current_page() < catalog.page_count());
    assert!(state.focus_index() < catalog.page_len(state.current_page()));
    let focused: Vec<usize> = state
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_focused())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(focused, vec![state.focused_index()]);
}

/// Fills every field with `value` except the two gas readings.
fn fill_text_fields(state: &mut FormState, value: &str) {
    let gas = [
        state.catalog().position(FieldRole::GasStart),
        state.catalog().position(FieldRole::GasEnd),
    ];
    for index in 0..state.catalog().field_count() {
        if !gas.contains(&Some(index)) {
            state.set_value(index, value);
        }
    }
}

#[test]
fn bounds_and_single_focus_hold_for_all_short_sequences() {
    let mut sequences: Vec<Vec<Command>> = vec![Vec::new()];
    for _ in 0..5 {
        sequences = sequences
            .into_iter()
            .flat_map(|prefix| {
                NAVIGATION.into_iter().map(move |command| {
                    let mut next = prefix.clone();
                    next.push(command);
                    next
                })
            })
            .collect();
    }

    for filled in [false, true] {
        for sequence in &sequences {
            let mut state = FormState::default();
            if filled {
                fill_text_fields(&mut state, "x");
            }
            for command in sequence {
                if let Transition::Exit(_) = state.apply(*command) {
                    break;
                }
                assert_consistent(&state);
            }
        }
    }
}

#[test]
fn fill_first_page_then_advance_twice() {
    let mut commands = typed("Thistlegorm");
    commands.push(Command::Confirm);
    commands.extend(typed("Red Sea"));
    commands.push(Command::FocusNext);
    commands.extend(typed("2024-05-01"));
    commands.push(Command::NextPage);

    let (state, transition) = drive(FormState::default(), commands);
    assert_eq!(transition, Transition::Continue);
    assert_eq!((state.current_page(), state.focus_index()), (1, 0));
    assert!(state.error().is_none());
    assert_eq!(state.fields()[2].value(), "2024-05-01");

    let (state, _) = drive(state, [Command::NextPage]);
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.error(), Some(&FormError::IncompletePage));
    assert_consistent(&state);
}

#[test]
fn next_page_success_clears_prior_error() {
    let (mut state, _) = drive(FormState::default(), [Command::NextPage]);
    assert!(state.error().is_some());
    fill_text_fields(&mut state, "x");
    let (state, _) = drive(state, [Command::NextPage]);
    assert_eq!(state.current_page(), 1);
    assert!(state.error().is_none());
}

#[test]
fn previous_page_never_validates() {
    let (state, _) = drive(FormState::default(), [Command::FocusNext; 3]);
    assert_eq!(state.current_page(), 1);
    let (state, _) = drive(state, [Command::PreviousPage]);
    assert_eq!(state.current_page(), 0);
    assert!(state.error().is_none());
}

#[test]
fn repeated_previous_page_on_first_page_changes_nothing() {
    let (state, _) = drive(FormState::default(), typed("Blue Hole"));
    let (after, _) = drive(state.clone(), [Command::PreviousPage; 4]);
    assert_eq!(after, state);
}

#[test]
fn values_survive_page_round_trip() {
    let mut state = FormState::default();
    fill_text_fields(&mut state, "kept");
    let (state, _) = drive(
        state,
        [
            Command::NextPage,
            Command::NextPage,
            Command::PreviousPage,
            Command::PreviousPage,
        ],
    );
    assert_eq!(state.current_page(), 0);
    assert!(state.page_fields().iter().all(|field| field.value() == "kept"));
}

#[test]
fn confirm_on_last_field_reports_gas_remaining() {
    let mut commands = vec![Command::FocusNext; 11];
    commands.extend(typed("150"));
    commands.push(Command::Confirm);
    commands.extend(typed("50"));
    commands.push(Command::Confirm);

    let (state, transition) = drive(FormState::default(), commands);
    assert_eq!(
        transition,
        Transition::Exit(SessionEnd::Submitted {
            gas_remaining: Some(100)
        })
    );
    assert!(state.error().is_none());
}

#[test]
fn confirm_with_unparseable_gas_terminates_with_error() {
    let mut commands = vec![Command::FocusNext; 11];
    commands.extend(typed("abc"));
    commands.push(Command::Confirm);
    commands.push(Command::Confirm);

    let (state, transition) = drive(FormState::default(), commands);
    assert_eq!(
        transition,
        Transition::Exit(SessionEnd::Submitted {
            gas_remaining: None
        })
    );
    assert!(matches!(state.error(), Some(FormError::Parse(_))));
}

#[test]
fn cancel_is_immediate_from_anywhere() {
    let (_, transition) = drive(
        FormState::default(),
        [Command::FocusNext, Command::Cancel, Command::FocusNext],
    );
    assert_eq!(transition, Transition::Exit(SessionEnd::Cancelled));
}

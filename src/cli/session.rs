//! Event loop tying the terminal to the form: render, read a key, apply the
//! command, repeat until the form asks to exit.

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::KeyEvent,
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};

use crate::cli::ui::{navigation, style::UiStyle, test_mode, view};
use crate::config::Preferences;
use crate::errors::SessionError;
use crate::form::{FormState, SessionEnd, Transition};

/// Where frames go and where keys come from.
pub trait Frontend {
    fn draw(&mut self, frame: &str) -> io::Result<()>;
    /// Next key press, or `None` when the input source is exhausted.
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Final state of a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub end: SessionEnd,
    pub state: FormState,
}

pub fn run_session<F: Frontend>(
    frontend: &mut F,
    mut state: FormState,
    style: &UiStyle,
) -> Result<SessionReport, SessionError> {
    loop {
        frontend.draw(&view::render(&state, style))?;

        let Some(key) = frontend.next_key()? else {
            tracing::debug!("input exhausted");
            return Ok(SessionReport {
                end: SessionEnd::Cancelled,
                state,
            });
        };

        let command = navigation::classify(key);
        if let Transition::Exit(end) = state.apply(command) {
            return Ok(SessionReport { end, state });
        }
    }
}

/// Runs the dive form against the real terminal, or against the scripted key
/// queue when one is configured.
pub fn run(prefs: &Preferences) -> Result<SessionReport, SessionError> {
    let state = FormState::default();
    if test_mode::is_enabled() {
        let mut frontend = ScriptedFrontend::new(test_mode::take_keys());
        return run_session(&mut frontend, state, &UiStyle::plain());
    }

    let style = UiStyle::detect(prefs);
    let mut frontend = TerminalFrontend::new()?;
    run_session(&mut frontend, state, &style)
}

/// Full-screen frontend on stdout. Raw mode, the alternate screen and the
/// hidden cursor are restored when it is dropped.
pub struct TerminalFrontend {
    stdout: Stdout,
    guard: TerminalGuard,
}

impl TerminalFrontend {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        let guard = TerminalGuard::activate(&mut stdout)?;
        Ok(Self { stdout, guard })
    }
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        write!(self.stdout, "{}", frame.replace('\n', "\r\n"))?;
        self.stdout.flush()
    }

    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        navigation::read_key().map(Some)
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        self.guard.deactivate(&mut self.stdout);
    }
}

struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn activate(stdout: &mut Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { active: true };
        let entered = stdout
            .execute(terminal::EnterAlternateScreen)
            .and_then(|out| out.execute(cursor::Hide))
            .map(|_| ());
        if let Err(err) = entered {
            guard.deactivate(stdout);
            return Err(err);
        }
        Ok(guard)
    }

    fn deactivate(&mut self, stdout: &mut Stdout) {
        if self.active {
            let _ = stdout.execute(cursor::Show);
            let _ = stdout.execute(terminal::LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

/// Frontend fed from a fixed key list. Frames are kept for inspection instead
/// of being printed.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    keys: VecDeque<KeyEvent>,
    frames: Vec<String>,
}

impl ScriptedFrontend {
    pub fn new(keys: impl Into<VecDeque<KeyEvent>>) -> Self {
        Self {
            keys: keys.into(),
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Frontend for ScriptedFrontend {
    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

//! Raw terminal keyboard input for the interactive session.

use std::io;

use crossterm::event::{read, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// Single-keypress brightness commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    CoarseUp,
    CoarseDown,
    FineUp,
    FineDown,
    Max,
    Min,
}

/// Keeps the terminal in raw mode while alive, restoring it on drop so the
/// terminal recovers on every exit path.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until the next keypress and map it to an action.
/// Unbound keys map to `None`.
pub fn read_action() -> io::Result<Option<KeyAction>> {
    loop {
        let Event::Key(key) = read()? else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        // Raw mode swallows the interrupt signal
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(KeyAction::Quit));
        }
        return Ok(action_for(key.code));
    }
}

fn action_for(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(KeyAction::CoarseUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(KeyAction::CoarseDown),
        KeyCode::Char(']') => Some(KeyAction::FineUp),
        KeyCode::Char('[') => Some(KeyAction::FineDown),
        KeyCode::Char('\\') => Some(KeyAction::Max),
        KeyCode::Char('p') => Some(KeyAction::Min),
        _ => None,
    }
}

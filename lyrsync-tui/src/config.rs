use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    MarkBreak,
    Save,
    TogglePause,
    Quit,
    Nop,
}

impl Command {
    /// Maps one raw key event to a command; unrecognized keys are `Nop`.
    pub fn from_key(event: KeyEvent) -> Self {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Self::Quit,
                _ => Self::Nop,
            };
        }

        match event.code {
            KeyCode::Char(' ') => Self::Advance,
            KeyCode::Char('b') => Self::MarkBreak,
            KeyCode::Char('s') => Self::Save,
            KeyCode::Char('p') => Self::TogglePause,
            KeyCode::Char('q') => Self::Quit,
            _ => Self::Nop,
        }
    }
}

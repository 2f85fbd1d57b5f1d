use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from terminal events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Escape,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Submit,
    AcceptSuggestion,
    AddToCart,
    OpenCart,
    FocusSearch,
    LoadMore,
    DismissToast,
    ToggleMenu,
    Input(char),
    DeleteChar,
    Resize(u16),
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }

    match event::read()? {
        // Windows reports key releases too
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(key_to_action(key)),
        Event::Resize(width, _) => Ok(Action::Resize(width)),
        _ => Ok(Action::None),
    }
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        // Product list
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        // Shortcuts
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Right, _) => Action::AcceptSuggestion,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::AddToCart,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::OpenCart,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => Action::FocusSearch,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::LoadMore,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Action::DismissToast,
        (KeyCode::Tab, _) => Action::ToggleMenu,

        // Search input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use garden_core::navigation::NavigationTab;

use crate::app::{App, Card, Mode};
use crate::keymap::Keymap;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextCard,
    PrevCard,
    /// Call-to-action of the focused card
    Activate,
    MoveUp,
    MoveDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    /// Open the highlighted tile or contact link
    OpenItem,
    SelectTab(NavigationTab),
    Save,
    Remove,
    /// Keyboard drag that reveals the swipe actions
    SwipeOpen,
    /// Keyboard drag that hides them
    SwipeClose,
    CloseDetail,
    ToggleHelp,
    StartTyping,
    StopTyping,
    InputChar(char),
    Backspace,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.mode {
        // Any key leaves help
        Mode::Help => return Action::ExitMode,
        Mode::Typing => return handle_typing_mode(key),
        Mode::Normal => {}
    }

    // Escape belongs to the detail overlay while it is open
    if key.code == KeyCode::Esc && app.garden.detail().listens_for_escape() {
        return Action::CloseDetail;
    }

    match (app.focus, key.code, key.modifiers) {
        (Card::Navigation, KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = NavigationTab::from_index(index) {
                return Action::SelectTab(tab);
            }
        }
        (Card::Feedback, KeyCode::Char('i'), KeyModifiers::NONE) => return Action::StartTyping,
        _ => {}
    }

    keymap
        .lookup(key.code, key.modifiers)
        .cloned()
        .unwrap_or(Action::None)
}

/// Key events while the feedback input has focus
fn handle_typing_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Activate,
        KeyCode::Esc => Action::StopTyping,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Tab => Action::NextCard,
        KeyCode::BackTab => Action::PrevCard,
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

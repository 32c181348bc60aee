//! Keyboard mapping: raw key events to UI actions.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;
use client_frontend_core::ViewKind;

/// Cursor movement direction shared by the map grid and the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Semantic actions produced from key presses, resolved against the current
/// UI state (open dialog beats view-level bindings).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    // Home view
    HomeMove(isize),
    HomeActivate,
    StartPractice,
    // Game view
    FocusNext,
    Move(Direction),
    Activate,
    StartChallengeDialog,
    SwitchToPractice,
    ResetSession,
    GoHome,
    // Dialogs
    DialogConfirm,
    DialogCancel,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &AppState) -> KeyAction {
        if state.modal.is_some() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('y') => KeyAction::DialogConfirm,
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => KeyAction::DialogCancel,
                _ => KeyAction::None,
            };
        }

        match state.view {
            ViewKind::Home => Self::home_key(key),
            ViewKind::Game => Self::game_key(key),
        }
    }

    fn home_key(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::HomeMove(-1),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::HomeMove(1),
            KeyCode::Enter => KeyAction::HomeActivate,
            KeyCode::Char('p') => KeyAction::StartPractice,
            KeyCode::Char('c') => KeyAction::StartChallengeDialog,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn game_key(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => KeyAction::Move(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
            KeyCode::Char('c') => KeyAction::StartChallengeDialog,
            KeyCode::Char('p') => KeyAction::SwitchToPractice,
            KeyCode::Char('r') => KeyAction::ResetSession,
            KeyCode::Esc => KeyAction::GoHome,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::ModalKind;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn dialog_bindings_take_precedence() {
        let mut state = AppState::new();
        state.enter_game();
        state.open_modal(ModalKind::ChallengeStart);

        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter), &state),
            KeyAction::DialogConfirm
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &state),
            KeyAction::DialogCancel
        );
    }

    #[test]
    fn game_view_navigation() {
        let mut state = AppState::new();
        state.enter_game();

        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Tab), &state),
            KeyAction::FocusNext
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('h')), &state),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &state),
            KeyAction::GoHome
        );
    }
}

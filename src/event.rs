//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move focus to the previous field
    Up,
    /// Move focus to the next field
    Down,
    /// Previous choice in a select field
    Left,
    /// Next choice in a select field
    Right,
    /// Compute the footprint from the current form
    Calculate,
    /// Go back (result pane -> form)
    Back,
    /// Restore the form to its initial contents
    Reset,
    /// Copy the result summary to the clipboard
    Copy,
    /// Show help
    Help,
    /// Character input (for numeric fields)
    Char(char),
    /// Backspace key (for numeric fields)
    Backspace,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler;

impl EventHandler {
    /// Creates a new event handler.
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key press and converts it to an Action.
    ///
    /// `text_entry` selects the text-entry key map, where printable keys
    /// are typed into the focused field instead of triggering commands.
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self, timeout: Duration, text_entry: bool) -> io::Result<Option<Action>> {
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(if text_entry {
                        self.key_to_input_action(key_event)
                    } else {
                        self.key_to_action(key_event)
                    });
                }
            }
        }
        Ok(None)
    }

    /// Keys that behave the same in both key maps.
    fn common_action(&self, key: &KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('r') => Some(Action::Reset),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => Some(Action::Up),
            KeyCode::Down | KeyCode::Tab => Some(Action::Down),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Enter | KeyCode::F(5) => Some(Action::Calculate),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::F(1) => Some(Action::Help),
            _ => None,
        }
    }

    /// Converts a key event to a text-entry action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.common_action(&key) {
            return Some(action);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to a command action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.common_action(&key) {
            return Some(action);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            // Navigation
            KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::Right),
            KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('?') => Some(Action::Help),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('h'))),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::Right)
        );
    }

    #[test]
    fn test_arrow_and_tab_navigation_in_both_modes() {
        let handler = EventHandler::new();

        for map in [
            EventHandler::key_to_action as fn(&EventHandler, KeyEvent) -> Option<Action>,
            EventHandler::key_to_input_action,
        ] {
            assert_eq!(map(&handler, make_key_event(KeyCode::Up)), Some(Action::Up));
            assert_eq!(map(&handler, make_key_event(KeyCode::Down)), Some(Action::Down));
            assert_eq!(map(&handler, make_key_event(KeyCode::Tab)), Some(Action::Down));
            assert_eq!(map(&handler, make_key_event(KeyCode::BackTab)), Some(Action::Up));
            assert_eq!(map(&handler, make_key_event(KeyCode::Left)), Some(Action::Left));
            assert_eq!(map(&handler, make_key_event(KeyCode::Right)), Some(Action::Right));
        }
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_calculate_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Calculate)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Calculate)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(5))),
            Some(Action::Calculate)
        );
    }

    #[test]
    fn test_action_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('r'))),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('x'))),
            None
        );
    }

    #[test]
    fn test_input_mode_types_characters() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('7'))),
            Some(Action::Char('7'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Char('?'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_back_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('b'))),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
    }
}

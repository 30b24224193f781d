//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, Tab};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Start a new fetch of the posts
    Refetch,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcut
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return HandleResult::Quit;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Edit => handle_edit_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        KeyCode::Char(c @ '1'..='5') => {
            if let Some(tab) = c.to_digit(10).and_then(|n| Tab::from_number(n as usize)) {
                app.switch_tab(tab);
            }
            HandleResult::Continue
        }
        KeyCode::Tab => {
            app.switch_tab(app.tab.next());
            HandleResult::Continue
        }

        KeyCode::Char('i') => {
            app.enter_edit();
            HandleResult::Continue
        }

        KeyCode::Char('r') => {
            app.switch_tab(Tab::Posts);
            HandleResult::Refetch
        }

        KeyCode::Esc => {
            app.clear_status();
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys while editing the form input
fn handle_edit_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => app.exit_mode(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    HandleResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkit_core::ListkitConfig;

    fn press(app: &mut App, code: KeyCode) -> HandleResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut app = App::new(&ListkitConfig::default());
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, Mode::Edit);

        for c in "hey".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form.value(), "he");
        assert_eq!(app.status_message.as_deref(), Some("You entered: he"));

        // 'q' is text while editing
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Continue);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(press(&mut app, KeyCode::Char('q')), HandleResult::Quit);
    }

    #[test]
    fn test_tab_keys() {
        let mut app = App::new(&ListkitConfig::default());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Form);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Posts);

        assert_eq!(press(&mut app, KeyCode::Char('r')), HandleResult::Refetch);
    }

    #[test]
    fn test_ctrl_c_quits_in_edit_mode() {
        let mut app = App::new(&ListkitConfig::default());
        app.enter_edit();
        let result = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(result, HandleResult::Quit);
    }
}

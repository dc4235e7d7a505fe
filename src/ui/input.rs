use crate::ui::app::App;
use crate::ui::settings::SettingsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.settings().editor().is_some() {
        let intent = match key.code {
            KeyCode::Esc => SettingsIntent::Back,
            KeyCode::Enter => SettingsIntent::Activate,
            KeyCode::Backspace => SettingsIntent::Backspace,
            KeyCode::Char(ch) => SettingsIntent::InputChar(ch),
            _ => return,
        };
        app.dispatch_settings(intent);
        return;
    }

    if app.settings().is_visible() {
        let intent = match key.code {
            KeyCode::Esc => SettingsIntent::Back,
            KeyCode::Char('s') => SettingsIntent::Close,
            KeyCode::Char('q') => {
                app.request_quit();
                return;
            }
            KeyCode::Char(' ') => {
                app.toggle_session();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => SettingsIntent::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => SettingsIntent::MoveDown,
            KeyCode::Enter => SettingsIntent::Activate,
            KeyCode::Left | KeyCode::Char('-') => SettingsIntent::Decrease,
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => SettingsIntent::Increase,
            KeyCode::Delete => SettingsIntent::Clear,
            _ => return,
        };
        app.dispatch_settings(intent);
        return;
    }

    match key.code {
        KeyCode::Char(' ') => app.toggle_session(),
        KeyCode::Char('r') => app.reset_session(),
        KeyCode::Char('s') => app.open_settings(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

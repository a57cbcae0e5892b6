use crate::ui::app::{App, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.show_page(app.page().next());
            return;
        }
        KeyCode::BackTab => {
            app.show_page(app.page().prev());
            return;
        }
        _ => {}
    }

    if app.page() == Page::Contact {
        handle_form_key(app, key);
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    match key.code {
        KeyCode::Up => {
            app.edit_fields(|fields| fields.focus_prev());
        }
        KeyCode::Down => {
            app.edit_fields(|fields| fields.focus_next());
        }
        KeyCode::Enter => {
            if app.form().fields().button_focused() {
                app.submit();
            } else if focused_is_multiline(app) {
                app.edit_fields(|fields| fields.insert_char('\n'));
            } else {
                app.edit_fields(|fields| fields.focus_next());
            }
        }
        KeyCode::Backspace => {
            app.edit_fields(|fields| fields.backspace());
        }
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.edit_fields(|fields| fields.insert_char(ch));
        }
        _ => {}
    }
}

fn focused_is_multiline(app: &App) -> bool {
    let fields = app.form().fields();
    fields
        .specs()
        .get(fields.focused())
        .is_some_and(|spec| spec.multiline)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

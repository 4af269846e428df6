use crate::ui::app::App;
use crate::ui::session::MobileTab;
use crate::ui::suggestions::{route_global_key, KeyRoute};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reload_config();
        return;
    }

    if route_global_key(key, app.is_input_focused()) == KeyRoute::FocusInput {
        app.focus_input();
        return;
    }

    if app.is_input_focused() {
        handle_input_key(app, key);
    } else {
        handle_panel_key(app, key);
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.escape_input(),
        KeyCode::Enter => app.on_enter_in_input(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Up => app.move_example_highlight(-1),
        KeyCode::Down => app.move_example_highlight(1),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_query_text()
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn handle_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.cycle_panel_focus(),
        KeyCode::Char('1') => app.set_mobile_tab(MobileTab::Map),
        KeyCode::Char('2') => app.set_mobile_tab(MobileTab::Results),
        KeyCode::Char('3') => app.set_mobile_tab(MobileTab::Filters),
        KeyCode::Char('o') => app.cycle_operator_filter(),
        KeyCode::Char('t') => app.cycle_type_filter(),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.step_radius(1),
        KeyCode::Char('-') => app.step_radius(-1),
        KeyCode::Char('r') => {
            app.radius_search();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to its action.
///
/// Plain printable keys belong to the draft entry line; list and filter
/// operations sit on ctrl chords and navigation keys so typing a title can
/// never trigger them. Enter, and no other key, submits the draft.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.toggle_selected();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.delete_selected();
        return;
    }
    if is_ctrl_char(key, 'k') {
        app.clear_completed();
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Tab => app.cycle_filter(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Delete => app.delete_selected(),
        KeyCode::Backspace => app.pop_draft_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_draft_char(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_chord_detection() {
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(is_ctrl_char(ctrl_t, 't'));
        let plain_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE);
        assert!(!is_ctrl_char(plain_t, 't'));
        let ctrl_shift_t = KeyEvent::new(
            KeyCode::Char('T'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(!is_ctrl_char(ctrl_shift_t, 't'));
    }
}

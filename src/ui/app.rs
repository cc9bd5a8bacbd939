use crate::mvi::Reducer;
use crate::storage::StorageGateway;
use crate::todo::{Todo, TodoIntent, TodoReducer, TodoState};

/// Owner of the application state.
///
/// `dispatch` is the single mutation entry point: it runs the pure reducer,
/// then performs the persistence side effect. Everything else reads
/// snapshots or calls `dispatch`.
///
/// The list selection is view-local: which row the cursor sits on is not
/// part of the persisted state and never enters the reducer.
pub struct App {
    todos: TodoState,
    selection: usize,
    should_quit: bool,
    gateway: StorageGateway,
}

impl App {
    pub fn new(gateway: StorageGateway) -> Self {
        Self {
            todos: TodoState::default(),
            selection: 0,
            should_quit: false,
            gateway,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.todos
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Run the reducer, clamp the selection to the new visible list, and
    /// write the new state back to storage unless the intent suppresses it.
    pub fn dispatch(&mut self, intent: TodoIntent) {
        let writes_back = intent.writes_back();
        self.todos = TodoReducer::reduce(std::mem::take(&mut self.todos), intent);
        self.clamp_selection();
        if writes_back {
            self.gateway.persist(&self.todos);
        }
    }

    // -- selection ------------------------------------------------------------

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Move the cursor through the visible list, wrapping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.todos.visible().count() as isize;
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection as isize;
        self.selection = (current + delta).rem_euclid(len) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.todos.visible().count();
        if len == 0 {
            self.selection = 0;
        } else if self.selection >= len {
            self.selection = len - 1;
        }
    }

    pub fn selected(&self) -> Option<&Todo> {
        self.todos.visible().nth(self.selection)
    }

    // -- intent shortcuts -----------------------------------------------------

    pub fn submit_draft(&mut self) {
        self.dispatch(TodoIntent::Add);
    }

    /// Toggle the selected row, emitting `Complete` or `Uncomplete` from its
    /// current flag.
    pub fn toggle_selected(&mut self) {
        let Some(target) = self.selected().cloned() else {
            return;
        };
        let intent = if target.completed {
            TodoIntent::Uncomplete { target }
        } else {
            TodoIntent::Complete { target }
        };
        self.dispatch(intent);
    }

    pub fn delete_selected(&mut self) {
        let Some(target) = self.selected().cloned() else {
            return;
        };
        self.dispatch(TodoIntent::Delete { target });
    }

    pub fn cycle_filter(&mut self) {
        let filter = self.todos.filter.cycle();
        self.dispatch(TodoIntent::SetFilter { filter });
    }

    pub fn clear_completed(&mut self) {
        self.dispatch(TodoIntent::ClearCompleted);
    }

    // -- draft editing --------------------------------------------------------

    pub fn push_draft_char(&mut self, ch: char) {
        let mut title = self.todos.draft.title.clone();
        title.push(ch);
        self.dispatch(TodoIntent::EditDraft { title });
    }

    pub fn pop_draft_char(&mut self) {
        let mut title = self.todos.draft.title.clone();
        title.pop();
        self.dispatch(TodoIntent::EditDraft { title });
    }

    /// Append pasted text to the draft, dropping control characters (the
    /// entry line is single-line).
    pub fn paste_into_draft(&mut self, text: &str) {
        let mut title = self.todos.draft.title.clone();
        title.extend(text.chars().filter(|c| !c.is_control()));
        self.dispatch(TodoIntent::EditDraft { title });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Filter;
    use tempfile::TempDir;

    fn make_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let gateway = StorageGateway::start(dir.path().join("todos.json")).unwrap();
        (dir, App::new(gateway))
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let (_dir, mut app) = make_app();
        for title in ["a", "b"] {
            app.push_draft_char(title.chars().next().unwrap());
            app.submit_draft();
        }
        // Three visible items now.
        assert_eq!(app.selection(), 0);
        app.move_selection(-1);
        assert_eq!(app.selection(), 2);
        app.move_selection(1);
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn selection_clamps_when_the_visible_list_shrinks() {
        let (_dir, mut app) = make_app();
        app.push_draft_char('x');
        app.submit_draft();
        app.move_selection(1);
        assert_eq!(app.selection(), 1);
        app.delete_selected();
        assert_eq!(app.selection(), 0);
        assert_eq!(app.state().todos.len(), 1);
    }

    #[test]
    fn toggle_picks_the_intent_from_the_row_flag() {
        let (_dir, mut app) = make_app();
        app.toggle_selected();
        assert!(app.state().todos[0].completed);
        app.toggle_selected();
        // Row is still selected under the All filter, now incomplete again.
        assert!(!app.state().todos[0].completed);
    }

    #[test]
    fn toggle_with_nothing_visible_is_a_noop() {
        let (_dir, mut app) = make_app();
        app.cycle_filter();
        app.cycle_filter();
        assert_eq!(app.state().filter, Filter::Completed);
        assert!(app.selected().is_none());
        app.toggle_selected();
        assert!(!app.state().todos[0].completed);
    }

    #[test]
    fn paste_strips_control_characters() {
        let (_dir, mut app) = make_app();
        app.paste_into_draft("buy\nmilk\r");
        assert_eq!(app.state().draft.title, "buymilk");
    }
}

use crate::mvi::Intent;
use crate::todo::state::{Filter, Todo, TodoState};

/// Everything that can happen to the todo list.
#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Submit the draft: prepend it to the list and start a fresh draft.
    /// The draft is taken as-is; an empty title is submitted like any other.
    Add,
    /// Mark the row matching `target.id` complete. The matched row is
    /// rebuilt from `target` with `completed` forced true.
    Complete { target: Todo },
    /// Mark the row matching `target.id` incomplete. Same replacement rule
    /// as `Complete`.
    Uncomplete { target: Todo },
    /// Remove every row matching `target.id`.
    Delete { target: Todo },
    /// Set the draft title to the full current text of the entry line.
    EditDraft { title: String },
    SetFilter { filter: Filter },
    /// Remove every completed row.
    ClearCompleted,
    /// Replace the whole state with a value delivered from storage.
    Replace { state: TodoState },
    Noop,
}

impl Intent for TodoIntent {}

impl TodoIntent {
    /// Whether the state this intent produces is written back to storage.
    ///
    /// `Replace` carries a value that just arrived from storage and `Noop`
    /// changes nothing; the write is suppressed for both.
    pub fn writes_back(&self) -> bool {
        !matches!(self, TodoIntent::Replace { .. } | TodoIntent::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_and_noop_do_not_write_back() {
        assert!(!TodoIntent::Replace {
            state: TodoState::default()
        }
        .writes_back());
        assert!(!TodoIntent::Noop.writes_back());
    }

    #[test]
    fn state_changing_intents_write_back() {
        assert!(TodoIntent::Add.writes_back());
        assert!(TodoIntent::ClearCompleted.writes_back());
        assert!(TodoIntent::EditDraft {
            title: "x".to_string()
        }
        .writes_back());
        assert!(TodoIntent::SetFilter {
            filter: Filter::Active
        }
        .writes_back());
    }
}

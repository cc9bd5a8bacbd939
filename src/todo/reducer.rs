//! Reducer for the todo list.

use crate::mvi::Reducer;

use super::intent::TodoIntent;
use super::state::{Todo, TodoState};

/// Reducer over [`TodoState`].
///
/// Pure function — persistence is performed by the dispatch point after the
/// new state is returned, never in here.
pub struct TodoReducer;

impl TodoReducer {
    /// Rebuild every row matching `target.id` from the intent's copy of the
    /// todo (not the stored row), with `completed` forced to `done`.
    fn set_completed(state: TodoState, target: &Todo, done: bool) -> TodoState {
        let TodoState {
            todos,
            draft,
            filter,
            next_id,
        } = state;
        let todos = todos
            .into_iter()
            .map(|t| {
                if t.id == target.id {
                    Todo {
                        completed: done,
                        ..target.clone()
                    }
                } else {
                    t
                }
            })
            .collect();
        TodoState {
            todos,
            draft,
            filter,
            next_id,
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::Add => {
                let TodoState {
                    mut todos,
                    draft,
                    filter,
                    next_id,
                } = state;
                todos.insert(0, draft);
                TodoState {
                    todos,
                    draft: Todo::draft(next_id),
                    filter,
                    next_id: next_id + 1,
                }
            }

            TodoIntent::Complete { target } => Self::set_completed(state, &target, true),

            TodoIntent::Uncomplete { target } => Self::set_completed(state, &target, false),

            TodoIntent::Delete { target } => {
                let TodoState {
                    mut todos,
                    draft,
                    filter,
                    next_id,
                } = state;
                todos.retain(|t| t.id != target.id);
                TodoState {
                    todos,
                    draft,
                    filter,
                    next_id,
                }
            }

            TodoIntent::EditDraft { title } => {
                let TodoState {
                    todos,
                    draft,
                    filter,
                    next_id,
                } = state;
                TodoState {
                    todos,
                    draft: Todo { title, ..draft },
                    filter,
                    next_id,
                }
            }

            TodoIntent::SetFilter { filter } => TodoState { filter, ..state },

            TodoIntent::ClearCompleted => {
                let TodoState {
                    mut todos,
                    draft,
                    filter,
                    next_id,
                } = state;
                todos.retain(|t| !t.completed);
                TodoState {
                    todos,
                    draft,
                    filter,
                    next_id,
                }
            }

            TodoIntent::Replace { state } => state,

            TodoIntent::Noop => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::state::Filter;

    fn todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            title: title.to_string(),
            completed,
            editing: false,
            id,
        }
    }

    #[test]
    fn add_prepends_draft_and_resets_it() {
        let state = TodoReducer::reduce(
            TodoState::default(),
            TodoIntent::EditDraft {
                title: "Buy milk".to_string(),
            },
        );
        let state = TodoReducer::reduce(state, TodoIntent::Add);

        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0], todo(2, "Buy milk", false));
        assert_eq!(state.todos[1], todo(1, "The first todo", false));
        assert_eq!(state.draft, Todo::draft(3));
        assert_eq!(state.next_id, 4);
    }

    #[test]
    fn add_accepts_an_empty_title() {
        let state = TodoReducer::reduce(TodoState::default(), TodoIntent::Add);
        assert_eq!(state.todos.len(), 2);
        assert_eq!(state.todos[0], todo(2, "", false));
        assert_eq!(state.next_id, 4);
    }

    #[test]
    fn add_increments_length_and_counter_by_one() {
        let mut state = TodoState::default();
        for _ in 0..5 {
            let before = (state.todos.len(), state.next_id);
            state = TodoReducer::reduce(state, TodoIntent::Add);
            assert_eq!(state.todos.len(), before.0 + 1);
            assert_eq!(state.next_id, before.1 + 1);
        }
    }

    #[test]
    fn ids_stay_distinct_across_adds() {
        let mut state = TodoState::default();
        for i in 0..10 {
            state = TodoReducer::reduce(
                state,
                TodoIntent::EditDraft {
                    title: format!("item {i}"),
                },
            );
            state = TodoReducer::reduce(state, TodoIntent::Add);
        }
        let mut ids: Vec<u64> = state.todos.iter().map(|t| t.id).collect();
        let max = ids.iter().copied().max().unwrap();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.todos.len());
        assert!(state.next_id > max);
    }

    #[test]
    fn complete_marks_only_the_target() {
        let state = TodoState {
            todos: vec![todo(2, "Buy milk", false), todo(1, "The first todo", false)],
            draft: Todo::draft(3),
            filter: Filter::All,
            next_id: 4,
        };
        let target = state.todos[1].clone();
        let state = TodoReducer::reduce(state, TodoIntent::Complete { target });

        assert!(!state.todos[0].completed);
        assert!(state.todos[1].completed);
        assert_eq!(state.todos[1].title, "The first todo");
    }

    #[test]
    fn complete_rebuilds_the_row_from_the_intent_payload() {
        let state = TodoState {
            todos: vec![todo(1, "stored title", false)],
            draft: Todo::draft(2),
            filter: Filter::All,
            next_id: 3,
        };
        // Same id, different title: the payload's fields win.
        let target = todo(1, "payload title", false);
        let state = TodoReducer::reduce(state, TodoIntent::Complete { target });

        assert_eq!(state.todos[0].title, "payload title");
        assert!(state.todos[0].completed);
    }

    #[test]
    fn uncomplete_clears_the_flag() {
        let state = TodoState {
            todos: vec![todo(1, "done", true)],
            draft: Todo::draft(2),
            filter: Filter::All,
            next_id: 3,
        };
        let target = state.todos[0].clone();
        let state = TodoReducer::reduce(state, TodoIntent::Uncomplete { target });
        assert!(!state.todos[0].completed);
    }

    #[test]
    fn complete_with_unknown_id_changes_nothing() {
        let initial = TodoState::default();
        let state = TodoReducer::reduce(
            initial.clone(),
            TodoIntent::Complete {
                target: todo(99, "ghost", false),
            },
        );
        assert_eq!(state, initial);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let state = TodoState {
            todos: vec![todo(2, "keep", false), todo(1, "drop", false)],
            draft: Todo::draft(3),
            filter: Filter::All,
            next_id: 4,
        };
        let target = todo(1, "drop", false);
        let state = TodoReducer::reduce(state, TodoIntent::Delete { target });

        assert_eq!(state.todos.len(), 1);
        assert_eq!(state.todos[0].id, 2);
    }

    #[test]
    fn delete_preserves_order_of_survivors() {
        let state = TodoState {
            todos: vec![todo(3, "c", false), todo(2, "b", false), todo(1, "a", false)],
            draft: Todo::draft(4),
            filter: Filter::All,
            next_id: 5,
        };
        let state = TodoReducer::reduce(
            state,
            TodoIntent::Delete {
                target: todo(2, "b", false),
            },
        );
        let ids: Vec<u64> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn edit_draft_touches_only_the_title() {
        let state = TodoReducer::reduce(
            TodoState::default(),
            TodoIntent::EditDraft {
                title: "half-typ".to_string(),
            },
        );
        assert_eq!(state.draft.title, "half-typ");
        assert_eq!(state.draft.id, 2);
        assert!(!state.draft.completed);
        assert!(!state.draft.editing);
        assert_eq!(state.todos, TodoState::default().todos);
    }

    #[test]
    fn set_filter_leaves_todos_untouched() {
        let initial = TodoState::default();
        let state = TodoReducer::reduce(
            initial.clone(),
            TodoIntent::SetFilter {
                filter: Filter::Completed,
            },
        );
        assert_eq!(state.filter, Filter::Completed);
        assert_eq!(state.todos, initial.todos);
    }

    #[test]
    fn clear_completed_drops_done_rows_and_keeps_order() {
        let state = TodoState {
            todos: vec![
                todo(3, "open", false),
                todo(2, "done", true),
                todo(1, "open too", false),
            ],
            draft: Todo::draft(4),
            filter: Filter::All,
            next_id: 5,
        };
        let state = TodoReducer::reduce(state, TodoIntent::ClearCompleted);
        let ids: Vec<u64> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn replace_swaps_the_whole_state() {
        let incoming = TodoState {
            todos: vec![todo(7, "from storage", true)],
            draft: Todo::draft(8),
            filter: Filter::Completed,
            next_id: 9,
        };
        let state = TodoReducer::reduce(
            TodoState::default(),
            TodoIntent::Replace {
                state: incoming.clone(),
            },
        );
        assert_eq!(state, incoming);
    }

    #[test]
    fn noop_is_identity() {
        let initial = TodoState::default();
        let state = TodoReducer::reduce(initial.clone(), TodoIntent::Noop);
        assert_eq!(state, initial);
    }
}

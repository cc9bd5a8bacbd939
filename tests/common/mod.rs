//! Shared test utilities.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use tuido::todo::{Filter, Todo, TodoState};

pub fn todo(id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        title: title.to_string(),
        completed,
        editing: false,
        id,
    }
}

pub fn state(todos: Vec<Todo>, draft_id: u64, filter: Filter, next_id: u64) -> TodoState {
    TodoState {
        todos,
        draft: Todo::draft(draft_id),
        filter,
        next_id,
    }
}

/// Poll `predicate` until it holds or the deadline passes. Background
/// writer effects are asynchronous; tests assert on them this way.
pub fn wait_for(deadline: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if predicate() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

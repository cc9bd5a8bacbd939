use serde::{Deserialize, Serialize};

use crate::mvi::UiState;

/// A single todo item.
///
/// The serialized field names are the persisted format and must not change
/// (see `storage::codec`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// User-entered text. May be empty: submission does not validate.
    pub title: String,
    pub completed: bool,
    /// Reserved for an in-place edit mode. Persisted, never toggled.
    pub editing: bool,
    /// Assigned from `TodoState::next_id`, never by the user.
    #[serde(rename = "identifier")]
    pub id: u64,
}

impl Todo {
    /// An empty draft row with the given id.
    pub fn draft(id: u64) -> Self {
        Self {
            title: String::new(),
            completed: false,
            editing: false,
            id,
        }
    }
}

/// Display filter over the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab order in the UI.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Next filter in tab order, wrapping.
    pub fn cycle(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn admits(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// The whole application state.
///
/// Replaced wholesale on every transition; also replaced wholesale when a
/// persisted value is delivered from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Insertion order newest first: new items are prepended.
    pub todos: Vec<Todo>,
    /// The row being composed. `completed` and `editing` stay false here.
    #[serde(rename = "todo")]
    pub draft: Todo,
    pub filter: Filter,
    /// Strictly greater than every id ever assigned.
    #[serde(rename = "nextIdentifier")]
    pub next_id: u64,
}

impl Default for TodoState {
    /// The hardcoded startup seed: one incomplete item and an empty draft.
    fn default() -> Self {
        Self {
            todos: vec![Todo {
                title: "The first todo".to_string(),
                completed: false,
                editing: false,
                id: 1,
            }],
            draft: Todo::draft(2),
            filter: Filter::All,
            next_id: 3,
        }
    }
}

impl UiState for TodoState {}

impl TodoState {
    /// Items admitted by the current filter, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &Todo> {
        let filter = self.filter;
        self.todos.iter().filter(move |t| filter.admits(t))
    }

    /// Count of incomplete items, shown in the header.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

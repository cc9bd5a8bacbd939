//! The todo list state machine: entities, intents, and the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{Filter, Todo, TodoState};

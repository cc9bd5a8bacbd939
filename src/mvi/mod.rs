//! Unidirectional data-flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of everything the view needs
//! - **Intent**: a user action or system event
//! - **Reducer**: pure transition function from (state, intent) to state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

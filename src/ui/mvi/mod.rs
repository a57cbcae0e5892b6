//! Model-View-Intent primitives.
//!
//! ```text
//! key / worker result / timer ──→ Intent ──→ Reducer ──→ State ──→ render
//!                ↑                                                  │
//!                └──────────────────────────────────────────────────┘
//! ```
//!
//! Reducers stay pure. Anything with a side effect (timers, the submit
//! worker, clearing inputs) lives in the controller that owns the state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

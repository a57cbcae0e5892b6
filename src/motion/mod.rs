//! Staggered entrance animations.
//!
//! # Architecture
//!
//! ```text
//! enter(root) ──→ schedule(i * stagger, Reveal) ──→ Scheduler
//!      ↑                                               │
//!      └──────────── on_reveal(child) ←── pop_due ─────┘
//! ```
//!
//! - `variant.rs` - Validated `hidden`/`visible` style pairs
//! - `timer.rs` - Virtual-clock timer facility
//! - `scope.rs` - Scope tree, reveal propagation, tweening
//! - `easing.rs` - Easing curves

mod easing;
mod scope;
mod timer;
mod variant;

pub use easing::Easing;
pub use scope::{ResolvedStyle, Reveal, ScopeId, ScopeKind, ScopeTree};
pub use timer::{CancelHandle, Fired, Scheduler, TimerFacility};
pub use variant::{
    AnimationVariant, MotionError, Signal, StyleDescriptor, StyleSpec, VariantSpec,
    MAX_TRANSLATE_ROWS,
};

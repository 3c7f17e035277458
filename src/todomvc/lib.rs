//! # todomvc Architecture
//!
//! todomvc is a **UI-agnostic to-do list core**. The whole application is a pure
//! state-transition function plus a projection of that state; everything that touches a screen
//! is a client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/, wired by main.rs)                              │
//! │  - Turns user gestures into Actions                         │
//! │  - Executes Effects, renders the ViewModel                  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                           │
//! │  - Owns the one live Snapshot                               │
//! │  - dispatch(Action) -> Option<Effect>                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Actions (actions/*.rs)      │ │  View (view.rs)            │
//! │  - Pure reducer              │ │  - Pure projection         │
//! │  - &Snapshot -> Snapshot     │ │  - &Snapshot -> ViewModel  │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `store.rs` inward, code:
//! - Takes regular Rust values and returns regular Rust values
//! - **Never** writes to stdout/stderr
//! - **Never** fails: an action naming a missing task is a no-op
//!
//! Side effects the core wants (focusing an edit field) come back as [`actions::Effect`] values
//! next to the new snapshot. The host runs them and throws the outcome away.
//!
//! ## Testing Strategy
//!
//! 1. **Actions** (`actions/*.rs`): thorough unit tests of every transition. This is where most
//!    of the testing lives.
//! 2. **View** (`view.rs`): projections over hand-built snapshots.
//! 3. **Store** (`store.rs`): dispatch bookkeeping and effect collection.
//! 4. **Host** (`cli/`): input parsing and template output, plus end-to-end runs of the binary
//!    in `tests/`.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Task`, `TaskId`, `Filter`, `Snapshot`)
//! - [`actions`]: The reducer, split by concern
//! - [`store`]: The holder of the live snapshot
//! - [`view`]: Derived, read-only figures for rendering
//! - [`config`]: Client configuration
//! - [`error`]: Error types
//! - `cli`: The terminal host (not part of the lib API)

pub mod actions;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod view;

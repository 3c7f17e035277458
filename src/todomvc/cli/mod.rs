//! # Terminal host
//!
//! This is **one possible host** for the todomvc core, standing where a browser view layer
//! would stand. It is the only place that knows about stdin, stdout, stderr and exit codes.
//!
//! ## The loop
//!
//! 1. Read one line from stdin (one user gesture).
//! 2. Turn it into zero or more `Action`s (`input`).
//! 3. Dispatch them through the `Store`, collecting any `Effect`s.
//! 4. Execute the effects. `FocusEditField` puts the session in edit mode for that task, so the
//!    next line is typed into its title field.
//! 5. Render the new snapshot (`render`), as styled text or as one JSON frame.
//!
//! Malformed lines produce a warning and never reach the store.
//!
//! ## Module Structure
//!
//! - `commands`: `run()`, config handling and the session loop
//! - `input`: line parsing into actions
//! - `render`: template rendering and JSON frames
//! - `setup`: argument parsing via clap
//! - `styles`: semantic style names mapped to terminal styles
//! - `templates`: embedded template sources

mod commands;
mod input;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;

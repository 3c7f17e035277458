//! # Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files under
//! `templates/`, so they can be edited and diffed apart from the code. They are embedded here at
//! compile time.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line holding only a block
//! tag produces no output. A block tag at the *end* of a content line also swallows that line's
//! newline; keep block tags either on their own line or in the middle of one.
//!
//! Width math, truncation and anything conditional on data lives in `render.rs`. Templates get
//! ready-made strings plus the semantic style name to apply.

pub const TODOS_TEMPLATE: &str = include_str!("templates/todos.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");

/// Registered names. No file extension, so minijinja never turns on auto-escaping.
pub const TEMPLATES: [(&str, &str); 4] = [
    ("todos", TODOS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("help", HELP_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
];

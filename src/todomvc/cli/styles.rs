//! Styles for the todomvc terminal client.
//!
//! Templates only ever name *semantic* styles ("task_done", "filter_selected"), never colors.
//! This module is the one place that maps those names to `console::Style` values, so the look
//! can change without touching templates or the code that fills them.
//!
//! Styles are registered once through `once_cell::sync::Lazy`. A name with no entry here renders
//! with [`MISSING_STYLE_INDICATOR`] in front, which makes template typos obvious.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const PROMPT: &str = "prompt";
    pub const DRAFT: &str = "draft";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const MUTED: &str = "muted";
    pub const TOGGLE: &str = "toggle";
    pub const TASK_ID: &str = "task_id";
    pub const CHECK_OPEN: &str = "check_open";
    pub const CHECK_DONE: &str = "check_done";
    pub const TASK_OPEN: &str = "task_open";
    pub const TASK_DONE: &str = "task_done";
    pub const EDITING: &str = "editing";
    pub const COUNT: &str = "count";
    pub const FILTER: &str = "filter";
    pub const FILTER_SELECTED: &str = "filter_selected";
    pub const CLEAR: &str = "clear";
    pub const COMMAND: &str = "command";
    pub const CONFIG_KEY: &str = "config_key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static TODO_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let accent = Style::new().color256(167);
    let muted = Style::new().color256(245);

    HashMap::from([
        (names::HEADER, accent.clone().bold()),
        (names::PROMPT, accent.clone()),
        (names::DRAFT, Style::new()),
        (names::PLACEHOLDER, muted.clone().italic()),
        (names::MUTED, muted.clone()),
        (names::TOGGLE, muted.clone().bold()),
        (names::TASK_ID, muted.clone()),
        (names::CHECK_OPEN, Style::new()),
        (names::CHECK_DONE, Style::new().green()),
        (names::TASK_OPEN, Style::new()),
        (names::TASK_DONE, muted.clone().strikethrough()),
        (names::EDITING, Style::new().yellow().italic()),
        (names::COUNT, Style::new().bold()),
        (names::FILTER, muted.clone()),
        (names::FILTER_SELECTED, accent.underlined()),
        (names::CLEAR, muted.clone()),
        (names::COMMAND, Style::new().cyan()),
        (names::CONFIG_KEY, Style::new().cyan()),
        (names::INFO, muted),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
    ])
});

/// Applies a named style. With `use_color` off the text comes back unchanged.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match TODO_STYLES.get(name) {
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        Some(_) if !use_color || text.is_empty() => text.to_string(),
        Some(style) => style
            .clone()
            .force_styling(true)
            .apply_to(text)
            .to_string(),
    }
}

//! # Rendering
//!
//! Turns a snapshot (through its [`ViewModel`]) into styled terminal text.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they need
//! Unicode-aware processing. Templates handle presentation: which semantic style each piece
//! gets and where the lines go. See `templates.rs` for the whitespace rules.
//!
//! Rendering never fails from the caller's point of view: a template error degrades to a plain
//! fallback line and a warning in the log.

use super::styles::{self, names};
use super::templates::TEMPLATES;
use minijinja::{Environment, Value};
use serde::Serialize;
use todomvc::actions::Effect;
use todomvc::model::{Filter, Snapshot, Task, TaskId};
use todomvc::view::{self, ToggleAllState, ViewModel};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "What needs to be done?";
const EMPTY_TITLE: &str = "(empty)";
const EDITING_SUFFIX: &str = " (editing)";
const MARKER_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

/// A line of host feedback. The core never produces these; they come from the host itself.
#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct TodosData {
    draft: String,
    draft_style: &'static str,
    list: Option<ListData>,
}

#[derive(Serialize)]
struct ListData {
    toggle_marker: &'static str,
    tasks: Vec<TaskLine>,
    footer: FooterData,
}

#[derive(Serialize)]
struct TaskLine {
    id: String,
    marker: &'static str,
    marker_style: &'static str,
    title: String,
    title_style: &'static str,
    suffix: &'static str,
}

#[derive(Serialize)]
struct FooterData {
    remaining: usize,
    remaining_label: String,
    filters: Vec<FilterLink>,
    clear_sep: &'static str,
    clear: &'static str,
}

#[derive(Serialize)]
struct FilterLink {
    label: String,
    style: &'static str,
    sep: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpEntry {
    usage: &'static str,
    padding: String,
    description: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    entries: Vec<HelpEntry>,
}

#[derive(Serialize)]
struct ConfigEntry<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct ConfigData<'a> {
    entries: Vec<ConfigEntry<'a>>,
}

/// One JSON line per render in `--output json` mode.
#[derive(Serialize)]
pub struct Frame<'a> {
    pub snapshot: &'a Snapshot,
    pub view: Option<ViewModel<'a>>,
    pub effect: Option<Effect>,
    pub focused: Option<TaskId>,
}

impl<'a> Frame<'a> {
    pub fn new(snapshot: &'a Snapshot, effect: Option<Effect>, focused: Option<TaskId>) -> Self {
        Self {
            snapshot,
            view: view::project(snapshot),
            effect,
            focused,
        }
    }
}

pub struct Renderer {
    env: Environment<'static>,
    use_color: bool,
    line_width: usize,
}

impl Renderer {
    pub fn new(use_color: bool, line_width: usize) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });

        for (name, source) in TEMPLATES {
            if let Err(e) = env.add_template(name, source) {
                warn!(template = name, error = %e, "template failed to compile");
            }
        }

        Self {
            env,
            use_color,
            line_width,
        }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(name)?;
        let output = tmpl.render(data)?;
        Ok(output.trim_end_matches('\n').to_string())
    }

    pub fn render_todos(&self, snapshot: &Snapshot) -> String {
        let (draft, draft_style) = if snapshot.draft.is_empty() {
            (PLACEHOLDER.to_string(), names::PLACEHOLDER)
        } else {
            (snapshot.draft.clone(), names::DRAFT)
        };

        let data = TodosData {
            draft,
            draft_style,
            list: view::project(snapshot).map(|projection| self.list_data(&projection)),
        };

        self.render("todos", &data).unwrap_or_else(|e| {
            warn!(error = %e, "failed to render todos");
            fallback_summary(snapshot)
        })
    }

    fn list_data(&self, projection: &ViewModel<'_>) -> ListData {
        let toggle_marker = match projection.toggle_all {
            ToggleAllState::Checked => "[x]",
            ToggleAllState::Indeterminate => "[-]",
            ToggleAllState::Unchecked => "[ ]",
        };

        let tasks = projection.tasks.iter().map(|task| self.task_line(task)).collect();

        let filters = Filter::ALL
            .iter()
            .enumerate()
            .map(|(i, filter)| {
                let selected = *filter == projection.filter;
                FilterLink {
                    label: if selected {
                        format!("[{}]", filter.label())
                    } else {
                        filter.label().to_string()
                    },
                    style: if selected {
                        names::FILTER_SELECTED
                    } else {
                        names::FILTER
                    },
                    sep: if i + 1 < Filter::ALL.len() { " " } else { "" },
                }
            })
            .collect();

        let (clear_sep, clear) = if projection.has_completed {
            ("   ", "Clear completed")
        } else {
            ("", "")
        };

        ListData {
            toggle_marker,
            tasks,
            footer: FooterData {
                remaining: projection.remaining,
                remaining_label: format!("{} left", projection.remaining_label),
                filters,
                clear_sep,
                clear,
            },
        }
    }

    fn task_line(&self, task: &Task) -> TaskLine {
        let id = format!("#{}", task.id);
        let suffix = if task.editing { EDITING_SUFFIX } else { "" };

        let fixed = id.width() + 1 + MARKER_WIDTH + 1 + suffix.width();
        let available = self.line_width.saturating_sub(fixed);

        let (title, title_style) = if task.title.is_empty() {
            (EMPTY_TITLE.to_string(), names::PLACEHOLDER)
        } else if task.completed {
            (truncate_to_width(&task.title, available), names::TASK_DONE)
        } else {
            (truncate_to_width(&task.title, available), names::TASK_OPEN)
        };

        let (marker, marker_style) = if task.completed {
            ("[x]", names::CHECK_DONE)
        } else {
            ("[ ]", names::CHECK_OPEN)
        };

        TaskLine {
            id,
            marker,
            marker_style,
            title,
            title_style,
            suffix,
        }
    }

    pub fn render_messages(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Warning => names::WARNING,
                    },
                })
                .collect(),
        };

        self.render("messages", &data).unwrap_or_else(|_| {
            messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn render_help(&self, entries: &[(&'static str, &'static str)]) -> String {
        let column = entries.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0) + 2;
        let data = HelpData {
            entries: entries
                .iter()
                .map(|(usage, description)| HelpEntry {
                    usage,
                    padding: " ".repeat(column - usage.width()),
                    description,
                })
                .collect(),
        };

        self.render("help", &data).unwrap_or_else(|_| {
            entries
                .iter()
                .map(|(usage, description)| format!("  {}  {}", usage, description))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn render_config(&self, entries: &[(&str, String)]) -> String {
        let data = ConfigData {
            entries: entries
                .iter()
                .map(|(key, value)| ConfigEntry { key, value })
                .collect(),
        };

        self.render("config", &data).unwrap_or_else(|_| {
            entries
                .iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn prompt(&self, focused: Option<TaskId>) -> String {
        let text = match focused {
            Some(id) => format!("edit #{}>", id),
            None => "todo>".to_string(),
        };
        styles::apply(names::PROMPT, &text, self.use_color)
    }
}

/// Plain footer count used when the list template cannot render.
fn fallback_summary(snapshot: &Snapshot) -> String {
    let remaining = view::remaining_count(snapshot);
    format!("{} {} left", remaining, view::pluralize(remaining, "item"))
}

/// Cuts `s` to at most `max_width` columns, ending in an ellipsis when anything was dropped.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use todomvc::actions::{reduce, Action};

    fn plain() -> Renderer {
        Renderer::new(false, 80)
    }

    #[test]
    fn empty_list_shows_only_header_and_placeholder() {
        let output = plain().render_todos(&Snapshot::default());
        assert_eq!(output, "todos\n> What needs to be done?");
    }

    #[test]
    fn demo_list_renders_tasks_and_footer() {
        let output = plain().render_todos(&Snapshot::demo());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "todos",
                "> What needs to be done?",
                "[-] Mark all as complete",
                "#2 [ ] Write the reducer",
                "#1 [x] Sketch the data model",
                "1 item left   [All] Active Completed   Clear completed",
            ]
        );
    }

    #[test]
    fn footer_hides_clear_and_pluralizes() {
        let snapshot = reduce(&Snapshot::demo(), Action::ClearCompleted);
        let snapshot = reduce(&snapshot, Action::SetFilter(Filter::Active));
        let snapshot = reduce(&snapshot, Action::SetDraftText("half".into()));
        let output = plain().render_todos(&snapshot);

        assert!(output.contains("> half"));
        assert!(output.contains("[ ] Mark all as complete"));
        assert!(output.ends_with("1 item left   All [Active] Completed"));
        assert!(!output.contains("Clear completed"));
    }

    #[test]
    fn editing_task_is_marked() {
        let snapshot = reduce(&Snapshot::demo(), Action::BeginEdit(TaskId(2)));
        let output = plain().render_todos(&snapshot);
        assert!(output.contains("#2 [ ] Write the reducer (editing)"));
    }

    #[test]
    fn empty_title_uses_placeholder() {
        let snapshot = reduce(&Snapshot::default(), Action::AddTask);
        let output = plain().render_todos(&snapshot);
        assert!(output.contains("#1 [ ] (empty)"));
        assert!(output.contains("1 item left"));
    }

    #[test]
    fn long_titles_are_truncated_to_line_width() {
        let snapshot = reduce(
            &reduce(&Snapshot::default(), Action::SetDraftText("x".repeat(100))),
            Action::AddTask,
        );
        let output = Renderer::new(false, 30).render_todos(&snapshot);
        let task_line = output.lines().find(|l| l.starts_with("#1")).unwrap();
        assert_eq!(task_line.width(), 30);
        assert!(task_line.ends_with('…'));
    }

    #[test]
    fn color_output_contains_ansi() {
        let output = Renderer::new(true, 80).render_todos(&Snapshot::demo());
        assert!(output.contains("\x1b["));
        assert!(output.contains("Write the reducer"));
    }

    #[test]
    fn fallback_summary_matches_footer_wording() {
        assert_eq!(fallback_summary(&Snapshot::demo()), "1 item left");
        assert_eq!(fallback_summary(&Snapshot::default()), "0 items left");
    }

    #[test]
    fn messages_render_one_per_line() {
        let output = plain().render_messages(&[
            Message::warning("Unknown command: x"),
            Message::info("try help"),
        ]);
        assert_eq!(output, "Unknown command: x\ntry help");
    }

    #[test]
    fn help_aligns_descriptions() {
        let output = plain().render_help(&[("add [text]", "Add"), ("q", "Quit")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Commands:");
        assert_eq!(lines[1], "  add [text]  Add");
        assert_eq!(lines[2], "  q           Quit");
    }

    #[test]
    fn config_lists_key_values() {
        let output = plain().render_config(&[("color", "never".to_string())]);
        assert_eq!(output, "color = never");
    }

    #[test]
    fn prompt_reflects_focus() {
        assert_eq!(plain().prompt(None), "todo>");
        assert_eq!(plain().prompt(Some(TaskId(4))), "edit #4>");
    }

    #[test]
    fn frame_carries_view_and_effect() {
        let snapshot = Snapshot::demo();
        let frame = Frame::new(
            &snapshot,
            Some(Effect::FocusEditField { id: TaskId(1) }),
            Some(TaskId(1)),
        );
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["view"]["remaining"], 1);
        assert_eq!(json["effect"]["type"], "focus_edit_field");
        assert_eq!(json["effect"]["id"], 1);
        assert_eq!(json["focused"], 1);
    }
}

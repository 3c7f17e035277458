//! Session input.
//!
//! One line is one user gesture. The first word picks the command, the rest of the line is free
//! text (titles keep their inner spacing). A gesture that a browser would perform as several
//! events, such as typing into the new-task field and pressing Enter, becomes several actions.
//!
//! While a task's edit field has focus, lines go through [`parse_edit_line`] instead.

use todomvc::actions::Action;
use todomvc::error::{Result, TodoError};
use todomvc::model::{Filter, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Dispatch(Vec<Action>),
    Show,
    State,
    Help,
    Quit,
    Nothing,
}

/// Usage lines for `help`, in display order.
pub const HELP: [(&str, &str); 14] = [
    ("add [text]", "Type text into the new-task field and press Enter"),
    ("draft <text>", "Type into the new-task field without submitting"),
    ("toggle <id>", "Check or uncheck a task"),
    ("toggle-all", "Mark all as complete (or all as active)"),
    ("delete <id>", "Delete a task"),
    ("clear", "Clear completed tasks"),
    ("edit <id>", "Start editing a task's title"),
    ("title <id> <text>", "Replace a task's title while editing"),
    ("commit <id>", "Leave edit mode for a task"),
    ("filter <name>", "Show all, active or completed tasks"),
    ("show", "Render the list again"),
    ("state", "Print the full state as JSON"),
    ("help", "Show this help"),
    ("quit", "End the session"),
];

pub fn parse_line(line: &str) -> Result<HostCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(HostCommand::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" | "a" => {
            let mut actions = Vec::with_capacity(2);
            if !rest.is_empty() {
                actions.push(Action::SetDraftText(rest.to_string()));
            }
            actions.push(Action::AddTask);
            HostCommand::Dispatch(actions)
        }
        "draft" => HostCommand::Dispatch(vec![Action::SetDraftText(rest.to_string())]),
        "toggle" | "t" => HostCommand::Dispatch(vec![Action::ToggleCompleted(parse_id(rest)?)]),
        "toggle-all" | "ta" => HostCommand::Dispatch(vec![Action::ToggleAll]),
        "delete" | "rm" => HostCommand::Dispatch(vec![Action::DeleteTask(parse_id(rest)?)]),
        "clear" | "clear-completed" => HostCommand::Dispatch(vec![Action::ClearCompleted]),
        "edit" | "e" => HostCommand::Dispatch(vec![Action::BeginEdit(parse_id(rest)?)]),
        "title" => {
            let (id, text) = match rest.split_once(char::is_whitespace) {
                Some((id, text)) => (id, text.trim_start()),
                None => (rest, ""),
            };
            HostCommand::Dispatch(vec![Action::SetTaskTitle(parse_id(id)?, text.to_string())])
        }
        "commit" => HostCommand::Dispatch(vec![Action::CommitOrCancelEdit(parse_id(rest)?)]),
        "filter" | "f" => HostCommand::Dispatch(vec![Action::SetFilter(rest.parse::<Filter>()?)]),
        "all" | "active" | "completed" => {
            HostCommand::Dispatch(vec![Action::SetFilter(word.parse::<Filter>()?)])
        }
        "show" | "ls" => HostCommand::Show,
        "state" => HostCommand::State,
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" | "q" => HostCommand::Quit,
        other => {
            return Err(TodoError::Input(format!(
                "Unknown command: {} (try `help`)",
                other
            )))
        }
    };

    Ok(command)
}

/// A line typed into a focused edit field: the text becomes the title, then Enter commits.
/// A blank line is a blur, which leaves the title as it is.
pub fn parse_edit_line(id: TaskId, line: &str) -> Vec<Action> {
    let text = line.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        vec![Action::CommitOrCancelEdit(id)]
    } else {
        vec![
            Action::SetTaskTitle(id, text.to_string()),
            Action::CommitOrCancelEdit(id),
        ]
    }
}

fn parse_id(s: &str) -> Result<TaskId> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TodoError::Input("Missing task id".to_string()));
    }
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(line: &str) -> Vec<Action> {
        match parse_line(line).unwrap() {
            HostCommand::Dispatch(actions) => actions,
            other => panic!("expected actions, got {:?}", other),
        }
    }

    #[test]
    fn add_types_then_submits() {
        assert_eq!(
            actions("add Buy  milk"),
            vec![Action::SetDraftText("Buy  milk".into()), Action::AddTask]
        );
    }

    #[test]
    fn bare_add_submits_current_draft() {
        assert_eq!(actions("a"), vec![Action::AddTask]);
    }

    #[test]
    fn id_commands() {
        assert_eq!(actions("toggle 3"), vec![Action::ToggleCompleted(TaskId(3))]);
        assert_eq!(actions("rm #2"), vec![Action::DeleteTask(TaskId(2))]);
        assert_eq!(actions("e 1"), vec![Action::BeginEdit(TaskId(1))]);
        assert_eq!(
            actions("commit 1"),
            vec![Action::CommitOrCancelEdit(TaskId(1))]
        );
    }

    #[test]
    fn title_takes_id_then_text() {
        assert_eq!(
            actions("title 4 new name here"),
            vec![Action::SetTaskTitle(TaskId(4), "new name here".into())]
        );
        assert_eq!(
            actions("title 4"),
            vec![Action::SetTaskTitle(TaskId(4), String::new())]
        );
    }

    #[test]
    fn filters_by_name_or_shortcut() {
        assert_eq!(
            actions("filter completed"),
            vec![Action::SetFilter(Filter::Completed)]
        );
        assert_eq!(actions("Active"), vec![Action::SetFilter(Filter::Active)]);
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse_line("  ").unwrap(), HostCommand::Nothing);
        assert_eq!(parse_line("ls").unwrap(), HostCommand::Show);
        assert_eq!(parse_line("state").unwrap(), HostCommand::State);
        assert_eq!(parse_line("?").unwrap(), HostCommand::Help);
        assert_eq!(parse_line("quit").unwrap(), HostCommand::Quit);
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(matches!(parse_line("toggle"), Err(TodoError::Input(_))));
        assert!(matches!(parse_line("toggle x"), Err(TodoError::Input(_))));
        assert!(matches!(parse_line("filter done"), Err(TodoError::Input(_))));
        assert!(matches!(parse_line("frobnicate"), Err(TodoError::Input(_))));
    }

    #[test]
    fn edit_line_sets_title_and_commits() {
        assert_eq!(
            parse_edit_line(TaskId(2), "Walk the dog\n"),
            vec![
                Action::SetTaskTitle(TaskId(2), "Walk the dog".into()),
                Action::CommitOrCancelEdit(TaskId(2)),
            ]
        );
    }

    #[test]
    fn blank_edit_line_only_commits() {
        assert_eq!(
            parse_edit_line(TaskId(2), "   \n"),
            vec![Action::CommitOrCancelEdit(TaskId(2))]
        );
    }
}

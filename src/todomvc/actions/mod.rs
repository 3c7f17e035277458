//! # Action Layer
//!
//! Every user intent is an [`Action`]. [`update`] turns the current [`Snapshot`] plus one action
//! into the next snapshot, and possibly one [`Effect`] for the host to carry out.
//!
//! The functions here are pure: they borrow the current snapshot, never mutate it, and build a
//! new one. No I/O, no clocks, no logging. Logging happens one level up, in [`crate::store`].
//!
//! The reducer is total. An action that names a task that does not exist is absorbed and the
//! input snapshot comes back unchanged. There is nothing to report, so there is no `Result` here.
//!
//! Per-concern logic lives in submodules, each with its own tests:
//!
//! - [`create`]: draft text and adding tasks
//! - [`completion`]: toggling one task or all of them
//! - [`delete`]: deleting one task, clearing completed ones
//! - [`editing`]: entering, updating and leaving title edit mode
//!
//! Tasks are always addressed by [`TaskId`]. Two tasks with the same title and flags are still
//! two different tasks.

use crate::model::{Filter, Snapshot, TaskId};
use serde::Serialize;

pub mod completion;
pub mod create;
pub mod delete;
pub mod editing;
mod helpers;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NoOp,
    AddTask,
    SetDraftText(String),
    ToggleCompleted(TaskId),
    ToggleAll,
    DeleteTask(TaskId),
    ClearCompleted,
    BeginEdit(TaskId),
    CommitOrCancelEdit(TaskId),
    SetTaskTitle(TaskId, String),
    SetFilter(Filter),
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::NoOp => "no_op",
            Action::AddTask => "add_task",
            Action::SetDraftText(_) => "set_draft_text",
            Action::ToggleCompleted(_) => "toggle_completed",
            Action::ToggleAll => "toggle_all",
            Action::DeleteTask(_) => "delete_task",
            Action::ClearCompleted => "clear_completed",
            Action::BeginEdit(_) => "begin_edit",
            Action::CommitOrCancelEdit(_) => "commit_or_cancel_edit",
            Action::SetTaskTitle(_, _) => "set_task_title",
            Action::SetFilter(_) => "set_filter",
        }
    }
}

/// A side effect requested by the reducer and executed by the host.
///
/// Effects are fire-and-forget: the host never reports the outcome back into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    FocusEditField { id: TaskId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub snapshot: Snapshot,
    pub effect: Option<Effect>,
}

impl Transition {
    pub fn to(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            effect: None,
        }
    }

    pub fn unchanged(snapshot: &Snapshot) -> Self {
        Self::to(snapshot.clone())
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Computes the next snapshot and the effect, if any, for one action.
pub fn update(snapshot: &Snapshot, action: Action) -> Transition {
    match action {
        Action::NoOp => Transition::unchanged(snapshot),
        Action::AddTask => Transition::to(create::add_task(snapshot)),
        Action::SetDraftText(text) => Transition::to(create::set_draft_text(snapshot, text)),
        Action::ToggleCompleted(id) => Transition::to(completion::toggle(snapshot, id)),
        Action::ToggleAll => Transition::to(completion::toggle_all(snapshot)),
        Action::DeleteTask(id) => Transition::to(delete::delete_task(snapshot, id)),
        Action::ClearCompleted => Transition::to(delete::clear_completed(snapshot)),
        Action::BeginEdit(id) => editing::begin(snapshot, id),
        Action::CommitOrCancelEdit(id) => Transition::to(editing::finish(snapshot, id)),
        Action::SetTaskTitle(id, text) => Transition::to(editing::set_title(snapshot, id, text)),
        Action::SetFilter(filter) => Transition::to(Snapshot {
            filter,
            ..snapshot.clone()
        }),
    }
}

/// Like [`update`], discarding the effect.
pub fn reduce(snapshot: &Snapshot, action: Action) -> Snapshot {
    update(snapshot, action).snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::view::remaining_count;

    fn seeded() -> Snapshot {
        [
            Action::SetDraftText("first".into()),
            Action::AddTask,
            Action::SetDraftText("second".into()),
            Action::AddTask,
        ]
        .into_iter()
        .fold(Snapshot::default(), |s, a| reduce(&s, a))
    }

    #[test]
    fn no_op_returns_equal_snapshot() {
        let before = seeded();
        let after = update(&before, Action::NoOp);
        assert_eq!(after.snapshot, before);
        assert_eq!(after.effect, None);
    }

    #[test]
    fn actions_on_missing_ids_are_absorbed() {
        let before = seeded();
        let missing = TaskId(99);
        for action in [
            Action::ToggleCompleted(missing),
            Action::DeleteTask(missing),
            Action::BeginEdit(missing),
            Action::CommitOrCancelEdit(missing),
            Action::SetTaskTitle(missing, "ghost".into()),
        ] {
            let after = update(&before, action.clone());
            assert_eq!(after.snapshot, before, "{} changed state", action.name());
            assert_eq!(after.effect, None);
        }
    }

    #[test]
    fn reducing_leaves_previous_snapshot_intact() {
        let before = seeded();
        let copy = before.clone();
        let _ = reduce(&before, Action::ClearCompleted);
        let _ = reduce(&before, Action::ToggleAll);
        assert_eq!(before, copy);
    }

    #[test]
    fn set_filter_changes_only_the_filter() {
        let before = seeded();
        let after = reduce(&before, Action::SetFilter(Filter::Completed));
        assert_eq!(after.filter, Filter::Completed);
        assert_eq!(after.tasks, before.tasks);
        assert_eq!(after.next_id, before.next_id);
    }

    #[test]
    fn begin_edit_requests_focus() {
        let before = seeded();
        let after = update(&before, Action::BeginEdit(TaskId(1)));
        assert_eq!(after.effect, Some(Effect::FocusEditField { id: TaskId(1) }));
    }

    #[test]
    fn remaining_count_ignores_filter() {
        let mut snapshot = reduce(&seeded(), Action::ToggleCompleted(TaskId(1)));
        for filter in Filter::ALL {
            snapshot = reduce(&snapshot, Action::SetFilter(filter));
            let completed = snapshot.tasks.iter().filter(|t| t.completed).count();
            assert_eq!(remaining_count(&snapshot), snapshot.tasks.len() - completed);
            assert_eq!(remaining_count(&snapshot), 1);
        }
    }

    #[test]
    fn next_id_stays_ahead_of_every_task() {
        let mut snapshot = seeded();
        snapshot = reduce(&snapshot, Action::DeleteTask(TaskId(2)));
        snapshot = reduce(&snapshot, Action::AddTask);
        let max = snapshot.tasks.iter().map(|t: &Task| t.id).max().unwrap();
        assert!(snapshot.next_id > max);
        assert_eq!(snapshot.tasks[0].id, TaskId(3));
    }
}

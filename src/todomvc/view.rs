//! # View Projection
//!
//! Read-only figures derived from a [`Snapshot`]: which tasks are visible under the active
//! filter, how many are left, whether anything can be cleared, and the state of the
//! "mark all as complete" checkbox.
//!
//! Counts are always taken over the full task list. The footer says "2 items left" whether the
//! list is currently showing all, active or completed tasks.
//!
//! When there are no tasks at all, [`project`] returns `None`: the list and footer are not
//! rendered, whatever the filter. That is a layout rule, distinct from a filter that happens to
//! match nothing (which yields an empty `tasks` with the footer still present).

use crate::model::{Filter, Snapshot, Task};
use serde::Serialize;

/// State of the "mark all as complete" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAllState {
    Checked,
    Indeterminate,
    Unchecked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel<'a> {
    pub tasks: Vec<&'a Task>,
    pub filter: Filter,
    pub total: usize,
    pub remaining: usize,
    pub remaining_label: String,
    pub completed: usize,
    pub has_completed: bool,
    pub toggle_all: ToggleAllState,
}

pub fn visible_tasks(snapshot: &Snapshot) -> Vec<&Task> {
    snapshot
        .tasks
        .iter()
        .filter(|task| snapshot.filter.matches(task))
        .collect()
}

pub fn remaining_count(snapshot: &Snapshot) -> usize {
    snapshot.tasks.iter().filter(|t| !t.completed).count()
}

pub fn completed_count(snapshot: &Snapshot) -> usize {
    snapshot.tasks.len() - remaining_count(snapshot)
}

pub fn has_completed_tasks(snapshot: &Snapshot) -> bool {
    snapshot.tasks.iter().any(|t| t.completed)
}

/// Naive English plural: `noun` for exactly one, `noun` + "s" otherwise.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

pub fn toggle_all_state(snapshot: &Snapshot) -> ToggleAllState {
    let remaining = remaining_count(snapshot);
    if remaining == 0 {
        ToggleAllState::Checked
    } else if remaining < snapshot.tasks.len() {
        ToggleAllState::Indeterminate
    } else {
        ToggleAllState::Unchecked
    }
}

pub fn project(snapshot: &Snapshot) -> Option<ViewModel<'_>> {
    if snapshot.is_empty() {
        return None;
    }

    let remaining = remaining_count(snapshot);
    Some(ViewModel {
        tasks: visible_tasks(snapshot),
        filter: snapshot.filter,
        total: snapshot.tasks.len(),
        remaining,
        remaining_label: pluralize(remaining, "item"),
        completed: snapshot.tasks.len() - remaining,
        has_completed: remaining < snapshot.tasks.len(),
        toggle_all: toggle_all_state(snapshot),
    })
}

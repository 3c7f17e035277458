//! Title editing.
//!
//! Editing is a per-task flag. Starting an edit on one task leaves other tasks' flags alone, so
//! several tasks may be in edit mode at once; hosts that only show one edit field focus the
//! latest request.

use crate::model::{Snapshot, Task, TaskId};

use super::helpers::map_task;
use super::{Effect, Transition};

/// Puts a task in edit mode and asks the host to focus its edit field.
pub fn begin(snapshot: &Snapshot, id: TaskId) -> Transition {
    if !snapshot.contains(id) {
        return Transition::unchanged(snapshot);
    }

    let next = map_task(snapshot, id, |task| Task {
        editing: true,
        ..task.clone()
    });
    Transition::to(next).with_effect(Effect::FocusEditField { id })
}

/// Leaves edit mode. The title was already updated live by [`set_title`].
pub fn finish(snapshot: &Snapshot, id: TaskId) -> Snapshot {
    map_task(snapshot, id, |task| Task {
        editing: false,
        ..task.clone()
    })
}

pub fn set_title(snapshot: &Snapshot, id: TaskId, text: String) -> Snapshot {
    map_task(snapshot, id, |task| Task {
        title: text.clone(),
        ..task.clone()
    })
}

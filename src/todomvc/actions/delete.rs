use crate::model::{Snapshot, TaskId};

use super::helpers::retain_tasks;

pub fn delete_task(snapshot: &Snapshot, id: TaskId) -> Snapshot {
    retain_tasks(snapshot, |task| task.id != id)
}

pub fn clear_completed(snapshot: &Snapshot) -> Snapshot {
    retain_tasks(snapshot, |task| !task.completed)
}

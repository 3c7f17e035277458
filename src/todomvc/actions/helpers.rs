use crate::model::{Snapshot, Task, TaskId};

/// Returns a copy of `snapshot` where the task with `id` has been passed through `f`.
///
/// When no task has that id the copy is equal to the input.
pub(super) fn map_task<F>(snapshot: &Snapshot, id: TaskId, f: F) -> Snapshot
where
    F: Fn(&Task) -> Task,
{
    map_tasks(snapshot, |task| if task.id == id { f(task) } else { task.clone() })
}

pub(super) fn map_tasks<F>(snapshot: &Snapshot, f: F) -> Snapshot
where
    F: Fn(&Task) -> Task,
{
    Snapshot {
        tasks: snapshot.tasks.iter().map(f).collect(),
        ..snapshot.clone()
    }
}

pub(super) fn retain_tasks<P>(snapshot: &Snapshot, keep: P) -> Snapshot
where
    P: Fn(&Task) -> bool,
{
    Snapshot {
        tasks: snapshot
            .tasks
            .iter()
            .filter(|task| keep(*task))
            .cloned()
            .collect(),
        ..snapshot.clone()
    }
}

use crate::model::{Snapshot, Task};

/// Commits the draft as a new task at the top of the list.
///
/// The draft is taken as-is, so an empty draft makes a task with an empty title.
pub fn add_task(snapshot: &Snapshot) -> Snapshot {
    let task = Task::new(snapshot.next_id, snapshot.draft.clone());

    let mut tasks = Vec::with_capacity(snapshot.tasks.len() + 1);
    tasks.push(task);
    tasks.extend(snapshot.tasks.iter().cloned());

    Snapshot {
        tasks,
        draft: String::new(),
        filter: snapshot.filter,
        next_id: snapshot.next_id.next(),
    }
}

pub fn set_draft_text(snapshot: &Snapshot, text: String) -> Snapshot {
    Snapshot {
        draft: text,
        ..snapshot.clone()
    }
}

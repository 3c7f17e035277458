use crate::model::{Snapshot, Task, TaskId};

use super::helpers::{map_task, map_tasks};

pub fn toggle(snapshot: &Snapshot, id: TaskId) -> Snapshot {
    map_task(snapshot, id, |task| Task {
        completed: !task.completed,
        ..task.clone()
    })
}

/// Completes every task, unless all are already complete, in which case reopens every task.
pub fn toggle_all(snapshot: &Snapshot) -> Snapshot {
    let completed = snapshot.tasks.iter().any(|t| !t.completed);
    map_tasks(snapshot, |task| Task {
        completed,
        ..task.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tasks(first_done: bool, second_done: bool) -> Snapshot {
        let mut a = Task::new(TaskId(2), "a");
        a.completed = first_done;
        let mut b = Task::new(TaskId(1), "b");
        b.completed = second_done;
        Snapshot {
            tasks: vec![a, b],
            next_id: TaskId(3),
            ..Snapshot::default()
        }
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let snapshot = toggle(&two_tasks(false, false), TaskId(1));
        assert!(!snapshot.tasks[0].completed);
        assert!(snapshot.tasks[1].completed);

        let snapshot = toggle(&snapshot, TaskId(1));
        assert!(!snapshot.tasks[1].completed);
    }

    #[test]
    fn toggle_all_completes_when_any_open_then_reopens() {
        let snapshot = toggle_all(&two_tasks(true, false));
        assert!(snapshot.tasks.iter().all(|t| t.completed));

        let snapshot = toggle_all(&snapshot);
        assert!(snapshot.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn toggle_all_on_empty_list_is_a_no_op() {
        let empty = Snapshot::default();
        assert_eq!(toggle_all(&empty), empty);
    }

    #[test]
    fn toggle_with_identical_twins_touches_one() {
        let twins = Snapshot {
            tasks: vec![Task::new(TaskId(2), "same"), Task::new(TaskId(1), "same")],
            next_id: TaskId(3),
            ..Snapshot::default()
        };
        let snapshot = toggle(&twins, TaskId(2));
        assert!(snapshot.tasks[0].completed);
        assert!(!snapshot.tasks[1].completed);
    }
}

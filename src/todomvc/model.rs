use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of a task, assigned once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn next(self) -> Self {
        TaskId(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse()
            .map(TaskId)
            .map_err(|_| TodoError::Input(format!("Invalid task id: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    // Transient: true only while the title field is being edited
    pub editing: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            editing: false,
        }
    }
}

/// Which tasks the list shows. Never changes the stored tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(TodoError::Input(format!("Unknown filter: {}", s))),
        }
    }
}

/// The complete application state at one point in time.
///
/// Snapshots are values: every action produces a fresh one and earlier snapshots stay intact.
/// `next_id` is always greater than the id of every task in `tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Newest first.
    pub tasks: Vec<Task>,
    pub draft: String,
    pub filter: Filter,
    pub next_id: TaskId,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
            filter: Filter::All,
            next_id: TaskId(1),
        }
    }
}

impl Snapshot {
    /// A populated seed for poking at the app by hand. Not the production initial state.
    pub fn demo() -> Self {
        let mut sketched = Task::new(TaskId(1), "Sketch the data model");
        sketched.completed = true;
        let reducer = Task::new(TaskId(2), "Write the reducer");

        Self {
            tasks: vec![reducer, sketched],
            draft: String::new(),
            filter: Filter::All,
            next_id: TaskId(3),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.task(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

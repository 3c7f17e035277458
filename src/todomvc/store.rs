//! # Store
//!
//! [`Store`] holds the one live [`Snapshot`] for a host. It is the only mutable reference to
//! application state: each [`Store::dispatch`] runs the pure reducer and swaps in the result.
//!
//! The store is also where the core logs. The reducer itself stays silent.

use crate::actions::{self, Action, Effect};
use crate::model::Snapshot;
use crate::view::{self, ViewModel};
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub struct Store {
    current: Snapshot,
    dispatched: u64,
}

impl Store {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: initial,
            dispatched: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.current
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Applies one action and returns the effect the host should carry out, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        let name = action.name();
        let transition = actions::update(&self.current, action);
        let changed = transition.snapshot != self.current;

        self.current = transition.snapshot;
        self.dispatched += 1;

        debug!(
            action = name,
            changed,
            tasks = self.current.tasks.len(),
            effect = ?transition.effect,
            "dispatched"
        );
        trace!(snapshot = ?self.current);

        transition.effect
    }

    /// Applies actions in order, collecting effects.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .filter_map(|action| self.dispatch(action))
            .collect()
    }

    pub fn view(&self) -> Option<ViewModel<'_>> {
        view::project(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filter, TaskId};

    #[test]
    fn starts_from_production_initial_state() {
        let store = Store::default();
        assert_eq!(store.snapshot(), &Snapshot::default());
        assert!(store.view().is_none());
    }

    #[test]
    fn dispatch_replaces_snapshot_and_counts() {
        let mut store = Store::default();
        store.dispatch(Action::SetDraftText("Buy milk".into()));
        let effect = store.dispatch(Action::AddTask);

        assert_eq!(effect, None);
        assert_eq!(store.dispatched(), 2);
        assert_eq!(store.snapshot().tasks[0].title, "Buy milk");
        assert_eq!(store.snapshot().next_id, TaskId(2));
    }

    #[test]
    fn dispatch_all_collects_effects_in_order() {
        let mut store = Store::new(Snapshot::demo());
        let effects = store.dispatch_all([
            Action::BeginEdit(TaskId(2)),
            Action::SetFilter(Filter::Active),
            Action::BeginEdit(TaskId(1)),
            Action::BeginEdit(TaskId(7)),
        ]);

        assert_eq!(
            effects,
            vec![
                Effect::FocusEditField { id: TaskId(2) },
                Effect::FocusEditField { id: TaskId(1) },
            ]
        );
        assert_eq!(store.dispatched(), 4);
    }

    #[test]
    fn view_follows_the_live_snapshot() {
        let mut store = Store::new(Snapshot::demo());
        store.dispatch(Action::ClearCompleted);
        let view = store.view().unwrap();
        assert_eq!(view.total, 1);
        assert!(!view.has_completed);

        store.dispatch(Action::DeleteTask(TaskId(2)));
        assert!(store.view().is_none());
        assert!(store.into_snapshot().is_empty());
    }
}

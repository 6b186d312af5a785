use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::types::ReminderId;

/// The one mutable shared resource in the engine: the enabled flag plus the
/// identifiers of everything currently scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReminderState {
    pub enabled: bool,
    pub scheduled_local: Vec<ReminderId>,
    pub scheduled_in_app: Vec<ReminderId>,
}

/// Owner of [`ReminderState`].
///
/// Reads go through the accessors here, never a cached copy — acting on a
/// stale enabled value is exactly the bug the coordinator exists to prevent.
/// Mutators are crate-private: only coordinator-driven transitions may touch
/// the state.
pub struct ReminderStateMachine {
    inner: RwLock<ReminderState>,
    /// Bumped on every flag change. Lets a failure revert detect that a
    /// newer toggle landed mid-flight and must not be overwritten.
    generation: AtomicU64,
}

impl ReminderStateMachine {
    /// `enabled` comes from the persisted flag at app start.
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: RwLock::new(ReminderState {
                enabled,
                ..ReminderState::default()
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// The latest desired target. Reflects an optimistic flip immediately,
    /// before the side effects run.
    pub fn is_enabled(&self) -> bool {
        self.inner.read().expect("reminder state poisoned").enabled
    }

    pub fn scheduled_local(&self) -> Vec<ReminderId> {
        self.inner
            .read()
            .expect("reminder state poisoned")
            .scheduled_local
            .clone()
    }

    pub fn snapshot(&self) -> ReminderState {
        self.inner.read().expect("reminder state poisoned").clone()
    }

    /// Toggle the desired target and return the new value. Two rapid flips
    /// coalesce naturally: there is no queue, just the latest target.
    pub(crate) fn flip(&self) -> bool {
        let mut state = self.inner.write().expect("reminder state poisoned");
        state.enabled = !state.enabled;
        self.generation.fetch_add(1, Ordering::SeqCst);
        state.enabled
    }

    /// Adopt the persisted flag (app start).
    pub(crate) fn set_enabled(&self, enabled: bool) {
        let mut state = self.inner.write().expect("reminder state poisoned");
        state.enabled = enabled;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Current flag generation; capture before a transition's side effects.
    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Revert to disabled after a failed reschedule — but only when no flip
    /// has happened since `expected` was captured. Returns whether the revert
    /// applied; when it did not, a queued toggle owns the flag now and will
    /// settle it.
    pub(crate) fn revert_enabled(&self, expected: u64) -> bool {
        let mut state = self.inner.write().expect("reminder state poisoned");
        if self.generation.load(Ordering::SeqCst) != expected {
            return false;
        }
        state.enabled = false;
        self.generation.fetch_add(1, Ordering::SeqCst);
        true
    }

    pub(crate) fn record_schedule(&self, local: Vec<ReminderId>, in_app: Vec<ReminderId>) {
        let mut state = self.inner.write().expect("reminder state poisoned");
        state.scheduled_local = local;
        state.scheduled_in_app = in_app;
    }

    pub(crate) fn clear_schedule(&self) {
        let mut state = self.inner.write().expect("reminder state poisoned");
        state.scheduled_local.clear();
        state.scheduled_in_app.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_toggles_and_returns_the_new_target() {
        let machine = ReminderStateMachine::new(false);
        assert!(machine.flip());
        assert!(machine.is_enabled());
        assert!(!machine.flip());
        assert!(!machine.is_enabled());
    }

    #[test]
    fn revert_applies_only_without_newer_intent() {
        let machine = ReminderStateMachine::new(false);
        machine.flip();
        let generation = machine.generation();
        assert!(machine.revert_enabled(generation));
        assert!(!machine.is_enabled());
    }

    #[test]
    fn revert_refused_when_a_flip_intervened() {
        let machine = ReminderStateMachine::new(false);
        machine.flip();
        let generation = machine.generation();
        // The user toggles again while the transition is still in flight.
        machine.flip();
        assert!(!machine.revert_enabled(generation));
        // The newer target survives untouched.
        assert!(!machine.is_enabled());
    }

    #[test]
    fn record_and_clear_schedule() {
        let machine = ReminderStateMachine::new(true);
        machine.record_schedule(
            vec![ReminderId::from("diary-reminder-1")],
            vec![ReminderId::from("in-app-reminder-1")],
        );
        assert_eq!(machine.scheduled_local().len(), 1);

        machine.clear_schedule();
        let state = machine.snapshot();
        assert!(state.scheduled_local.is_empty());
        assert!(state.scheduled_in_app.is_empty());
        // Clearing the schedule does not touch the flag.
        assert!(state.enabled);
    }
}

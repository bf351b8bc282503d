//! Deferred page tasks.
//!
//! Handlers never sleep. They return [`crate::event::Action::Schedule`] and
//! the host runs the task later through [`crate::page::Page::dispatch`].
//! Pending tasks are keyed by target identity: scheduling a task whose key is
//! already pending replaces it.
//!
//! The browser host maps tasks onto `gloo_timers` timeouts. [`TimerQueue`] is
//! the same contract over a virtual clock for native hosts and tests.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::time::Duration;

use crate::dom::NodeId;

/// Work to run after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Collapse a faded alert banner out of layout.
    HideAlert(NodeId),
}

/// Identity used to replace or cancel a pending task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKey {
    Alert(NodeId),
}

impl Task {
    #[must_use]
    pub fn key(self) -> TaskKey {
        match self {
            Self::HideAlert(banner) => TaskKey::Alert(banner),
        }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

/// Virtual-clock task queue.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue `task` to fire `delay` from now, replacing any task with the same key.
    pub fn schedule(&mut self, task: Task, delay: Duration) {
        self.cancel(task.key());
        self.seq += 1;
        self.pending.push(Pending { due: self.now + delay, seq: self.seq, task });
    }

    /// Drop the pending task for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.task.key() != key);
        self.pending.len() != before
    }

    /// Move the clock forward and return the tasks now due, oldest first.
    pub fn advance(&mut self, by: Duration) -> Vec<Task> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) = self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.task).collect()
    }
}

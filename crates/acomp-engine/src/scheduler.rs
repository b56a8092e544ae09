//! Work deferred to the end of the current input event.
//!
//! A completion session never runs a queued task itself. The host drains the
//! queue after it has finished its own handling of the event that queued
//! them, so a keystroke that commits a completion cannot also re-activate it.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredTask {
    /// End the session: restore host settings and clear the candidates.
    Deactivate,
}

/// FIFO queue of deferred tasks.
#[derive(Clone, Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<DeferredTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` unless an identical task is already pending.
    pub fn schedule(&mut self, task: DeferredTask) {
        if !self.contains(task) {
            self.tasks.push_back(task);
        }
    }

    pub fn contains(&self, task: DeferredTask) -> bool {
        self.tasks.contains(&task)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pop(&mut self) -> Option<DeferredTask> {
        self.tasks.pop_front()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
#[path = "../tests/scheduler_tests.rs"]
mod scheduler_tests;

//! Completion session state machine.
//!
//! A session is either inactive or active with a candidate list, a selected
//! index and the buffer range a commit replaces. Activation runs the
//! completion pipeline; committing writes the selection into the buffer and
//! queues the deactivation, which only runs when the host calls
//! [`CompletionSession::end_turn`] after finishing the current input event.

use crate::engine::CompletionEngine;
use crate::gather::CandidateList;
use crate::host::EditorHost;
use crate::scheduler::{DeferredTask, TaskQueue};
use acomp_common::LineRange;
use acomp_scanner::is_word_byte;
use tracing::debug;

/// Outcome of [`CompletionSession::activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A session started with this many candidates.
    Activated { candidates: usize },
    /// A session was already running; nothing changed.
    AlreadyActive,
    /// Nothing to suggest; the session stays inactive.
    NoCandidates,
}

#[derive(Clone, Debug)]
struct ActiveState {
    /// Never empty.
    candidates: CandidateList,
    selected_index: usize,
    replacement_range: LineRange,
    /// Host soft-tab setting to restore, when it was overridden.
    saved_soft_tabs: Option<bool>,
}

/// One completion session per editor.
#[derive(Debug, Default)]
pub struct CompletionSession {
    engine: CompletionEngine,
    active: Option<ActiveState>,
    tasks: TaskQueue,
}

impl CompletionSession {
    pub fn new(engine: CompletionEngine) -> Self {
        Self {
            engine,
            active: None,
            tasks: TaskQueue::new(),
        }
    }

    pub fn engine(&self) -> &CompletionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CompletionEngine {
        &mut self.engine
    }

    /// Start a session for the cursor at (`row`, `column`).
    pub fn activate(&mut self, host: &mut impl EditorHost, row: u32, column: u32) -> Activation {
        if self.active.is_some() {
            return Activation::AlreadyActive;
        }

        let completion = self.engine.complete_at(host.document(), row, column);
        if completion.is_empty() {
            debug!(row, column, token = %completion.token.text, "no completion candidates");
            return Activation::NoCandidates;
        }

        let options = self.engine.options();
        let replacement_range = LineRange::with_len(
            completion.token.row,
            completion.token.start,
            options.max_replace_length,
        );
        let saved_soft_tabs = if options.override_soft_tabs {
            let saved = host.use_soft_tabs();
            host.set_use_soft_tabs(false);
            Some(saved)
        } else {
            None
        };

        let count = completion.candidates.len();
        debug!(
            row,
            column,
            token = %completion.token.text,
            candidates = count,
            "completion session activated"
        );
        self.active = Some(ActiveState {
            candidates: completion.candidates,
            selected_index: 0,
            replacement_range,
            saved_soft_tabs,
        });
        Activation::Activated { candidates: count }
    }

    /// Start a session at the host's cursor.
    pub fn activate_at_cursor(&mut self, host: &mut impl EditorHost) -> Activation {
        let cursor = host.cursor_position();
        self.activate(host, cursor.row, cursor.column)
    }

    /// Replace the candidates of the running session. An empty list ends it,
    /// dropping any deactivation a commit already queued.
    pub fn suggest(&mut self, host: &mut impl EditorHost, candidates: CandidateList) {
        if self.active.is_none() {
            return;
        }
        if candidates.is_empty() {
            self.dismiss(host);
            return;
        }
        let Some(state) = self.active.as_mut() else {
            return;
        };
        if state.selected_index >= candidates.len() {
            state.selected_index = 0;
        }
        state.candidates = candidates;
    }

    pub fn select_next(&mut self) {
        if let Some(state) = self.active.as_mut() {
            state.selected_index = (state.selected_index + 1) % state.candidates.len();
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(state) = self.active.as_mut() {
            let len = state.candidates.len();
            state.selected_index = (state.selected_index + len - 1) % len;
        }
    }

    /// Write the selected candidate over the replacement range and queue the
    /// session's deactivation. Returns the inserted text.
    ///
    /// Only the identifier characters actually present at the start of the
    /// range are replaced. A second commit before [`Self::end_turn`] does
    /// nothing.
    pub fn commit(&mut self, host: &mut impl EditorHost) -> Option<String> {
        if self.tasks.contains(DeferredTask::Deactivate) {
            return None;
        }
        let state = self.active.as_ref()?;
        let text = state.candidates.get(state.selected_index)?.to_string();
        let range = committed_range(&*host, state.replacement_range);

        host.replace(range, &text);
        self.tasks.schedule(DeferredTask::Deactivate);
        debug!(
            row = range.row,
            start = range.start_column,
            end = range.end_column,
            text = %text,
            "completion committed"
        );
        Some(text)
    }

    /// End the session without touching the buffer. Pending deferred tasks
    /// are dropped.
    pub fn dismiss(&mut self, host: &mut impl EditorHost) {
        self.tasks.clear();
        self.deactivate(host);
    }

    /// Run the tasks deferred during the input event that just finished.
    pub fn end_turn(&mut self, host: &mut impl EditorHost) {
        while let Some(task) = self.tasks.pop() {
            match task {
                DeferredTask::Deactivate => self.deactivate(host),
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn candidates(&self) -> Option<&CandidateList> {
        self.active.as_ref().map(|state| &state.candidates)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.active.as_ref().map(|state| state.selected_index)
    }

    pub fn selected(&self) -> Option<&str> {
        let state = self.active.as_ref()?;
        state.candidates.get(state.selected_index)
    }

    pub fn replacement_range(&self) -> Option<LineRange> {
        self.active.as_ref().map(|state| state.replacement_range)
    }

    pub fn has_pending_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    fn deactivate(&mut self, host: &mut impl EditorHost) {
        let Some(state) = self.active.take() else {
            return;
        };
        if let Some(soft_tabs) = state.saved_soft_tabs {
            host.set_use_soft_tabs(soft_tabs);
        }
        debug!("completion session deactivated");
    }
}

/// Shrink `range` to the identifier run that starts at its first column.
fn committed_range(host: &impl EditorHost, range: LineRange) -> LineRange {
    let line = host.document().line(range.row).unwrap_or("");
    let start = (range.start_column as usize).min(line.len());
    let run = line.as_bytes()[start..]
        .iter()
        .take_while(|b| is_word_byte(**b))
        .count();
    range.clamp_end((start + run) as u32)
}

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod session_tests;

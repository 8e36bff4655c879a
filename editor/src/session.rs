//! Editing session for the opening hours section
//!
//! Holds the latest [`WeekSchedule`] and threads it through every action in
//! call order. Actions that change the week are kept for undo/redo.

use bakup_shared::{ScheduleAction, WeekSchedule};
use std::collections::VecDeque;

/// Default number of undo steps
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    current: WeekSchedule,
    undo: VecDeque<WeekSchedule>,
    redo: Vec<WeekSchedule>,
    history_limit: usize,
    applied: usize,
}

impl Default for ScheduleEditor {
    fn default() -> Self {
        Self::new(WeekSchedule::default())
    }
}

impl ScheduleEditor {
    pub fn new(initial: WeekSchedule) -> Self {
        Self::with_history_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// `history_limit` of 0 disables undo.
    pub fn with_history_limit(initial: WeekSchedule, history_limit: usize) -> Self {
        Self {
            current: initial,
            undo: VecDeque::new(),
            redo: Vec::new(),
            history_limit,
            applied: 0,
        }
    }

    pub fn current(&self) -> &WeekSchedule {
        &self.current
    }

    /// Consume the session, keeping the final week
    pub fn into_schedule(self) -> WeekSchedule {
        self.current
    }

    /// Number of dispatched actions that changed the week
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Apply `action` to the current week.
    ///
    /// Returns `true` when the week changed. Unchanged results leave history
    /// and the redo stack alone.
    pub fn dispatch(&mut self, action: &ScheduleAction) -> bool {
        let next = action.apply(&self.current);
        if next == self.current {
            tracing::debug!(action = action.name(), "Schedule action had no effect");
            return false;
        }

        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        self.redo.clear();
        self.applied += 1;

        tracing::debug!(
            action = action.name(),
            open_days = self.current.open_days().count(),
            "Schedule action applied"
        );
        true
    }

    /// Dispatch each action in order; returns how many changed the week.
    pub fn dispatch_all<'a>(
        &mut self,
        actions: impl IntoIterator<Item = &'a ScheduleAction>,
    ) -> usize {
        actions
            .into_iter()
            .filter(|action| self.dispatch(action))
            .count()
    }

    /// Step back one change. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        self.redo.push(undone);
        tracing::debug!(remaining = self.undo.len(), "Schedule undo");
        true
    }

    /// Re-apply the last undone change.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.push_undo(previous);
        tracing::debug!(remaining = self.redo.len(), "Schedule redo");
        true
    }

    fn push_undo(&mut self, week: WeekSchedule) {
        if self.history_limit == 0 {
            return;
        }
        if self.undo.len() == self.history_limit {
            self.undo.pop_front();
        }
        self.undo.push_back(week);
    }
}

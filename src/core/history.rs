//! State transition history tracking.
//!
//! Keeps a bounded window of the most recent successful transitions so
//! callers can inspect how an engine reached its current state.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateTransition;
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum TaskState {
///         Pending,
///         Running,
///     }
/// }
///
/// let transition = StateTransition {
///     from: TaskState::Pending,
///     to: TaskState::Running,
///     timestamp: Utc::now(),
///     step: 1,
/// };
/// assert_eq!(transition.step, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
    /// Ordinal of the successful step that produced this transition (1-based)
    pub step: u64,
}

/// Bounded, ordered history of transitions.
///
/// Holds at most `capacity` records; recording past that evicts the oldest.
/// A capacity of zero disables recording. Histories can be serialized for
/// inspection but not loaded back, so the bound always holds.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateHistory, StateTransition};
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum WorkState {
///         Start,
///         Middle,
///         End,
///     }
/// }
///
/// let mut history = StateHistory::with_capacity(8);
/// history.record(StateTransition {
///     from: WorkState::Start,
///     to: WorkState::Middle,
///     timestamp: Utc::now(),
///     step: 1,
/// });
/// history.record(StateTransition {
///     from: WorkState::Middle,
///     to: WorkState::End,
///     timestamp: Utc::now(),
///     step: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&WorkState::Start, &WorkState::Middle, &WorkState::End]);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateHistory<S> {
    transitions: VecDeque<StateTransition<S>>,
    capacity: usize,
}

impl<S> Default for StateHistory<S> {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a history that retains up to `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        while self.transitions.len() >= self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed within the retained window.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Elapsed time between the oldest and newest retained transitions.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }
}

impl<S> StateHistory<S> {
    /// A history that never records anything.
    pub fn disabled() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Read-only view of an engine handed to state and transition functions.

use crate::core::State;

/// Snapshot of the engine passed to state functions and transition
/// callbacks while a step is in progress.
///
/// The engine lock is held for the whole step, so callbacks must not call
/// back into the [`Fsm`](crate::Fsm) that invoked them. Everything they may
/// need from it is available here instead.
#[derive(Debug)]
pub struct StepContext<'a, S: State, E> {
    pub(crate) machine: &'a str,
    pub(crate) current: S,
    pub(crate) target: Option<S>,
    pub(crate) event: Option<&'a E>,
    pub(crate) step: u64,
}

impl<'a, S: State, E> StepContext<'a, S, E> {
    /// The state the machine is in. Inside a transition callback this is
    /// still the state being left.
    pub fn current_state(&self) -> S {
        self.current
    }

    /// The state being entered. `None` while a state function runs,
    /// `Some` inside a transition callback.
    pub fn target(&self) -> Option<S> {
        self.target
    }

    /// The pending event, if one was triggered since the last successful step.
    pub fn event(&self) -> Option<&'a E> {
        self.event
    }

    /// Number of successful steps taken before this one.
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn machine_name(&self) -> &'a str {
        self.machine
    }
}

//! The finite state machine engine.

use crate::config::EngineConfig;
use crate::core::{checked_index, State, StateHistory, StateTransition};
use crate::engine::context::StepContext;
use crate::engine::error::FsmError;
use crate::engine::mailbox::Mailbox;
use crate::engine::table::{StateTable, TransitionTable};
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

/// Everything guarded by the instance lock.
struct Inner<'d, S: State, D, E> {
    current: S,
    data: &'d mut D,
    states: StateTable<S, D, E>,
    transitions: TransitionTable<S, D, E>,
    mailbox: Mailbox<E>,
    history: StateHistory<S>,
    steps: u64,
}

/// Table-driven finite state machine.
///
/// Each state owns a state function that computes the requested next state,
/// and every `(from, to)` edge must be explicitly allowed before it can be
/// taken. The machine borrows its state data for its whole lifetime and only
/// forwards access to it.
///
/// One lock guards the whole instance. Every operation holds it for its full
/// duration, including [`run`](Self::run) while it executes state functions
/// and transition callbacks. Those callbacks must not call back into the same
/// machine; they receive a [`StepContext`] instead.
///
/// # Example
///
/// ```
/// use waypoint::{state_enum, Fsm, FsmError};
///
/// state_enum! {
///     enum Job {
///         Idle,
///         Active,
///         Done,
///     }
/// }
///
/// let mut ticks = 0u32;
/// let fsm: Fsm<'_, Job, u32> = Fsm::new(&mut ticks, Job::Idle);
/// fsm.set_state_function(Job::Idle, |_, _| Job::Active);
/// fsm.set_state_function(Job::Active, |_, ticks| {
///     *ticks += 1;
///     Job::Done
/// });
/// fsm.allow_transition(Job::Idle, Job::Active);
/// fsm.allow_transition(Job::Active, Job::Done);
///
/// assert_eq!(fsm.run(), Ok(Job::Active));
/// assert_eq!(fsm.run(), Ok(Job::Done));
/// assert_eq!(fsm.run(), Err(FsmError::InvalidStateFunction(Job::Done)));
/// drop(fsm);
/// assert_eq!(ticks, 1);
/// ```
pub struct Fsm<'d, S: State, D, E = S> {
    config: EngineConfig,
    inner: Mutex<Inner<'d, S, D, E>>,
}

impl<'d, S: State, D, E> Fsm<'d, S, D, E> {
    /// Create a machine in `initial` with default configuration and empty
    /// tables.
    ///
    /// # Panics
    ///
    /// Panics if `initial.index()` is not below `S::COUNT`.
    pub fn new(data: &'d mut D, initial: S) -> Self {
        Self::with_config(data, initial, EngineConfig::default())
    }

    /// Create a machine in `initial` using `config`.
    ///
    /// # Panics
    ///
    /// Panics if `initial.index()` is not below `S::COUNT`.
    pub fn with_config(data: &'d mut D, initial: S, config: EngineConfig) -> Self {
        Self::from_parts(
            data,
            initial,
            config,
            StateTable::new(),
            TransitionTable::new(),
        )
    }

    pub(crate) fn from_parts(
        data: &'d mut D,
        initial: S,
        config: EngineConfig,
        states: StateTable<S, D, E>,
        transitions: TransitionTable<S, D, E>,
    ) -> Self {
        checked_index(initial);
        trace!(machine = %config.name, initial = initial.name(), "creating state machine");
        let history = StateHistory::with_capacity(config.history_capacity);
        Self {
            inner: Mutex::new(Inner {
                current: initial,
                data,
                states,
                transitions,
                mailbox: Mailbox::default(),
                history,
                steps: 0,
            }),
            config,
        }
    }

    /// Advance the machine by one step.
    ///
    /// Runs the state function of the current state, checks that the
    /// requested edge is allowed, runs the edge's callback if any, moves to
    /// the requested state and clears the mailbox. Returns the new state.
    ///
    /// On failure the current state is unchanged and the mailbox keeps its
    /// event.
    pub fn run(&self) -> Result<S, FsmError<S>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let current = inner.current;
        let machine = self.config.name.as_str();

        let Some(state_function) = inner.states.get_mut(current) else {
            warn!(machine, state = current.name(), "no state function registered");
            return Err(FsmError::InvalidStateFunction(current));
        };

        let event = inner.mailbox.peek();
        let requested = state_function(
            &StepContext {
                machine,
                current,
                target: None,
                event,
                step: inner.steps,
            },
            &mut *inner.data,
        );

        let Some(edge) = inner.transitions.get_mut(current, requested) else {
            warn!(
                machine,
                from = current.name(),
                to = requested.name(),
                "transition not allowed"
            );
            return Err(FsmError::InvalidTransition {
                from: current,
                to: requested,
            });
        };

        if let Some(callback) = edge.callback.as_mut() {
            callback(
                &StepContext {
                    machine,
                    current,
                    target: Some(requested),
                    event,
                    step: inner.steps,
                },
                &mut *inner.data,
            );
        }

        inner.current = requested;
        inner.steps += 1;
        inner.mailbox.clear();
        inner.history.record(StateTransition {
            from: current,
            to: requested,
            timestamp: Utc::now(),
            step: inner.steps,
        });
        debug!(
            machine,
            from = current.name(),
            to = requested.name(),
            step = inner.steps,
            "transition taken"
        );

        Ok(requested)
    }

    /// Post an event, replacing any event not yet consumed by a successful
    /// step.
    pub fn trigger_event(&self, event: E) {
        let mut inner = self.inner.lock();
        if inner.mailbox.post(event).is_some() {
            debug!(machine = %self.config.name, "unconsumed event overwritten");
        } else {
            trace!(machine = %self.config.name, "event posted");
        }
    }

    /// Register or replace the state function for `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state.index()` is not below `S::COUNT`.
    pub fn set_state_function<F>(&self, state: S, function: F)
    where
        F: FnMut(&StepContext<'_, S, E>, &mut D) -> S + Send + 'static,
    {
        trace!(machine = %self.config.name, state = state.name(), "state function registered");
        self.inner.lock().states.set(state, Box::new(function));
    }

    /// Allow the edge `from -> to` with no callback, replacing any earlier
    /// registration of the same edge.
    ///
    /// # Panics
    ///
    /// Panics if either state's index is not below `S::COUNT`.
    pub fn allow_transition(&self, from: S, to: S) {
        trace!(machine = %self.config.name, from = from.name(), to = to.name(), "transition allowed");
        self.inner.lock().transitions.allow(from, to, None);
    }

    /// Allow the edge `from -> to` and run `callback` whenever it is taken,
    /// replacing any earlier registration of the same edge.
    ///
    /// # Panics
    ///
    /// Panics if either state's index is not below `S::COUNT`.
    pub fn allow_transition_with<F>(&self, from: S, to: S, callback: F)
    where
        F: FnMut(&StepContext<'_, S, E>, &mut D) + Send + 'static,
    {
        trace!(machine = %self.config.name, from = from.name(), to = to.name(), "transition allowed with callback");
        self.inner
            .lock()
            .transitions
            .allow(from, to, Some(Box::new(callback)));
    }

    pub fn current_state(&self) -> S {
        self.inner.lock().current
    }

    pub fn is_transition_allowed(&self, from: S, to: S) -> bool {
        self.inner.lock().transitions.is_allowed(from, to)
    }

    pub fn has_state_function(&self, state: S) -> bool {
        self.inner.lock().states.contains(state)
    }

    /// Number of successful steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.inner.lock().steps
    }

    /// Snapshot of the retained transition history.
    pub fn history(&self) -> StateHistory<S> {
        self.inner.lock().history.clone()
    }

    /// Run `f` with exclusive access to the state data.
    pub fn with_data<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        let mut inner = self.inner.lock();
        f(&mut *inner.data)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<'d, S: State, D, E: Clone> Fsm<'d, S, D, E> {
    /// The pending event, without consuming it.
    pub fn event(&self) -> Option<E> {
        self.inner.lock().mailbox.peek().cloned()
    }
}

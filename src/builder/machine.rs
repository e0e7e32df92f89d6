//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::core::State;
use crate::engine::{Fsm, StateTable, StepContext, TransitionTable};

/// Builder for constructing state machines with a fluent API.
///
/// Registrations behave exactly like the matching [`Fsm`] methods: a later
/// call for the same state or edge replaces the earlier one.
///
/// # Example
///
/// ```
/// use waypoint::builder::FsmBuilder;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum Link {
///         Down,
///         Up,
///     }
/// }
///
/// let mut flaps = 0u32;
/// let fsm = FsmBuilder::<Link, u32>::new()
///     .initial(Link::Down)
///     .state_function(Link::Down, |_, _| Link::Up)
///     .allow_with(Link::Down, Link::Up, |_, flaps| *flaps += 1)
///     .build(&mut flaps)
///     .unwrap();
///
/// assert_eq!(fsm.run(), Ok(Link::Up));
/// ```
pub struct FsmBuilder<S: State, D, E = S> {
    initial: Option<S>,
    config: EngineConfig,
    states: StateTable<S, D, E>,
    transitions: TransitionTable<S, D, E>,
}

impl<S: State, D, E> FsmBuilder<S, D, E> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: EngineConfig::default(),
            states: StateTable::new(),
            transitions: TransitionTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register the state function for `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state.index()` is not below `S::COUNT`.
    pub fn state_function<F>(mut self, state: S, function: F) -> Self
    where
        F: FnMut(&StepContext<'_, S, E>, &mut D) -> S + Send + 'static,
    {
        self.states.set(state, Box::new(function));
        self
    }

    /// Allow the edge `from -> to` with no callback.
    ///
    /// # Panics
    ///
    /// Panics if either state's index is not below `S::COUNT`.
    pub fn allow(mut self, from: S, to: S) -> Self {
        self.transitions.allow(from, to, None);
        self
    }

    /// Allow the edge `from -> to` with a callback.
    ///
    /// # Panics
    ///
    /// Panics if either state's index is not below `S::COUNT`.
    pub fn allow_with<F>(mut self, from: S, to: S, callback: F) -> Self
    where
        F: FnMut(&StepContext<'_, S, E>, &mut D) + Send + 'static,
    {
        self.transitions.allow(from, to, Some(Box::new(callback)));
        self
    }

    /// Build the state machine around `data`.
    /// Returns an error if no initial state was given.
    pub fn build(self, data: &mut D) -> Result<Fsm<'_, S, D, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Fsm::from_parts(
            data,
            initial,
            self.config,
            self.states,
            self.transitions,
        ))
    }
}

impl<S: State, D, E> Default for FsmBuilder<S, D, E> {
    fn default() -> Self {
        Self::new()
    }
}

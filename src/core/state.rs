//! Core State trait for finite state machine states.
//!
//! States are values drawn from a fixed, caller-defined enumeration. The
//! engine sizes its tables from [`State::COUNT`] and addresses them with
//! [`State::index`], so every state maps to exactly one slot.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// Implementors describe a closed set of `COUNT` states, each with a stable
/// ordinal in `0..COUNT`. The [`state_enum!`](crate::state_enum) macro derives
/// a correct implementation for plain enums and should be preferred over a
/// hand-written one.
///
/// # Required Traits
///
/// - `Copy`: States are small tags passed by value through handlers
/// - `Eq`: States must be comparable for transition bookkeeping
/// - `Debug`: States must be debuggable for diagnostics
/// - `Send` + `Sync`: Engines are shared across threads
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     const COUNT: usize = 2;
///
///     fn index(&self) -> usize {
///         *self as usize
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.index(), 1);
/// ```
pub trait State: Copy + Eq + Debug + Send + Sync + 'static {
    /// Number of distinct states. Fixed at compile time.
    const COUNT: usize;

    /// Ordinal of this state. Must lie in `0..Self::COUNT`.
    fn index(&self) -> usize;

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;
}

/// Returns the ordinal of `state`, panicking if it falls outside `0..COUNT`.
pub(crate) fn checked_index<S: State>(state: S) -> usize {
    let index = state.index();
    assert!(
        index < S::COUNT,
        "state '{}' has index {} outside of 0..{}",
        state.name(),
        index,
        S::COUNT
    );
    index
}

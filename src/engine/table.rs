//! State and transition tables.
//!
//! Both tables are flat vectors sized from [`State::COUNT`] when created and
//! addressed by [`State::index`]. The transition table is row-major: the edge
//! `(from, to)` lives at `from * COUNT + to`.

use crate::core::{checked_index, State};
use crate::engine::context::StepContext;
use std::iter;

/// State function: computes the requested next state.
pub type StateFunction<S, D, E> = Box<dyn FnMut(&StepContext<'_, S, E>, &mut D) -> S + Send>;

/// Side effect run when a whitelisted edge is taken.
pub type TransitionFunction<S, D, E> = Box<dyn FnMut(&StepContext<'_, S, E>, &mut D) + Send>;

/// Per-state lookup of state functions.
pub(crate) struct StateTable<S: State, D, E> {
    functions: Vec<Option<StateFunction<S, D, E>>>,
}

impl<S: State, D, E> StateTable<S, D, E> {
    pub(crate) fn new() -> Self {
        Self {
            functions: iter::repeat_with(|| None).take(S::COUNT).collect(),
        }
    }

    /// Register or replace the function for `state`.
    pub(crate) fn set(&mut self, state: S, function: StateFunction<S, D, E>) {
        self.functions[checked_index(state)] = Some(function);
    }

    pub(crate) fn get_mut(&mut self, state: S) -> Option<&mut StateFunction<S, D, E>> {
        self.functions.get_mut(state.index())?.as_mut()
    }

    pub(crate) fn contains(&self, state: S) -> bool {
        matches!(self.functions.get(state.index()), Some(Some(_)))
    }
}

/// A whitelisted edge. Presence in the table is what makes it legal.
pub(crate) struct Edge<S: State, D, E> {
    pub(crate) callback: Option<TransitionFunction<S, D, E>>,
}

/// N×N legality matrix with optional per-edge callbacks.
pub(crate) struct TransitionTable<S: State, D, E> {
    edges: Vec<Option<Edge<S, D, E>>>,
}

impl<S: State, D, E> TransitionTable<S, D, E> {
    pub(crate) fn new() -> Self {
        Self {
            edges: iter::repeat_with(|| None)
                .take(S::COUNT * S::COUNT)
                .collect(),
        }
    }

    /// Mark `(from, to)` legal, replacing any earlier registration together
    /// with its callback.
    pub(crate) fn allow(
        &mut self,
        from: S,
        to: S,
        callback: Option<TransitionFunction<S, D, E>>,
    ) {
        let slot = checked_index(from) * S::COUNT + checked_index(to);
        self.edges[slot] = Some(Edge { callback });
    }

    /// Look up a legal edge. Out-of-range states never match.
    pub(crate) fn get_mut(&mut self, from: S, to: S) -> Option<&mut Edge<S, D, E>> {
        let slot = Self::slot(from, to)?;
        self.edges.get_mut(slot)?.as_mut()
    }

    pub(crate) fn is_allowed(&self, from: S, to: S) -> bool {
        Self::slot(from, to).is_some_and(|slot| matches!(self.edges.get(slot), Some(Some(_))))
    }

    fn slot(from: S, to: S) -> Option<usize> {
        let (from, to) = (from.index(), to.index());
        (from < S::COUNT && to < S::COUNT).then_some(from * S::COUNT + to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Phase {
            One,
            Two,
            Three,
        }
    }

    // Index 7 is outside Phase-sized tables.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct Stray(usize);

    impl State for Stray {
        const COUNT: usize = 2;

        fn index(&self) -> usize {
            self.0
        }

        fn name(&self) -> &'static str {
            "Stray"
        }
    }

    fn noop_callback() -> TransitionFunction<Phase, u32, ()> {
        Box::new(|_, data: &mut u32| *data += 1)
    }

    #[test]
    fn new_tables_are_empty() {
        let states: StateTable<Phase, u32, ()> = StateTable::new();
        let transitions: TransitionTable<Phase, u32, ()> = TransitionTable::new();

        for from in [Phase::One, Phase::Two, Phase::Three] {
            assert!(!states.contains(from));
            for to in [Phase::One, Phase::Two, Phase::Three] {
                assert!(!transitions.is_allowed(from, to));
            }
        }
    }

    #[test]
    fn set_replaces_state_function() {
        let mut states: StateTable<Phase, u32, ()> = StateTable::new();
        states.set(Phase::One, Box::new(|_, _| Phase::Two));
        states.set(Phase::One, Box::new(|_, _| Phase::Three));

        let ctx = StepContext {
            machine: "test",
            current: Phase::One,
            target: None,
            event: None,
            step: 0,
        };
        let mut data = 0;
        let function = states.get_mut(Phase::One).unwrap();
        assert_eq!(function(&ctx, &mut data), Phase::Three);
        assert!(states.get_mut(Phase::Two).is_none());
    }

    #[test]
    fn edges_are_directional() {
        let mut transitions: TransitionTable<Phase, u32, ()> = TransitionTable::new();
        transitions.allow(Phase::One, Phase::Two, None);

        assert!(transitions.is_allowed(Phase::One, Phase::Two));
        assert!(!transitions.is_allowed(Phase::Two, Phase::One));
        assert!(!transitions.is_allowed(Phase::One, Phase::Three));
    }

    #[test]
    fn reallowing_edge_replaces_callback() {
        let mut transitions: TransitionTable<Phase, u32, ()> = TransitionTable::new();
        transitions.allow(Phase::One, Phase::Two, Some(noop_callback()));
        assert!(transitions
            .get_mut(Phase::One, Phase::Two)
            .is_some_and(|edge| edge.callback.is_some()));

        transitions.allow(Phase::One, Phase::Two, None);
        let edge = transitions.get_mut(Phase::One, Phase::Two).unwrap();
        assert!(edge.callback.is_none());
    }

    #[test]
    fn out_of_range_lookup_is_not_allowed() {
        let mut transitions: TransitionTable<Stray, (), ()> = TransitionTable::new();
        transitions.allow(Stray(0), Stray(1), None);

        assert!(!transitions.is_allowed(Stray(0), Stray(7)));
        assert!(transitions.get_mut(Stray(7), Stray(0)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside of 0..2")]
    fn out_of_range_registration_panics() {
        let mut states: StateTable<Stray, (), ()> = StateTable::new();
        states.set(Stray(7), Box::new(|_, _| Stray(0)));
    }
}

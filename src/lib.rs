//! Waypoint: an embeddable, table-driven finite state machine engine
//!
//! A machine drives a fixed set of states. Each state owns a state function
//! that computes the requested next state, and every `(from, to)` edge must
//! be explicitly whitelisted, optionally with a callback that runs when the
//! edge is taken. External stimuli arrive through a single-slot mailbox.
//!
//! The engine only performs one step per [`Fsm::run`] call. Deciding when to
//! call it again is left to the embedding system.
//!
//! # Core Concepts
//!
//! - **State**: A fixed enumeration described by the `State` trait
//! - **State function**: Computes the next state from the step context and state data
//! - **Transition**: A whitelisted edge with an optional callback
//! - **Mailbox**: Last-write-wins event slot, cleared by each successful step
//!
//! # Example
//!
//! ```rust
//! use waypoint::{state_enum, Fsm, FsmError};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Counters {
//!     openings: u32,
//! }
//!
//! let mut counters = Counters::default();
//! let door: Fsm<'_, Door, Counters, &'static str> = Fsm::new(&mut counters, Door::Closed);
//!
//! door.set_state_function(Door::Closed, |ctx, _| match ctx.event() {
//!     Some(&"push") => Door::Open,
//!     _ => Door::Closed,
//! });
//! door.allow_transition(Door::Closed, Door::Closed);
//! door.allow_transition_with(Door::Closed, Door::Open, |_, counters| {
//!     counters.openings += 1;
//! });
//!
//! assert_eq!(door.run(), Ok(Door::Closed));
//! door.trigger_event("push");
//! assert_eq!(door.run(), Ok(Door::Open));
//! assert_eq!(door.event(), None);
//! assert_eq!(door.run(), Err(FsmError::InvalidStateFunction(Door::Open)));
//!
//! drop(door);
//! assert_eq!(counters.openings, 1);
//! ```

// Lets `state_enum!` expansions name `waypoint::serde` from inside this crate too.
extern crate self as waypoint;

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder};
pub use crate::config::{ConfigError, EngineConfig};
pub use crate::core::{State, StateHistory, StateTransition};
pub use crate::engine::{Fsm, FsmError, StepContext};

#[doc(hidden)]
pub use serde;

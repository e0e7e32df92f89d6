//! The finite state machine engine.
//!
//! # Key Concepts
//!
//! - **State table**: at most one state function per state
//! - **Transition table**: an N×N whitelist of edges, each with an optional callback
//! - **Run step**: state function, legality check, callback, state update, mailbox clear
//! - **Mailbox**: a single overwrite-on-write slot for external events
//!
//! ## Run Step
//!
//! ```text
//! 1. Look up the state function of the current state
//!    (none: InvalidStateFunction, nothing changes)
//! 2. Call it to obtain the requested state
//! 3. Check the (current, requested) edge
//!    (not allowed: InvalidTransition, state and mailbox kept)
//! 4. Run the edge callback, if any, while current state is still the old one
//! 5. Move to the requested state
//! 6. Clear the mailbox
//! 7. Return the new state
//! ```

mod context;
mod error;
mod machine;
mod mailbox;
mod table;

pub use context::StepContext;
pub use error::FsmError;
pub use machine::Fsm;
pub use table::{StateFunction, TransitionFunction};

pub(crate) use table::{StateTable, TransitionTable};

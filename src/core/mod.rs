//! Core state machine types.
//!
//! This module contains the engine-independent vocabulary:
//! - State definitions via the `State` trait
//! - Bounded transition history
//!
//! Nothing here takes locks or runs caller code.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

pub(crate) use state::checked_index;

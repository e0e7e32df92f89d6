//! Builder API for ergonomic state machine construction.
//!
//! [`FsmBuilder`] assembles the state and transition tables before the
//! machine exists, and [`state_enum!`](crate::state_enum) declares state
//! enums with a correct [`State`](crate::core::State) implementation.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;

//! Failures raised by a run step.

use crate::core::State;
use thiserror::Error;

/// Errors that can occur while advancing the machine by one step.
///
/// Neither variant changes the current state. Retrying without changing the
/// configuration reproduces the same failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsmError<S: State> {
    /// The current state has no registered state function.
    #[error("No state function registered for state '{}'", .0.name())]
    InvalidStateFunction(S),

    /// The state function requested a transition that was never allowed.
    #[error("Transition from '{}' to '{}' is not allowed", .from.name(), .to.name())]
    InvalidTransition { from: S, to: S },
}

impl<S: State> FsmError<S> {
    /// The state the machine was in when the step failed.
    pub fn state(&self) -> S {
        match self {
            Self::InvalidStateFunction(state) => *state,
            Self::InvalidTransition { from, .. } => *from,
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Light {
            Red,
            Green,
        }
    }

    #[test]
    fn display_uses_state_names() {
        let missing = FsmError::InvalidStateFunction(Light::Green);
        assert_eq!(
            missing.to_string(),
            "No state function registered for state 'Green'"
        );

        let illegal = FsmError::InvalidTransition {
            from: Light::Red,
            to: Light::Green,
        };
        assert_eq!(
            illegal.to_string(),
            "Transition from 'Red' to 'Green' is not allowed"
        );
    }

    #[test]
    fn state_reports_origin_of_failure() {
        assert_eq!(FsmError::InvalidStateFunction(Light::Red).state(), Light::Red);

        let illegal = FsmError::InvalidTransition {
            from: Light::Green,
            to: Light::Red,
        };
        assert_eq!(illegal.state(), Light::Green);
        assert!(illegal.is_invalid_transition());
        assert!(!FsmError::InvalidStateFunction(Light::Red).is_invalid_transition());
    }
}

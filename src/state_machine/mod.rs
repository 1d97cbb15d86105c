// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Generic state machine types used to model the lifecycle of a single
//! function invocation. Transitions are pure: a state and an input go in, a
//! new state and an output come out.
//!
//! ```text
//! (State, Input) → (State, Output)
//! ```
//!
//! # Example
//!
//! ```rust
//! use function_xfabric::state_machine::{RunInput, RunPhase, StateMachine};
//!
//! let (phase, _) = RunPhase::Validating.transition(&RunInput::Validated).unwrap();
//! assert_eq!(phase, RunPhase::Synthesizing);
//! ```

pub mod run_phase;

pub use run_phase::{RunInput, RunPhase};

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Transition from current state to target state is not allowed
    #[error("Invalid transition from {from} on {input}")]
    InvalidTransition { from: String, input: String },
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    ///
    /// # Returns
    /// - Ok((new_state, output)) if transition is valid
    /// - Err(TransitionError) if transition is invalid
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;

    /// Check if a transition is valid without performing it
    fn can_transition(&self, input: &Self::Input) -> bool {
        self.transition(input).is_ok()
    }

    /// Whether no further transitions are possible
    fn is_terminal(&self) -> bool;
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Invocation Lifecycle State Machine
//!
//! # States
//!
//! - Validating: checking the composite's apiVersion and kind
//! - Synthesizing: expanding nodes into desired resources
//! - Done: response assembled (terminal)
//! - Rejected: request refused (terminal)
//!
//! # Inputs
//!
//! - Validated: Validating → Synthesizing
//! - Invalid: Validating → Rejected
//! - Synthesized: Synthesizing → Done
//!
//! Synthesis cannot fail once validation has passed; a malformed node is
//! caught while decoding, which happens during validation.

use std::fmt;

use super::{StateMachine, TransitionError, TransitionResult};
use crate::errors::StatusCode;

/// Phase of a single `RunFunction` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    Validating,
    Synthesizing,
    Done,
    Rejected,
}

/// Inputs driving the invocation lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunInput {
    /// The composite passed validation and decoded cleanly
    Validated,

    /// The composite was refused
    Invalid { status: StatusCode },

    /// Desired resources were produced
    Synthesized { count: usize },
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Validating => write!(f, "Validating"),
            RunPhase::Synthesizing => write!(f, "Synthesizing"),
            RunPhase::Done => write!(f, "Done"),
            RunPhase::Rejected => write!(f, "Rejected"),
        }
    }
}

impl fmt::Display for RunInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunInput::Validated => write!(f, "Validated"),
            RunInput::Invalid { status } => write!(f, "Invalid({})", status),
            RunInput::Synthesized { count } => write!(f, "Synthesized({})", count),
        }
    }
}

impl StateMachine for RunPhase {
    type Input = RunInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        match (self, input) {
            (RunPhase::Validating, RunInput::Validated) => Ok((RunPhase::Synthesizing, ())),
            (RunPhase::Validating, RunInput::Invalid { .. }) => Ok((RunPhase::Rejected, ())),
            (RunPhase::Synthesizing, RunInput::Synthesized { .. }) => Ok((RunPhase::Done, ())),
            (from, input) => Err(TransitionError::InvalidTransition {
                from: from.to_string(),
                input: input.to_string(),
            }),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Done | RunPhase::Rejected)
    }
}

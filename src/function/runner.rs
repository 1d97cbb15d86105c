// Copyright (c) 2025 - Cowboy AI, Inc.
//! Function runner
//!
//! Drives one `RunFunction` invocation through its lifecycle:
//!
//! ```text
//! Validating ──Validated──> Synthesizing ──Synthesized──> Done
//!     │
//!     └──────Invalid──────> Rejected
//! ```

use serde_json::Map;
use tracing::{debug, error, info, info_span, Span};
use uuid::Uuid;

use super::{synthesize, validate};
use crate::domain::CompositeResource;
use crate::envelope::{RunFunctionRequest, RunFunctionResponse};
use crate::errors::{FunctionError, FunctionResult};
use crate::state_machine::{RunInput, RunPhase, StateMachine};

/// Handles `RunFunction` requests for XFabric composites
///
/// The runner holds no state, so one instance can serve any number of
/// concurrent invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionRunner;

impl FunctionRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }

    /// Run the function with a logger bound to the request's tag
    ///
    /// Requests without a tag get a generated one for logging; the response
    /// still echoes the (absent) tag the caller sent.
    pub fn run_function(&self, request: &RunFunctionRequest) -> FunctionResult<RunFunctionResponse> {
        let tag = request
            .meta
            .tag
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        let log = info_span!("run_function", tag = %tag);

        self.run_with_logger(request, &log)
    }

    /// Run the function, logging to the given span
    pub fn run_with_logger(
        &self,
        request: &RunFunctionRequest,
        log: &Span,
    ) -> FunctionResult<RunFunctionResponse> {
        info!(parent: log, "Running function");

        let (phase, composite) = match self.admit(request, log) {
            Ok(composite) => (advance(RunPhase::Validating, RunInput::Validated, log)?, composite),
            Err(err) => {
                advance(
                    RunPhase::Validating,
                    RunInput::Invalid { status: err.status() },
                    log,
                )?;
                return Err(err);
            }
        };

        let desired = synthesize(composite.nodes(), log);
        advance(
            phase,
            RunInput::Synthesized {
                count: desired.len(),
            },
            log,
        )?;

        let mut response = RunFunctionResponse::to(request);
        for (name, resource) in desired {
            response.update_desired(&name, resource.to_document());
        }

        Ok(response)
    }

    /// Validate the observed composite and decode it
    fn admit(&self, request: &RunFunctionRequest, log: &Span) -> FunctionResult<CompositeResource> {
        let document: &Map<_, _> = match &request.observed.composite {
            Some(composite) => &composite.resource,
            None => {
                error!(parent: log, "Request has no observed composite");
                return Err(FunctionError::MalformedInput(
                    "observed composite resource is missing".to_string(),
                ));
            }
        };

        validate(document, log)?;

        CompositeResource::from_document(document).map_err(|err| {
            error!(parent: log, error = %err, "Malformed composite");
            err
        })
    }
}

/// Step the invocation lifecycle, logging the move
///
/// An illegal move is a fault in the runner itself and surfaces as
/// [`FunctionError::Lifecycle`].
fn advance(phase: RunPhase, input: RunInput, log: &Span) -> FunctionResult<RunPhase> {
    let (to, ()) = phase.transition(&input).map_err(|err| {
        error!(parent: log, error = %err, "Illegal phase transition");
        err
    })?;
    debug!(parent: log, from = %phase, to = %to, "Phase transition");
    Ok(to)
}

//! XFabric composition function
//!
//! Expands an observed `XFabric` composite into one desired managed resource
//! per fabric node, and serves that transformation over NATS request-reply.

pub mod config;
pub mod domain;
pub mod envelope;
pub mod errors;
pub mod function;
pub mod nats;
pub mod state_machine;

// Re-export commonly used types
pub use config::FunctionConfig;
pub use envelope::{RunFunctionRequest, RunFunctionResponse};
pub use errors::{FunctionError, FunctionResult, StatusCode, TransportError, TransportResult};
pub use function::FunctionRunner;
pub use nats::{FunctionService, NatsClient, NatsConfig};

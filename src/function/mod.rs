// Copyright (c) 2025 - Cowboy AI, Inc.
//! XFabric Composition Function
//!
//! The request handling core. A request passes through two stages:
//!
//! ```text
//! RunFunctionRequest
//!     ↓
//! validate()    apiVersion, then kind; short-circuits on mismatch
//!     ↓
//! synthesize()  one desired resource per node, keyed by node name
//!     ↓
//! RunFunctionResponse (desired resources, ttl 60s, context echoed)
//! ```
//!
//! Both stages are synchronous and touch no shared state. The only effect is
//! logging, through a [`tracing::Span`] handed in by the caller.
//!
//! # Example
//!
//! ```rust
//! use function_xfabric::envelope::RunFunctionRequest;
//! use function_xfabric::function::FunctionRunner;
//! use serde_json::json;
//!
//! let composite = json!({
//!     "apiVersion": "netclab.github.io/v1alpha1",
//!     "kind": "XFabric",
//!     "spec": {"nodes": [{
//!         "name": "srv1",
//!         "type": "linux",
//!         "url": "ssh://srv1:22",
//!         "interfaces": []
//!     }]}
//! });
//!
//! let request = RunFunctionRequest::for_composite(composite.as_object().cloned().unwrap());
//! let response = FunctionRunner::new().run_function(&request).unwrap();
//! assert_eq!(response.desired.resources["srv1"].resource["kind"], "Linux");
//! ```

pub mod runner;
pub mod synthesizer;
pub mod validator;

pub use runner::FunctionRunner;
pub use synthesizer::synthesize;
pub use validator::validate;

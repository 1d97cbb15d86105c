// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request/Response Envelope
//!
//! Serde model of the `RunFunction` request and response as they travel over
//! the wire, following the JSON mapping of the composition-function protocol:
//!
//! ```text
//! RunFunctionRequest                    RunFunctionResponse
//! ──────────────────                    ───────────────────
//! meta.tag                ──echo──>     meta.tag
//! observed.composite                    meta.ttl = "60s"
//! desired                 ──seed──>     desired (+ one resource per node)
//! context                 ──echo──>     context
//! ```
//!
//! Fields the function does not use (`input`, `credentials`, ...) are ignored
//! on decode. Resource entries keep any sibling fields they arrive with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::errors::StatusCode;

/// TTL returned with every successful response
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Request metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMeta {
    /// Opaque correlation tag, used only for logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A single resource document plus whatever the caller attached to it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub resource: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// Wrap a document
    pub fn new(resource: Map<String, Value>) -> Self {
        Self {
            resource,
            extra: Map::new(),
        }
    }
}

/// Observed or desired state
///
/// Resources keep the order they were added in, so synthesized nodes appear
/// in the order the composite declares them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<Resource>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub resources: IndexMap<String, Resource>,
}

/// Inbound `RunFunction` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFunctionRequest {
    #[serde(default)]
    pub meta: RequestMeta,

    #[serde(default)]
    pub observed: State,

    #[serde(default)]
    pub desired: State,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RunFunctionRequest {
    /// Build a request observing the given composite document
    pub fn for_composite(composite: Map<String, Value>) -> Self {
        Self {
            observed: State {
                composite: Some(Resource::new(composite)),
                resources: IndexMap::new(),
            },
            ..Default::default()
        }
    }

    /// Set the correlation tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.meta.tag = Some(tag.into());
        self
    }

    /// Set the opaque context
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}

/// Response metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(with = "duration_secs")]
    pub ttl: Duration,
}

/// Outbound `RunFunction` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFunctionResponse {
    pub meta: ResponseMeta,

    #[serde(default)]
    pub desired: State,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RunFunctionResponse {
    /// Seed a response from a request
    ///
    /// The tag and context are echoed, the desired state is carried over as
    /// the starting point, and the TTL is [`DEFAULT_TTL`].
    pub fn to(request: &RunFunctionRequest) -> Self {
        Self {
            meta: ResponseMeta {
                tag: request.meta.tag.clone(),
                ttl: DEFAULT_TTL,
            },
            desired: request.desired.clone(),
            context: request.context.clone(),
        }
    }

    /// Shallow-update the desired resource `name` with `document`
    ///
    /// Top-level keys in `document` replace those already present; other keys
    /// of an existing entry are left alone.
    pub fn update_desired(&mut self, name: &str, document: Map<String, Value>) {
        let entry = self.desired.resources.entry(name.to_string()).or_default();
        for (key, value) in document {
            entry.resource.insert(key, value);
        }
    }
}

/// What a failed invocation puts on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub code: StatusCode,
    pub message: String,
}

/// Durations in the protocol's `"<seconds>s"` form
mod duration_secs {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = if duration.subsec_nanos() == 0 {
            format!("{}s", duration.as_secs())
        } else {
            format!("{}s", duration.as_secs_f64())
        };
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let seconds = text
            .strip_suffix('s')
            .ok_or_else(|| de::Error::custom(format!("duration without 's' suffix: {}", text)))?;
        let seconds: f64 = seconds
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid duration: {}", text)))?;
        Duration::try_from_secs_f64(seconds)
            .map_err(|_| de::Error::custom(format!("invalid duration: {}", text)))
    }
}

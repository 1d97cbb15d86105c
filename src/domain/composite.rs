// Copyright (c) 2025 - Cowboy AI, Inc.
//! Observed XFabric Composite
//!
//! Typed view over the generic composite document. Decoding tolerates fields
//! the function does not use (`spec.networks`, `status`, extra node keys) and
//! rejects documents missing a field it does use.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::{FunctionError, FunctionResult};

/// Object metadata the function reads from the composite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One node of the fabric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Node name, used as the key of its desired resource
    pub name: String,

    /// Lowercase provider tag, e.g. `srlinux` or `linux`
    #[serde(rename = "type", deserialize_with = "non_empty")]
    pub node_type: String,

    /// Connection endpoint handed to the provider
    pub url: String,

    /// Interface descriptors, carried through without inspection
    pub interfaces: Vec<Value>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::custom("node type is empty"));
    }
    Ok(value)
}

/// `spec` of the composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSpec {
    pub nodes: Vec<NodeSpec>,
}

/// The observed XFabric composite resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResource {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: CompositeSpec,
}

impl CompositeResource {
    /// Decode the typed composite from a generic document
    pub fn from_document(document: &Map<String, Value>) -> FunctionResult<Self> {
        serde_json::from_value(Value::Object(document.clone()))
            .map_err(|e| FunctionError::MalformedInput(format!("composite resource: {}", e)))
    }

    /// Composite name, if the document carries one
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Nodes in declaration order
    pub fn nodes(&self) -> &[NodeSpec] {
        &self.spec.nodes
    }
}
